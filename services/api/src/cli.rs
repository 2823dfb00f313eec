use crate::demo::{
    run_demo, run_interviews_fetch, run_roster_compare, run_roster_list, DemoArgs,
    InterviewsFetchArgs, RosterCompareArgs, RosterListArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use talent_board::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talent Board",
    about = "Filter, sort and compare interview candidates from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the candidate roster
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    /// Read the interview feed for a company
    Interviews {
        #[command(subcommand)]
        command: InterviewsCommand,
    },
    /// Walk through filtering, sorting and comparison on the sample roster
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// List candidates matching the given search and filters
    List(RosterListArgs),
    /// Compare candidates side by side and print a recommendation
    Compare(RosterCompareArgs),
}

#[derive(Subcommand, Debug)]
enum InterviewsCommand {
    /// Fetch and print the interview rows for one company
    Fetch(InterviewsFetchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve a roster imported from this CSV export instead of the sample roster
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roster {
            command: RosterCommand::List(args),
        } => run_roster_list(args),
        Command::Roster {
            command: RosterCommand::Compare(args),
        } => run_roster_compare(args),
        Command::Interviews {
            command: InterviewsCommand::Fetch(args),
        } => run_interviews_fetch(args).await,
        Command::Demo(args) => run_demo(args),
    }
}
