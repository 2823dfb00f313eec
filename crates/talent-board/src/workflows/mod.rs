pub mod candidates;
pub mod interviews;
