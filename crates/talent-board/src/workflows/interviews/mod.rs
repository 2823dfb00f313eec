//! Interview feed: per-job candidate lists from the hiring API, flattened into rows.

pub mod client;
pub mod feed;
pub mod rows;

pub use client::{FeedError, InterviewFeedClient};
pub use feed::{FeedCandidate, FeedJob, InterviewFeedPayload};
pub use rows::{arrange_rows, default_row_sort, InterviewRow, RowField, StatusTone};
