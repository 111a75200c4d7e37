pub mod common;
pub mod submission;
