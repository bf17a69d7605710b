pub mod add;
pub mod export;
pub mod remove;
pub mod summarize;
