pub mod config;
pub mod diag;
pub mod entry;
pub mod history;
pub mod output;
pub mod scoring;
