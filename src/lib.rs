pub mod core;
pub mod tune;
pub mod inference;
pub mod eval;
pub mod file;
pub mod config;
pub mod report;
