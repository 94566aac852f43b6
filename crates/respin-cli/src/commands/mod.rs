//! CLI command modules

pub mod fetch;
pub mod run;
