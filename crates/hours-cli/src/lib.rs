//! Hours export converter CLI library.
//!
//! This crate provides the command-line interface around `hours-core`.

mod cli;
pub mod commands;
mod config;
pub mod output;

pub use cli::Cli;
pub use config::Config;
