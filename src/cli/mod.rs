//! CLI module
//!
//! Provides the `serve` subcommand that runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// technotes-api - user and note management backend
#[derive(Parser)]
#[command(name = "technotes-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
