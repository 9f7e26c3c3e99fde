//! CLI module for the posts service

pub mod serve;

use clap::{Parser, Subcommand};

/// Posts Service - blog post API with a read-through cache
#[derive(Parser)]
#[command(name = "posts-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
