//! CLI type definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::resolve::ResolveArgs;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "restclient-config")]
#[command(about = "Resolve REST client configuration from properties files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Settings file (defaults to ./restclient-config.yaml)
    #[arg(long, global = true, env = "RESTCLIENT_SETTINGS")]
    pub settings: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the configuration of one client
    Resolve(ResolveArgs),
    /// Print the effective settings
    Settings,
}
