use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "staytics-host")]
#[command(about = "Reference host for the Staytics home-screen widgets")]
pub struct Cli {
    /// Config file to use instead of the one in the user config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render every configured widget once
    Render,
    /// Re-render on a timer and whenever the snapshot file changes, until ctrl-c
    Watch,
    /// Print the config path in use
    ConfigPath,
}
