use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "devkit",
    about = "Developer utilities: line-level text comparison and the backend service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewMode {
    Unified,
    Split,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two files line by line
    Diff(DiffArgs),
    /// Start the backend service
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Original file (`-` for stdin)
    pub original: PathBuf,
    /// Modified file (`-` for stdin)
    pub modified: PathBuf,
    #[arg(long, default_value = "unified")]
    pub view: ViewMode,
    /// Print only the change counts
    #[arg(long)]
    pub stat: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
