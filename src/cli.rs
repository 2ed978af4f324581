use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "labseed",
    version,
    about = "Demo-environment seeder for the Ohm Sweet Ohm support-chatbot showcase"
)]
pub struct Cli {
    /// Directory holding the demo database and FAQ document (default: ./data)
    #[arg(long, env = "LABSEED_DATA", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the demo store database and FAQ document from scratch
    Setup,
    /// Generate synthetic conversation traces and upload them to the trace store
    Seed(SeedArgs),
    /// Show demo dataset health: file sizes and row counts
    Status,
}

#[derive(Parser)]
pub struct SeedArgs {
    /// Number of conversation threads to generate (default from config: 75)
    #[arg(long)]
    pub sessions: Option<usize>,

    /// Spread thread start times over the past N days (default from config: 30)
    #[arg(long)]
    pub days_back: Option<u32>,

    /// RNG seed for a reproducible run (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Trace-store project to upload into (default from config)
    #[arg(long, env = "LABSEED_PROJECT")]
    pub project: Option<String>,
}
