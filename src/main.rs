use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use labseed::cli::{Cli, Command};
use labseed::{LabseedError, config, seeder, setup, status};

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn run() -> Result<(), LabseedError> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    match cli.command {
        Command::Setup => setup::handle_setup(&data_dir),
        Command::Seed(args) => {
            let config = config::load_config()?;
            seeder::handle_seed(&args, &config)
        }
        Command::Status => status::handle_status(&data_dir),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("labseed: {e}");
            ExitCode::from(1)
        }
    }
}
