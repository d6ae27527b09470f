use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::debug;
use foodorders::config::{self, Config};

mod commands;
mod configrefs;
mod state;

const ENV_PREFIX: &str = "FOODORDERS_";

/// Record food orders and report on them.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// YAML configuration file; environment variables prefixed
    /// FOODORDERS_ take precedence over it
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: commands::Command,
}

fn cfg_factory(path: Option<&PathBuf>) -> Result<Box<dyn Config>, String> {
    let mut layers: Vec<Box<dyn Config>> =
        vec![Box::new(config::env::new(ENV_PREFIX))];
    if let Some(path) = path {
        layers.push(Box::new(config::file::new(path)?));
    }
    Ok(Box::new(config::layered::new(layers)))
}

fn run(cli: Cli) -> Result<String, String> {
    let cfg = cfg_factory(cli.config.as_ref())?;
    let mut state = state::State::new(cfg)?;
    debug!("running {:?}", cli.command);
    commands::run(&mut state, cli.command)
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
