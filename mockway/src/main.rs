use anyhow::Context;
use clap::{Parser, Subcommand};
use mockway_core::cli::{self, ConfigCmd};
use mockway_core::conf::load_config;
use mockway_core::logging::{OutputMode, default_output_mode, init_logging};
use mockway_core::server;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mockway",
    version,
    about = "Mockway: Pingora-based intercepting proxy that answers configured routes with mock responses"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the mock proxy (default)
    Run {
        /// Path to the config directory
        #[arg(long, default_value = "config")]
        config: PathBuf,
    },

    #[command(flatten)]
    Config(ConfigCmd),

    /// Ask a running mockway to reload its rules
    Reload {
        #[arg(long, default_value = "/tmp/mockway.pid")]
        pid_file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Run { config }) => run(config),

        Some(Command::Config(ConfigCmd::Check { path, plain })) => {
            let mode = if plain {
                OutputMode::Plain
            } else {
                default_output_mode()
            };
            cli::check(path, mode)
        }

        Some(Command::Config(ConfigCmd::Dump { path, json: _, yaml })) => cli::dump(path, yaml),

        Some(Command::Reload { pid_file }) => cli::reload::run(pid_file),

        None => run(PathBuf::from("config")),
    }
}

fn run(config_path: PathBuf) -> anyhow::Result<()> {
    init_logging();

    let cfg = load_config(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    tracing::info!(config = %config_path.display(), "starting mockway");

    server::run(config_path, cfg)
}
