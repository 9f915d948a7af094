mod check;
mod dump;
pub mod reload;
#[cfg(test)]
mod tests;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config directory
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Plain output, even on a terminal
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print the loaded configuration
    Dump {
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Output as JSON (default)
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}
