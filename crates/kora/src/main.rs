// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kora - a terminal conversational assistant.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod setup;
mod shell;
mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kora_config::KoraConfig;
use kora_core::KoraError;

/// Kora - a terminal conversational assistant with memory, personality,
/// and live web search.
#[derive(Parser, Debug)]
#[command(name = "kora", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive chat session (the default).
    Shell,
    /// Print the system status and exit.
    Status {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => kora_config::load_and_validate_path(path),
        None => kora_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            kora_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run_shell(config).await,
        Commands::Status { json, plain } => status::run_status(config, json, plain).await,
        Commands::Config => print_config(&config),
    };

    if let Err(e) = result {
        eprintln!("kora: {e}");
        std::process::exit(1);
    }
}

fn print_config(config: &KoraConfig) -> Result<(), KoraError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| KoraError::Config(format!("failed to render configuration: {e}")))?;
    print!("{rendered}");
    Ok(())
}

/// Initializes the tracing subscriber. Logs go to stderr so the chat
/// transcript on stdout stays clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kora={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Only jemalloc supports advancing the stats epoch.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn default_config_is_valid() {
        let config = kora_config::load_and_validate_str("").expect("defaults should validate");
        assert_eq!(config.agent.name, "kora");
    }

    #[test]
    fn config_renders_as_toml() {
        let config = KoraConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(rendered.contains("[backend]"));
        assert!(rendered.contains("model = \"llama3.2\""));
    }

    #[test]
    fn cli_defaults_to_shell() {
        let cli = Cli::try_parse_from(["kora"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["kora", "status", "--json", "-c", "k.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Status { json: true, plain: false })));
        assert_eq!(cli.config, Some(PathBuf::from("k.toml")));
    }
}
