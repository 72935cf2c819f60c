//! # abikit
//!
//! Command-line front-end for the abikit ABI parameter encoder.
//!
//! ## Usage
//!
//! ```bash
//! # Encode from a type list
//! abikit encode --types address,uint256 \
//!     --values '["0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", "1000"]'
//!
//! # Encode from ABI JSON (an `inputs` array or a whole function entry)
//! abikit encode --abi transfer.json --values '["0x...", 1]'
//!
//! # Show or edit configuration
//! abikit config --show
//! abikit config --set-words true
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// abikit CLI
#[derive(Parser, Debug)]
#[command(name = "abikit")]
#[command(author, version, about = "Solidity ABI parameter encoder", long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to ~/.abikit/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode parameters into ABI call data
    Encode(commands::encode::EncodeArgs),
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set whether output carries the 0x prefix
        #[arg(long)]
        set_prefix: Option<bool>,
        /// Set whether output is split into 32-byte words
        #[arg(long)]
        set_words: Option<bool>,
        /// Set whether output defaults to JSON
        #[arg(long)]
        set_json: Option<bool>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the encoding
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().or_else(Config::config_path);
    let mut config = Config::load_from(config_path.as_deref());
    let json = cli.json || config.json;

    let result = match cli.command {
        Commands::Encode(args) => args.execute(&config, json),
        Commands::Config {
            show,
            set_prefix,
            set_words,
            set_json,
        } => handle_config(
            &mut config,
            config_path,
            show,
            set_prefix,
            set_words,
            set_json,
            json,
        ),
    };

    if let Err(e) = result {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_config(
    config: &mut Config,
    path: Option<PathBuf>,
    show: bool,
    set_prefix: Option<bool>,
    set_words: Option<bool>,
    set_json: Option<bool>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(prefix) = set_prefix {
        config.prefix = prefix;
        modified = true;
    }
    if let Some(words) = set_words {
        config.words = words;
        modified = true;
    }
    if let Some(json) = set_json {
        config.json = json;
        modified = true;
    }

    if modified {
        let path = path.ok_or_else(|| CliError::Config("Cannot determine config path".into()))?;
        config.save_to(&path)?;
        Output::new(json)
            .field("status", "saved")
            .field("path", &path.display().to_string())
            .line("Configuration saved")
            .print();
    } else if show {
        Output::new(json)
            .field_value("prefix", config.prefix.into())
            .field_value("words", config.words.into())
            .field_value("json", config.json.into())
            .line(format!("Prefix: {}", config.prefix))
            .line(format!("Words: {}", config.words))
            .line(format!("JSON: {}", config.json))
            .print();
    } else {
        Output::new(json)
            .line("Use --show to display config, or --set-prefix/--set-words/--set-json to modify")
            .print();
    }

    Ok(())
}
