//! Typewriter - a terminal typewriter

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use typewriter::config::MIN_BLINK_INTERVAL_MS;
use typewriter::{Config, Mode, Typewriter, paths};

/// A terminal typewriter with strike-through and delete backspace modes
#[derive(Parser)]
#[command(name = "typewriter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backspace mode to start in (vintage or minimal)
    #[arg(long)]
    mode: Option<Mode>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Cursor blink interval in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(MIN_BLINK_INTERVAL_MS..))]
    blink_ms: Option<u64>,

    /// Print the typed text (struck characters left out) after quitting
    #[arg(long)]
    print: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration as JSON
    Config {
        /// Write a fresh config file (defaults plus --mode/--blink-ms) instead
        #[arg(long)]
        init: bool,

        /// Overwrite an existing config file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

fn init_logging() {
    // Log to the temp dir - tail with: tail -f /tmp/typewriter.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let log_path = paths::log_path();
        if let Err(e) = std::fs::write(&log_path, "") {
            eprintln!("Warning: Failed to clear log file: {e}");
        }

        let log_dir = log_path
            .parent()
            .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
        let file_appender = tracing_appender::rolling::never(log_dir, "typewriter.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

const fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(blink_ms) = cli.blink_ms {
        config.blink_interval_ms = blink_ms;
    }
    config
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(apply_overrides(cli, config))
}

fn init_config(cli: &Cli, force: bool) -> Result<()> {
    let path = cli.config.clone().unwrap_or_else(Config::default_path);
    apply_overrides(cli, Config::default()).init_file(&path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {e}");
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    // Runs before loading so a broken config file can be replaced
    if let Some(Commands::Config { init: true, force }) = cli.command {
        return init_config(&cli, force);
    }

    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Config { .. }) => {
            println!("{}", config.to_json()?);
            Ok(())
        }
        None => {
            let app = typewriter::tui::run(Typewriter::new(config))?;
            if cli.print {
                println!("{}", app.document.text());
            }
            Ok(())
        }
    }
}
