use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use daybudget::cli::{handle_config, handle_demo, handle_init, handle_session, resolve_today};
use daybudget::config::ConfigPaths;

#[derive(Parser)]
#[command(
    name = "daybudget",
    version,
    about = "Daily allowance budgeting from the terminal",
    long_about = "daybudget splits your monthly income into a daily allowance, \
                  tracks expenses against it, and warns you before the day's \
                  budget runs out."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample configuration
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Config file to show instead of the default
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Start an interactive budgeting session
    Session {
        /// Config file (JSON or YAML)
        #[arg(short, long, env = "DAYBUDGET_CONFIG")]
        config: Option<PathBuf>,
        /// Day to run the session on (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<String>,
    },

    /// Show the dashboard for a sample wallet
    Demo {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DAYBUDGET_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let paths = ConfigPaths::new()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Init { force }) => handle_init(&paths, force, &mut out)?,
        Some(Commands::Config { config }) => handle_config(&paths, config.as_deref(), &mut out)?,
        Some(Commands::Session { config, today }) => {
            let today = resolve_today(today.as_deref())?;
            let stdin = io::stdin();
            handle_session(&paths, config.as_deref(), today, stdin.lock(), &mut out)?;
        }
        Some(Commands::Demo { today }) => {
            let today = resolve_today(today.as_deref())?;
            handle_demo(today, &mut out)?;
        }
        None => {
            writeln!(out, "daybudget - daily allowance budgeting")?;
            writeln!(out)?;
            writeln!(out, "Run 'daybudget --help' for usage information.")?;
            writeln!(out, "Run 'daybudget demo' to see a sample dashboard.")?;
        }
    }

    out.flush()?;
    Ok(())
}
