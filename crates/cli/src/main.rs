//! Waitlist CLI - interactive queue session in the terminal

mod command;
mod render;
mod repl;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use session::{OutputMode, Session};
use waitlist_core::application::demo_members;
use waitlist_core::domain::queue::DEFAULT_MINUTES_PER_POSITION;
use waitlist_core::port::{SystemTimeProvider, TimeProvider};
use waitlist_core::{QueueConfig, QueueStore};

const DEFAULT_LOG_FILTER: &str = "waitlist=warn,waitlist_core=warn";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Parser)]
#[command(name = "waitlist")]
#[command(about = "Join a waitlist and see your place in line", long_about = None)]
#[command(version)]
struct Cli {
    /// Minutes of estimated wait per position in line
    #[arg(long, env = "WAITLIST_MINUTES_PER_POSITION", default_value_t = DEFAULT_MINUTES_PER_POSITION)]
    minutes_per_position: u32,

    /// Start with an empty queue instead of the demo members
    #[arg(long, env = "WAITLIST_NO_SEED")]
    no_seed: bool,

    /// Print `list` as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log output format (logs go to stderr)
    #[arg(long, env = "WAITLIST_LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}

fn build_store(cli: &Cli) -> Result<QueueStore> {
    let config = QueueConfig {
        minutes_per_position: cli.minutes_per_position,
        ..QueueConfig::default()
    };
    config.validate().context("Invalid configuration")?;

    let time_provider = Arc::new(SystemTimeProvider);

    if cli.no_seed {
        return Ok(QueueStore::new(config, time_provider));
    }

    let seed = demo_members(time_provider.now_millis());
    QueueStore::with_members(config, time_provider, seed).context("Failed to seed queue")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format)?;

    let store = build_store(&cli)?;
    info!(
        version = waitlist_core::VERSION,
        queue = %store.config().name,
        members = store.len(),
        minutes_per_position = store.config().minutes_per_position,
        "Waitlist session starting"
    );

    let output = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Table
    };
    let mut session = Session::new(store, output);

    println!("{}", "Waitlist".cyan().bold());
    println!("Type `help` for commands.");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut session, stdin, &mut stdout).await?;

    info!(members = session.store().len(), "Waitlist session finished");
    Ok(())
}
