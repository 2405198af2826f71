use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use regenera_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "regenera")]
#[command(author, version, about = "Aeon Regenera in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Use an in-process demo identity instead of the configured backend
        #[arg(long)]
        offline: bool,
    },
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Print the signed-in account
    Whoami,
    /// Play the impact counters on stdout
    Impact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // The TUI owns the terminal, so its logs go to a file
    let tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    let _log_guard = init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run { offline }) => commands::run::run(config, offline).await,
        None => commands::run::run(config, false).await,
        Some(Commands::Login { email, password }) => {
            commands::login::run(&config, &email, &password).await
        }
        Some(Commands::Logout) => commands::logout::run(&config).await,
        Some(Commands::Whoami) => commands::whoami::run(&config).await,
        Some(Commands::Impact) => commands::impact::run(&config).await,
    }
}

/// Install the global subscriber
///
/// With `to_file` the logs go through a non-blocking writer; the returned
/// guard flushes it and must live until exit.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let (writer, guard) = file_writer(&config.log_path())?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init();
        Ok(Some(guard))
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
        Ok(None)
    }
}

/// Non-blocking writer appending to the log file at `path`
fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("invalid log file path {}", path.display()))?;

    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_writer_flushes_on_guard_drop() {
        let dir = std::env::temp_dir().join(format!("regenera-log-{}", std::process::id()));
        let path = dir.join("regenera.log");
        let (mut writer, guard) = file_writer(&path).unwrap();

        writer.write_all(b"counters started\n").unwrap();
        drop(guard);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("counters started"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
