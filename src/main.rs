//! dinescout binary entrypoint kept minimal. The runtime lives in `dinescout::app`.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use clap::Parser;

use dinescout::args::{self, Args};
use dinescout::config::{self, API_URL_ENV};
use dinescout::error::Result;
use dinescout::sources::{HttpApi, RestaurantApi};
use dinescout::{app, ui, util};

/// Log timestamps as `YYYY-MM-DD-T HH:MM:SS` local time.
struct DinescoutTimer;

impl tracing_subscriber::fmt::time::FormatTime for DinescoutTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&util::log_timestamp())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Build the filter from `RUST_LOG`, falling back to `level`.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// Initialize tracing to `<config_dir>/logs/dinescout.log`, or stderr if it cannot be opened.
fn init_logging(config_dir: &Path, level: &str) {
    let log_path = config::logs_dir(config_dir).join("dinescout.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(DinescoutTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is not blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(DinescoutTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

/// Fetch and print one restaurant, as text or JSON.
async fn show_once(api: &dyn RestaurantApi, id: &str, json: bool) -> Result<()> {
    let restaurant = api.get_restaurant(id.to_string()).await?;
    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &restaurant).map_err(std::io::Error::from)?;
        writeln!(out)?;
    } else {
        ui::render_detail(&mut out, &restaurant)?;
    }
    out.flush()?;
    Ok(())
}

/// Resolve settings, then run the one-shot lookup or the interactive session.
async fn run(args: &Args, config_dir: &Path) -> Result<()> {
    let env_url = std::env::var(API_URL_ENV).ok();
    let settings = args::resolve_settings(args, config_dir, env_url.as_deref());
    let api: Arc<dyn RestaurantApi> = Arc::new(HttpApi::new(&settings)?);
    if let Some(id) = &args.show {
        return show_once(api.as_ref(), id, args.json).await;
    }
    let mut out = std::io::stdout();
    writeln!(out, "dinescout {} - type `help` for commands", env!("CARGO_PKG_VERSION"))?;
    app::run(api, &settings, app::spawn_stdin_reader(), &mut out).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config_dir = config::config_dir(args.config_dir.as_deref());
    init_logging(&config_dir, &args::determine_log_level(&args));

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "dinescout starting");
    if let Err(err) = run(&args, &config_dir).await {
        tracing::error!(error = %err, "application error");
        eprintln!("dinescout: {err}");
        std::process::exit(1);
    }
    tracing::info!("dinescout exited");
}
