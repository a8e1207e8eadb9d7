//! HTTP Availability Monitor
//!
//! Periodically probes the endpoints listed in a YAML file and prints the
//! cumulative availability of every domain after each cycle.
//!
//! # Architecture Overview
//!
//! ```text
//!   endpoints.yaml ──▶ config ──▶ ┌──────────────────────────────────────────────┐
//!   settings.toml  ──▶ (loader,   │                  SCHEDULER                   │
//!   CLI flags      ──▶ validation)│   fixed-rate tick, max_cycles, shutdown      │
//!                                 └──────────────┬───────────────────────────────┘
//!                                                │ tick
//!                                                ▼
//!                                 ┌──────────────────────────────┐
//!                                 │         CYCLE RUNNER         │   HTTP
//!                                 │  for each endpoint: prober ──┼────────▶ endpoint
//!                                 └──────────────┬───────────────┘
//!                                                │ record(domain, up)
//!                                                ▼
//!                                 ┌──────────────────────────────┐
//!                                 │     DOMAIN STATUS STORE      │◀── status API (read)
//!                                 └──────────────┬───────────────┘
//!                                                │ snapshot
//!                                                ▼
//!                                 ┌──────────────────────────────┐
//!                                 │   AVAILABILITY REPORTER      │──▶ stdout
//!                                 └──────────────────────────────┘
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use availability_monitor::admin;
use availability_monitor::config::{
    load_config, load_endpoints, validate_config, ConfigError, MonitorConfig,
};
use availability_monitor::cycle::{CycleRunner, Scheduler};
use availability_monitor::lifecycle::{spawn_signal_listener, Shutdown};
use availability_monitor::observability::{logging, metrics};
use availability_monitor::probe::Prober;
use availability_monitor::report::AvailabilityReporter;
use availability_monitor::store::DomainStatusStore;

#[derive(Parser, Debug)]
#[command(name = "availability-monitor", version)]
#[command(about = "Probe HTTP endpoints and report per-domain availability", long_about = None)]
struct Cli {
    /// YAML file listing the HTTP endpoints to probe.
    #[arg(short, long, value_name = "PATH")]
    file: PathBuf,

    /// Optional TOML settings file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Exit after this many cycles (0 runs until interrupted).
    #[arg(long, visible_alias = "maxRuns", value_name = "N")]
    max_cycles: Option<u64>,

    /// Seconds between cycle starts.
    #[arg(long, value_name = "SECS")]
    interval_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut MonitorConfig) {
        if let Some(max_cycles) = self.max_cycles {
            config.scheduler.max_cycles = max_cycles;
        }
        if let Some(interval_secs) = self.interval_secs {
            config.scheduler.interval_secs = interval_secs;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MonitorConfig::default(),
    };
    cli.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability);
    println!("Starting up...");

    let endpoints = load_endpoints(&cli.file)?;
    tracing::info!(
        file = %cli.file.display(),
        endpoints = endpoints.len(),
        interval_secs = config.scheduler.interval_secs,
        max_cycles = config.scheduler.max_cycles,
        max_concurrency = config.probe.max_concurrency,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(address = %addr, error = %e, "Failed to start metrics exporter");
        }
    }

    let store = Arc::new(DomainStatusStore::new());
    let shutdown = Shutdown::new();
    let scheduler_shutdown = shutdown.subscribe();
    spawn_signal_listener(shutdown.clone());

    let status_task = if config.status.enabled {
        match TcpListener::bind(&config.status.bind_address).await {
            Ok(listener) => {
                let store = store.clone();
                let shutdown = shutdown.clone();
                Some(tokio::spawn(async move {
                    if let Err(e) = admin::serve(listener, store, shutdown).await {
                        tracing::error!(error = %e, "Status API failed");
                    }
                }))
            }
            Err(e) => {
                tracing::error!(
                    address = %config.status.bind_address,
                    error = %e,
                    "Failed to bind status API"
                );
                None
            }
        }
    } else {
        None
    };

    let prober = Prober::new(&config.probe)?;
    let runner = CycleRunner::new(endpoints, prober, store)
        .with_concurrency(config.probe.max_concurrency);
    let mut scheduler =
        Scheduler::from_config(runner, AvailabilityReporter::stdout(), &config.scheduler);

    let reason = scheduler.run(scheduler_shutdown).await?;
    tracing::info!(reason = ?reason, cycles = scheduler.completed_cycles(), "Monitor finished");

    shutdown.trigger();
    if let Some(task) = status_task {
        let _ = task.await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
