use anyhow::Context;
use tracing_subscriber::EnvFilter;

use fitness_tracker_core::{run, sample_packages, Metrics, RunConfig};

fn main() -> anyhow::Result<()> {
    // stdout er forbeholdt sammendragslinjene; logg går til stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let metrics = Metrics::global().context("registering metrics")?;
    let cfg = RunConfig::default();

    let stdout = std::io::stdout();
    let report = run(sample_packages(), &cfg, metrics, &mut stdout.lock())?;

    log::info!("printed {} summaries, skipped {}", report.printed, report.skipped);
    log::debug!("metrics:\n{}", metrics.render().unwrap_or_default());
    Ok(())
}
