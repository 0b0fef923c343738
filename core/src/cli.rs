use anyhow::Context;
use std::io::Write;

use crate::metrics::Metrics;
use crate::package::read_package;
use crate::source::Package;
use crate::training::Training;
use crate::types::{ErrorPolicy, RunConfig, RunReport};

/// Kjør pakkene gjennom dispatcher → sammendrag → melding, én linje per økt.
///
/// Feil isoleres per pakke med `ErrorPolicy::Skip`; med `Abort` stopper første feil kjøringen.
pub fn run<I, W>(
    packages: I,
    cfg: &RunConfig,
    metrics: &Metrics,
    out: &mut W,
) -> anyhow::Result<RunReport>
where
    I: IntoIterator<Item = Package>,
    W: Write,
{
    let mut report = RunReport::default();

    for (idx, package) in packages.into_iter().enumerate() {
        let workout = match read_package(&package.workout_type, &package.data) {
            Ok(w) => w,
            Err(e) => {
                metrics.rejected_total(e.reason()).inc();
                if cfg.on_error == ErrorPolicy::Abort {
                    return Err(e).with_context(|| {
                        format!("package #{idx} ({}) rejected", package.workout_type)
                    });
                }
                log::warn!("skipping package #{} ({}): {}", idx, package.workout_type, e);
                report.skipped += 1;
                continue;
            }
        };

        let info = workout.show_training_info();
        log::debug!("summary #{}: {:?}", idx, info);

        writeln!(out, "{}", info.get_message())
            .with_context(|| format!("writing summary for package #{idx}"))?;
        metrics.processed_total(info.training_type).inc();
        report.printed += 1;
    }

    Ok(report)
}
