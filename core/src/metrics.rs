use once_cell::sync::OnceCell;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::training::WorkoutKind;

static GLOBAL: OnceCell<Metrics> = OnceCell::new();

/// Tellere for driveren. Eget registry, så tester kan lage sine egne instanser.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    processed: IntCounterVec,
    rejected: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let processed = IntCounterVec::new(
            Opts::new("workouts_processed_total", "Workouts summarised, by training type"),
            &["training_type"],
        )?;
        let rejected = IntCounterVec::new(
            Opts::new("packages_rejected_total", "Sensor packages rejected, by reason"),
            &["reason"],
        )?;

        registry.register(Box::new(processed.clone()))?;
        registry.register(Box::new(rejected.clone()))?;

        Ok(Self { registry, processed, rejected })
    }

    /// Prosess-global instans (brukes av binæren).
    pub fn global() -> prometheus::Result<&'static Metrics> {
        GLOBAL.get_or_try_init(Metrics::new)
    }

    pub fn processed_total(&self, kind: WorkoutKind) -> IntCounter {
        self.processed.with_label_values(&[kind.name()])
    }

    pub fn rejected_total(&self, reason: &str) -> IntCounter {
        self.rejected.with_label_values(&[reason])
    }

    /// Tekstformat (Prometheus exposition).
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
