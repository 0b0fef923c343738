use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::TrackerError;

/// Én rå sensorpakke: kode + posisjonelle verdier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self { workout_type: workout_type.into(), data: data.into() }
    }
}

// Tolerant inngang: objekt først, så legacy-par ["RUN", [..]]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Object {
        #[serde(alias = "code")]
        workout_type: String,
        data: Vec<f64>,
    },
    Pair(String, Vec<f64>),
}

impl From<PackageIn> for Package {
    fn from(p: PackageIn) -> Self {
        match p {
            PackageIn::Object { workout_type, data } => Package { workout_type, data },
            PackageIn::Pair(workout_type, data) => Package { workout_type, data },
        }
    }
}

impl<'de> Deserialize<'de> for Package {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        PackageIn::deserialize(deserializer).map(Package::from)
    }
}

/// Innebygde eksempelpakker (svømming, løp, gange).
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Les en JSON-liste med pakker. Feil rapporterer JSON-stien.
pub fn packages_from_json(json: &str) -> Result<Vec<Package>, TrackerError> {
    let de = &mut serde_json::Deserializer::from_str(json);
    spte::deserialize(de).map_err(|e| TrackerError::MalformedSource {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}
