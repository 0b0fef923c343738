use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::TrackerError;

/// Hva driveren gjør når en pakke avvises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Logg, tell og hopp over pakken
    #[default]
    Skip,
    /// Stopp hele kjøringen ved første feil
    Abort,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl RunConfig {
    /// Bibliotek-API for innbyggere som vil styre feilhåndteringen selv.
    /// Binæren leser ingen konfig og kjører alltid med `RunConfig::default()`.
    pub fn from_json(json: &str) -> Result<Self, TrackerError> {
        let de = &mut serde_json::Deserializer::from_str(json);
        spte::deserialize(de).map_err(|e| TrackerError::Config {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })
    }
}

/// Resultat av én kjøring gjennom driveren.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub printed: usize,
    pub skipped: usize,
}
