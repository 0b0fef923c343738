use thiserror::Error;

/// Feil fra kjernen. Hver variant har en stabil `reason()`-etikett (brukes i metrics/logg).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackerError {
    #[error("unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("malformed reading for {code}: expected {expected} values, got {got}")]
    MalformedReading {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("invalid reading for {code}: {field} = {value}")]
    InvalidReading {
        code: String,
        field: &'static str,
        value: f64,
    },

    #[error("malformed package source at {path}: {message}")]
    MalformedSource { path: String, message: String },

    #[error("invalid run config at {path}: {message}")]
    Config { path: String, message: String },
}

impl TrackerError {
    pub fn reason(&self) -> &'static str {
        match self {
            TrackerError::UnknownWorkoutType(_) => "unknown_workout_type",
            TrackerError::MalformedReading { .. } => "malformed_reading",
            TrackerError::InvalidReading { .. } => "invalid_reading",
            TrackerError::MalformedSource { .. } => "malformed_source",
            TrackerError::Config { .. } => "invalid_config",
        }
    }
}
