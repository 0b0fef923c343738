use serde::Serialize;
use std::fmt;

use crate::training::{RoundTo, WorkoutKind};

/// Sammendrag av én økt: type, varighet, distanse, snittfart, kalorier (i den rekkefølgen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: WorkoutKind,
    pub duration: f64,  // timer
    pub distance: f64,  // km
    pub speed: f64,     // km/t
    pub calories: f64,  // kcal
}

impl InfoMessage {
    /// Én linje i fast mal.
    ///
    /// NB: tredje felt er distansen, men etiketten sier "Ср. скорость ... км/ч".
    /// Teksten beholdes ordrett fordi konsumenter matcher på den.
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Ср. скорость: {:.3} км/ч; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type.name(),
            self.duration,
            self.distance,
            self.speed,
            self.calories,
        )
    }

    /// JSON-visning av sammendraget, tall rundet til 3 desimaler som i meldingen.
    pub fn to_json(&self) -> serde_json::Value {
        let rounded = InfoMessage {
            duration: self.duration.round_to(3),
            distance: self.distance.round_to(3),
            speed: self.speed.round_to(3),
            calories: self.calories.round_to(3),
            ..*self
        };
        // InfoMessage har bare enkle felt, så serialisering kan ikke feile
        serde_json::to_value(rounded).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
