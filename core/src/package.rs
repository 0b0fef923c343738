// core/src/package.rs
use crate::error::TrackerError;
use crate::training::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// Kode → økttype. Lukket tabell; nye koder krever ny variant i `WorkoutKind`.
pub const PACKAGE_TABLE: [(&str, WorkoutKind); 3] = [
    ("SWM", WorkoutKind::Swimming),
    ("RUN", WorkoutKind::Running),
    ("WLK", WorkoutKind::SportsWalking),
];

pub fn kind_for_code(code: &str) -> Option<WorkoutKind> {
    PACKAGE_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, kind)| *kind)
}

/// Les en sensorpakke og bygg riktig økt.
///
/// `data` pakkes ut posisjonelt: action, varighet (t), vekt (kg), og så
/// høyde (cm) for gange eller bassenglengde (m) + antall lengder for svømming.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, TrackerError> {
    let kind = kind_for_code(code)
        .ok_or_else(|| TrackerError::UnknownWorkoutType(code.to_string()))?;

    if data.len() != kind.arity() {
        return Err(TrackerError::MalformedReading {
            code: code.to_string(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let invalid = |field: &'static str, value: f64| TrackerError::InvalidReading {
        code: code.to_string(),
        field,
        value,
    };

    // Alle verdier må være endelige og ikke-negative
    let names = field_names(kind);
    for (name, &v) in names.iter().zip(data) {
        if !v.is_finite() || v < 0.0 {
            return Err(invalid(*name, v));
        }
    }

    let action = data[0];
    if action.fract() != 0.0 || action > f64::from(u32::MAX) {
        return Err(invalid("action", action));
    }
    let action = action as u32;

    let (duration_h, weight_kg) = (data[1], data[2]);
    // varighet er divisor i alle fartsformler
    if duration_h <= 0.0 {
        return Err(invalid("duration", duration_h));
    }

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action, duration_h, weight_kg).into(),
        WorkoutKind::SportsWalking => {
            let height_cm = data[3];
            if height_cm <= 0.0 {
                return Err(invalid("height", height_cm));
            }
            SportsWalking::new(action, duration_h, weight_kg, height_cm).into()
        }
        WorkoutKind::Swimming => {
            Swimming::new(action, duration_h, weight_kg, data[3], data[4]).into()
        }
    };

    log::debug!("read_package: {} -> {:?}", code, workout);
    Ok(workout)
}

fn field_names(kind: WorkoutKind) -> &'static [&'static str] {
    match kind {
        WorkoutKind::Running => &["action", "duration", "weight"],
        WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
        WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
    }
}
