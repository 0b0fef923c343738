// core/src/training.rs
use serde::Serialize;
use std::fmt;

use crate::message::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;          // meter per km
pub const MIN_IN_H: f64 = 60.0;           // minutter per time
pub const LEN_STEP: f64 = 0.65;           // skrittlengde (m), løp og gange

pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
pub const KMH_IN_MSEC: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

pub const SWIMMING_LEN_STEP: f64 = 1.38;  // armtaklengde (m)
pub const CALORIES_SWM_SHIFT: f64 = 1.1;
pub const CALORIES_SWM_MULTIPLIER: f64 = 2.0;

/// Avrunding til like mange desimaler som sammendragslinjen viser (3).
pub trait RoundTo {
    fn round_to(self, decimals: u32) -> f64;
}

impl RoundTo for f64 {
    fn round_to(self, decimals: u32) -> f64 {
        let scale = 10_f64.powi(decimals as i32);
        (self * scale).round() / scale
    }
}

/// Rå sensordata som er felles for alle økttyper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub action: u32,      // skritt eller armtak
    pub duration_h: f64,  // timer
    pub weight_kg: f64,   // kg
}

impl Reading {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self { action, duration_h, weight_kg }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Visningsnavn (samme som typenavnet i sammendraget).
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Pakkekode fra sensoren.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Antall verdier i en pakke for denne typen.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Felles kontrakt for alle økttyper.
///
/// Kalorier har ingen standardformel: hver variant må levere sin egen,
/// og det finnes ingen "basis-økt" som kan instansieres.
pub trait Training {
    fn reading(&self) -> &Reading;

    fn kind(&self) -> WorkoutKind;

    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distanse (km) = action * skrittlengde / 1000.
    fn distance(&self) -> f64 {
        f64::from(self.reading().action) * self.step_length() / M_IN_KM
    }

    /// Snittfart (km/t).
    fn mean_speed(&self) -> f64 {
        self.distance() / self.reading().duration_h
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind(),
            duration: self.reading().duration_h,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub reading: Reading,
}

impl Running {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self { reading: Reading::new(action, duration_h, weight_kg) }
    }
}

impl Training for Running {
    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.reading;
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * r.weight_kg
            / M_IN_KM
            * (r.duration_h * MIN_IN_H)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub reading: Reading,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self { reading: Reading::new(action, duration_h, weight_kg), height_cm }
    }
}

impl Training for SportsWalking {
    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.reading;
        let speed_ms = self.mean_speed() * KMH_IN_MSEC;
        let height_m = self.height_cm / CM_IN_M;
        (CALORIES_WEIGHT_MULTIPLIER * r.weight_kg
            + (speed_ms.powi(2) / height_m) * CALORIES_SPEED_HEIGHT_MULTIPLIER * r.weight_kg)
            * (r.duration_h * MIN_IN_H)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub reading: Reading,
    pub length_pool_m: f64,
    pub count_pool: f64,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            reading: Reading::new(action, duration_h, weight_kg),
            length_pool_m,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn step_length(&self) -> f64 {
        SWIMMING_LEN_STEP
    }

    // Fart fra bassenggeometri, ikke fra armtak (distance() brukes bare i sammendraget)
    fn mean_speed(&self) -> f64 {
        self.length_pool_m * self.count_pool / M_IN_KM / self.reading.duration_h
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.reading;
        (self.mean_speed() + CALORIES_SWM_SHIFT)
            * CALORIES_SWM_MULTIPLIER
            * r.weight_kg
            * r.duration_h
    }
}

/// Lukket sett av økttyper; det dispatcheren returnerer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn reading(&self) -> &Reading {
        self.inner().reading()
    }

    fn kind(&self) -> WorkoutKind {
        self.inner().kind()
    }

    fn step_length(&self) -> f64 {
        self.inner().step_length()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
