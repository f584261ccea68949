//! Workout variants and their statistic formulas.

use crate::summary::Summary;

/// Meters in a kilometer.
const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
const MIN_IN_H: f64 = 60.0;

/// Distance covered by one step, in meters.
const STEP_M: f64 = 0.65;
/// Distance covered by one stroke, in meters.
const STROKE_M: f64 = 1.38;

/// Multiplier on the mean speed in the running calorie formula.
const RUN_SPEED_FACTOR: f64 = 18.0;
/// Subtracted from the scaled mean speed in the running calorie formula.
const RUN_SPEED_OFFSET: f64 = 20.0;
/// Multiplier on the weight term in the walking calorie formula.
const WALK_WEIGHT_FACTOR: f64 = 0.035;
/// Multiplier on the speed-over-height term in the walking calorie formula.
const WALK_SPEED_FACTOR: f64 = 0.029;
/// Added to the mean speed in the swimming calorie formula.
const SWIM_SPEED_OFFSET: f64 = 1.1;
/// Multiplier on the weight term in the swimming calorie formula.
const SWIM_WEIGHT_FACTOR: f64 = 2.0;

/// A single recorded workout, holding its raw sensor readings.
///
/// Each statistic is recomputed from the stored readings on every call;
/// nothing is cached, and readings are never mutated after construction. Two
/// workouts built from identical readings therefore produce identical
/// figures.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    /// A run.
    Running {
        /// Steps taken.
        action: u32,
        /// Duration, hours.
        duration_h: f64,
        /// Athlete weight, kilograms.
        weight_kg: f64,
    },
    /// A walk.
    SportsWalking {
        /// Steps taken.
        action: u32,
        /// Duration, hours.
        duration_h: f64,
        /// Athlete weight, kilograms.
        weight_kg: f64,
        /// Athlete height, centimeters.
        height_cm: f64,
    },
    /// A swim.
    Swimming {
        /// Strokes taken.
        action: u32,
        /// Duration, hours.
        duration_h: f64,
        /// Athlete weight, kilograms.
        weight_kg: f64,
        /// Pool length, meters.
        pool_length_m: f64,
        /// Pool lengths swum.
        pool_count: f64,
    },
}

impl Workout {
    /// Display name of the variant, as printed in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running { .. } => "Running",
            Self::SportsWalking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }

    /// Duration of the workout, in hours.
    pub fn duration_h(&self) -> f64 {
        match *self {
            Self::Running { duration_h, .. }
            | Self::SportsWalking { duration_h, .. }
            | Self::Swimming { duration_h, .. } => duration_h,
        }
    }

    /// Distance covered, in kilometers.
    ///
    /// The step or stroke count scaled by the variant's action length.
    pub fn distance_km(&self) -> f64 {
        let (action, action_m) = match *self {
            Self::Running { action, .. } | Self::SportsWalking { action, .. } => (action, STEP_M),
            Self::Swimming { action, .. } => (action, STROKE_M),
        };

        f64::from(action) * action_m / M_IN_KM
    }

    /// Mean speed over the full duration, in km/h.
    ///
    /// For swimming, the distance is taken from the pool length and count
    /// rather than the stroke count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match *self {
            Self::Swimming {
                duration_h,
                pool_length_m,
                pool_count,
                ..
            } => pool_length_m * pool_count / M_IN_KM / duration_h,
            _ => self.distance_km() / self.duration_h(),
        }
    }

    /// Energy spent, in kilocalories.
    pub fn calories_kcal(&self) -> f64 {
        match *self {
            Self::Running {
                duration_h,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_FACTOR * self.mean_speed_kmh() - RUN_SPEED_OFFSET) * weight_kg / M_IN_KM
                    * duration_h
                    * MIN_IN_H
            }
            Self::SportsWalking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                // The squared speed over height is floored before scaling
                // (floor division, not plain division).
                let speed = self.mean_speed_kmh();
                let speed_term = (speed * speed / height_cm).floor();

                (WALK_WEIGHT_FACTOR * weight_kg + speed_term * WALK_SPEED_FACTOR * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Self::Swimming { weight_kg, .. } => {
                (self.mean_speed_kmh() + SWIM_SPEED_OFFSET) * SWIM_WEIGHT_FACTOR * weight_kg
            }
        }
    }

    /// Snapshot the computed statistics into a [`Summary`].
    pub fn summary(&self) -> Summary {
        Summary {
            workout: self.label(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
