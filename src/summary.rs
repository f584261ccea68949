//! Summary records and their rendering.

use std::fmt;

/// An immutable snapshot of one workout's computed statistics.
///
/// Built by [`Workout::summary`](crate::Workout::summary) immediately before
/// rendering. The [`Display`](fmt::Display) implementation produces the fixed
/// one-line report, with every numeric field at three decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Display name of the workout variant.
    pub workout: &'static str,
    /// Duration, hours.
    pub duration_h: f64,
    /// Distance covered, kilometers.
    pub distance_km: f64,
    /// Mean speed over the full duration, km/h.
    pub mean_speed_kmh: f64,
    /// Energy spent, kilocalories.
    pub calories_kcal: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal,
        )
    }
}
