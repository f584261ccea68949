//! Interpreting sensor packages into workouts.

use thiserror::Error;

use crate::workout::Workout;

/// Errors interpreting a sensor package.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Unknown workout code.
    #[error("Unknown workout code ({0}).")]
    UnknownWorkoutCode(String),
    /// Wrong number of readings for the workout code.
    #[error("Wrong number of readings for {code} (expected {expected}, found {found}).")]
    ReadingCount {
        code: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Interpret a sensor package into a [`Workout`].
///
/// A package is a short workout code plus positional readings:
///
/// | Code  | Readings                                                    |
/// |-------|-------------------------------------------------------------|
/// | `RUN` | steps, duration (h), weight (kg)                            |
/// | `WLK` | steps, duration (h), weight (kg), height (cm)               |
/// | `SWM` | strokes, duration (h), weight (kg), pool length (m), lengths |
///
/// An unrecognized code, or a reading list of the wrong length for its code,
/// is an error. Reading values themselves are not checked.
pub fn read_package(code: &str, readings: &[f64]) -> Result<Workout, Error> {
    match code {
        "RUN" => {
            let [action, duration_h, weight_kg] = unpack("RUN", readings)?;
            Ok(Workout::Running {
                action: action as u32,
                duration_h,
                weight_kg,
            })
        }
        "WLK" => {
            let [action, duration_h, weight_kg, height_cm] = unpack("WLK", readings)?;
            Ok(Workout::SportsWalking {
                action: action as u32,
                duration_h,
                weight_kg,
                height_cm,
            })
        }
        "SWM" => {
            let [action, duration_h, weight_kg, pool_length_m, pool_count] =
                unpack("SWM", readings)?;
            Ok(Workout::Swimming {
                action: action as u32,
                duration_h,
                weight_kg,
                pool_length_m,
                pool_count,
            })
        }
        _ => Err(Error::UnknownWorkoutCode(code.to_owned())),
    }
}

/// Take an exact number of readings from a package, by position.
fn unpack<const N: usize>(code: &'static str, readings: &[f64]) -> Result<[f64; N], Error> {
    readings.try_into().map_err(|_| Error::ReadingCount {
        code,
        expected: N,
        found: readings.len(),
    })
}
