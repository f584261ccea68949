//! Workout statistics from fitness-tracker sensor packages.
//!
//! A sensor package pairs a short workout code (`"RUN"`, `"WLK"`, or `"SWM"`)
//! with a positional list of raw readings. [`read_package`] interprets a
//! package into a [`Workout`], which computes the distance covered, mean
//! speed, and calories burned from its readings. [`Workout::summary`]
//! snapshots the computed figures into a [`Summary`], which renders as a
//! fixed one-line report.
//!
//! ```
//! let workout = stride::read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
//! println!("{}", workout.summary());
//! ```
//!
//! Readings are interpreted by position only. Their values are not
//! range-checked: a zero duration or a negative weight flows through the
//! formulas and produces a nonsensical figure rather than an error.

pub mod package;
pub mod summary;
pub mod workout;

pub use package::read_package;
pub use summary::Summary;
pub use workout::Workout;
