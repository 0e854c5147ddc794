//! Data tables of the "ArduinO' ClocK" firmware, lifted out of program
//! memory into a reusable crate: the RTTL-style melody strings, the French
//! UI string tables, and an explicit notation layer so consumers no longer
//! re-tokenize raw melody text ad hoc at playback time.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces. Keeping the glue logic documented makes it easy to recall why
//! each re-export exists when revisiting the project.

pub mod models;
pub mod notation;
pub mod tables;

/// The domain types every other layer passes around.
pub use models::{Melody, NotationDefaults, Note, Pitch};

/// The notation layer: text to structured notes and back.
pub use notation::{parse_melody, render_melody, NotationError};

/// Convenience re-exports for the data tables. These are what `main.rs`
/// iterates when validating the shipped firmware data.
pub use tables::{song, Month, SettingsLabel, TemperatureUnit, Weekday, SONGS, SPLASH_LINES};
