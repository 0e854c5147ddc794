//! The firmware data tables, split across logical submodules: melodies on
//! one side, localized UI strings on the other. The two share nothing but a
//! home; they were independent blobs of program memory in the firmware and
//! stay independent here.

pub mod songs;
pub mod strings;

pub use songs::{song, SONGS};
pub use strings::{
    Month, SettingsLabel, TemperatureUnit, Weekday, DATE_PREFIX, MESSAGES, MONTH_NAMES,
    SETTINGS_LABELS, SPLASH_LINES, TEMP_PREFIX, WEEKDAY_NAMES,
};
