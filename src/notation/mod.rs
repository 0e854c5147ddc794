//! Melody notation layer split across logical submodules. The firmware
//! stored melodies as compact RTTL-style text and re-tokenized them at
//! playback time; here the dialect gets one explicit parser producing
//! structured [`crate::models::Note`] records, and a writer that turns a
//! parsed melody back into notation text.

mod parser;
mod writer;

pub use parser::parse_melody;
pub use writer::render_melody;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Everything that can go wrong while reading a melody entry. Each variant
/// carries enough of the offending text to locate the problem in the source
/// string; the firmware data itself never triggers any of these, which the
/// table tests pin down.
pub enum NotationError {
    /// The entry has no `:` at all, so there is no note section to read.
    #[error("melody entry has no ':' separating the header from the notes")]
    MissingNoteSection,
    /// A header field used a key other than `o=` or `d=`.
    #[error("unknown header field `{0}`")]
    UnknownHeaderField(String),
    /// A header field had a key we know but a value we cannot use.
    #[error("header field `{field}=` has invalid value `{value}`")]
    InvalidHeaderValue {
        /// The field key, `o` or `d`.
        field: char,
        /// The raw text after the `=`.
        value: String,
    },
    /// A note token contained a character where a pitch letter was required.
    #[error("invalid pitch `{found}` at byte {position} of note token `{token}`")]
    InvalidPitch {
        /// The comma-separated token being read.
        token: String,
        /// The character found instead of `a..g` or `p`.
        found: char,
        /// Byte offset of `found` within `token`.
        position: usize,
    },
    /// A duration was zero or did not fit the inverse-power scheme.
    #[error("invalid duration `{value}` in note token `{token}`")]
    InvalidDuration {
        /// The comma-separated token being read.
        token: String,
        /// The raw digit run that failed.
        value: String,
    },
    /// An `_` octave override was empty or out of range.
    #[error("invalid octave override `{value}` in note token `{token}`")]
    InvalidOctave {
        /// The comma-separated token being read.
        token: String,
        /// The raw digit run that failed.
        value: String,
    },
    /// The entry parsed cleanly but produced no notes, which no consumer can
    /// play.
    #[error("melody contains no notes")]
    EmptyMelody,
}
