//! The melody table of the clock firmware. Every constant reproduces its
//! source string bit-exact — alignment spaces, empty slots, and the missing
//! comma in `SONG01` included — because the strings are the compatibility
//! contract with the playback side, not just test fixtures. The notation
//! layer is written to accept exactly these quirks; see the tests at the
//! bottom, which parse the whole table.

/// C major scale, ascending. The format is the RingTone Transfer Language
/// dialect the firmware used for all of its melodies.
pub const SONG01: &str = ": :e,8f,8g8a,8b,8c1,8d1,8e1";

/// Four quarter notes; `d=4` makes every unnumbered note a quarter note.
pub const SONG02: &str = ":d=4 :c,d,e,f";

/// Octave/duration exercise in octave 6.
pub const SONG03: &str = ":o=6,d=2 :16a,16b,8a,4b";

/// Octave/duration exercise in octave 5, thirty-second notes.
pub const SONG04: &str = ":o=5,d=2 :32g,32a,32b,32c";

/// Für Elise, first voice.
pub const SONG11: &str = ":d=16 :8a,8p,a,8p,c1, e1,d#1,e1,f1,e1,b,d_1,c1";

/// Für Elise, second voice. The padding keeps its rests visually aligned
/// with the first voice in the firmware source.
pub const SONG12: &str =
    ":d=16 :8e,8p,c,8p,e,  1p,                       1p,              , 1p,      , 1p,                     ";

/// Für Elise, third voice.
pub const SONG13: &str = ":o=6,d=8 :c, 1p";

/// Für Elise, fourth voice.
pub const SONG14: &str = ":o=6,d=8 :c, 1p";

/// Name-keyed registry of every melody, in firmware declaration order. The
/// names are the firmware's own symbols so existing documentation and the
/// inspection binary can refer to melodies the same way the C source did.
pub const SONGS: [(&str, &str); 8] = [
    ("song01", SONG01),
    ("song02", SONG02),
    ("song03", SONG03),
    ("song04", SONG04),
    ("song11", SONG11),
    ("song12", SONG12),
    ("song13", SONG13),
    ("song14", SONG14),
];

/// Look up a melody's notation text by its symbolic name.
pub fn song(name: &str) -> Option<&'static str> {
    SONGS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, notation)| *notation)
}
