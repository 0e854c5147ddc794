//! Tokenizer for the melody dialect. Every function here tries to
//! encapsulate one grammar production so the rest of the codebase can treat
//! melodies as structured data. Capturing the rationale in comments keeps the
//! dialect's quirks easy to rediscover when returning to the project.
//!
//! The grammar, as the firmware data actually uses it:
//!
//! ```text
//! entry      := [":"] [header] ":" noteseq
//! header     := field ("," field)*
//! field      := "o=" digits | "d=" digits
//! noteseq    := note ("," note)*
//! note       := [duration] pitch ["#"] ["_" octave] [duration] ["."]
//! pitch      := "a".."g" | "p"        (p = rest)
//! ```
//!
//! The shipped entries write themselves as `":<fields> :<notes>"`, with
//! alignment spaces and the occasional empty slot between commas, so the
//! parser tolerates a leading `:` in the header section and skips
//! whitespace-only tokens. One entry also drops a comma between two notes
//! (`8g8a`); a comma token therefore holds one *or more* notes, and anything
//! left over after a note must itself start a valid note or the entry is
//! rejected.

use crate::models::{Melody, NotationDefaults, Note, Pitch};
use crate::notation::NotationError;

/// Parse one melody entry into its resolved note sequence.
///
/// `defaults` supplies the octave and duration assumed when the entry header
/// omits `o=` or `d=`; the data does not define those values, so the caller
/// must. Header fields override the defaults, and per-note markers override
/// the header.
pub fn parse_melody(source: &str, defaults: &NotationDefaults) -> Result<Melody, NotationError> {
    // The note section starts after the LAST colon. Splitting on the last
    // one (rather than the first) is what lets the firmware's two-colon
    // entries parse under the single-colon grammar.
    let colon = source.rfind(':').ok_or(NotationError::MissingNoteSection)?;
    let header_section = &source[..colon];
    let note_section = &source[colon + 1..];

    let (default_octave, default_duration) = parse_header(header_section, defaults)?;

    let mut notes = Vec::new();
    for token in note_section.split(',') {
        let token = token.trim();
        if token.is_empty() {
            // Alignment padding or an empty slot in the firmware data, not a
            // rest.
            continue;
        }
        parse_note_token(token, default_octave, default_duration, &mut notes)?;
    }

    if notes.is_empty() {
        return Err(NotationError::EmptyMelody);
    }

    Ok(Melody {
        default_octave,
        default_duration,
        notes,
    })
}

/// Read the header section and fold its fields over the caller defaults.
/// Returns the `(octave, duration)` pair in force for the note section.
fn parse_header(
    section: &str,
    defaults: &NotationDefaults,
) -> Result<(u8, u8), NotationError> {
    // Strip the decorative leading colon the firmware entries carry.
    let section = section.trim().trim_start_matches(':').trim();

    let mut octave = defaults.octave;
    let mut duration = defaults.duration;

    if section.is_empty() {
        return Ok((octave, duration));
    }

    for field in section.split(',') {
        let field = field.trim();
        if field.is_empty() {
            continue;
        }
        if let Some(value) = field.strip_prefix("o=") {
            octave = parse_header_value('o', value)?;
        } else if let Some(value) = field.strip_prefix("d=") {
            duration = parse_header_value('d', value)?;
            if duration == 0 {
                return Err(NotationError::InvalidHeaderValue {
                    field: 'd',
                    value: value.to_string(),
                });
            }
        } else {
            return Err(NotationError::UnknownHeaderField(field.to_string()));
        }
    }

    Ok((octave, duration))
}

/// Parse the digits after `o=` or `d=`.
fn parse_header_value(field: char, value: &str) -> Result<u8, NotationError> {
    value
        .trim()
        .parse()
        .map_err(|_| NotationError::InvalidHeaderValue {
            field,
            value: value.to_string(),
        })
}

/// Parse every note packed into one comma token, appending the resolved
/// records to `out`. Normally that is exactly one note; the loop exists for
/// the missing-comma entry in the shipped data.
fn parse_note_token(
    token: &str,
    default_octave: u8,
    default_duration: u8,
    out: &mut Vec<Note>,
) -> Result<(), NotationError> {
    let bytes = token.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        // Leading duration digits.
        let mut duration = match take_digits(bytes, &mut pos) {
            Some(digits) => Some(parse_duration(token, digits)?),
            None => None,
        };

        // The pitch letter is the one mandatory part of a note.
        let pitch = char_at(token, pos);
        let pitch = Pitch::from_letter(pitch).ok_or(NotationError::InvalidPitch {
            token: token.to_string(),
            found: pitch,
            position: pos,
        })?;
        pos += 1;

        let mut sharp = false;
        if bytes.get(pos) == Some(&b'#') {
            sharp = true;
            pos += 1;
        }

        // `_<digits>` pins the note to an absolute octave register.
        let mut octave = default_octave;
        if bytes.get(pos) == Some(&b'_') {
            pos += 1;
            let digits = take_digits(bytes, &mut pos).unwrap_or("");
            octave = digits
                .parse()
                .map_err(|_| NotationError::InvalidOctave {
                    token: token.to_string(),
                    value: digits.to_string(),
                })?;
        }

        // A digit run after the pitch is a second duration override and wins
        // over a leading one, matching left-to-right consumption.
        if let Some(digits) = take_digits(bytes, &mut pos) {
            duration = Some(parse_duration(token, digits)?);
        }

        let mut dotted = false;
        if bytes.get(pos) == Some(&b'.') {
            dotted = true;
            pos += 1;
        }

        out.push(Note {
            pitch,
            sharp,
            octave,
            duration: duration.unwrap_or(default_duration),
            dotted,
        });

        // Anything still unread must begin another note; the top of the loop
        // re-enters and the pitch check rejects true garbage, so no entry
        // can "parse" while leaving residue behind.
    }

    Ok(())
}

/// Consume a run of ASCII digits starting at `*pos`, advancing the cursor.
/// Returns `None` when no digit is present. `bytes` must come from `token`,
/// so slicing on digit boundaries cannot split a UTF-8 sequence.
fn take_digits<'a>(bytes: &'a [u8], pos: &mut usize) -> Option<&'a str> {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if *pos == start {
        None
    } else {
        // Digits are single-byte ASCII, so this slice is valid UTF-8.
        Some(std::str::from_utf8(&bytes[start..*pos]).unwrap_or(""))
    }
}

/// Digit run → duration, rejecting zero and overflow. An inverse-power
/// duration of 0 has no timing meaning.
fn parse_duration(token: &str, digits: &str) -> Result<u8, NotationError> {
    match digits.parse::<u8>() {
        Ok(0) | Err(_) => Err(NotationError::InvalidDuration {
            token: token.to_string(),
            value: digits.to_string(),
        }),
        Ok(value) => Ok(value),
    }
}

/// The char starting at byte `pos` of `token`. Falls back to the replacement
/// character mid-sequence, which only ever feeds an error message.
fn char_at(token: &str, pos: usize) -> char {
    token[pos..].chars().next().unwrap_or('\u{FFFD}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> NotationDefaults {
        NotationDefaults::new(5, 4)
    }

    fn pitches(melody: &Melody) -> Vec<Pitch> {
        melody.notes.iter().map(|n| n.pitch).collect()
    }

    #[test]
    fn song02_quarter_notes() {
        // ":d=4 :c,d,e,f": header sets the duration, octave stays at the
        // caller default, four quarter notes.
        let melody = parse_melody(":d=4 :c,d,e,f", &defaults()).expect("song02 should parse");
        assert_eq!(melody.default_duration, 4);
        assert_eq!(melody.default_octave, 5);
        assert_eq!(
            pitches(&melody),
            vec![Pitch::C, Pitch::D, Pitch::E, Pitch::F]
        );
        for note in &melody.notes {
            assert_eq!(note.duration, 4);
            assert_eq!(note.octave, 5);
            assert!(!note.sharp);
            assert!(!note.dotted);
        }
    }

    #[test]
    fn empty_header_uses_caller_defaults() {
        let melody = parse_melody(": :e,8f", &defaults()).expect("should parse");
        assert_eq!(melody.default_octave, 5);
        assert_eq!(melody.default_duration, 4);
        assert_eq!(melody.notes[0].duration, 4);
        assert_eq!(melody.notes[1].duration, 8);
    }

    #[test]
    fn header_overrides_both_fields() {
        let melody = parse_melody(":o=6,d=2 :16a,16b,8a,4b", &defaults()).expect("should parse");
        assert_eq!(melody.default_octave, 6);
        assert_eq!(melody.default_duration, 2);
        assert_eq!(melody.notes[0].duration, 16);
        assert_eq!(melody.notes[0].octave, 6);
    }

    #[test]
    fn sharp_and_octave_override() {
        let melody = parse_melody(":d=16 :d#1,d_1", &defaults()).expect("should parse");

        // d#1: sharp, trailing digit is a duration override.
        assert_eq!(melody.notes[0].pitch, Pitch::D);
        assert!(melody.notes[0].sharp);
        assert_eq!(melody.notes[0].duration, 1);
        assert_eq!(melody.notes[0].octave, 5);

        // d_1: underscore pins the octave, duration stays at the header's.
        assert_eq!(melody.notes[1].pitch, Pitch::D);
        assert!(!melody.notes[1].sharp);
        assert_eq!(melody.notes[1].duration, 16);
        assert_eq!(melody.notes[1].octave, 1);
    }

    #[test]
    fn trailing_duration_wins_over_leading() {
        let melody = parse_melody(":8c1", &defaults()).expect("should parse");
        assert_eq!(melody.notes.len(), 1);
        assert_eq!(melody.notes[0].duration, 1);
    }

    #[test]
    fn dotted_rest() {
        let melody = parse_melody(":2p.", &defaults()).expect("should parse");
        assert!(melody.notes[0].pitch.is_rest());
        assert!(melody.notes[0].dotted);
        assert_eq!(melody.notes[0].whole_notes(), 0.75);
    }

    #[test]
    fn missing_comma_yields_two_notes() {
        // song01 contains "8g8a"; the second digit run ends the first note
        // and the residue must parse as another note.
        let melody = parse_melody(":8g8a", &defaults()).expect("should parse");
        assert_eq!(pitches(&melody), vec![Pitch::G, Pitch::A]);
        assert_eq!(melody.notes[0].duration, 8);
        assert_eq!(melody.notes[1].duration, 8);
    }

    #[test]
    fn padding_tokens_are_skipped() {
        let melody =
            parse_melody(":d=16 :8e,8p,  1p,              , 1p,   ", &defaults())
                .expect("should parse");
        assert_eq!(melody.notes.len(), 4);
    }

    #[test]
    fn rejects_unknown_header_field() {
        let err = parse_melody(":b=120 :c", &defaults()).unwrap_err();
        assert_eq!(err, NotationError::UnknownHeaderField("b=120".to_string()));
    }

    #[test]
    fn rejects_bad_header_value() {
        let err = parse_melody(":o=x :c", &defaults()).unwrap_err();
        assert_eq!(
            err,
            NotationError::InvalidHeaderValue {
                field: 'o',
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn rejects_zero_duration() {
        let err = parse_melody(":0c", &defaults()).unwrap_err();
        assert!(matches!(err, NotationError::InvalidDuration { .. }));
    }

    #[test]
    fn rejects_invalid_pitch() {
        let err = parse_melody(":c,h,d", &defaults()).unwrap_err();
        assert_eq!(
            err,
            NotationError::InvalidPitch {
                token: "h".to_string(),
                found: 'h',
                position: 0,
            }
        );
    }

    #[test]
    fn rejects_residue_that_is_not_a_note() {
        // The '!' cannot start a note, so the token must not half-parse.
        let err = parse_melody(":8c!", &defaults()).unwrap_err();
        assert!(matches!(err, NotationError::InvalidPitch { .. }));
    }

    #[test]
    fn rejects_missing_note_section() {
        let err = parse_melody("c,d,e", &defaults()).unwrap_err();
        assert_eq!(err, NotationError::MissingNoteSection);
    }

    #[test]
    fn rejects_empty_melody() {
        let err = parse_melody(": :   ,  ,", &defaults()).unwrap_err();
        assert_eq!(err, NotationError::EmptyMelody);
    }
}
