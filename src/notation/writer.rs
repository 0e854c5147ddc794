//! Re-serialization of a parsed melody back into notation text. The output
//! is canonical rather than byte-faithful: the header always spells out both
//! fields and every note carries its duration, so re-parsing the result with
//! *any* defaults reproduces the same resolved note sequence.

use std::fmt::Write;

use crate::models::Melody;

/// Render a melody in canonical notation form, e.g. `o=5,d=4:8e,8f#_6,2p.`.
///
/// Octave overrides are only written where a note departs from the header
/// default, keeping the output close to what a human would write while still
/// being unambiguous.
pub fn render_melody(melody: &Melody) -> String {
    let mut text = format!(
        "o={},d={}:",
        melody.default_octave, melody.default_duration
    );

    for (index, note) in melody.notes.iter().enumerate() {
        if index > 0 {
            text.push(',');
        }
        let _ = write!(text, "{}{}", note.duration, note.pitch.letter());
        if note.sharp {
            text.push('#');
        }
        if note.octave != melody.default_octave {
            let _ = write!(text, "_{}", note.octave);
        }
        if note.dotted {
            text.push('.');
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotationDefaults, Note, Pitch};
    use crate::notation::parse_melody;

    fn defaults() -> NotationDefaults {
        NotationDefaults::new(5, 4)
    }

    #[test]
    fn renders_canonical_text() {
        let melody = Melody {
            default_octave: 5,
            default_duration: 4,
            notes: vec![
                Note {
                    pitch: Pitch::E,
                    sharp: false,
                    octave: 5,
                    duration: 8,
                    dotted: false,
                },
                Note {
                    pitch: Pitch::F,
                    sharp: true,
                    octave: 6,
                    duration: 8,
                    dotted: false,
                },
                Note {
                    pitch: Pitch::Rest,
                    sharp: false,
                    octave: 5,
                    duration: 2,
                    dotted: true,
                },
            ],
        };
        assert_eq!(render_melody(&melody), "o=5,d=4:8e,8f#_6,2p.");
    }

    #[test]
    fn round_trip_preserves_resolved_notes() {
        let sources = [
            ": :e,8f,8g8a,8b,8c1,8d1,8e1",
            ":d=4 :c,d,e,f",
            ":o=6,d=2 :16a,16b,8a,4b",
            ":d=16 :8a,8p,a,8p,c1, e1,d#1,e1,f1,e1,b,d_1,c1",
        ];
        for source in sources {
            let parsed = parse_melody(source, &defaults()).expect("source should parse");
            let rendered = render_melody(&parsed);
            let reparsed = parse_melody(&rendered, &defaults())
                .unwrap_or_else(|err| panic!("rendered `{rendered}` should re-parse: {err}"));
            assert_eq!(parsed.notes, reparsed.notes, "notes diverged for `{source}`");
        }
    }

    #[test]
    fn round_trip_ignores_reader_defaults() {
        // The canonical header is fully explicit, so a reader with different
        // assumptions still resolves the same notes.
        let parsed = parse_melody(":o=6,d=8 :c, 1p", &defaults()).expect("should parse");
        let rendered = render_melody(&parsed);
        let reparsed =
            parse_melody(&rendered, &NotationDefaults::new(3, 32)).expect("should re-parse");
        assert_eq!(parsed.notes, reparsed.notes);
    }

    #[test]
    fn round_trip_preserves_timing() {
        let parsed = parse_melody(":d=16 :8e,8p,c,2p.", &defaults()).expect("should parse");
        let reparsed =
            parse_melody(&render_melody(&parsed), &defaults()).expect("should re-parse");
        assert_eq!(
            parsed.total_whole_notes(),
            reparsed.total_whole_notes()
        );
    }
}
