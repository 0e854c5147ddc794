//! Domain models shared by the notation layer and the data tables. The intent
//! is that these types stay light-weight data holders so other layers can
//! focus on parsing and presentation logic. Keeping the commentary here means
//! later refactors can reconstruct the assumptions even if other context is
//! lost.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// One of the eight pitch letters of the melody notation. `Rest` is the
/// letter `p` and produces silence rather than a tone; everything else names
/// a natural pitch that a sharp marker on the owning [`Note`] may raise.
pub enum Pitch {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    Rest,
}

impl Pitch {
    /// Map a notation character to its pitch. Returns `None` for anything
    /// outside `a..g` and `p`, leaving error reporting (with position
    /// information) to the parser.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'a' => Some(Pitch::A),
            'b' => Some(Pitch::B),
            'c' => Some(Pitch::C),
            'd' => Some(Pitch::D),
            'e' => Some(Pitch::E),
            'f' => Some(Pitch::F),
            'g' => Some(Pitch::G),
            'p' => Some(Pitch::Rest),
            _ => None,
        }
    }

    /// The lowercase notation letter for this pitch, used when a melody is
    /// re-serialized to text.
    pub fn letter(self) -> char {
        match self {
            Pitch::A => 'a',
            Pitch::B => 'b',
            Pitch::C => 'c',
            Pitch::D => 'd',
            Pitch::E => 'e',
            Pitch::F => 'f',
            Pitch::G => 'g',
            Pitch::Rest => 'p',
        }
    }

    /// Whether this token produces silence instead of a tone.
    pub fn is_rest(self) -> bool {
        matches!(self, Pitch::Rest)
    }
}

impl fmt::Display for Pitch {
    /// Write the notation letter so parsed notes render compactly in logs and
    /// in the inspection binary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A single resolved note event. "Resolved" means the melody header and the
/// caller-supplied defaults have already been applied: `octave` and
/// `duration` always hold concrete values, so consumers can schedule playback
/// without re-reading the header.
pub struct Note {
    /// The pitch letter, or a rest.
    pub pitch: Pitch,
    /// Sharp marker (`#`). The firmware data also allows it on rests, where
    /// it has no audible effect; we carry it through rather than reject it.
    pub sharp: bool,
    /// Absolute octave register for this note, same domain as the `o=`
    /// header field.
    pub octave: u8,
    /// Inverse-power note length: 4 is a quarter note, 8 an eighth, and so
    /// on. Always non-zero once it leaves the parser.
    pub duration: u8,
    /// Dotted-note marker (`.`), lengthening the note by half of itself.
    pub dotted: bool,
}

impl Note {
    /// Relative length of this note in whole-note units. A plain quarter
    /// note is `0.25`; dotting multiplies by 1.5. This is the quantity the
    /// round-trip guarantee of the notation layer preserves.
    pub fn whole_notes(&self) -> f32 {
        let base = 1.0 / f32::from(self.duration);
        if self.dotted {
            base * 1.5
        } else {
            base
        }
    }
}

impl fmt::Display for Note {
    /// Render the note in notation form with every field explicit, e.g.
    /// `8c#_6.` for a dotted sharp eighth in octave 6. Used by the
    /// inspection binary; the canonical writer lives in the notation module.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.duration, self.pitch)?;
        if self.sharp {
            write!(f, "#")?;
        }
        write!(f, "_{}", self.octave)?;
        if self.dotted {
            write!(f, ".")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// The octave and duration assumed when a melody header omits `o=` or `d=`.
///
/// The firmware data never states these values; they belong to the consumer.
/// That is why this type deliberately has no `Default` impl: whoever parses
/// a melody must say what their tokenizer assumes instead of inheriting a
/// guess baked into this crate.
pub struct NotationDefaults {
    /// Octave register used when neither the header nor the note overrides
    /// it.
    pub octave: u8,
    /// Inverse-power duration used when neither the header nor the note
    /// overrides it.
    pub duration: u8,
}

impl NotationDefaults {
    /// Bundle the two tokenizer assumptions into one explicit value.
    pub fn new(octave: u8, duration: u8) -> Self {
        Self { octave, duration }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A fully parsed melody: the header values that were in force plus the
/// resolved note sequence. The parser builds it once and nothing mutates it
/// afterwards, mirroring the program-memory constants it models.
pub struct Melody {
    /// Default octave after applying the header over the caller defaults.
    pub default_octave: u8,
    /// Default duration after applying the header over the caller defaults.
    pub default_duration: u8,
    /// The resolved note events in playback order.
    pub notes: Vec<Note>,
}

impl Melody {
    /// Number of note events, rests included.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// A parsed melody is never empty (the parser rejects that), but the
    /// conventional pairing with `len` is provided anyway.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Total relative length of the melody in whole-note units, the sum of
    /// every note's share. Useful for consumers sizing playback schedules
    /// and for the semantic round-trip checks in the tests.
    pub fn total_whole_notes(&self) -> f32 {
        self.notes.iter().map(Note::whole_notes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_letters_round_trip() {
        for letter in ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'p'] {
            let pitch = Pitch::from_letter(letter).expect("letter should map");
            assert_eq!(pitch.letter(), letter);
        }
        assert_eq!(Pitch::from_letter('h'), None);
        assert_eq!(Pitch::from_letter('#'), None);
    }

    #[test]
    fn rest_classification() {
        assert!(Pitch::Rest.is_rest());
        assert!(!Pitch::C.is_rest());
    }

    #[test]
    fn whole_note_math() {
        let quarter = Note {
            pitch: Pitch::C,
            sharp: false,
            octave: 5,
            duration: 4,
            dotted: false,
        };
        assert_eq!(quarter.whole_notes(), 0.25);

        let dotted_eighth = Note {
            dotted: true,
            duration: 8,
            ..quarter
        };
        assert_eq!(dotted_eighth.whole_notes(), 0.1875);
    }

    #[test]
    fn melody_totals() {
        let note = Note {
            pitch: Pitch::A,
            sharp: false,
            octave: 5,
            duration: 4,
            dotted: false,
        };
        let melody = Melody {
            default_octave: 5,
            default_duration: 4,
            notes: vec![note; 4],
        };
        assert_eq!(melody.len(), 4);
        assert!(!melody.is_empty());
        assert_eq!(melody.total_whole_notes(), 1.0);
    }

    #[test]
    fn note_display_is_fully_explicit() {
        let note = Note {
            pitch: Pitch::C,
            sharp: true,
            octave: 6,
            duration: 8,
            dotted: true,
        };
        assert_eq!(note.to_string(), "8c#_6.");
    }

    #[test]
    fn models_serialize() {
        let note = Note {
            pitch: Pitch::D,
            sharp: true,
            octave: 6,
            duration: 16,
            dotted: false,
        };
        let json = serde_json::to_string(&note).expect("note should serialize");
        let back: Note = serde_json::from_str(&json).expect("note should deserialize");
        assert_eq!(note, back);
    }
}
