use std::fmt;
use std::ops::{Add, Sub};
use super::interval::Interval;

const NAMES: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// A pitch value. Letters follow MIDI-style numbering in the
/// second octave (C = 24 ... B = 35), but only differences
/// mod 12 are ever meaningful.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Note {
    pub semitones: isize,
}

impl Note {
    /// Look up the natural note for a root letter.
    /// Only upper-case letters are recognized.
    pub fn from_letter(letter: char) -> Option<Note> {
        let semitones = match letter {
            'C' => 24,
            'D' => 26,
            'E' => 28,
            'F' => 29,
            'G' => 31,
            'A' => 33,
            'B' => 35,
            _ => return None,
        };
        Some(Note { semitones })
    }

    /// Apply a single accidental, `#` raising and `b` lowering
    /// by one semitone. Any other character leaves the note as is.
    pub fn alter(self, accidental: char) -> Note {
        match accidental {
            '#' => self + Interval { semitones: 1 },
            'b' => self - Interval { semitones: 1 },
            _ => self,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let idx = self.semitones.rem_euclid(12) as usize;
        write!(f, "{}", NAMES[idx])
    }
}

/// Add an interval to this note.
impl Add<Interval> for Note {
    type Output = Self;

    fn add(self, intv: Interval) -> Self {
        Self {
            semitones: self.semitones + intv.semitones
        }
    }
}

/// Subtract an interval from this note.
impl Sub<Interval> for Note {
    type Output = Self;

    fn sub(self, intv: Interval) -> Self {
        Self {
            semitones: self.semitones - intv.semitones
        }
    }
}

/// The distance between two notes.
impl Sub<Note> for Note {
    type Output = Interval;

    fn sub(self, other: Note) -> Interval {
        Interval {
            semitones: self.semitones - other.semitones
        }
    }
}
