use regex::Regex;
use thiserror::Error;
use std::{fmt, str::FromStr};
use super::note::Note;
use super::interval::Interval;
use super::key::Mode;
use lazy_static::lazy_static;

lazy_static! {
    // Root letter, accidentals, then whatever is left over
    // (which must be empty or a minor marker).
    static ref CHORD_RE: Regex = Regex::new(r"(?s)^(.?)([#b]*)(.*)$").unwrap();
}

#[derive(Error, Debug, PartialEq)]
pub enum ChordParseError {
    #[error("Unknown root letter in chord `{0}`")]
    UnknownRootLetter(String),

    #[error("Can't parse chord `{chord}`; left with `{suffix}`")]
    UnrecognizedChordSuffix {
        chord: String,
        suffix: String,
    },
}

/// A chord symbol as written in a tune, e.g. "Bbm".
/// Only major and minor triads are supported.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Chord {
    pub raw: String,
    pub root: Note,
    pub mode: Mode,
}

impl Chord {
    pub fn is_minor(&self) -> bool {
        self.mode == Mode::Minor
    }

    /// Shift the chord by a number of semitones.
    /// The raw text is kept as written.
    pub fn transpose(&self, semitones: isize) -> Chord {
        Chord {
            raw: self.raw.clone(),
            root: self.root + Interval { semitones },
            mode: self.mode,
        }
    }
}

/// Try to parse a chord from a string, e.g. "C#m".
impl FromStr for Chord {
    type Err = ChordParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown_root = || ChordParseError::UnknownRootLetter(s.to_string());
        let caps = CHORD_RE.captures(s).ok_or_else(unknown_root)?;
        let letter = caps.get(1)
            .and_then(|m| m.as_str().chars().next())
            .ok_or_else(unknown_root)?;
        let accidentals = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let suffix = caps.get(3).map(|m| m.as_str()).unwrap_or_default();

        let root = Note::from_letter(letter).ok_or_else(unknown_root)?;

        // Accidentals apply in the order they're written
        let root = accidentals.chars().fold(root, Note::alter);

        let mode = match suffix {
            "" => Mode::Major,
            "m" => Mode::Minor,
            _ => return Err(ChordParseError::UnrecognizedChordSuffix {
                chord: s.to_string(),
                suffix: suffix.to_string(),
            })
        };

        Ok(Chord {
            raw: s.to_string(),
            root,
            mode,
        })
    }
}

impl TryFrom<&str> for Chord {
    type Error = ChordParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl TryFrom<String> for Chord {
    type Error = ChordParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
