use itertools::Itertools;
use thiserror::Error;
use std::{fmt, str::FromStr};
use crate::core::{Chord, ChordParseError, Degree, Root};

#[derive(Error, Debug, PartialEq)]
pub enum TuneParseError {
    #[error("Tune has no chords")]
    EmptyProgression,

    #[error("Couldn't parse chord")]
    InvalidChord(#[from] ChordParseError),
}

/// One chord progression, as a single line of
/// whitespace-separated chord symbols.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tune {
    pub raw: String,

    // The first chord as written. This is only
    // the nominal key; the tonal center used for
    // analysis may differ.
    pub key: String,

    // Never empty
    pub chords: Vec<Chord>,
}

impl Tune {
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// The first chord, used as the naive tonal center.
    pub fn first(&self) -> &Chord {
        &self.chords[0]
    }

    /// Label every chord relative to the root, in order.
    pub fn reinterpret(&self, root: &Root) -> Vec<Degree> {
        self.chords.iter()
            .map(|chord| root.degree_of(chord))
            .collect()
    }

    /// Shift every chord by a number of semitones.
    pub fn transpose(&self, semitones: isize) -> Tune {
        Tune {
            raw: self.raw.clone(),
            key: self.key.clone(),
            chords: self.chords.iter()
                .map(|c| c.transpose(semitones))
                .collect(),
        }
    }
}

/// Parse a tune from a line, e.g. "C F G C".
impl FromStr for Tune {
    type Err = TuneParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chords = s.split_whitespace()
            .map(Chord::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        let key = chords.first()
            .map(|c| c.raw.clone())
            .ok_or(TuneParseError::EmptyProgression)?;
        Ok(Tune {
            raw: s.to_string(),
            key,
            chords,
        })
    }
}

impl TryFrom<&str> for Tune {
    type Error = TuneParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl fmt::Display for Tune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chords.iter().map(|c| &c.raw).join(" "))
    }
}

/// Render a degree sequence as space-separated labels.
pub fn describe(degrees: &[Degree]) -> String {
    degrees.iter().join(" ")
}
