use std::fmt;
use super::note::Note;
use super::chord::Chord;
use super::degree::Degree;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mode {
    Major,
    Minor
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor"
        };
        write!(f, "{}", name)
    }
}

/// The tonal center a tune is measured against.
/// Either one of the tune's own chords, or a synthetic
/// major root placed by key inference.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Root {
    Written(Chord),
    Inferred(Note),
}

impl Root {
    pub fn note(&self) -> Note {
        match self {
            Root::Written(chord) => chord.root,
            Root::Inferred(note) => *note,
        }
    }

    /// Label a chord by its distance from this root.
    pub fn degree_of(&self, chord: &Chord) -> Degree {
        (chord.root - self.note()).to_degree(chord.mode)
    }
}

impl From<&Chord> for Root {
    fn from(chord: &Chord) -> Self {
        Root::Written(chord.clone())
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Written(chord) => write!(f, "{}", chord),
            Root::Inferred(note) => write!(f, "{} (inferred)", note),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_degree_of() {
        let c: Chord = "C".try_into().unwrap();
        let root = Root::from(&c);
        let chord: Chord = "G".try_into().unwrap();
        assert_eq!(root.degree_of(&chord).to_string(), "V");

        let chord: Chord = "Am".try_into().unwrap();
        assert_eq!(root.degree_of(&chord).to_string(), "vi");

        let chord: Chord = "Bb".try_into().unwrap();
        assert_eq!(root.degree_of(&chord).to_string(), "bVII");

        // Below the root still wraps into the octave
        let chord: Chord = "Cb".try_into().unwrap();
        assert_eq!(root.degree_of(&chord).to_string(), "VII");
    }

    #[test]
    fn test_inferred_root() {
        let root = Root::Inferred(Note { semitones: 36 });
        assert_eq!(root.note().to_string(), "C");
        let chord: Chord = "F".try_into().unwrap();
        assert_eq!(root.degree_of(&chord).to_string(), "IV");
        assert_eq!(root.to_string(), "C (inferred)");
    }

    #[test]
    fn test_root_matches_only_on_same_pitch_class() {
        let root = Root::Inferred(Note { semitones: 24 });
        for semitones in 0..48 {
            let chord = Chord {
                raw: "_".to_string(),
                root: Note { semitones },
                mode: Mode::Major,
            };
            let is_tonic = root.degree_of(&chord).index == 0;
            assert_eq!(is_tonic, semitones % 12 == 0);
        }
    }
}
