use serde::Deserialize;
use crate::core::{Degree, Interval, Mode, Root, Vocabulary};
use crate::tune::Tune;

/// Semitones from a minor key chord up to its relative major.
const RELATIVE_MAJOR: isize = 3;

/// Semitones from a mixolydian key chord up to the
/// major key it is the dominant of.
const MIXOLYDIAN_TONIC: isize = 5;

fn yes() -> bool {
    true
}

/// Heuristic choice of tonal center.
///
/// By default a tune is measured from its first chord,
/// with two corrections:
///
/// - a minor first chord is treated as vi of its relative major,
/// - a tune that uses bVII relative to its first chord is treated
///   as mixolydian, i.e. the first chord is V of the real key.
///
/// The minor check takes priority.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
pub struct Inference {
    #[serde(default = "yes")]
    pub relative_minor: bool,

    #[serde(default = "yes")]
    pub mixolydian: bool,
}

impl Default for Inference {
    fn default() -> Self {
        Inference {
            relative_minor: true,
            mixolydian: true,
        }
    }
}

impl Inference {
    pub fn infer_root(&self, tune: &Tune) -> Root {
        let naive = tune.first();
        if self.relative_minor && naive.is_minor() {
            log::trace!("`{}`: minor key chord, measuring from relative major", tune);
            return Root::Inferred(naive.root + Interval::from(RELATIVE_MAJOR));
        }

        let root = Root::from(naive);
        if self.mixolydian {
            let flat_seven = Degree::new(10, Mode::Major);
            if tune.reinterpret(&root).contains(&flat_seven) {
                log::trace!("`{}`: has bVII, measuring as mixolydian", tune);
                return Root::Inferred(naive.root + Interval::from(MIXOLYDIAN_TONIC));
            }
        }
        root
    }

    /// Infer the root and label the tune against it.
    pub fn interpret(&self, tune: &Tune) -> Vec<Degree> {
        tune.reinterpret(&self.infer_root(tune))
    }
}

/// The best-fitting reading of a tune against a vocabulary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Interpretation {
    pub score: usize,
    pub root: Root,
    pub degrees: Vec<Degree>,
}

/// Try every major root from the tune's first chord upwards
/// and keep the one that puts the most chords in the vocabulary.
///
/// Ties go to the lowest offset, so the written key
/// wins whenever it does as well as anything else.
pub fn best_interpretation(tune: &Tune, vocab: &Vocabulary, thirds: bool) -> Interpretation {
    let first = tune.first().root;
    let interpret = |offset: isize| {
        let root = Root::Inferred(first + Interval::from(offset));
        let degrees = tune.reinterpret(&root);
        let score = vocab.count(&degrees, thirds);
        Interpretation { score, root, degrees }
    };

    let mut best = interpret(0);
    for offset in 1..12 {
        let candidate = interpret(offset);
        if candidate.score > best.score {
            best = candidate;
        }
    }
    log::trace!("`{}`: best root {} covers {}/{}", tune, best.root, best.score, tune.len());
    best
}
