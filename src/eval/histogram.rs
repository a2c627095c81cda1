use crate::core::{Degree, Mode};
use crate::inference::Inference;
use crate::tune::Tune;

/// How many tunes use each degree, split by chord quality.
/// A degree is counted once per tune however often it appears.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Histogram {
    counts: [[usize; 2]; 12],

    // Tunes using each degree in either quality
    merged: [usize; 12],
}

fn quality_index(mode: Mode) -> usize {
    match mode {
        Mode::Major => 0,
        Mode::Minor => 1,
    }
}

impl Histogram {
    pub fn get(&self, degree: &Degree) -> usize {
        self.counts[degree.index][quality_index(degree.mode)]
    }

    /// Tunes using this degree as either a major or minor chord.
    /// A tune with both counts once.
    pub fn merged(&self, index: usize) -> usize {
        self.merged[index % 12]
    }

    /// All 24 degrees with their counts, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Degree, usize)> + '_ {
        Degree::all().map(move |d| (d, self.get(&d)))
    }

    fn record(&mut self, degrees: &[Degree]) {
        for degree in Degree::all() {
            if degrees.contains(&degree) {
                self.counts[degree.index][quality_index(degree.mode)] += 1;
            }
        }
        for index in 0..12 {
            if degrees.iter().any(|d| d.index == index) {
                self.merged[index] += 1;
            }
        }
    }
}

/// Count, over the corpus, the tunes each degree appears in,
/// with every tune measured from its inferred root.
pub fn histogram(tunes: &[Tune], inference: &Inference) -> Histogram {
    let mut hist = Histogram::default();
    for tune in tunes {
        hist.record(&inference.interpret(tune));
    }
    log::debug!("Built degree histogram over {} tunes", tunes.len());
    hist
}
