use itertools::Itertools;
use crate::core::{Vocabulary, NUMERALS};
use crate::eval::{Histogram, PlayabilityReport, Shortfall};
use crate::tune::describe;

fn bar_line(count: usize, label: &str) -> String {
    format!("{:4}  {:>4}: {}", count, label, "*".repeat(count))
}

/// Render a histogram as star bars. With thirds, major and
/// minor chords get their own lines; without, they're merged.
pub fn histogram(hist: &Histogram, thirds: bool) -> String {
    if thirds {
        hist.iter()
            .map(|(degree, count)| bar_line(count, &degree.to_string()))
            .join("\n")
    } else {
        NUMERALS.iter().enumerate()
            .map(|(i, numeral)| bar_line(hist.merged(i), numeral))
            .join("\n")
    }
}

/// Render the playability of each vocabulary as a table.
pub fn comparison(rows: &[(&Vocabulary, PlayabilityReport)]) -> String {
    let width = rows.iter()
        .map(|(vocab, _)| vocab.raw.len())
        .chain(std::iter::once("Vocabulary".len()))
        .max()
        .unwrap_or_default();
    let header = format!("{:<width$}  {:>9}  {:>7}", "Vocabulary", "Playable", "Ratio", width = width);
    let lines = rows.iter().map(|(vocab, report)| {
        format!("{:<width$}  {:>9}  {:>6.1}%",
            vocab.raw,
            format!("{}/{}", report.playable, report.total),
            report.ratio() * 100.,
            width = width)
    });
    std::iter::once(header).chain(lines).join("\n")
}

/// Render tunes that couldn't be fully covered,
/// with their best partial reading.
pub fn shortfalls(shortfalls: &[Shortfall]) -> String {
    shortfalls.iter()
        .map(|s| format!("{}/{}  {}  ->  {}", s.score, s.len, s.tune, describe(&s.degrees)))
        .join("\n")
}
