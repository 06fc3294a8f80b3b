//! Plain-text rendering of a decoded assessment.

use std::fmt;

use crate::types::DecodedResult;

/// Default bar width in characters.
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// Text report: headline, description, a progress bar for the rank, and one
/// bar per class probability.
#[derive(Debug, Clone)]
pub struct TextReport<'a> {
    result: &'a DecodedResult,
    bar_width: usize,
}

impl<'a> TextReport<'a> {
    pub fn new(result: &'a DecodedResult) -> Self {
        Self {
            result,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }
}

/// `fraction` of `width` cells filled with `#`, the rest with `.`.
fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        let total = r.probabilities.len();
        writeln!(f, "Credit score: {} [{}]", r.label, r.color)?;
        writeln!(f, "{}", r.description)?;
        writeln!(
            f,
            "Rank {}/{} [{}] {:.0}%",
            r.rank,
            total,
            bar(r.progress, self.bar_width),
            r.progress * 100.0
        )?;
        writeln!(f)?;
        writeln!(f, "Class probabilities:")?;

        let name_width = r
            .probabilities
            .iter()
            .map(|p| p.class.chars().count())
            .max()
            .unwrap_or(0);
        for p in &r.probabilities {
            let marker = if p.class == r.label { '*' } else { ' ' };
            writeln!(
                f,
                "{marker} {:<name_width$} [{}] {:>6.2}%",
                p.class,
                bar(p.probability, self.bar_width),
                p.probability * 100.0
            )?;
        }
        Ok(())
    }
}
