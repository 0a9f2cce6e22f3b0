//! Parsing of the scorer's console output.

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Literal prefix the first output line must carry. Anything else means the
/// output is not the per-sentence listing we asked for.
pub const SENT_PREFIX: &str = "sent 1 score is ";

static FLOAT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\d+").unwrap());

/// Result of scoring a batch of prediction-reference pairs.
#[derive(Debug, Clone, Serialize)]
pub struct BeerScoreResult {
    /// Aggregate score for the whole batch.
    pub beer: f64,
    /// Per-sentence scores, aligned by position with the input predictions.
    pub beer_scores: Vec<f64>,
}

/// Parses the scorer's stdout into per-sentence scores and the aggregate.
///
/// The output is expected to hold one line per scored sentence followed by a
/// single summary line. Each sentence line yields the first float it
/// contains; the summary line is scanned the same way rather than sliced at a
/// fixed character offset, so both `total BEER 0.6` and longer phrasings
/// parse identically.
///
/// # Arguments
/// * `output` - Raw UTF-8 stdout of the scorer
/// * `expected` - Number of predictions submitted, i.e. the number of
///   sentence lines the output must contain
pub fn parse_output(output: &str, expected: usize) -> Result<BeerScoreResult> {
    if !output.starts_with(SENT_PREFIX) {
        bail!("unexpected scorer output (missing {SENT_PREFIX:?} prefix): {output:?}");
    }

    let lines: Vec<&str> = output.trim().lines().collect();
    if lines.len() != expected + 1 {
        bail!(
            "expected {} output lines ({} sentence scores plus a summary), got {}",
            expected + 1,
            expected,
            lines.len()
        );
    }

    let Some((summary, sentence_lines)) = lines.split_last() else {
        bail!("scorer produced no output");
    };

    let beer_scores = sentence_lines
        .iter()
        .map(|line| first_float(line))
        .collect::<Result<Vec<f64>>>()?;
    let beer = first_float(summary)?;

    Ok(BeerScoreResult { beer, beer_scores })
}

/// Extracts the first floating-point-looking substring from a line.
fn first_float(line: &str) -> Result<f64> {
    let matched = FLOAT_PATTERN
        .find(line)
        .with_context(|| format!("no score found in output line {line:?}"))?;
    matched
        .as_str()
        .parse()
        .with_context(|| format!("failed to parse score in output line {line:?}"))
}
