use anyhow::Result;
use std::fs;

use crate::cli::ScoreArgs;
use crate::core::BeerScorer;

/// Command to score candidate texts against reference texts with the
/// external scorer.
///
/// Reads both files line-per-sentence, runs setup if this machine has not
/// scored before (java check plus archive download), and prints one score
/// per pair followed by the aggregate.
pub fn cmd_score(args: ScoreArgs) -> Result<()> {
    let candidates = read_lines(&args.candidates)?;
    let references = read_lines(&args.references)?;

    if candidates.len() != references.len() {
        return Err(anyhow::anyhow!(
            "Number of candidates ({}) must equal number of references ({})",
            candidates.len(),
            references.len()
        ));
    }

    let scorer = BeerScorer::new(args.scorer.into_config())?;
    let result = scorer.score(&candidates, &references)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for (i, score) in result.beer_scores.iter().enumerate() {
        println!("Pair {}: BEER={:.4}", i + 1, score);
    }
    println!("Total: BEER={:.4}", result.beer);

    Ok(())
}

#[inline(always)]
fn read_lines(filename: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(filename)?;
    Ok(content.lines().map(String::from).collect())
}
