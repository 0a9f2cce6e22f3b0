use anyhow::Result;

use crate::cli::PrepareArgs;
use crate::core::{BeerScorer, MetricInfo};

/// Command to run setup only: verify the Java runtime, then download and
/// extract the scorer archive.
pub fn cmd_prepare(args: PrepareArgs) -> Result<()> {
    let scorer = BeerScorer::new(args.scorer.into_config())?;
    println!("Scorer ready at {}", scorer.beer_path().display());
    Ok(())
}

/// Command to print the metric metadata.
pub fn cmd_info() {
    let info = MetricInfo::new();
    println!("{}", info.description);
    println!();
    println!("Inputs: {}", info.inputs_description);
    println!();
    println!("Citation:\n{}", info.citation);
    for url in info.codebase_urls {
        println!("Codebase: {url}");
    }
}
