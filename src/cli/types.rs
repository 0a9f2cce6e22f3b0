//! Command-line interface for rust-beer-score.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::BeerScorerConfig;

#[derive(Parser)]
#[command(name = "beer-score", about = "Score translations with the BEER metric")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// File containing candidate sentences, one per line
    #[arg(short, long)]
    pub candidates: String,

    /// File containing reference sentences, one per line
    #[arg(short, long)]
    pub references: String,

    #[clap(flatten)]
    pub scorer: ScorerSpec,

    /// Print the result as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Where and how to run the external scorer.
#[derive(Debug, Args)]
pub struct ScorerSpec {
    /// Java binary used to run the scorer
    #[arg(long, default_value = "java")]
    pub java: String,

    /// Directory the scorer archive is downloaded and extracted into
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

impl ScorerSpec {
    pub fn into_config(self) -> BeerScorerConfig {
        let mut config = BeerScorerConfig {
            java_bin: self.java,
            ..Default::default()
        };
        if let Some(dir) = self.cache_dir {
            config.cache_dir = dir;
        }
        config
    }
}

#[derive(Args)]
pub struct PrepareArgs {
    #[clap(flatten)]
    pub scorer: ScorerSpec,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score candidates against references
    Score(ScoreArgs),

    /// Verify the Java runtime and download the scorer
    Prepare(PrepareArgs),

    /// Print metric metadata
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorer_spec_into_config() {
        let spec = ScorerSpec {
            java: "/opt/jdk/bin/java".into(),
            cache_dir: Some(PathBuf::from("/tmp/beer")),
        };

        let config = spec.into_config();

        assert_eq!(config.java_bin, "/opt/jdk/bin/java");
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/beer"));
    }

    #[test]
    fn test_scorer_spec_default_cache_dir_kept() {
        let spec = ScorerSpec {
            java: "java".into(),
            cache_dir: None,
        };

        let config = spec.into_config();

        assert_eq!(config.cache_dir, BeerScorerConfig::default().cache_dir);
    }
}
