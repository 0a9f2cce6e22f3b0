//! High-level pipeline assembling runtime validation, scorer setup, and
//! subprocess invocation.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::core::{
    error::MetricError,
    fetch::{self, BEER_URL},
    info::MetricInfo,
    runtime,
    score::{parse_output, BeerScoreResult},
};
use crate::Result;

/// Configuration for BeerScorer.
#[derive(Debug, Clone)]
pub struct BeerScorerConfig {
    /// Java binary used to run the scorer (must be on PATH or absolute)
    pub java_bin: String,
    /// Directory the scorer archive is downloaded and extracted into
    pub cache_dir: PathBuf,
    /// Archive URL fetched during setup
    pub archive_url: String,
}

impl Default for BeerScorerConfig {
    fn default() -> Self {
        Self {
            java_bin: "java".into(),
            cache_dir: fetch::default_cache_dir(),
            archive_url: BEER_URL.into(),
        }
    }
}

/// BeerScorer drives the external scorer: it stages inputs on disk, invokes
/// the executable, and parses its console output.
///
/// Setup (runtime check plus download/extract) happens once in [`new`];
/// afterwards the only state is the resolved executable path. Every scoring
/// call is synchronous and blocks until the subprocess exits.
///
/// [`new`]: BeerScorer::new
pub struct BeerScorer {
    config: BeerScorerConfig,
    beer_path: PathBuf,
}

impl BeerScorer {
    /// Get the configuration.
    pub fn config(&self) -> &BeerScorerConfig {
        &self.config
    }

    /// Path to the extracted scorer executable.
    pub fn beer_path(&self) -> &Path {
        &self.beer_path
    }

    /// Metric metadata (description, citation, input contract).
    pub fn info() -> MetricInfo {
        MetricInfo::new()
    }

    /// Creates a new BeerScorer, performing one-time setup.
    ///
    /// Verifies the Java runtime first, then downloads and extracts the
    /// scorer archive into the configured cache directory (skipped when a
    /// previous run already extracted it).
    pub fn new(config: BeerScorerConfig) -> Result<Self> {
        runtime::verify_java(&config.java_bin)?;

        let beer_path = fetch::download_and_extract(&config.archive_url, &config.cache_dir)
            .map_err(MetricError::setup)?;

        Ok(Self { config, beer_path })
    }

    /// Creates a BeerScorer around an already-extracted executable, skipping
    /// the runtime check and download.
    pub fn with_executable(config: BeerScorerConfig, beer_path: PathBuf) -> Self {
        Self { config, beer_path }
    }

    /// Scores a batch of prediction-reference pairs.
    ///
    /// # Arguments
    /// * `predictions` - Hypothesis translations, one string per segment
    /// * `references` - Reference translations, same length as predictions
    ///
    /// # Returns
    /// The aggregate score plus one per-sentence score per prediction,
    /// aligned by position. Fails atomically: any staging, subprocess, or
    /// parse failure yields an error and no scores.
    pub fn score<S: AsRef<str>>(&self, predictions: &[S], references: &[S]) -> Result<BeerScoreResult> {
        if predictions.len() != references.len() {
            return Err(MetricError::UnsupportedInput(format!(
                "number of predictions ({}) must equal number of references ({})",
                predictions.len(),
                references.len()
            )));
        }

        self.run_scorer(predictions, references)
            .map_err(MetricError::scoring)
    }

    /// Rejects multi-reference input.
    ///
    /// The external scorer takes exactly one reference per segment, so this
    /// fails with [`MetricError::UnsupportedInput`] before anything is staged
    /// or spawned. It exists so callers holding one-reference-list-per-item
    /// data get the contract violation spelled out instead of a type puzzle.
    pub fn score_multi_refs<S: AsRef<str>>(
        &self,
        _predictions: &[S],
        _references: &[Vec<S>],
    ) -> Result<BeerScoreResult> {
        Err(MetricError::UnsupportedInput(
            "beer metric does not support multiple references".into(),
        ))
    }

    fn run_scorer<S: AsRef<str>>(
        &self,
        predictions: &[S],
        references: &[S],
    ) -> anyhow::Result<BeerScoreResult> {
        let pred_file = stage_lines(predictions).context("failed to stage predictions")?;
        let ref_file = stage_lines(references).context("failed to stage references")?;

        tracing::debug!(
            scorer = %self.beer_path.display(),
            sentences = predictions.len(),
            "invoking scorer"
        );

        let output = Command::new(&self.beer_path)
            .arg("-r")
            .arg(ref_file.path())
            .arg("-s")
            .arg(pred_file.path())
            .arg("--printSentScores")
            .output()
            .with_context(|| format!("failed to run {}", self.beer_path.display()))?;

        if !output.status.success() {
            anyhow::bail!(
                "scorer exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout =
            std::str::from_utf8(&output.stdout).context("scorer produced non-utf8 output")?;
        parse_output(stdout, predictions.len())
    }
}

/// Writes newline-joined records to a temp file kept alive by the returned
/// handle; the file is removed when the handle drops.
fn stage_lines<S: AsRef<str>>(lines: &[S]) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    file.write_all(joined.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Builder for creating BeerScorer with custom configuration.
pub struct BeerScorerBuilder {
    pub config: BeerScorerConfig,
}

impl BeerScorerBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: BeerScorerConfig::default(),
        }
    }

    /// Sets the java binary.
    pub fn java_bin(mut self, java_bin: &str) -> Self {
        self.config.java_bin = java_bin.to_string();
        self
    }

    /// Sets the cache directory for download and extraction.
    pub fn cache_dir(mut self, dir: PathBuf) -> Self {
        self.config.cache_dir = dir;
        self
    }

    /// Overrides the archive URL.
    pub fn archive_url(mut self, url: &str) -> Self {
        self.config.archive_url = url.to_string();
        self
    }

    /// Builds the BeerScorer, running setup.
    pub fn build(self) -> Result<BeerScorer> {
        BeerScorer::new(self.config)
    }
}

impl Default for BeerScorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn offline_scorer() -> BeerScorer {
        // The path is never spawned by the tests below; they must fail
        // before any subprocess starts.
        BeerScorer::with_executable(
            BeerScorerConfig::default(),
            PathBuf::from("/nonexistent/beer_2.0/beer"),
        )
    }

    #[test]
    fn test_config_default() {
        let config = BeerScorerConfig::default();

        assert_eq!(config.java_bin, "java");
        assert_eq!(config.archive_url, BEER_URL);
        assert!(config.cache_dir.ends_with("rust-beer-score"));
    }

    #[test]
    fn test_builder_pattern() {
        let builder = BeerScorerBuilder::new()
            .java_bin("/opt/jdk/bin/java")
            .cache_dir(PathBuf::from("/tmp/beer-cache"))
            .archive_url("https://example.com/beer.tar.gz");

        let config = builder.config;

        assert_eq!(config.java_bin, "/opt/jdk/bin/java");
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/beer-cache"));
        assert_eq!(config.archive_url, "https://example.com/beer.tar.gz");
    }

    #[test]
    fn test_multi_refs_rejected_before_spawn() {
        let scorer = offline_scorer();
        let predictions = vec!["the cat sat"];
        let references = vec![vec!["the cat sat", "a cat was sitting"]];

        let err = scorer
            .score_multi_refs(&predictions, &references)
            .unwrap_err();

        assert!(matches!(err, MetricError::UnsupportedInput(_)));
        assert!(err.to_string().contains("multiple references"));
    }

    #[test]
    fn test_length_mismatch_rejected_before_spawn() {
        let scorer = offline_scorer();

        let err = scorer.score(&["a", "b", "c"], &["x", "y"]).unwrap_err();

        assert!(matches!(err, MetricError::UnsupportedInput(_)));
    }

    #[test]
    fn test_missing_executable_is_scoring_error() {
        let scorer = offline_scorer();

        let err = scorer.score(&["a"], &["b"]).unwrap_err();

        assert!(matches!(err, MetricError::Scoring { .. }));
        assert!(err.to_string().contains("error while computing beer score"));
    }

    #[test]
    fn test_stage_lines_newline_joined() {
        let file = stage_lines(&["first line", "second line"]).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();

        assert_eq!(contents, "first line\nsecond line");
    }

    #[test]
    fn test_stage_lines_empty_batch() {
        let file = stage_lines::<&str>(&[]).unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
    }
}
