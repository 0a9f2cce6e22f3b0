//! Download and extraction of the packaged BEER scorer.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::fs;

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;

/// Where the packaged scorer archive is published.
pub const BEER_URL: &str =
    "https://raw.githubusercontent.com/stanojevic/beer/master/packaged/beer_2.0.tar.gz";

/// Launcher script location inside the extracted archive.
const BEER_EXECUTABLE: &str = "beer_2.0/beer";

/// Default extraction root when the config does not override it.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("rust-beer-score")
}

/// Downloads and unpacks the scorer archive, returning the path to the
/// extracted executable.
///
/// The download is skipped when the executable is already present under
/// `cache_dir`, so repeated setup calls only pay for the first one.
pub fn download_and_extract(url: &str, cache_dir: &Path) -> Result<PathBuf> {
    let beer_path = cache_dir.join(BEER_EXECUTABLE);
    if beer_path.exists() {
        tracing::debug!(path = %beer_path.display(), "scorer already extracted");
        return Ok(beer_path);
    }

    fs::create_dir_all(cache_dir)
        .with_context(|| format!("failed to create cache dir {}", cache_dir.display()))?;

    tracing::info!(url, "downloading beer archive");
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("failed to download {url}"))?;
    let bytes = response
        .bytes()
        .with_context(|| format!("failed to read archive body from {url}"))?;

    let decoder = GzDecoder::new(Cursor::new(bytes.as_ref()));
    let mut archive = tar::Archive::new(decoder);
    archive
        .unpack(cache_dir)
        .with_context(|| format!("failed to extract archive into {}", cache_dir.display()))?;

    if !beer_path.exists() {
        bail!("archive from {url} did not contain {BEER_EXECUTABLE}");
    }

    tracing::info!(path = %beer_path.display(), "scorer extracted");
    Ok(beer_path)
}
