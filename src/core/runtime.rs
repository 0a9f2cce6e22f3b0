//! Java runtime detection.

use std::process::{Command, Stdio};

use crate::core::MetricError;
use crate::Result;

/// Checks that a Java runtime is installed and invocable.
///
/// Spawns `<java_bin> -version` and requires a successful exit. The version
/// text itself is not inspected; any runnable java is accepted.
pub fn verify_java(java_bin: &str) -> Result<()> {
    let probe = Command::new(java_bin)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match probe {
        Ok(status) if status.success() => {
            tracing::debug!(java = java_bin, "java runtime detected");
            Ok(())
        }
        Ok(status) => Err(MetricError::MissingRuntime(format!(
            "`{java_bin} -version` exited with {status}"
        ))),
        Err(e) => Err(MetricError::MissingRuntime(format!(
            "failed to spawn `{java_bin} -version`: {e}"
        ))),
    }
}
