//! Detection of the installed Poetry version.

use std::io;

use tracing::{debug, info, instrument};

use crate::error::{HookError, Result};
use crate::io::runner::ToolRunner;
use crate::model::ToolVersion;

/// Validates a `poetry --version` response and parses the version from it.
///
/// The response must mention both `Poetry` and `version`; anything else means
/// some other program answered, or nothing did.
pub fn detect_version(response: &str) -> Result<ToolVersion> {
    if !(response.contains("Poetry") && response.contains("version")) {
        return Err(HookError::ToolNotInstalled);
    }
    ToolVersion::parse(response)
}

/// Asks the tool for its version.
#[instrument(level = "debug", skip_all, fields(program = %runner.program()))]
pub fn query_version(runner: &impl ToolRunner) -> Result<ToolVersion> {
    let output = match runner.run(&["--version".to_string()]) {
        Ok(output) => output,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(HookError::ToolNotInstalled);
        }
        Err(err) => return Err(err.into()),
    };
    if !output.success {
        debug!(failure = %output.describe_failure(), "version query failed");
        return Err(HookError::ToolNotInstalled);
    }

    let response = String::from_utf8_lossy(&output.stdout);
    let version = detect_version(response.trim())?;
    info!(%version, generation = ?version.generation(), "detected Poetry");
    Ok(version)
}
