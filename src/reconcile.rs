use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::Result;
use crate::io::requirements;

/// Result of comparing the export against the file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// The file already held exactly the exported text.
    Unchanged,
    /// The file was created or overwritten.
    Updated { path: PathBuf },
}

impl Reconciliation {
    /// 0 when nothing changed, 1 when the hook framework must re-stage the file.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unchanged => 0,
            Self::Updated { .. } => 1,
        }
    }
}

/// Writes `exported` to `path` unless the file already matches it exactly.
///
/// Any difference counts, including ordering, whitespace and hash lines.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn reconcile(path: &Path, exported: &str) -> Result<Reconciliation> {
    let existing = requirements::read_existing(path)?;
    if existing == exported {
        return Ok(Reconciliation::Unchanged);
    }

    info!("requirements don't match poetry environment, exporting dependencies ...");
    requirements::write(path, exported)?;
    info!("updated {}", path.display());
    Ok(Reconciliation::Updated {
        path: path.to_path_buf(),
    })
}
