//! Core library for the poetry-requirements pre-commit hook.
//!
//! The hook keeps a `requirements.txt` file identical to what `poetry export`
//! produces. Adapters for the Poetry process and the file on disk live under
//! [`io`], the version-dependent data types inside [`model`], and the
//! orchestration of a single run in [`sync`]. The binary maps the
//! [`reconcile::Reconciliation`] (or the [`HookError`]) to an exit code.

pub mod error;
pub mod export;
pub mod io;
pub mod logging;
pub mod model;
pub mod options;
pub mod reconcile;
pub mod sync;
pub mod version;

pub use error::{HookError, Result};
pub use model::{DependencySelection, ExportOptions, Generation, ToolVersion};
pub use reconcile::Reconciliation;
