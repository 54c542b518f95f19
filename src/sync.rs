use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::export::export;
use crate::io::runner::ToolRunner;
use crate::options::parse_options;
use crate::reconcile::{Reconciliation, reconcile};
use crate::version::query_version;

/// Runs one hook invocation: detect Poetry, parse the hook arguments against
/// its flag surface, export, and bring the requirements file in line.
///
/// `argv` starts with the program name. The output path is resolved against
/// `root`. Every failure aborts the run; nothing is retried.
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub fn sync_requirements<I, T>(
    runner: &impl ToolRunner,
    root: &Path,
    argv: I,
) -> Result<Reconciliation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let version = query_version(runner)?;
    let options = parse_options(version.generation(), argv)?;
    debug!(?options, "parsed hook arguments");

    let exported = export(runner, &options)?;
    info!(bytes = exported.len(), "captured poetry export output");

    reconcile(&root.join(&options.output), &exported)
}
