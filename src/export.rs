//! Running `poetry export` and capturing the listing it prints.

use tracing::{info, instrument};

use crate::error::{HookError, Result};
use crate::io::runner::ToolRunner;
use crate::model::{DependencySelection, ExportOptions};

/// Arguments passed to the tool for the given options, starting with `export`.
pub fn export_arguments(options: &ExportOptions) -> Vec<String> {
    let mut args = vec!["export".to_string()];
    for extra in &options.extras {
        args.push("--extras".to_string());
        args.push(extra.clone());
    }

    match &options.selection {
        DependencySelection::Legacy { dev } => {
            if *dev {
                args.push("--dev".to_string());
            }
        }
        DependencySelection::Groups { with, without, only } => {
            for (flag, groups) in [("--with", with), ("--without", without), ("--only", only)] {
                if !groups.is_empty() {
                    args.push(flag.to_string());
                    args.push(groups.join(","));
                }
            }
        }
    }

    if !options.include_hashes {
        args.push("--without-hashes".to_string());
    }
    if options.include_credentials {
        args.push("--with-credentials".to_string());
    }
    args
}

/// Runs the export and returns its standard output verbatim.
#[instrument(level = "debug", skip_all, fields(program = %runner.program()))]
pub fn export(runner: &impl ToolRunner, options: &ExportOptions) -> Result<String> {
    let args = export_arguments(options);
    let command = runner.command_line(&args);
    info!("command for poetry export based on hook args: {command}");

    let output = runner.run(&args).map_err(|err| HookError::ExportFailed {
        command: command.clone(),
        detail: err.to_string(),
    })?;
    if !output.success {
        return Err(HookError::ExportFailed {
            detail: output.describe_failure(),
            command,
        });
    }

    String::from_utf8(output.stdout).map_err(|err| HookError::ExportFailed {
        command,
        detail: format!("output is not valid UTF-8: {err}"),
    })
}
