use std::path::Path;
use std::process::ExitCode;

use poetry_requirements::io::runner::SystemRunner;
use poetry_requirements::logging::init_logging;
use poetry_requirements::sync::sync_requirements;
use poetry_requirements::{HookError, Result};

fn main() -> ExitCode {
    match run() {
        Ok(code) => exit_code(code),
        Err(HookError::InvalidArguments(err)) => err.exit(),
        Err(err) => {
            eprintln!("error: {err}");
            exit_code(err.exit_code())
        }
    }
}

fn run() -> Result<i32> {
    init_logging()?;
    let outcome = sync_requirements(&SystemRunner::default(), Path::new("."), std::env::args_os())?;
    Ok(outcome.exit_code())
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
