use std::ffi::OsString;
use std::io;
use std::process::Command;

use tracing::debug;

/// Exit status and captured streams of a finished tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Successful run that printed `stdout`.
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// Failed run with the given exit code and error output.
    pub fn failed(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    /// Short description of how the process ended, for error messages.
    pub fn describe_failure(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        };
        let stderr = String::from_utf8_lossy(&self.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            status
        } else {
            format!("{status}: {stderr}")
        }
    }
}

/// Runs the dependency manager with an argument vector and waits for it.
pub trait ToolRunner {
    /// Name shown when logging the command line.
    fn program(&self) -> String;

    /// Blocks until the tool exits. Spawn failures surface as `io::Error`.
    fn run(&self, args: &[String]) -> io::Result<CommandOutput>;

    /// Command line as it would be typed in a shell.
    fn command_line(&self, args: &[String]) -> String {
        let mut line = self.program();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Spawns the real executable found on the execution path.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    program: OsString,
}

impl SystemRunner {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new("poetry")
    }
}

impl ToolRunner for SystemRunner {
    fn program(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn run(&self, args: &[String]) -> io::Result<CommandOutput> {
        debug!(program = %self.program(), ?args, "spawning tool");
        let output = Command::new(&self.program).args(args).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_program_and_arguments() {
        let runner = SystemRunner::default();
        let args = vec!["export".to_string(), "--dev".to_string()];
        assert_eq!(runner.command_line(&args), "poetry export --dev");
    }

    #[test]
    fn failure_description_includes_trimmed_stderr() {
        let output = CommandOutput::failed(1, "  Group(s) not found: docs\n");
        assert_eq!(
            output.describe_failure(),
            "exit status 1: Group(s) not found: docs"
        );

        let killed = CommandOutput {
            code: None,
            ..CommandOutput::default()
        };
        assert_eq!(killed.describe_failure(), "terminated by signal");
    }

    #[test]
    fn missing_executable_is_a_not_found_error() {
        let runner = SystemRunner::new("poetry-requirements-test-no-such-binary");
        let err = runner.run(&["--version".to_string()]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
