use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, HookError>;

/// Error type covering the different ways a hook run can abort.
#[derive(Debug, Error)]
pub enum HookError {
    /// The version query did not identify an installed Poetry.
    #[error("Poetry is not installed")]
    ToolNotInstalled,

    /// The installed Poetry reported a version this hook cannot drive.
    #[error("Poetry version unknown or not supported: {reason}")]
    UnsupportedVersion { reason: String },

    /// `poetry export` could not be started, failed, or produced unreadable output.
    #[error(
        "unable to execute `{command}`, check `args` in your `.pre-commit-config.yaml`: {detail}"
    )]
    ExportFailed { command: String, detail: String },

    /// The hook arguments do not match the schema of the installed Poetry.
    #[error("{0}")]
    InvalidArguments(#[from] clap::Error),

    /// Wrapper for IO failures such as reading or writing the requirements file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl HookError {
    /// Exit code reported to the hook framework for this error.
    ///
    /// Every failure is a non-zero "something changed or went wrong" signal;
    /// argument errors keep the parser's own convention.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArguments(err) => err.exit_code(),
            Self::ToolNotInstalled
            | Self::UnsupportedVersion { .. }
            | Self::ExportFailed { .. }
            | Self::Io(_)
            | Self::Logging(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(HookError::ToolNotInstalled.to_string(), "Poetry is not installed");

        let err = HookError::ExportFailed {
            command: "poetry export --dev".to_string(),
            detail: "exit status: 1".to_string(),
        };
        assert!(err.to_string().contains("`poetry export --dev`"));
        assert!(err.to_string().ends_with("exit status: 1"));
    }

    #[test]
    fn domain_failures_exit_with_one() {
        assert_eq!(HookError::ToolNotInstalled.exit_code(), 1);
        let unsupported = HookError::UnsupportedVersion {
            reason: "1.7.0".to_string(),
        };
        assert_eq!(unsupported.exit_code(), 1);
    }
}
