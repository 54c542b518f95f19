use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{HookError, Result};

/// `major.minor` pairs of Poetry this hook knows how to drive.
pub const SUPPORTED_VERSIONS: &[(u64, u64)] = &[(1, 1), (1, 2)];

/// Default name of the managed requirements file.
pub const DEFAULT_OUTPUT: &str = "requirements.txt";

static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d.]*").expect("version token pattern is valid"));

/// Version reported by the installed Poetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToolVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ToolVersion {
    /// Extracts the first dotted numeric token from free-form text.
    ///
    /// Anything after the token, such as a `b3` pre-release tag, is ignored.
    /// Missing segments default to zero and extra segments are dropped. Fails
    /// unless `major.minor` is listed in [`SUPPORTED_VERSIONS`].
    pub fn parse(text: &str) -> Result<Self> {
        let token = VERSION_TOKEN
            .find(text)
            .ok_or_else(|| HookError::UnsupportedVersion {
                reason: format!("no version number in {:?}", text.trim()),
            })?
            .as_str();

        let mut segments = Vec::with_capacity(3);
        for segment in token.split('.').take(3) {
            let value = segment
                .parse::<u64>()
                .map_err(|_| HookError::UnsupportedVersion {
                    reason: format!("malformed version number {token:?}"),
                })?;
            segments.push(value);
        }
        segments.resize(3, 0);

        let version = Self {
            major: segments[0],
            minor: segments[1],
            patch: segments[2],
        };
        if !SUPPORTED_VERSIONS.contains(&(version.major, version.minor)) {
            return Err(HookError::UnsupportedVersion {
                reason: format!("only Poetry 1.1.*/1.2.* are supported, found {version}"),
            });
        }
        Ok(version)
    }

    /// Flag surface exposed by this version.
    pub fn generation(&self) -> Generation {
        // Construction already restricted the minor to a supported pair.
        if self.minor >= 2 {
            Generation::Groups
        } else {
            Generation::Legacy
        }
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Command-line surface of `poetry export`, which changed between 1.1 and 1.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generation {
    /// Poetry 1.1: development dependencies behind a single `--dev` toggle.
    Legacy,
    /// Poetry 1.2: named dependency groups.
    Groups,
}

/// Which dependency sets the export includes, keyed by [`Generation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencySelection {
    Legacy {
        dev: bool,
    },
    Groups {
        with: Vec<String>,
        without: Vec<String>,
        only: Vec<String>,
    },
}

impl DependencySelection {
    pub fn generation(&self) -> Generation {
        match self {
            Self::Legacy { .. } => Generation::Legacy,
            Self::Groups { .. } => Generation::Groups,
        }
    }
}

/// Options forwarded to `poetry export` plus the file they are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Requirements file, relative to the working directory.
    pub output: PathBuf,
    pub extras: Vec<String>,
    /// Whether per-package hashes stay in the listing.
    pub include_hashes: bool,
    pub include_credentials: bool,
    pub selection: DependencySelection,
}

impl ExportOptions {
    /// Defaults for the given generation: hashes on, no extras, no groups.
    pub fn new(generation: Generation) -> Self {
        let selection = match generation {
            Generation::Legacy => DependencySelection::Legacy { dev: false },
            Generation::Groups => DependencySelection::Groups {
                with: Vec::new(),
                without: Vec::new(),
                only: Vec::new(),
            },
        };
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            extras: Vec::new(),
            include_hashes: true,
            include_credentials: false,
            selection,
        }
    }
}
