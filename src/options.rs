//! Hook arguments, whose schema depends on the installed Poetry generation.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::error::Result;
use crate::model::{DEFAULT_OUTPUT, DependencySelection, ExportOptions, Generation};

const ABOUT: &str = "Keep requirements.txt in sync with `poetry export`.";

#[derive(Debug, clap::Args)]
struct CommonArgs {
    /// The name of the output file.
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Extra sets of dependencies to include.
    #[arg(short = 'E', long, num_args = 1.., value_name = "EXTRAS")]
    extras: Vec<String>,

    /// Exclude hashes from the exported file.
    #[arg(long)]
    without_hashes: bool,

    /// Include credentials for extra indices.
    #[arg(long)]
    with_credentials: bool,
}

/// Arguments understood with Poetry 1.1.
#[derive(Debug, Parser)]
#[command(name = "poetry-requirements", version, about = ABOUT)]
struct LegacyArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Include development dependencies.
    #[arg(long)]
    dev: bool,
}

/// Arguments understood with Poetry 1.2.
#[derive(Debug, Parser)]
#[command(name = "poetry-requirements", version, about = ABOUT)]
struct GroupArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Optional dependency groups to include.
    #[arg(long, num_args = 1.., value_name = "WITH")]
    with: Vec<String>,

    /// Dependency groups to exclude.
    #[arg(long, num_args = 1.., value_name = "WITHOUT")]
    without: Vec<String>,

    /// The only dependency groups to include.
    #[arg(long, num_args = 1.., value_name = "ONLY")]
    only: Vec<String>,
}

/// Argument schema for the given generation.
pub fn command(generation: Generation) -> clap::Command {
    match generation {
        Generation::Legacy => LegacyArgs::command(),
        Generation::Groups => GroupArgs::command(),
    }
}

/// Parses `argv` (program name first) against the generation's schema.
///
/// Options belonging to the other generation are usage errors.
pub fn parse_options<I, T>(generation: Generation, argv: I) -> Result<ExportOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let (common, selection) = match generation {
        Generation::Legacy => {
            let args = LegacyArgs::try_parse_from(argv)?;
            (args.common, DependencySelection::Legacy { dev: args.dev })
        }
        Generation::Groups => {
            let args = GroupArgs::try_parse_from(argv)?;
            let selection = DependencySelection::Groups {
                with: args.with,
                without: args.without,
                only: args.only,
            };
            (args.common, selection)
        }
    };

    Ok(ExportOptions {
        output: common.output,
        extras: common.extras,
        include_hashes: !common.without_hashes,
        include_credentials: common.with_credentials,
        selection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HookError;

    fn long_flags(generation: Generation) -> Vec<String> {
        command(generation)
            .get_arguments()
            .filter_map(|arg| arg.get_long().map(str::to_string))
            .collect()
    }

    #[test]
    fn schemas_are_well_formed() {
        command(Generation::Legacy).debug_assert();
        command(Generation::Groups).debug_assert();
    }

    #[test]
    fn legacy_schema_has_dev_but_no_groups() {
        let flags = long_flags(Generation::Legacy);
        for flag in ["output", "extras", "without-hashes", "with-credentials", "dev"] {
            assert!(flags.iter().any(|f| f == flag), "missing --{flag}");
        }
        for flag in ["with", "without", "only"] {
            assert!(!flags.iter().any(|f| f == flag), "unexpected --{flag}");
        }
    }

    #[test]
    fn groups_schema_has_groups_but_no_dev() {
        let flags = long_flags(Generation::Groups);
        for flag in ["output", "extras", "without-hashes", "with", "without", "only"] {
            assert!(flags.iter().any(|f| f == flag), "missing --{flag}");
        }
        assert!(!flags.iter().any(|f| f == "dev"));
    }

    #[test]
    fn defaults_without_arguments() {
        let options = parse_options(Generation::Legacy, ["hook"]).expect("parsed");
        assert_eq!(options, ExportOptions::new(Generation::Legacy));
    }

    #[test]
    fn legacy_arguments_are_collected() {
        let options = parse_options(
            Generation::Legacy,
            ["hook", "-o", "reqs/dev.txt", "-E", "lala", "more", "--dev", "--without-hashes"],
        )
        .expect("parsed");
        assert_eq!(options.output, PathBuf::from("reqs/dev.txt"));
        assert_eq!(options.extras, ["lala", "more"]);
        assert!(!options.include_hashes);
        assert_eq!(options.selection, DependencySelection::Legacy { dev: true });
    }

    #[test]
    fn repeated_group_options_accumulate() {
        let options = parse_options(
            Generation::Groups,
            [
                "hook", "--with", "dev", "docs", "--with", "test", "--only", "main",
                "--extras", "pdf", "-E", "s3",
            ],
        )
        .expect("parsed");
        assert_eq!(options.extras, ["pdf", "s3"]);
        assert_eq!(
            options.selection,
            DependencySelection::Groups {
                with: vec!["dev".into(), "docs".into(), "test".into()],
                without: Vec::new(),
                only: vec!["main".into()],
            }
        );
    }

    #[test]
    fn options_of_the_other_generation_are_rejected() {
        let err = parse_options(Generation::Groups, ["hook", "--dev"]).unwrap_err();
        assert!(matches!(err, HookError::InvalidArguments(_)));
        let err = parse_options(Generation::Legacy, ["hook", "--with", "dev"]).unwrap_err();
        assert!(matches!(err, HookError::InvalidArguments(_)));
    }
}
