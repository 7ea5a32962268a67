use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::UsageError;

const DEFAULT_PROGRAM: &str = "char-count";

/// Report the number of characters in a UTF-8 text file
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "char-count", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Path to the text file to count
    #[arg(value_name = "file_path")]
    pub file_path: PathBuf,
}

impl Cli {
    /// Parse a full argument vector, program name included.
    ///
    /// Anything other than exactly one argument is a usage error. The
    /// argument is always taken as the path, even `--` or a leading `-`.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program = program_name(args.first());

        let [argv0, path] = args.as_slice() else {
            return Err(UsageError { program });
        };

        // Everything after the escape is positional, including another `--`.
        Cli::try_parse_from([argv0, &OsString::from("--"), path])
            .map_err(|_| UsageError { program })
    }
}

fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}
