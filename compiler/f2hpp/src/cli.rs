//! Defines the f2hpp command line interface
//!
//! The grammar is four literal flags scanned left to right. `-f` and `-o`
//! mark the next bare argument as the input or output path, `-h` and `-v`
//! stop the scan as soon as they are seen.

use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use thiserror::Error;

use crate::messages::USAGE;

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `-h`: print version and flag help
    ShowHelp,
    /// `-v`: print version
    ShowVersion,
    /// Convert `input_path` into artifacts at `output_path`
    Generate {
        /// The file to embed. Empty if `-f` was never given.
        input_path: PathBuf,
        /// The output stem. Empty if `-o` was never given.
        output_path: PathBuf,
    },
}

/// A command line that cannot be acted on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// No arguments at all
    #[error("{USAGE}")]
    Usage,
    /// A `-` token that is not one of the four flags
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    /// `-f` or `-o` as the last token
    #[error("Missing operand following '{0}'")]
    MissingOperand(String),
    /// A bare argument with no pending `-f` or `-o`
    #[error("Operator '{0}' not associated with a command")]
    OrphanArgument(String),
}

/// Whether `token` is shaped like a flag
///
/// A lone `-` is an ordinary argument.
fn is_flag(token: &OsStr) -> bool {
    let bytes = token.as_encoded_bytes();
    bytes.len() > 1 && bytes.starts_with(b"-")
}

/// `token` as it should appear in an error message
fn lossy(token: &OsStr) -> String {
    token.to_string_lossy().into_owned()
}

/// Scan the arguments that follow the program name.
///
/// A path flag only checks that some token follows it; the path itself is
/// taken from the next bare argument, preferring a pending `-f` over a
/// pending `-o`. Repeated path flags overwrite earlier paths. Paths are kept
/// as the exact bytes given, whether or not they are valid UTF-8.
///
/// # Errors
///
/// See [`CliError`]. Errors are reported for the first offending token, so
/// `-h` after a bad token is never reached.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    if args.peek().is_none() {
        return Err(CliError::Usage);
    }

    let mut input_path = PathBuf::new();
    let mut output_path = PathBuf::new();
    let mut awaiting_input = false;
    let mut awaiting_output = false;

    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("-h") => return Ok(Command::ShowHelp),
            Some("-v") => return Ok(Command::ShowVersion),
            Some(flag @ ("-f" | "-o")) => {
                if args.peek().is_none() {
                    return Err(CliError::MissingOperand(flag.to_string()));
                }
                if flag == "-f" {
                    awaiting_input = true;
                } else {
                    awaiting_output = true;
                }
            }
            _ if is_flag(&arg) => return Err(CliError::UnknownCommand(lossy(&arg))),
            _ if awaiting_input => {
                input_path = PathBuf::from(arg);
                awaiting_input = false;
            }
            _ if awaiting_output => {
                output_path = PathBuf::from(arg);
                awaiting_output = false;
            }
            _ => return Err(CliError::OrphanArgument(lossy(&arg))),
        }
    }

    Ok(Command::Generate {
        input_path,
        output_path,
    })
}
