//! Errors produced while generating files

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// The reasons [`gen_file`](crate::gen_file) can fail
///
/// Every variant names the file involved. Files that were already created
/// when the error happened are left on disk as they are.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The input file could not be opened or measured
    #[error("Failed to open input file '{}'", .path.display())]
    OpenInput {
        /// The input path as given
        path: PathBuf,
        /// The underlying failure
        #[source]
        source: io::Error,
    },
    /// An output file could not be created or truncated
    #[error("Failed to create output file '{}'", .path.display())]
    CreateOutput {
        /// The output path that could not be created
        path: PathBuf,
        /// The underlying failure
        #[source]
        source: io::Error,
    },
    /// The input file failed part way through
    #[error("Failed to read input file '{}'", .path.display())]
    Read {
        /// The input path as given
        path: PathBuf,
        /// The underlying failure
        #[source]
        source: io::Error,
    },
    /// An output file failed part way through
    #[error("Failed to write output file '{}'", .path.display())]
    Write {
        /// The output path being written
        path: PathBuf,
        /// The underlying failure
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// The path of the file this error is about
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::OpenInput { path, .. }
            | Self::CreateOutput { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}
