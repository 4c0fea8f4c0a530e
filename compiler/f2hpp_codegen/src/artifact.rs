//! Planning which files a generation run writes and what they are called

use std::{
    ffi::OsString,
    iter,
    path::{Path, PathBuf},
};

use f2hpp_utils::string_utils::{file_name, strip_extension, to_uppercase};

use crate::options::{GenerateOptions, OutputLayout};

/// The files and identifiers derived from an output path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPlan {
    /// Where the header is written
    pub header_path: PathBuf,
    /// Where the array definition is written, for the split layout
    pub source_path: Option<PathBuf>,
    /// The header's final path segment, used in its banner and in `#include`
    pub header_name: String,
    /// The class name holding `DATA_SIZE` and `DATA`
    pub symbol: String,
    /// The include guard macro
    pub guard: String,
}

impl ArtifactPlan {
    /// Derive the artifacts for `output_path`.
    ///
    /// With the split layout `output_path` is a stem and `.hpp`/`.cpp` are
    /// appended to it. With the inline layout it names the header itself.
    /// The paths keep the exact bytes given; only the names written into the
    /// generated text are converted lossily to UTF-8.
    #[must_use]
    pub fn new(output_path: &Path, options: &GenerateOptions) -> Self {
        let (header_path, source_path) = match options.layout {
            OutputLayout::Split => (
                with_suffix(output_path, ".hpp"),
                Some(with_suffix(output_path, ".cpp")),
            ),
            OutputLayout::Inline => (output_path.to_path_buf(), None),
        };

        let header_name = display_name(&header_path);

        Self {
            guard: guard_identifier(&header_name, options.guard_trailing_underscore),
            symbol: symbol_name(output_path),
            header_path,
            source_path,
            header_name,
        }
    }

    /// Every path this plan writes to, header first
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        iter::once(self.header_path.clone())
            .chain(self.source_path.clone())
            .collect()
    }
}

/// `path` with `suffix` appended to its last segment
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(path);
    path.push(suffix);
    PathBuf::from(path)
}

/// The final segment of `path` as it appears in generated text
#[must_use]
pub fn display_name(path: &Path) -> String {
    file_name(&path.to_string_lossy()).to_string()
}

/// The class name for `output_path`: its last segment without the last
/// extension.
#[must_use]
pub fn symbol_name(output_path: &Path) -> String {
    strip_extension(&display_name(output_path)).to_string()
}

/// The include guard for a header called `header_name`.
#[must_use]
pub fn guard_identifier(header_name: &str, trailing_underscore: bool) -> String {
    let mut guard = to_uppercase(header_name);
    if trailing_underscore {
        guard.push('_');
    }
    guard
}
