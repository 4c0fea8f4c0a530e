//! String utility functions used to derive C++ identifiers from paths
//!
//! Paths are treated as plain strings here. The only path handling is
//! locating the last `/` or `\` separator, so a Windows-style path behaves
//! the same on every host.

/// Returns the final segment of a path.
///
/// Everything up to and including the last `/` or `\` is removed. A path
/// without any separator is returned unchanged.
///
/// # Examples
/// ```
/// use f2hpp_utils::string_utils::file_name;
///
/// assert_eq!(file_name("out/data.hpp"), "data.hpp");
/// assert_eq!(file_name(r"C:\assets\logo.png"), "logo.png");
/// assert_eq!(file_name("plain"), "plain");
/// ```
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rfind(&['/', '\\'][..])
        .map_or(path, |index| &path[index + 1..])
}

/// Removes the last extension from a file name.
///
/// Only the text from the final `.` onwards is removed, so `my.file.bin`
/// becomes `my.file`. A name without a `.` is returned unchanged.
///
/// # Examples
/// ```
/// use f2hpp_utils::string_utils::strip_extension;
///
/// assert_eq!(strip_extension("data.hpp"), "data");
/// assert_eq!(strip_extension("my.file.bin"), "my.file");
/// assert_eq!(strip_extension("data"), "data");
/// ```
#[must_use]
pub fn strip_extension(name: &str) -> &str {
    name.rfind('.').map_or(name, |index| &name[..index])
}

/// Upper-cases every lowercase ASCII letter and turns every `.` into `_`.
///
/// All other characters are kept as they are.
///
/// # Examples
/// ```
/// use f2hpp_utils::string_utils::to_uppercase;
///
/// assert_eq!(to_uppercase("my.file.bin"), "MY_FILE_BIN");
/// ```
#[must_use]
pub fn to_uppercase(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '.' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
