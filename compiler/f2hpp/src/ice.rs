//! Internal error handling for f2hpp
//!
//! A panic in f2hpp is always a bug. This module installs a panic hook that
//! says so, prints the build information and command line needed to reproduce
//! it, and then hands over to the default hook for the panic message itself.

use std::{ffi::OsString, panic::PanicHookInfo};

/// Prints the internal error report around the default panic output
///
/// # Arguments
///
/// * `default_panic_hook` - The default system panic hook to call after
///   printing the report header.
/// * `panic_info` - Information about the panic that occurred.
fn ice_hook(
    default_panic_hook: &'static (dyn Fn(&PanicHookInfo<'_>) + Send + Sync),
    panic_info: &PanicHookInfo,
) {
    eprintln!("error: internal error encountered: f2hpp panicked");
    eprintln!("note: this is not your fault! this is ALWAYS a bug in f2hpp.");
    eprintln!("note: please include everything below in a bug report:");
    eprintln!();
    eprintln!(
        "{}",
        super::build_info::long_version()
            .lines()
            .map(|line| format!("note: {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    eprintln!();
    eprintln!(
        "note: command line arguments: {}",
        command_line(std::env::args_os())
    );
    eprintln!();
    default_panic_hook(panic_info);
    eprintln!();
    eprintln!("error: end internal error. generated files may be incomplete.");
}

/// Joins the command line for display, replacing invalid UTF-8
fn command_line(args: impl IntoIterator<Item = OsString>) -> String {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Configures the global panic hook
///
/// Also forces `RUST_BACKTRACE=1` unless the user asked for `full`.
pub fn setup_panic_hook() {
    // leaked once so the new hook can hold a 'static reference to it
    let default_panic_hook: &'static _ = Box::leak(std::panic::take_hook());

    std::panic::set_hook(Box::new(|panic_info| {
        ice_hook(default_panic_hook, panic_info);
    }));

    if std::env::var("RUST_BACKTRACE").ok().as_deref() != Some("full") {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_is_space_separated() {
        let args = ["f2hpp", "-f", "in.bin"].map(OsString::from);
        assert_eq!(command_line(args), "f2hpp -f in.bin");
    }

    #[cfg(unix)]
    #[test]
    fn command_line_tolerates_invalid_utf8() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let args = [
            OsString::from("f2hpp"),
            OsString::from("-f"),
            OsStr::from_bytes(b"in\xff.bin").to_os_string(),
        ];
        assert_eq!(command_line(args), "f2hpp -f in\u{fffd}.bin");
    }
}
