//! Build information module

use std::fmt::Write as FmtWrite;

use crate::messages::COPYRIGHT;

#[doc(hidden)]
#[allow(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::restriction
)]
pub mod build {
    include!(concat!(env!("OUT_DIR"), "/shadow.rs"));
}

/// The one-line version banner printed by `-h` and `-v`
pub fn version_line() -> String {
    format!(
        "{name} {version} -- {COPYRIGHT}",
        name = build::PROJECT_NAME,
        version = build::PKG_VERSION,
    )
}

/// Everything known about this build, for bug reports
pub fn long_version() -> String {
    format!(
        concat!(
            "{name} version {version} ({commit}, {taint_string}) built for {target} on {time}",
            " ({mode} mode)",
            "\n{rust_version} ({rust_channel} on {build_os})\n",
            "{cargo_version}{taint_extra}"
        ),
        name = build::PROJECT_NAME,
        version = build::PKG_VERSION,
        commit = build::COMMIT_HASH,
        taint_string = if build::GIT_CLEAN {
            "not tainted"
        } else {
            "tainted!"
        },
        target = build::BUILD_TARGET,
        time = build::BUILD_TIME_3339,
        mode = build::BUILD_RUST_CHANNEL,
        rust_version = build::RUST_VERSION,
        rust_channel = build::RUST_CHANNEL,
        build_os = build::BUILD_OS,
        cargo_version = build::CARGO_VERSION,
        taint_extra = if build::GIT_CLEAN {
            String::new()
        } else {
            format!(
                "\ntainted files:{}",
                build::GIT_STATUS_FILE
                    .lines()
                    .fold(String::new(), |mut output, line| {
                        write!(output, "\n{}", {
                            line.strip_suffix(" (dirty)")
                                .or_else(|| line.strip_suffix(" (staged)"))
                                .unwrap_or(line)
                        })
                        .expect("writing to a string should succeed");
                        output
                    })
            )
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_names_package() {
        assert_eq!(
            version_line(),
            format!(
                "f2hpp {} -- Copyright (C) 2012 David Jolly",
                env!("CARGO_PKG_VERSION")
            )
        );
    }

    #[test]
    fn long_version_starts_with_name_and_version() {
        assert!(long_version().starts_with(&format!(
            "f2hpp version {} (",
            env!("CARGO_PKG_VERSION")
        )));
    }
}
