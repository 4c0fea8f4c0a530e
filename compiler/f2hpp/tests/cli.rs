use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use indoc::formatdoc;

fn f2hpp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_f2hpp"))
        .args(args)
        .output()
        .expect("f2hpp should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A scratch directory unique to one test
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("f2hpp_cli_{name}"));
    drop(fs::remove_dir_all(&dir));
    fs::create_dir_all(&dir).expect("should create scratch directory");
    dir
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths should be utf-8")
}

fn version_line() -> String {
    format!(
        "f2hpp {} -- Copyright (C) 2012 David Jolly",
        env!("CARGO_PKG_VERSION")
    )
}

#[test]
fn no_arguments_prints_usage() {
    let output = f2hpp(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Usage: f2hpp [-h | -v] [-f input | -o output]\n"
    );
    assert_eq!(stdout(&output), "");
}

#[test]
fn help_prints_version_and_flags() {
    let output = f2hpp(&["-h"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        formatdoc! {"
            {version}
            This is free software. There is NO warranty.

            -h\t\tDisplay help information
            -v\t\tDisplay version information
            -f [input]\tSpecify input file path
            -o [output]\tSpecify output file path

        ", version = version_line()}
    );
}

#[test]
fn version_prints_version_and_warranty() {
    let output = f2hpp(&["-v"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        format!(
            "{}\nThis is free software. There is NO warranty.\n\n",
            version_line()
        )
    );
}

#[test]
fn help_wins_over_later_tokens() {
    let output = f2hpp(&["-f", "in.bin", "-h", "-x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Display help information"));
}

#[test]
fn missing_operand_is_reported() {
    let output = f2hpp(&["-f"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Missing operand following '-f'\n\n");
}

#[test]
fn unknown_flag_is_reported() {
    let output = f2hpp(&["-x"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Unknown command: -x\n\n");
}

#[test]
fn orphan_argument_is_reported() {
    let output = f2hpp(&["data.bin"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Operator 'data.bin' not associated with a command\n\n"
    );
}

#[test]
fn generates_header_and_source() {
    let dir = scratch("generate");
    let input = dir.join("font.bin");
    let bytes: Vec<u8> = (0..=41).collect();
    fs::write(&input, &bytes).expect("should write input");
    let output = dir.join("font");

    let run = f2hpp(&["-f", path_str(&input), "-o", path_str(&output)]);

    assert_eq!(run.status.code(), Some(0));
    assert_eq!(stdout(&run), "Operation successful.\n\n");
    assert_eq!(stderr(&run), "");

    let header = fs::read_to_string(dir.join("font.hpp")).expect("header should exist");
    assert!(header.starts_with("/*\n * font.hpp\n * Automatically generated using f2hpp\n */"));
    assert!(header.contains("#ifndef FONT_HPP_\n#define FONT_HPP_\n"));
    assert!(header.contains("class font {"));
    assert!(header.contains("static const unsigned long DATA_SIZE = 42;"));

    let source = fs::read_to_string(dir.join("font.cpp")).expect("source should exist");
    assert!(source.contains("#include \"font.hpp\""));
    assert!(source.contains("const unsigned char font::DATA[font::DATA_SIZE] = {\n"));
    assert_eq!(source.matches("0x").count(), 42);
    assert!(source.contains(", 0x13, \n\t0x14, "));
    assert!(source.contains(", 0x27, \n\t0x28, 0x29, \n};"));

    drop(fs::remove_dir_all(&dir));
}

#[test]
fn failed_generation_still_exits_zero() {
    let dir = scratch("failure");
    let input = dir.join("missing.bin");
    let output = dir.join("out");

    let run = f2hpp(&["-f", path_str(&input), "-o", path_str(&output)]);

    assert_eq!(run.status.code(), Some(0));
    assert_eq!(stdout(&run), "\n");
    assert_eq!(
        stderr(&run),
        format!(
            "Failed to open input file '{}'\nOperation failed.\n",
            path_str(&input)
        )
    );
    assert!(!dir.join("out.hpp").exists());

    drop(fs::remove_dir_all(&dir));
}

#[cfg(unix)]
#[test]
fn non_utf8_paths_are_accepted() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let dir = scratch("non_utf8");
    let input = dir.join(OsStr::from_bytes(b"in\xff.bin"));
    fs::write(&input, [0xca_u8, 0xfe]).expect("should write input");
    let output = dir.join("out");

    let run = Command::new(env!("CARGO_BIN_EXE_f2hpp"))
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .expect("f2hpp should run");

    assert_eq!(run.status.code(), Some(0));
    assert_eq!(stdout(&run), "Operation successful.\n\n");
    assert_eq!(stderr(&run), "");

    let header = fs::read_to_string(dir.join("out.hpp")).expect("header should exist");
    assert!(header.contains("static const unsigned long DATA_SIZE = 2;"));
    let source = fs::read_to_string(dir.join("out.cpp")).expect("source should exist");
    assert!(source.contains("\t0xca, 0xfe, \n};"));

    drop(fs::remove_dir_all(&dir));
}

#[cfg(unix)]
#[test]
fn non_utf8_output_stem_keeps_its_bytes() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let dir = scratch("non_utf8_output");
    let input = dir.join("in.bin");
    fs::write(&input, [1_u8]).expect("should write input");
    let output = dir.join(OsStr::from_bytes(b"d\xffta"));

    let run = Command::new(env!("CARGO_BIN_EXE_f2hpp"))
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .expect("f2hpp should run");

    assert_eq!(run.status.code(), Some(0));
    assert!(dir.join(OsStr::from_bytes(b"d\xffta.hpp")).exists());
    assert!(dir.join(OsStr::from_bytes(b"d\xffta.cpp")).exists());

    drop(fs::remove_dir_all(&dir));
}
