//! The generation driver
//!
//! Opens the input, plans and creates the outputs, then streams everything
//! through the emitters in [`crate::header`] and [`crate::payload`].

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use f2hpp_utils::io as files;

use crate::{
    artifact::{display_name, ArtifactPlan},
    error::GenerateError,
    header::{write_header_close, write_header_open, write_source_open},
    options::GenerateOptions,
    payload::{write_array_definition, PayloadError},
};

/// What a successful [`gen_file`] run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// The input length measured before generation, written as `DATA_SIZE`
    pub size: u64,
    /// How many array entries were written
    pub entries: u64,
    /// Every file written, header first
    pub artifacts: Vec<PathBuf>,
}

/// Convert the file at `input_path` into C++ artifacts at `output_path`.
///
/// The input is opened first, then every output is created (truncating
/// existing files) before anything is written. Nothing is cleaned up on
/// failure: outputs created before the error stay on disk.
///
/// # Errors
///
/// Returns a [`GenerateError`] naming the file that could not be opened,
/// created, read or written.
pub fn gen_file(
    input_path: &Path,
    output_path: &Path,
    options: &GenerateOptions,
) -> Result<GenerateSummary, GenerateError> {
    let (input, size) =
        files::open_input(input_path).map_err(|source| GenerateError::OpenInput {
            path: input_path.to_path_buf(),
            source,
        })?;

    let plan = ArtifactPlan::new(output_path, options);
    let mut header = create(&plan.header_path)?;
    let source = plan
        .source_path
        .as_deref()
        .map(|path| create(path).map(|out| (path, out)))
        .transpose()?;

    let entries = if let Some((source_path, mut source)) = source {
        write_header_open(&mut header, &plan, size, options)
            .and_then(|()| write_header_close(&mut header))
            .and_then(|()| header.flush())
            .map_err(write_failed(&plan.header_path))?;

        write_source_open(&mut source, &display_name(source_path), &plan, options)
            .map_err(write_failed(source_path))?;
        let entries = write_array_definition(&plan.symbol, input, &mut source, options)
            .map_err(payload_failed(input_path, source_path))?;
        source.flush().map_err(write_failed(source_path))?;

        entries
    } else {
        write_header_open(&mut header, &plan, size, options)
            .map_err(write_failed(&plan.header_path))?;
        let entries = write_array_definition(&plan.symbol, input, &mut header, options)
            .map_err(payload_failed(input_path, &plan.header_path))?;
        header
            .write_all(b"\n")
            .and_then(|()| write_header_close(&mut header))
            .and_then(|()| header.flush())
            .map_err(write_failed(&plan.header_path))?;

        entries
    };

    Ok(GenerateSummary {
        size,
        entries,
        artifacts: plan.paths(),
    })
}

/// Create one output, naming it in the error if that fails
fn create(path: &Path) -> Result<io::BufWriter<fs::File>, GenerateError> {
    files::open_output(path).map_err(|source| GenerateError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Map a write failure on `path` into a [`GenerateError`]
fn write_failed(path: &Path) -> impl FnOnce(io::Error) -> GenerateError + '_ {
    move |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Map a payload failure onto whichever side of the copy failed
fn payload_failed<'a>(
    input_path: &'a Path,
    output_path: &'a Path,
) -> impl FnOnce(PayloadError) -> GenerateError + 'a {
    move |err| match err {
        PayloadError::Read(source) => GenerateError::Read {
            path: input_path.to_path_buf(),
            source,
        },
        PayloadError::Write(source) => GenerateError::Write {
            path: output_path.to_path_buf(),
            source,
        },
    }
}
