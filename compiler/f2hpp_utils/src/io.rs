//! IO module for opening the files touched during generation
//!
//! The input is always a regular file, because its length has to be known
//! before any output is written. Outputs are created if missing and truncated
//! if they already exist.

use std::{
    fs,
    io::{self, BufReader, BufWriter, Seek, SeekFrom},
    path::Path,
};

/// Opens the input file and measures it
///
/// The length is taken by seeking to the end of the file and reading the
/// position back, after which the file is rewound so the returned reader
/// starts at the first byte.
///
/// # Errors
///
/// If the file cannot be opened or seeked, an error is returned.
pub fn open_input(path: impl AsRef<Path>) -> Result<(BufReader<fs::File>, u64), io::Error> {
    let mut file = fs::File::open(path)?;
    let size = file.seek(SeekFrom::End(0))?;
    file.rewind()?;

    Ok((BufReader::new(file), size))
}

/// Opens the output file and returns a buffered writer
///
/// The file is created if it does not exist and truncated if it does.
///
/// # Errors
///
/// If the file cannot be opened or created, an error is returned.
pub fn open_output(path: impl AsRef<Path>) -> Result<BufWriter<fs::File>, io::Error> {
    Ok(BufWriter::new(
        fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?,
    ))
}
