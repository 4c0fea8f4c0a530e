//! Streaming the input bytes into a C++ array initializer

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::options::GenerateOptions;

/// A failure while copying bytes into the array initializer
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The input could not be read
    #[error("failed to read input")]
    Read(#[source] io::Error),
    /// The array could not be written
    #[error("failed to write output")]
    Write(#[source] io::Error),
}

/// Write the out-of-line definition of `<symbol>::DATA`, filled from `input`.
///
/// Returns how many bytes were consumed from `input`.
///
/// # Errors
///
/// Read and write failures are reported separately so the caller can name
/// the file that failed.
pub fn write_array_definition<R: BufRead, W: Write>(
    symbol: &str,
    input: R,
    out: &mut W,
    options: &GenerateOptions,
) -> Result<u64, PayloadError> {
    writeln!(
        out,
        "const unsigned char {symbol}::DATA[{symbol}::DATA_SIZE] = {{"
    )
    .map_err(PayloadError::Write)?;

    let count = write_entries(input, out, options)?;

    let close: &[u8] = if count == 0 { b"};\n" } else { b"\n};\n" };
    out.write_all(close).map_err(PayloadError::Write)?;
    Ok(count)
}

/// Write every byte of `input` as a `0x..` entry followed by `, `.
///
/// Entries use lowercase hex without zero padding, so `0` is `0x0` and `255`
/// is `0xff`. The first entry is preceded by the configured indent, and a
/// newline plus the indent come before every entry whose index is a non-zero
/// multiple of the divider. Nothing at all is written for empty input.
///
/// # Errors
///
/// See [`write_array_definition`].
pub fn write_entries<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    options: &GenerateOptions,
) -> Result<u64, PayloadError> {
    let mut count: u64 = 0;

    for byte in input.bytes() {
        let byte = byte.map_err(PayloadError::Read)?;

        if count == 0 {
            out.write_all(options.indent.as_bytes())
                .map_err(PayloadError::Write)?;
        } else if options.breaks_before(count) {
            write!(out, "\n{}", options.indent).map_err(PayloadError::Write)?;
        }
        write!(out, "0x{byte:x}, ").map_err(PayloadError::Write)?;

        count += 1;
    }

    Ok(count)
}
