//! Emitters for the text surrounding the byte array
//!
//! Every generated file opens with a banner comment naming the file and the
//! tool that wrote it. The header then declares the data class inside an
//! include guard; the split layout's source file includes that header.

use std::io::{self, Write};

use crate::{artifact::ArtifactPlan, options::GenerateOptions};

/// Write the comment block at the top of a generated file
pub fn write_banner<W: Write>(out: &mut W, file_name: &str, tool_name: &str) -> io::Result<()> {
    write!(
        out,
        "/*\n * {file_name}\n * Automatically generated using {tool_name}\n */\n\n"
    )
}

/// Write the header up to and including the class declaration.
///
/// `size` becomes the value of `DATA_SIZE`. The guard stays open; close it
/// with [`write_header_close`] once anything else that belongs inside it has
/// been written.
pub fn write_header_open<W: Write>(
    out: &mut W,
    plan: &ArtifactPlan,
    size: u64,
    options: &GenerateOptions,
) -> io::Result<()> {
    let ArtifactPlan {
        header_name,
        symbol,
        guard,
        ..
    } = plan;
    let indent = &options.indent;

    write_banner(out, header_name, &options.tool_name)?;
    write!(out, "#ifndef {guard}\n#define {guard}\n\n")?;
    write!(out, "class {symbol} {{\npublic:\n\n")?;
    writeln!(out, "{indent}static const unsigned long DATA_SIZE = {size};")?;
    writeln!(out, "{indent}static const unsigned char DATA[];")?;
    write!(out, "\n}};\n\n")
}

/// Close the include guard opened by [`write_header_open`]
pub fn write_header_close<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "#endif")
}

/// Write the split layout's source preamble: banner and header include
pub fn write_source_open<W: Write>(
    out: &mut W,
    source_name: &str,
    plan: &ArtifactPlan,
    options: &GenerateOptions,
) -> io::Result<()> {
    write_banner(out, source_name, &options.tool_name)?;
    write!(out, "#include \"{}\"\n\n", plan.header_name)
}
