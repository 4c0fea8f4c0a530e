#![doc=include_str!("../README.md")]
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::absolute_paths,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_structs_with_brackets,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::min_ident_chars,
    clippy::mixed_read_write_in_expression,
    clippy::multiple_inherent_impl,
    clippy::non_ascii_literal,
    clippy::redundant_type_annotations,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::semicolon_inside_block,
    clippy::unseparated_literal_suffix,
    clippy::implicit_clone,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    unused_crate_dependencies,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::module_name_repetitions
)]

mod build_info;
mod cli;
mod ice;
mod messages;

use std::{
    env,
    io::{self, Write},
    process,
};

use cli::{CliError, Command};
use f2hpp_codegen::{gen_file, GenerateOptions};
use messages::{FAILURE, HELP, SUCCESS, WARRANTY};

/// Exit status for `-h`, `-v` and command line errors
const EXIT_NOT_GENERATED: i32 = 1;

fn main() -> anyhow::Result<()> {
    ice::setup_panic_hook();

    let command = match cli::parse_args(env::args_os().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            match err {
                CliError::Usage => eprintln!("{err}"),
                CliError::UnknownCommand(_)
                | CliError::MissingOperand(_)
                | CliError::OrphanArgument(_) => eprintln!("{err}\n"),
            }
            process::exit(EXIT_NOT_GENERATED);
        }
    };

    let mut stdout = io::stdout().lock();
    match command {
        Command::ShowHelp => {
            write!(
                stdout,
                "{}\n{WARRANTY}\n\n{HELP}\n\n",
                build_info::version_line()
            )?;
            stdout.flush()?;
            process::exit(EXIT_NOT_GENERATED);
        }
        Command::ShowVersion => {
            write!(stdout, "{}\n{WARRANTY}\n\n", build_info::version_line())?;
            stdout.flush()?;
            process::exit(EXIT_NOT_GENERATED);
        }
        Command::Generate {
            input_path,
            output_path,
        } => {
            let options =
                GenerateOptions::default().with_tool_name(build_info::build::PROJECT_NAME);

            // a failed run still exits 0; only the printed status differs
            match gen_file(&input_path, &output_path, &options) {
                Ok(_) => writeln!(stdout, "{SUCCESS}")?,
                Err(err) => {
                    eprintln!("{err}");
                    eprintln!("{FAILURE}");
                }
            }
            writeln!(stdout)?;
        }
    }

    Ok(())
}
