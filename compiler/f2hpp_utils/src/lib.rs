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
    clippy::else_if_without_else,
    clippy::format_push_string,
    clippy::min_ident_chars,
    clippy::todo,
    clippy::unimplemented,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    missing_debug_implementations,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod io;
pub mod string_utils;
