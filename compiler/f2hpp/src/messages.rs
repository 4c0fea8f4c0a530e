//! Fixed text printed by the f2hpp binary

/// Printed to stderr when no arguments are given
pub const USAGE: &str = "Usage: f2hpp [-h | -v] [-f input | -o output]";

/// The flag reference printed by `-h`
pub const HELP: &str = concat!(
    "-h\t\tDisplay help information\n",
    "-v\t\tDisplay version information\n",
    "-f [input]\tSpecify input file path\n",
    "-o [output]\tSpecify output file path",
);

/// Printed under the version line
pub const WARRANTY: &str = "This is free software. There is NO warranty.";

/// Appended to the name and version to form the version line
pub const COPYRIGHT: &str = "Copyright (C) 2012 David Jolly";

/// Printed to stdout after a successful generation run
pub const SUCCESS: &str = "Operation successful.";

/// Printed to stderr after a failed generation run
pub const FAILURE: &str = "Operation failed.";
