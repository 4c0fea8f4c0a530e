//! Generation options

use derive_more::Display;

/// The number of array entries written on each line of generated output
pub const DEFAULT_DIVIDER: u64 = 20;

/// The tool name written into the banner of every generated file
pub const DEFAULT_TOOL_NAME: &str = "f2hpp";

/// How the generated code is spread over output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OutputLayout {
    /// `<output>.hpp` declares the class, `<output>.cpp` defines the array
    #[display("split")]
    Split,
    /// `<output>` is one header containing both the class and the array
    #[display("inline")]
    Inline,
}

/// Configuration for a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Which files are produced
    pub layout: OutputLayout,
    /// Append a `_` to the include guard (`DATA_HPP_` instead of `DATA_HPP`)
    pub guard_trailing_underscore: bool,
    /// Array entries per line. Zero disables wrapping.
    pub divider: u64,
    /// Indentation used for class members and array lines
    pub indent: String,
    /// Name written into the "Automatically generated using" banner
    pub tool_name: String,
}

impl GenerateOptions {
    /// Options for `layout` using the guard convention that layout has
    /// always used: split headers carry a trailing underscore, inline
    /// headers do not.
    #[must_use]
    pub fn for_layout(layout: OutputLayout) -> Self {
        Self {
            layout,
            guard_trailing_underscore: layout == OutputLayout::Split,
            divider: DEFAULT_DIVIDER,
            indent: "\t".to_string(),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
        }
    }

    /// Replace the tool name written into generated banners
    #[must_use]
    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = tool_name.into();
        self
    }

    /// Whether a line break goes in front of the entry at `index`
    #[must_use]
    pub const fn breaks_before(&self, index: u64) -> bool {
        self.divider != 0 && index != 0 && index % self.divider == 0
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::for_layout(OutputLayout::Split)
    }
}
