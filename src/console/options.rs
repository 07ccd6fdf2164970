use std::fmt;

use crate::board::RenderStyle;

/// Error type for command-line flag parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    UnknownFlag(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::UnknownFlag(flag) => {
                write!(f, "Unknown option '{flag}' (expected --ascii, --unicode or --no-board)")
            }
        }
    }
}

impl std::error::Error for OptionsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub style: RenderStyle,
    /// Redraw the board after every move
    pub show_board: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            style: RenderStyle::Ascii,
            show_board: true,
        }
    }
}

impl ConsoleOptions {
    /// Parse flags, program name excluded. Later flags override earlier ones.
    pub fn from_args<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            match arg.as_ref().trim().to_ascii_lowercase().as_str() {
                "--ascii" => options.style = RenderStyle::Ascii,
                "--unicode" => options.style = RenderStyle::Unicode,
                "--no-board" => options.show_board = false,
                _ => return Err(OptionsError::UnknownFlag(arg.as_ref().to_string())),
            }
        }
        Ok(options)
    }
}
