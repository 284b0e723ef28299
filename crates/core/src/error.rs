use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Structural analysis failures. All offsets are byte positions into the
/// analysed input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("The group or quote opened at byte {} is never closed.", .open_at)]
    UnclosedGroup { open_at: usize },

    #[error("The close delimiter at byte {} does not match any open group.", .at)]
    UnexpectedCloseGroup { at: usize },

    #[error("Expected whitespace, end of input or a close delimiter at byte {}.", .at)]
    NoSpaceAfterGroup { at: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Invalid delimiter: delimiters may not be empty.")]
    EmptyDelimiter,

    #[error("Invalid delimiter `{}`: delimiters may not contain whitespace.", _0)]
    DelimiterWithWhitespace(String),

    #[error("Found a non-unique delimiter or quote: `{}`", _0)]
    DuplicateDelimiter(String),

    #[error("Error compiling the boundary pattern: {}", _0)]
    Pattern(regex::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Unknown quote style: \"{}\"", _0)]
    UnknownQuoteStyle(String),

    #[error("An options file and inline delimiter flags may not be combined.")]
    MixedOptionsSource,
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
