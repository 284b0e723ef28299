use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Which quote characters open a quoted string.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Quotes {
    /// No quote handling; quote characters are ordinary text.
    None,
    /// Single quotes only (`'`).
    Simple,
    /// Double quotes only (`"`).
    Double,
    /// Single and double quotes.
    #[default]
    Both,
}

impl Quotes {
    pub fn chars(self) -> &'static [char] {
        match self {
            Self::None => &[],
            Self::Simple => &['\''],
            Self::Double => &['"'],
            Self::Both => &['\'', '"'],
        }
    }
}

/// One open/close delimiter pair. Literals may be multi-character; they
/// must be non-empty, whitespace-free and not collide with any other
/// configured literal or quote character.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DelimiterPair {
    pub open: String,
    pub close: String,
}

impl DelimiterPair {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }
}

impl From<(&str, &str)> for DelimiterPair {
    fn from((open, close): (&str, &str)) -> Self {
        Self::new(open, close)
    }
}

impl Display for DelimiterPair {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} {}", self.open, self.close)
    }
}

/// Analyser configuration. Every field has a default, so a sparse YAML
/// mapping (or `Options::default()`) is valid: no group delimiters, both
/// quote kinds.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    pub group_delimiters: Vec<DelimiterPair>,
    pub quotes: Quotes,
}
