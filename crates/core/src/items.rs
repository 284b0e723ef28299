use crate::options::DelimiterPair;

/// One analysed argument: either a piece of text or a nested group.
///
/// The order of items mirrors their order in the input. Groups nest
/// recursively; their `content` holds the items between the delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgItem {
    /// A bare word (`delimiter` is empty) or a quoted string
    /// (`delimiter` is the quote character that delimited it).
    String { delimiter: String, content: String },
    /// The items enclosed by one open/close delimiter pair.
    Group {
        delimiter: DelimiterPair,
        content: Vec<ArgItem>,
    },
}

impl ArgItem {
    /// A bare word, produced by whitespace splitting.
    pub fn word(content: &str) -> Self {
        Self::String {
            delimiter: String::new(),
            content: content.to_string(),
        }
    }

    /// A quoted string delimited by `quote`.
    pub fn quoted(quote: char, content: &str) -> Self {
        Self::String {
            delimiter: quote.to_string(),
            content: content.to_string(),
        }
    }

    /// A group delimited by `pair`.
    pub fn group(pair: impl Into<DelimiterPair>, content: Vec<ArgItem>) -> Self {
        Self::Group {
            delimiter: pair.into(),
            content,
        }
    }
}
