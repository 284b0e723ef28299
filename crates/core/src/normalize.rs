use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::error::{Error, Result};
use crate::options::{DelimiterPair, Options};

/// Normalized, immutable form of [`Options`](crate::options::Options):
/// the resolved quote characters, the delimiter lookup maps and one
/// compiled pattern matching every boundary class.
///
/// The maps preserve declaration order, which decides which literal wins
/// when two of them could match at the same position (the pattern is a
/// leftmost-first alternation). Declare longer literals before shorter
/// prefixes of them.
pub(crate) struct ScanConfig {
    quotes: Vec<char>,
    left_to_pair: IndexMap<String, DelimiterPair>,
    right_to_left: IndexMap<String, String>,
    pattern: Regex,
}

impl ScanConfig {
    pub(crate) fn new(options: &Options) -> Result<Self> {
        validate_literals(options)?;

        let quotes = options.quotes.chars().to_vec();

        let mut left_to_pair = IndexMap::new();
        let mut right_to_left = IndexMap::new();
        for pair in &options.group_delimiters {
            left_to_pair.insert(pair.open.clone(), pair.clone());
            right_to_left.insert(pair.close.clone(), pair.open.clone());
        }

        let pattern = build_pattern(&quotes, &options.group_delimiters)?;
        debug!("boundary pattern: `{}`", pattern);

        Ok(Self {
            quotes,
            left_to_pair,
            right_to_left,
            pattern,
        })
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The quote character `literal` consists of, if it is one.
    pub(crate) fn quote_char(&self, literal: &str) -> Option<char> {
        let mut chars = literal.chars();
        match (chars.next(), chars.next()) {
            (Some(only), None) if self.quotes.contains(&only) => Some(only),
            _ => None,
        }
    }

    pub(crate) fn is_open(&self, literal: &str) -> bool {
        self.left_to_pair.contains_key(literal)
    }

    pub(crate) fn pair_for_open(&self, open: &str) -> Option<&DelimiterPair> {
        self.left_to_pair.get(open)
    }

    pub(crate) fn opener_for_close(&self, close: &str) -> Option<&str> {
        self.right_to_left.get(close).map(String::as_str)
    }

    /// Whether some close literal starts at byte `at` of `input`.
    pub(crate) fn close_literal_at(&self, input: &str, at: usize) -> bool {
        self.right_to_left
            .keys()
            .any(|close| input[at..].starts_with(close.as_str()))
    }
}

/// Delimiter literals must be non-empty, whitespace-free and unique
/// across open literals, close literals and quote characters: the
/// scanner attributes each match to exactly one class, so the classes
/// have to be disjoint, and a literal starting with whitespace would be
/// shadowed by the whitespace class.
fn validate_literals(options: &Options) -> Result<()> {
    let mut seen: HashSet<String> = options
        .quotes
        .chars()
        .iter()
        .map(|quote| quote.to_string())
        .collect();

    for pair in &options.group_delimiters {
        for literal in [&pair.open, &pair.close] {
            if literal.is_empty() {
                return Err(Error::EmptyDelimiter);
            }
            if literal.chars().any(char::is_whitespace) {
                return Err(Error::DelimiterWithWhitespace(literal.clone()));
            }
            if !seen.insert(literal.clone()) {
                return Err(Error::DuplicateDelimiter(literal.clone()));
            }
        }
    }

    Ok(())
}

/// One alternation over the boundary classes: a whitespace run, any
/// quote character, any open literal, any close literal. Empty classes
/// are omitted; with no quotes and no delimiters the pattern degenerates
/// to pure whitespace splitting.
fn build_pattern(quotes: &[char], pairs: &[DelimiterPair]) -> Result<Regex> {
    let mut classes = vec![String::from(r"\s+")];

    let literal_classes = [
        alternation(quotes.iter().map(ToString::to_string)),
        alternation(pairs.iter().map(|pair| pair.open.clone())),
        alternation(pairs.iter().map(|pair| pair.close.clone())),
    ];
    for class in literal_classes {
        if !class.is_empty() {
            classes.push(class);
        }
    }

    Regex::new(&classes.join("|")).map_err(Error::Pattern)
}

fn alternation(literals: impl Iterator<Item = String>) -> String {
    literals
        .map(|literal| regex::escape(&literal))
        .collect::<Vec<_>>()
        .join("|")
}
