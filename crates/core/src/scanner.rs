use crate::normalize::ScanConfig;

/// The class of one boundary match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundaryKind {
    /// A whitespace run separating bare words.
    Whitespace,
    /// A quote character starting a quoted string.
    Quote(char),
    /// An open delimiter starting a nested group.
    GroupOpen,
    /// A close delimiter ending the innermost group.
    GroupClose,
}

/// One boundary: the matched literal, its class and its byte range in
/// the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Boundary<'a> {
    pub(crate) kind: BoundaryKind,
    pub(crate) literal: &'a str,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Walks an input string, yielding boundaries in order.
///
/// The cursor belongs to a single analysis pass: it starts at zero and
/// moves forward past each match. The state machine repositions it after
/// consuming a quoted span or a checked whitespace run, so the slices in
/// between are never re-matched.
pub(crate) struct BoundaryScanner<'a> {
    config: &'a ScanConfig,
    input: &'a str,
    cursor: usize,
}

impl<'a> BoundaryScanner<'a> {
    pub(crate) fn new(config: &'a ScanConfig, input: &'a str) -> Self {
        Self {
            config,
            input,
            cursor: 0,
        }
    }

    /// The next boundary at or after the cursor, advancing past it.
    pub(crate) fn next_boundary(&mut self) -> Option<Boundary<'a>> {
        let found = self.config.pattern().find_at(self.input, self.cursor)?;
        self.cursor = found.end();
        Some(Boundary {
            kind: self.classify(found.as_str()),
            literal: found.as_str(),
            start: found.start(),
            end: found.end(),
        })
    }

    pub(crate) fn position(&self) -> usize {
        self.cursor
    }

    pub(crate) fn seek(&mut self, position: usize) {
        self.cursor = position;
    }

    /// Attributes a match to its class. The literal classes are disjoint
    /// by construction, so only the whitespace run needs a character test.
    fn classify(&self, literal: &str) -> BoundaryKind {
        if literal.starts_with(char::is_whitespace) {
            return BoundaryKind::Whitespace;
        }
        if let Some(quote) = self.config.quote_char(literal) {
            return BoundaryKind::Quote(quote);
        }
        if self.config.is_open(literal) {
            BoundaryKind::GroupOpen
        } else {
            BoundaryKind::GroupClose
        }
    }
}
