use crate::error::{Error, ScanError};
use crate::items::ArgItem;
use crate::normalize::ScanConfig;
use crate::options::Options;
use crate::scanner::{BoundaryKind, BoundaryScanner};

/// One level of group nesting under construction.
struct ScanFrame {
    /// The literal that opened this frame; `None` only for the root.
    open: Option<String>,
    /// Byte offset of the opener, reported when the frame is never closed.
    open_at: usize,
    content: Vec<ArgItem>,
}

impl ScanFrame {
    fn root() -> Self {
        Self {
            open: None,
            open_at: 0,
            content: Vec::new(),
        }
    }

    fn group(open: &str, open_at: usize) -> Self {
        Self {
            open: Some(open.to_string()),
            open_at,
            content: Vec::new(),
        }
    }
}

/// Single-pass tree construction: walks the boundaries of one input and
/// maintains the frame stack, the scanner cursor and the start of the
/// pending literal slice. Nesting uses the explicit stack, never
/// recursive calls, so depth is bounded only by memory.
struct TreeBuilder<'a> {
    config: &'a ScanConfig,
    input: &'a str,
    scanner: BoundaryScanner<'a>,
    frames: Vec<ScanFrame>,
    last_boundary: usize,
}

impl<'a> TreeBuilder<'a> {
    fn new(config: &'a ScanConfig, input: &'a str) -> Self {
        Self {
            config,
            input,
            scanner: BoundaryScanner::new(config, input),
            frames: vec![ScanFrame::root()],
            last_boundary: 0,
        }
    }

    fn run(mut self) -> Result<Vec<ArgItem>, ScanError> {
        while let Some(boundary) = self.scanner.next_boundary() {
            match boundary.kind {
                BoundaryKind::Whitespace => {
                    self.flush_pending(boundary.start);
                    self.last_boundary = boundary.end;
                }
                BoundaryKind::Quote(quote) => self.quoted_string(quote, boundary.start)?,
                BoundaryKind::GroupOpen => {
                    self.open_group(boundary.literal, boundary.start, boundary.end);
                }
                BoundaryKind::GroupClose => self.close_group(boundary.literal, boundary.start)?,
            }
        }

        self.flush_pending(self.input.len());

        // The stack always holds at least the root frame; anything above
        // it at this point was opened and never closed.
        match self.frames.pop() {
            Some(root) if self.frames.is_empty() => Ok(root.content),
            Some(innermost) => Err(ScanError::UnclosedGroup {
                open_at: innermost.open_at,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Flushes `[last_boundary, upto)` as a bare word into the current
    /// frame. Empty slices are dropped, which collapses repeated
    /// whitespace and adjacent delimiters.
    fn flush_pending(&mut self, upto: usize) {
        let pending = &self.input[self.last_boundary..upto];
        if !pending.is_empty() {
            let word = ArgItem::word(pending);
            self.push_item(word);
        }
    }

    /// Appends an item to the current frame. String items with empty
    /// content are dropped, so an empty quoted string produces nothing.
    fn push_item(&mut self, item: ArgItem) {
        if let ArgItem::String { content, .. } = &item {
            if content.is_empty() {
                return;
            }
        }
        if let Some(current) = self.frames.last_mut() {
            current.content.push(item);
        }
    }

    /// Consumes a quoted span: finds the matching close quote (skipping
    /// backslash-escaped ones), pushes the unescaped content and moves
    /// the scanner past the closing quote. The pending slice before the
    /// quote is not flushed.
    fn quoted_string(&mut self, quote: char, open_at: usize) -> Result<(), ScanError> {
        let content_start = self.scanner.position();
        let Some(close_at) = find_closing_quote(self.input, content_start, quote) else {
            return Err(ScanError::UnclosedGroup { open_at });
        };

        let content = unescape_quotes(&self.input[content_start..close_at]);
        self.push_item(ArgItem::String {
            delimiter: quote.to_string(),
            content,
        });

        self.scanner.seek(close_at + quote.len_utf8());
        self.expect_space_after_group()
    }

    /// Opens a nested group. The pending slice is flushed first, so a
    /// word directly abutting an opener still becomes its own item.
    fn open_group(&mut self, literal: &str, at: usize, end: usize) {
        self.flush_pending(at);
        self.frames.push(ScanFrame::group(literal, at));
        self.last_boundary = end;
    }

    /// Closes the innermost group and appends it to its parent frame.
    fn close_group(&mut self, literal: &str, at: usize) -> Result<(), ScanError> {
        self.flush_pending(at);

        // The stack always holds at least the root frame.
        let Some(frame) = self.frames.pop() else {
            return Err(ScanError::UnexpectedCloseGroup { at });
        };

        let pair = match &frame.open {
            Some(open) if self.config.opener_for_close(literal) == Some(open.as_str()) => {
                self.config.pair_for_open(open)
            }
            _ => None,
        };
        // Popping the root (close with nothing open) or a mismatched
        // opener both land here.
        let Some(pair) = pair else {
            return Err(ScanError::UnexpectedCloseGroup { at });
        };

        let group = ArgItem::Group {
            delimiter: pair.clone(),
            content: frame.content,
        };

        // A frame with a matched opener is never the root, so its parent
        // is still on the stack.
        if let Some(parent) = self.frames.last_mut() {
            parent.content.push(group);
        }

        self.expect_space_after_group()
    }

    /// After a closed quote or group the input must continue with
    /// whitespace (consumed), a close delimiter (left for the scanner)
    /// or nothing at all.
    fn expect_space_after_group(&mut self) -> Result<(), ScanError> {
        let position = self.scanner.position();
        let rest = &self.input[position..];

        if rest.is_empty() {
            self.last_boundary = position;
            return Ok(());
        }

        let whitespace_len = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        if whitespace_len > 0 {
            self.scanner.seek(position + whitespace_len);
            self.last_boundary = position + whitespace_len;
            return Ok(());
        }

        if self.config.close_literal_at(self.input, position) {
            self.last_boundary = position;
            return Ok(());
        }

        Err(ScanError::NoSpaceAfterGroup { at: position })
    }
}

/// Byte offset of the next `quote` at or after `from` that is not
/// immediately preceded by a backslash. Only the one preceding character
/// is inspected, so a quote after a literal `\\` still counts as escaped.
fn find_closing_quote(input: &str, from: usize, quote: char) -> Option<usize> {
    let mut search = from;
    while let Some(found) = input[search..].find(quote) {
        let at = search + found;
        if !input[..at].ends_with('\\') {
            return Some(at);
        }
        search = at + quote.len_utf8();
    }
    None
}

/// Rewrites `\'` and `\"` to the bare quote character. Both quote
/// characters are always unescaped, whichever one delimited the span;
/// no other escape sequences are processed.
fn unescape_quotes(raw: &str) -> String {
    let mut unescaped = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(current) = chars.next() {
        if current == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '\'' || next == '"' {
                    unescaped.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        unescaped.push(current);
    }
    unescaped
}

/// A reusable analyser holding one normalized configuration.
///
/// Construction validates and compiles the configuration once; the
/// instance can then analyse any number of inputs. Analysis takes
/// `&self` and keeps all per-pass state (cursor, frame stack) on the
/// call stack, so consecutive calls cannot leak state into each other
/// and one instance may be shared across threads.
///
/// # Examples
///
/// ```
/// use argtree_core::analyser::Analyser;
/// use argtree_core::items::ArgItem;
/// use argtree_core::options::Options;
///
/// let options = Options {
///     group_delimiters: vec![("(", ")").into()],
///     ..Options::default()
/// };
/// let analyser = Analyser::new(&options)?;
///
/// let items = analyser.analyse("say (hello world)")?;
/// assert_eq!(items[0], ArgItem::word("say"));
/// assert_eq!(
///     items[1],
///     ArgItem::group(("(", ")"), vec![ArgItem::word("hello"), ArgItem::word("world")]),
/// );
/// # Ok::<(), argtree_core::error::Error>(())
/// ```
pub struct Analyser {
    config: ScanConfig,
}

impl Analyser {
    /// Normalizes `options` into a ready-to-use analyser.
    ///
    /// # Errors
    ///
    /// Fails when the delimiter configuration is invalid (empty,
    /// whitespace-bearing or colliding literals) or the boundary pattern
    /// does not compile.
    pub fn new(options: &Options) -> Result<Self, Error> {
        Ok(Self {
            config: ScanConfig::new(options)?,
        })
    }

    /// Analyses one input string into an ordered argument tree.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] carrying the byte offset of the offending
    /// position: an unclosed quote or group, a close delimiter with no
    /// matching open group, or a violation of the spacing rule.
    pub fn analyse(&self, input: &str) -> Result<Vec<ArgItem>, ScanError> {
        TreeBuilder::new(&self.config, input).run()
    }

    /// One-shot convenience: builds a throwaway analyser for `options`,
    /// analyses `input` and discards the configuration. Produces exactly
    /// the same result as [`Analyser::new`] followed by
    /// [`analyse`](Analyser::analyse).
    pub fn analyse_once(input: &str, options: &Options) -> Result<Vec<ArgItem>, Error> {
        Ok(Self::new(options)?.analyse(input)?)
    }
}
