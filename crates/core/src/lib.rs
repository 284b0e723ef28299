//! Argtree Core Library
//!
//! This crate provides the core functionality for argtree, a small parsing
//! engine that turns a command-line-style string into an ordered tree of
//! arguments: bare words split on whitespace, quoted strings with escaped
//! quotes unescaped, and recursively nested groups opened and closed by
//! configurable delimiter pairs.
//!
//! # Key Features
//!
//! - **Configurable Delimiters**: Any number of open/close pairs, possibly
//!   multi-character, validated for collisions at construction
//! - **Quoted Strings**: Single and double quotes with backslash-escape
//!   handling, selectable per analyser
//! - **Spacing Rule**: Quoted strings and closed groups must be followed by
//!   whitespace, end of input or a close delimiter
//! - **Reusable Engine**: Normalize options once, analyse many inputs; a
//!   one-shot path is provided for single uses
//! - **Error Handling**: Plain-data scan errors carrying byte offsets into
//!   the analysed input
//!
//! # Examples
//!
//! Analysing a string with bracket groups and double quotes:
//!
//! ```
//! use argtree_core::analyser::Analyser;
//! use argtree_core::options::Options;
//!
//! let options = Options {
//!     group_delimiters: vec![("[", "]").into()],
//!     ..Options::default()
//! };
//!
//! let analyser = Analyser::new(&options)?;
//! let items = analyser.analyse("translate \"Hello world !\" in [french spanish]")?;
//! assert_eq!(items.len(), 4);
//! # Ok::<(), argtree_core::error::Error>(())
//! ```

pub mod analyser;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod items;
pub mod options;

mod normalize;
mod scanner;
