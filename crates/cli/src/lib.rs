//! Argtree CLI Library
//!
//! This crate provides the command-line interface for argtree, a configurable
//! argument analyser. It handles options resolution, tree rendering and the
//! interactive analysis prompt.
//!
//! # Key Features
//!
//! - **Interactive Prompt**: Reads lines from standard input and renders each analysed tree
//! - **One-shot Analysis**: Analyses a single input argument and exits
//! - **Configurable Options**: Analyser options from a YAML file or inline flags
//! - **Micro-benchmark**: Built-in timing ladder for the analyser engine
//!
//! # Architecture
//!
//! The CLI is organized into several key modules:
//!
//! - [`cli_args`]: Command-line argument parsing and options-source resolution
//! - [`output`]: Terminal rendering of argument trees and analysis errors
//! - [`bench`]: Micro-benchmark comparing one-shot and reused analysis
//!
//! # Examples
//!
//! The CLI binary (`argt`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - reads lines from stdin
//! argt
//!
//! # One-shot analysis of a single input
//! argt 'translate "Hello world !" in [french spanish]'
//!
//! # Inline options
//! argt --quotes simple --group '<<' '>>' 'a <<b c>>'
//!
//! # Options from a YAML file
//! argt --options-path ./options.yml 'a [b]'
//!
//! # Run the micro-benchmark
//! argt --bench
//! ```

pub mod bench;
pub mod cli_args;
pub mod output;
