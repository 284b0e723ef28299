//! Command-line argument parsing and options-source resolution.
//!
//! This module defines the command-line interface structure and resolves
//! the analyser options for an invocation, using the `clap` crate.

use clap::Parser;
use itertools::Itertools;
use log::{debug, info};

use argtree_core::config;
use argtree_core::error::{Error, Result};
use argtree_core::file_handling;
use argtree_core::options::{DelimiterPair, Options, Quotes};

/// Command-line arguments for the argtree CLI tool.
///
/// This structure defines all available command-line options and arguments
/// that can be passed to the `argt` binary. It supports both interactive and
/// one-shot analysis modes.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use argtree_cli::cli_args::Args;
///
/// // Parse arguments from command line
/// let args = Args::parse();
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the analyser options config file YAML.
    ///
    /// If not provided, defaults to `~/.argtree/options.yml` when that file
    /// exists. Cannot be combined with `--quotes` or `--group`.
    #[arg(long, short = 'o')]
    pub options_path: Option<String>,

    /// Which quote characters to recognise: none, simple, double or both.
    ///
    /// Cannot be combined with `--options-path`.
    #[arg(long, short = 'q')]
    pub quotes: Option<String>,

    /// A group delimiter pair, given as two values: OPEN CLOSE.
    ///
    /// Repeat the flag to register several pairs.
    /// Cannot be combined with `--options-path`.
    ///
    /// # Examples
    /// ```bash
    /// argt -g '[' ']' -g '(' ')' 'move [a (b c)]'
    /// ```
    #[arg(long, short = 'g', num_args(2), value_names = ["OPEN", "CLOSE"], action = clap::ArgAction::Append)]
    pub group: Vec<String>,

    /// Run the built-in micro-benchmark instead of analysing input.
    #[arg(long, action)]
    pub bench: bool,

    /// The input string to analyse.
    ///
    /// If not provided, interactive mode is used: lines are read from
    /// standard input and each one is analysed and rendered.
    #[arg(num_args(1))]
    pub input: Option<String>,
}

impl Args {
    /// Determines where the analyser options come from for this invocation.
    ///
    /// Validates that an options file and inline delimiter flags aren't
    /// mixed and returns the appropriate [`OptionsSource`].
    ///
    /// # Errors
    ///
    /// Returns an error if both `--options-path` and inline style flags are
    /// provided, as this is not allowed.
    pub fn get_source(&self) -> Result<OptionsSource> {
        determine_source(&self.options_path, &self.quotes, &self.group)
    }
}

/// Represents the source of the analyser options being used.
///
/// Options can be provided in three different ways, and these sources
/// cannot be mixed in a single invocation.
#[derive(PartialEq, Clone, Debug)]
pub enum OptionsSource {
    /// No options flags provided, will use the default options file or the
    /// built-in demo set
    Default,
    /// An options file path provided with -o/--options-path
    File(String),
    /// Inline style flags provided with --quotes and/or --group
    Inline {
        quotes: Option<String>,
        group: Vec<String>,
    },
}

/// Determines the options source based on the provided flag values.
///
/// Validates that a file path and inline style flags are not mixed and
/// returns the appropriate [`OptionsSource`].
///
/// # Arguments
///
/// * `options_path` - Optional path to an options YAML file
/// * `quotes` - Optional quote style name
/// * `group` - Flattened OPEN CLOSE values from repeated `--group` flags
///
/// # Returns
///
/// The determined options source, or an error if both kinds are provided.
///
/// # Errors
///
/// Returns [`Error::MixedOptionsSource`] if both a file path and inline
/// style flags are provided, as this is not allowed.
///
/// # Examples
///
/// ```rust
/// use argtree_cli::cli_args::{determine_source, OptionsSource};
///
/// // File path only
/// let source = determine_source(&Some("options.yml".to_string()), &None, &[]).unwrap();
///
/// // Inline flags only
/// let source = determine_source(&None, &Some("both".to_string()), &[]).unwrap();
///
/// // No flags
/// assert_eq!(determine_source(&None, &None, &[]).unwrap(), OptionsSource::Default);
/// ```
pub fn determine_source(
    options_path: &Option<String>,
    quotes: &Option<String>,
    group: &[String],
) -> Result<OptionsSource> {
    let using_file = options_path.is_some();
    let using_inline = quotes.is_some() || !group.is_empty();

    match (options_path, using_file, using_inline) {
        (_, true, true) => Err(Error::MixedOptionsSource),
        (Some(path), true, false) => Ok(OptionsSource::File(path.clone())),
        (_, false, true) => Ok(OptionsSource::Inline {
            quotes: quotes.clone(),
            group: group.to_vec(),
        }),
        _ => Ok(OptionsSource::Default),
    }
}

/// Resolves an [`OptionsSource`] into concrete analyser [`Options`].
///
/// A [`OptionsSource::File`] is loaded from YAML and must exist.
/// [`OptionsSource::Inline`] builds the options from the flag values.
/// [`OptionsSource::Default`] loads the default options file when present
/// and otherwise falls back to [`demo_options`].
///
/// # Errors
///
/// Returns an error if an explicit options file can't be read or parsed,
/// or if a quote style name is not recognised.
pub fn resolve_options(source: OptionsSource) -> Result<Options> {
    match source {
        OptionsSource::File(path) => {
            let options_path = config::get_options_path(&Some(path));
            debug!("Options path: `{}`", options_path);
            file_handling::load_options(&options_path)
        }
        OptionsSource::Inline { quotes, group } => {
            let quotes = match &quotes {
                Some(name) => parse_quote_style(name)?,
                None => Quotes::default(),
            };
            // `--group` takes exactly two values per occurrence, so the
            // flattened list always chunks into whole pairs.
            let group_delimiters = group
                .iter()
                .tuples()
                .map(|(open, close)| DelimiterPair::new(open, close))
                .collect();
            Ok(Options {
                group_delimiters,
                quotes,
            })
        }
        OptionsSource::Default => {
            let options_path = config::get_options_path(&None);
            debug!("Options path: `{}`", options_path);
            match file_handling::load_options_if_exists(&options_path)? {
                Some(options) => {
                    info!("Loaded options from `{}`", options_path);
                    Ok(options)
                }
                None => {
                    info!(
                        "No options file at `{}`; using the built-in demo options",
                        options_path
                    );
                    Ok(demo_options())
                }
            }
        }
    }
}

/// Parses a quote style name given on the command line.
///
/// # Errors
///
/// Returns [`Error::UnknownQuoteStyle`] if the name is not one of
/// `none`, `simple`, `double` or `both`.
pub fn parse_quote_style(name: &str) -> Result<Quotes> {
    Ok(match name.to_lowercase().as_str() {
        "none" => Quotes::None,
        "simple" => Quotes::Simple,
        "double" => Quotes::Double,
        "both" => Quotes::Both,
        _ => return Err(Error::UnknownQuoteStyle(name.to_string())),
    })
}

/// The options used by the interactive prompt and the benchmark when no
/// options file or inline flags are given: both quote kinds and the three
/// bracket pairs.
pub fn demo_options() -> Options {
    Options {
        group_delimiters: vec![
            DelimiterPair::new("[", "]"),
            DelimiterPair::new("(", ")"),
            DelimiterPair::new("{", "}"),
        ],
        quotes: Quotes::Both,
    }
}
