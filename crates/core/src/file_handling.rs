//! File handling for argtree options.
//!
//! This module provides functions for reading analyser options from YAML
//! files, including the optional options file at the default path.

use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::Options;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads analyser options from a YAML file.
///
/// All fields of the options mapping are optional; a file containing
/// `{}` yields the defaults (no group delimiters, both quote kinds).
///
/// # Arguments
///
/// * `options_path` - Path to the options YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
///
/// # Examples
///
/// ```no_run
/// use argtree_core::file_handling::load_options;
///
/// let options = load_options("~/.argtree/options.yml")?;
/// println!("{} delimiter pairs", options.group_delimiters.len());
/// # Ok::<(), argtree_core::error::Error>(())
/// ```
pub fn load_options(options_path: &str) -> Result<Options> {
    let options_reader = get_reader("options", options_path)?;

    // This can't be shortcut with ? as serde's error type needs mapping onto ours
    let parsing_result: serde_yaml::Result<Options> = serde_yaml::from_reader(options_reader);

    match parsing_result {
        Ok(options) => Ok(options),
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "options".to_string(),
            options_path.to_string(),
            e,
        )),
    }
}

/// Loads analyser options from a YAML file that may not exist.
///
/// Returns `None` if there is no file at the path, which lets callers
/// fall back to other sources; any other failure is an error as in
/// [`load_options`].
pub fn load_options_if_exists(options_path: &str) -> Result<Option<Options>> {
    if !Path::exists(Path::new(options_path)) {
        return Ok(None);
    }

    load_options(options_path).map(Some)
}
