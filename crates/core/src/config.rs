//! Configuration path utilities for argtree.
//!
//! This module provides functions for resolving the options file path
//! and expanding shell variables like `~` in paths.

/// Default path for the analyser options file
const DEFAULT_OPTIONS_PATH: &str = "~/.argtree/options.yml";

/// Resolves the options file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the
/// default options path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `options_path_arg` - Optional custom options file path
///
/// # Returns
///
/// The resolved path to the options file
///
/// # Examples
///
/// ```
/// use argtree_core::config::get_options_path;
///
/// // Use default path
/// let default_path = get_options_path(&None);
///
/// // Use custom path
/// let custom_path = get_options_path(&Some("/path/to/options.yml".to_string()));
/// ```
pub fn get_options_path(options_path_arg: &Option<String>) -> String {
    let options_path = match options_path_arg {
        Some(options_path) => options_path,
        None => DEFAULT_OPTIONS_PATH,
    };

    shellexpand::tilde(options_path).to_string()
}
