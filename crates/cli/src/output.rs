//! Terminal rendering of analysed argument trees.
//!
//! Writes through any [`Write`] target so the rendering can be tested
//! against an in-memory buffer.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use argtree_core::error::{Result, ScanError};
use argtree_core::items::ArgItem;

/// One level of tree indentation.
const INDENT: &str = "│  ";

/// Width of the separator rules around each rendered tree.
const RULE_WIDTH: usize = 40;

/// Renders an analysed argument tree, one line per item.
///
/// Bare words and quoted strings print their delimiter (`∅` for the empty
/// bare-word delimiter) followed by their content. Groups print their
/// open and close literals and then their children one level deeper.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_tree<W: Write>(out: &mut W, items: &[ArgItem]) -> Result<()> {
    for item in items {
        print_item(out, item, 0)?;
    }
    out.flush()?;
    Ok(())
}

fn print_item<W: Write>(out: &mut W, item: &ArgItem, indent: usize) -> Result<()> {
    match item {
        ArgItem::String { delimiter, content } => {
            let delimiter = if delimiter.is_empty() {
                "∅"
            } else {
                delimiter.as_str()
            };
            print_branch(out, indent)?;
            queue!(
                out,
                SetForegroundColor(Color::DarkGreen),
                Print(delimiter),
                SetForegroundColor(Color::DarkRed),
                Print(format!("  {content}")),
                ResetColor,
                Print("\n")
            )?;
        }
        ArgItem::Group { delimiter, content } => {
            print_branch(out, indent)?;
            queue!(
                out,
                SetForegroundColor(Color::DarkGreen),
                Print(format!("{} {}", delimiter.open, delimiter.close)),
                ResetColor,
                Print("\n")
            )?;
            for child in content {
                print_item(out, child, indent + 1)?;
            }
        }
    }

    Ok(())
}

fn print_branch<W: Write>(out: &mut W, indent: usize) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print(INDENT.repeat(indent)),
        Print("├ "),
        ResetColor
    )?;
    Ok(())
}

/// Renders an analysis failure as a bold `Error` tag and the message.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_error<W: Write>(out: &mut W, error: &ScanError) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(Color::DarkRed),
        Print("Error"),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(Color::Red),
        Print(format!(" {error}")),
        ResetColor,
        Print("\n")
    )?;
    out.flush()?;
    Ok(())
}

/// Prints a full-width separator rule made of `rule` characters.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rule<W: Write>(out: &mut W, rule: char) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Yellow),
        Print(rule.to_string().repeat(RULE_WIDTH)),
        ResetColor,
        Print("\n")
    )?;
    out.flush()?;
    Ok(())
}

/// Prints the interactive mode banner.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    queue!(
        out,
        Print("\n"),
        SetAttribute(Attribute::Bold),
        Print("Write something then press ENTER\n"),
        Print("Ctrl+C to quit\n"),
        SetAttribute(Attribute::Reset)
    )?;
    print_rule(out, '=')
}
