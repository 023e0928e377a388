//! # Output Formatting
//!
//! Formatted output functions with colors and emojis for the gate report.
//! Success and info lines go to stdout, errors to stderr.

use owo_colors::{OwoColorize, Stream, Style};
use tabled::settings::Style as TableStyle;
use tabled::{Table, Tabled};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Set the global color override for this run
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      ColorMode::Auto => {
        // Let owo_colors detect the terminal on its own
      }
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!(
    "{} {}",
    check.if_supports_color(Stream::Stdout, |t| t.style(Style::new().green().bold())),
    message
  );
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!(
    "{} {}",
    cross.if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
    message
  );
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!(
    "{} {}",
    info.if_supports_color(Stream::Stdout, |t| t.style(Style::new().blue().bold())),
    message
  );
}

/// Print a section header
pub fn print_header(header: &str) {
  println!(
    "\n{}\n",
    header.if_supports_color(Stream::Stdout, |t| t.style(Style::new().blue().bold().underline()))
  );
}

/// One line of the parameter table
#[derive(Tabled)]
struct ParameterRow<'a> {
  #[tabled(rename = "Parameter")]
  name: &'a str,
  #[tabled(rename = "Value")]
  value: &'a str,
}

/// Render name/value pairs as a table
pub fn format_parameters(parameters: &[(&str, &str)]) -> String {
  let rows = parameters.iter().map(|&(name, value)| ParameterRow { name, value });

  let mut table = Table::new(rows);
  table.with(TableStyle::rounded());
  table.to_string()
}

/// Print name/value pairs as a table
pub fn print_parameters(parameters: &[(&str, &str)]) {
  println!("{}", format_parameters(parameters));
}
