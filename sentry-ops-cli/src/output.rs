//! # Output Formatting
//!
//! Formatted output helpers with consistent styling for user-facing
//! messages, plus the dialoguer theme used for interactive prompts.

use console::Style;
use dialoguer::theme::ColorfulTheme;
use owo_colors::OwoColorize;

/// Print a success message
pub fn print_success(message: &str) {
  println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  println!("{} {}", "⚠".yellow().bold(), message);
}

/// Returns the dialoguer theme for sentry-ops prompts
pub fn prompt_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    ..ColorfulTheme::default()
  }
}
