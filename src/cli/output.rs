//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("  {label:<18} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("✓ {message}");
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("⚠ {message}");
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}
