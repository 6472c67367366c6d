//! Shared CLI output helpers for consistent operator-facing text.
//!
//! Progress banners and one-line diagnostics go to the console here; structured
//! logs go through `tracing`. Diagnostics follow the
//! `<Component> :: ERROR :: <message>` / `<Component> :: MSG :: <message>` shape.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

const SEPARATOR_SEGMENT: &str = "####################";

/// Build a horizontal separator of `size` segments.
#[must_use]
pub fn separator_line(size: usize) -> String {
    SEPARATOR_SEGMENT.repeat(size)
}

/// Print a horizontal separator of `size` segments.
pub fn separator(size: usize) {
    let line = separator_line(size);
    println!("{}", line.if_supports_color(Stream::Stdout, |t| t.dimmed()));
}

/// Print the application banner.
pub fn banner(title: &str) {
    separator(3);
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
    separator(3);
}

/// Open a section with a separator and a title line.
pub fn section(title: &str) {
    separator(2);
    println!("{title}");
}

/// Close a section.
pub fn section_end() {
    separator(2);
}

/// Print a successful status line.
pub fn success(message: &str) {
    println!("{}", message.if_supports_color(Stream::Stdout, |t| t.green()));
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}

/// Print multi-line preformatted text.
pub fn lines(text: impl Display) {
    println!("{text}");
}

/// Print a component message diagnostic.
pub fn message(component: &str, message: impl Display) {
    println!("{}", diagnostic_line(component, "MSG", message));
}

/// Print a component error diagnostic.
pub fn error(component: &str, message: impl Display) {
    let line = diagnostic_line(component, "ERROR", message);
    eprintln!("{}", line.if_supports_color(Stream::Stderr, |t| t.red()));
}

/// Format a one-line diagnostic.
#[must_use]
pub fn diagnostic_line(component: &str, marker: &str, message: impl Display) -> String {
    format!("{component} :: {marker} :: {message}")
}
