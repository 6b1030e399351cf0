//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// The greeting line for a configured user name.
#[must_use]
pub fn greeting(name: &str) -> String {
    format!("Hello, {}", name.trim())
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print the greeting, if a name is configured.
pub fn print_greeting(name: Option<&str>) {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return;
    };
    let line = greeting(name);
    if is_color_disabled() {
        println!("{line}");
    } else {
        println!("{}", style(line).bold());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
