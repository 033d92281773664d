/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[36m";

/// Grey `--` placeholder for an empty value, the value itself otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Chip-style label used by the card view, e.g. `[CYCLE: 12]`.
pub fn chip(label: &str, value: &str) -> String {
    format!("{CYAN}[{label}: {}{CYAN}]{RESET}", colorize_optional(value))
}
