use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_GREY: &str = "\x1b[90m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_CLOSED: &str = "⛔";

/// Severity of a titled notice (the CLI counterpart of a popup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Muted,
    Danger,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Success => (FG_GREEN, ICON_OK),
            Tone::Warning => (FG_YELLOW, ICON_WARN),
            Tone::Muted => (FG_GREY, ICON_CLOSED),
            Tone::Danger => (FG_RED, ICON_ERR),
        }
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Titled two-line notice: bold coloured title, plain body.
pub fn notice<T: fmt::Display>(tone: Tone, title: &str, body: T) {
    let (color, icon) = tone.style();
    println!("{}{}{} {}{}", color, BOLD, icon, title, RESET);
    println!("   {}", body);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}\n", FG_BLUE, BOLD, msg, RESET);
}
