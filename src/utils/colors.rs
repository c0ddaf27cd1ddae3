/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

use crate::core::window::WindowState;
use crate::models::roster::AttendanceStatus;

/// Present → green, Absent → red.
pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => GREEN,
        AttendanceStatus::Absent => RED,
    }
}

pub fn color_for_window(state: WindowState) -> &'static str {
    match state {
        WindowState::NotYetOpen => YELLOW,
        WindowState::Open => GREEN,
        WindowState::Closed => GREY,
    }
}

pub fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}
