//! ANSI control sequences used by the printer.

use crate::ascii::Rgb;

/// Fixed row count requested when resizing the terminal window.
pub const RESIZE_ROWS: u32 = 55;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Bold on a truecolor black background, used for uncolored rows.
pub const BLACK_BACKGROUND: &str = "\x1b[48;2;0;0;0;1m";

/// Ask the terminal to resize its window (xterm window op 8).
pub fn resize_window(rows: u32, cols: u32) -> String {
    format!("\x1b[8;{};{}t", rows, cols)
}

/// Move the cursor down `rows` lines.
pub fn cursor_down(rows: u32) -> String {
    format!("\x1b[{}B", rows)
}

/// 24-bit foreground color on a black background, bold.
pub fn color_code(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{};48;2;0;0;0;1m", color.r, color.g, color.b)
}
