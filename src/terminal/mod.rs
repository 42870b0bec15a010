//! Terminal output: control sequences and the grid printer.

pub mod escape;
mod printer;

pub use printer::{format_header, format_row, print_grid};
