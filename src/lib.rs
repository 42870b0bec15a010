//! asciify library crate.
//!
//! Converts raster images into ASCII art for the terminal. The modules are
//! public so the binary and the integration tests share one pipeline.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod image_source;
pub mod options;
pub mod pipeline;
pub mod terminal;

pub use error::AsciiError;
pub use options::RenderOptions;
