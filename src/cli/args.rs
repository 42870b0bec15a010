//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::{BrightnessMethod, CharacterSet};

/// Convert images into an ASCII image.
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert images into an ASCII image.", long_about = None)]
pub struct Args {
    /// Path to the file to convert to ASCII
    #[arg(value_name = "FILENAME")]
    pub file: PathBuf,

    /// Size of output image [default: 128 128]
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub size: Option<Vec<u32>>,

    /// Method used to calculate the brightness of each pixel [default: average]
    #[arg(short, long)]
    pub method: Option<BrightnessMethod>,

    /// Print the ASCII picture in color
    #[arg(short, long)]
    pub color: bool,

    /// Invert the image
    #[arg(short, long)]
    pub invert: bool,

    /// Suppress printing of the image
    #[arg(short, long)]
    pub quiet: bool,

    /// Character set to use [default: mid]
    #[arg(short = 'C', long)]
    pub characters: Option<CharacterSet>,

    /// Adjust brightness levels so the darkest pixel equals 0 and the lightest 255
    #[arg(short, long)]
    pub adjust: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Requested (width, height), if given on the command line.
    pub fn size(&self) -> Option<(u32, u32)> {
        match self.size.as_deref() {
            Some(&[width, height]) => Some((width, height)),
            _ => None,
        }
    }
}
