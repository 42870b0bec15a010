//! CLI enum types for brightness method and character set options.

use clap::ValueEnum;

use crate::ascii;

/// Formula used to compute pixel brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BrightnessMethod {
    #[default]
    Average,
    Lightness,
    Luminosity,
}

impl From<BrightnessMethod> for ascii::Method {
    fn from(m: BrightnessMethod) -> Self {
        match m {
            BrightnessMethod::Average => ascii::Method::Average,
            BrightnessMethod::Lightness => ascii::Method::Lightness,
            BrightnessMethod::Luminosity => ascii::Method::Luminosity,
        }
    }
}

/// Glyph ramp for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    Full,
    Nums,
    #[default]
    Mid,
    #[value(name = "16bit")]
    Bits16,
    #[value(name = "8bit")]
    Bits8,
    Test,
}

impl From<CharacterSet> for ascii::Ramp {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Full => ascii::Ramp::Full,
            CharacterSet::Nums => ascii::Ramp::Nums,
            CharacterSet::Mid => ascii::Ramp::Mid,
            CharacterSet::Bits16 => ascii::Ramp::Bits16,
            CharacterSet::Bits8 => ascii::Ramp::Bits8,
            CharacterSet::Test => ascii::Ramp::Test,
        }
    }
}
