//! Glyph ramp presets for ASCII rendering.
//!
//! Every ramp is ordered from darkest (space) to brightest.

use serde::Deserialize;

/// Long ramp with 69 levels.
pub const FULL_RAMP: &str =
    " .'`^\",-~:;!+><i?l][}{1)(|\\/tfjrxnuvczIXYUJCLQ0OZmwqpdbkhao*&8%B$@#MW";

/// Punctuation followed by digits (19 levels).
pub const NUMS_RAMP: &str = " .,'`^/*!1723569059";

/// Default ramp (26 levels).
pub const MID_RAMP: &str = " .'`^\":;-=+*><]}tfdbO0$@#W";

/// 16 levels.
pub const RAMP_16: &str = " .-:!*+=xm%$2#@W";

/// 8 levels.
pub const RAMP_8: &str = " .,:ilwW";

/// Small ramp for eyeballing the mapping (11 levels).
pub const TEST_RAMP: &str = " .\"*:!o%0@#";

/// Named glyph ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Ramp {
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "nums")]
    Nums,
    #[default]
    #[serde(rename = "mid")]
    Mid,
    #[serde(rename = "16bit")]
    Bits16,
    #[serde(rename = "8bit")]
    Bits8,
    #[serde(rename = "test")]
    Test,
}

impl Ramp {
    /// The ramp's glyphs as a string, darkest first.
    pub fn as_str(&self) -> &'static str {
        match self {
            Ramp::Full => FULL_RAMP,
            Ramp::Nums => NUMS_RAMP,
            Ramp::Mid => MID_RAMP,
            Ramp::Bits16 => RAMP_16,
            Ramp::Bits8 => RAMP_8,
            Ramp::Test => TEST_RAMP,
        }
    }

    /// The ramp's glyphs, darkest first.
    pub fn glyphs(&self) -> Vec<char> {
        self.as_str().chars().collect()
    }

    /// Name as accepted on the command line and in the config file.
    pub fn name(&self) -> &'static str {
        match self {
            Ramp::Full => "full",
            Ramp::Nums => "nums",
            Ramp::Mid => "mid",
            Ramp::Bits16 => "16bit",
            Ramp::Bits8 => "8bit",
            Ramp::Test => "test",
        }
    }
}
