//! Resolved render settings.

use crate::ascii::{Method, Ramp};
use crate::cli::Args;
use crate::config::Config;

/// Target grid size used when neither the CLI nor the config sets one.
pub const DEFAULT_SIZE: (u32, u32) = (128, 128);

/// Settings for one conversion run, fixed once at startup.
///
/// Precedence is CLI > config file > built-in defaults. Boolean switches
/// are enabled if either the CLI or the config file turns them on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub size: (u32, u32),
    pub method: Method,
    pub ramp: Ramp,
    pub color: bool,
    pub invert: bool,
    pub quiet: bool,
    pub adjust: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            method: Method::default(),
            ramp: Ramp::default(),
            color: false,
            invert: false,
            quiet: false,
            adjust: false,
        }
    }
}

impl RenderOptions {
    pub fn resolve(args: &Args, config: &Config) -> Self {
        let render = &config.render;
        Self {
            size: args.size().or(render.size).unwrap_or(DEFAULT_SIZE),
            method: args
                .method
                .map(Method::from)
                .or(render.method)
                .unwrap_or_default(),
            ramp: args
                .characters
                .map(Ramp::from)
                .or(render.characters)
                .unwrap_or_default(),
            color: args.color || render.color,
            invert: args.invert || render.invert,
            quiet: args.quiet,
            adjust: args.adjust || render.adjust,
        }
    }
}
