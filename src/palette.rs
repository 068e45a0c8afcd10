use serde::{Deserialize, Serialize};

use crate::colors::{hex_to_rgb, Rgb};
use crate::error::Result;

/// Red.
pub const DEFAULT_START_COLOR: Rgb = Rgb::new(248, 113, 113);
/// White.
pub const DEFAULT_MIDDLE_COLOR: Rgb = Rgb::new(255, 255, 255);
/// Blue.
pub const DEFAULT_END_COLOR: Rgb = Rgb::new(14, 165, 233);

/// A colour as callers hand it in: a hex string or a channel triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Hex(String),
    Rgb([u8; 3]),
}

impl ColorInput {
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            ColorInput::Hex(hex) => hex_to_rgb(hex),
            ColorInput::Rgb(channels) => Ok(Rgb::from(*channels)),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(hex: &str) -> Self {
        ColorInput::Hex(hex.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(hex: String) -> Self {
        ColorInput::Hex(hex)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(channels: [u8; 3]) -> Self {
        ColorInput::Rgb(channels)
    }
}

impl From<Rgb> for ColorInput {
    fn from(color: Rgb) -> Self {
        ColorInput::Rgb(color.to_array())
    }
}

/// The three gradient stops. `negative`, `neutral` and `positive` are
/// aliases for `start`, `middle` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub start: Rgb,
    pub middle: Rgb,
    pub end: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            start: DEFAULT_START_COLOR,
            middle: DEFAULT_MIDDLE_COLOR,
            end: DEFAULT_END_COLOR,
        }
    }
}

impl Palette {
    pub fn new(
        start: impl Into<ColorInput>,
        middle: impl Into<ColorInput>,
        end: impl Into<ColorInput>,
    ) -> Result<Palette> {
        Ok(Palette {
            start: start.into().to_rgb()?,
            middle: middle.into().to_rgb()?,
            end: end.into().to_rgb()?,
        })
    }

    /// Omitted colours fall back to the defaults.
    pub fn from_inputs(
        start: Option<&ColorInput>,
        middle: Option<&ColorInput>,
        end: Option<&ColorInput>,
    ) -> Result<Palette> {
        let resolve = |input: Option<&ColorInput>, default: Rgb| match input {
            Some(input) => input.to_rgb(),
            None => Ok(default),
        };

        Ok(Palette {
            start: resolve(start, DEFAULT_START_COLOR)?,
            middle: resolve(middle, DEFAULT_MIDDLE_COLOR)?,
            end: resolve(end, DEFAULT_END_COLOR)?,
        })
    }

    pub fn start(mut self, color: impl Into<ColorInput>) -> Result<Palette> {
        self.start = color.into().to_rgb()?;
        Ok(self)
    }

    pub fn middle(mut self, color: impl Into<ColorInput>) -> Result<Palette> {
        self.middle = color.into().to_rgb()?;
        Ok(self)
    }

    pub fn end(mut self, color: impl Into<ColorInput>) -> Result<Palette> {
        self.end = color.into().to_rgb()?;
        Ok(self)
    }

    pub fn negative(self, color: impl Into<ColorInput>) -> Result<Palette> {
        self.start(color)
    }

    pub fn neutral(self, color: impl Into<ColorInput>) -> Result<Palette> {
        self.middle(color)
    }

    pub fn positive(self, color: impl Into<ColorInput>) -> Result<Palette> {
        self.end(color)
    }

    /// Start and end colours traded, used for inverted domains.
    pub fn swapped(self) -> Palette {
        Palette {
            start: self.end,
            middle: self.middle,
            end: self.start,
        }
    }
}

#[cfg(test)]
#[path = "./palette_test.rs"]
mod palette_test;
