use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb { red, green, blue }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Blend towards `other`; `s = 0` gives `self`, `s = 1` gives `other`.
    pub fn lerp(self, other: Rgb, s: f64) -> Rgb {
        Rgb {
            red: lerp_channel(self.red, other.red, s),
            green: lerp_channel(self.green, other.green, s),
            blue: lerp_channel(self.blue, other.blue, s),
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

pub fn lerp_f64(a: f64, b: f64, s: f64) -> f64 {
    a * (1.0 - s) + b * s
}

/// Truncates toward zero, then clamps into `0..=255`.
pub fn f64_channel_to_u8(channel: f64) -> u8 {
    channel.trunc().clamp(0.0, 255.0) as u8
}

pub fn lerp_channel(a: u8, b: u8, s: f64) -> u8 {
    f64_channel_to_u8(lerp_f64(f64::from(a), f64::from(b), s))
}

pub fn rgb_to_hex(color: Rgb) -> String {
    color.to_string()
}

/// Decode `#rrggbb` or `rrggbb`. Hex digits may be upper or lower case.
pub fn hex_to_rgb(input: &str) -> Result<Rgb> {
    let invalid = || ColorError::InvalidHex {
        input: input.to_string(),
    };

    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let segment = |ix: usize| u8::from_str_radix(&digits[ix..ix + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(segment(0)?, segment(2)?, segment(4)?))
}

#[cfg(test)]
#[path = "./colors_test.rs"]
mod colors_test;
