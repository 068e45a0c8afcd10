use num_traits::ToPrimitive;

use crate::colors::Rgb;
use crate::domain::{Domain, Segment};
use crate::error::{ColorError, Result};
use crate::palette::Palette;

/// A domain paired with a palette, reusable across many values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    domain: Domain,
    palette: Palette,
}

impl Gradient {
    pub fn new<T: ToPrimitive>(domain: &[T], palette: Palette) -> Result<Gradient> {
        Ok(Gradient {
            domain: Domain::new(domain)?,
            palette,
        })
    }

    pub fn from_domain(domain: Domain, palette: Palette) -> Gradient {
        Gradient { domain, palette }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The colour pair a segment blends between, after inversion.
    fn segment_colors(&self, segment: Segment) -> (Rgb, Rgb) {
        let palette = if self.domain.is_inverted() {
            self.palette.swapped()
        } else {
            self.palette
        };

        match segment {
            Segment::Whole => (palette.start, palette.end),
            Segment::Lower => (palette.start, palette.middle),
            Segment::Upper => (palette.middle, palette.end),
        }
    }

    pub fn rgb_at(&self, value: f64) -> Rgb {
        let clamped = self.domain.clamp(value);
        let segment = self.domain.segment(clamped);
        let (from, to) = self.segment_colors(segment);
        let s = self.domain.distance_fraction(segment, clamped);

        let color = from.lerp(to, s);
        log::trace!("value {} ({:?}, s = {}) -> {}", value, segment, s, color);
        color
    }

    pub fn color_at<V: ToPrimitive>(&self, value: V) -> Result<Rgb> {
        Ok(self.rgb_at(to_finite_f64(value)?))
    }

    pub fn hex_color_at<V: ToPrimitive>(&self, value: V) -> Result<String> {
        self.color_at(value).map(Rgb::to_hex)
    }

    /// Colours for a whole column of values, failing on the first bad one.
    pub fn hex_colors<V: ToPrimitive + Copy>(&self, values: &[V]) -> Result<Vec<String>> {
        values.iter().map(|&v| self.hex_color_at(v)).collect()
    }
}

fn to_finite_f64<V: ToPrimitive>(value: V) -> Result<f64> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or(ColorError::InvalidValue)
}

/// One value measured against one gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientInterpolator {
    value: f64,
    gradient: Gradient,
}

impl GradientInterpolator {
    pub fn new<V: ToPrimitive, T: ToPrimitive>(
        value: V,
        domain: &[T],
        palette: Palette,
    ) -> Result<GradientInterpolator> {
        Ok(GradientInterpolator {
            value: to_finite_f64(value)?,
            gradient: Gradient::new(domain, palette)?,
        })
    }

    pub fn with_default_palette<V: ToPrimitive, T: ToPrimitive>(
        value: V,
        domain: &[T],
    ) -> Result<GradientInterpolator> {
        GradientInterpolator::new(value, domain, Palette::default())
    }

    pub fn with_gradient<V: ToPrimitive>(
        value: V,
        gradient: Gradient,
    ) -> Result<GradientInterpolator> {
        Ok(GradientInterpolator {
            value: to_finite_f64(value)?,
            gradient,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn compute_rgb(&self) -> Rgb {
        self.gradient.rgb_at(self.value)
    }

    /// `#rrggbb`, lower-case.
    pub fn compute_hex_color(&self) -> String {
        self.compute_rgb().to_hex()
    }

    pub fn hex_color(&self) -> String {
        self.compute_hex_color()
    }
}

#[cfg(test)]
#[path = "./gradient_test.rs"]
mod gradient_test;
