use num_traits::ToPrimitive;

use crate::error::{ColorError, Result};

/// The breakpoints a value is measured against.
///
/// Stored in ascending order; `inverted` records whether the caller gave
/// them descending, which swaps the start and end colours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    TwoPoint {
        min: f64,
        max: f64,
        inverted: bool,
    },
    ThreePoint {
        min: f64,
        middle: f64,
        max: f64,
        inverted: bool,
    },
}

/// The part of the domain a clamped value is interpolated over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Two-point domain, spans `[min, max]`.
    Whole,
    /// `[min, midpoint]`, midpoint inclusive.
    Lower,
    /// `(midpoint, max]`.
    Upper,
}

impl Domain {
    pub fn new<T: ToPrimitive>(points: &[T]) -> Result<Domain> {
        let points = points
            .iter()
            .map(|p| p.to_f64().filter(|p| p.is_finite()))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| ColorError::InvalidDomain {
                reason: "breakpoints must be finite numbers".to_string(),
            })?;

        match points.as_slice() {
            &[first, last] => {
                let inverted = first > last;
                let (min, max) = if inverted { (last, first) } else { (first, last) };
                Ok(Domain::TwoPoint { min, max, inverted })
            }
            &[first, middle, last] => {
                let inverted = first > last;
                let (min, max) = if inverted { (last, first) } else { (first, last) };
                Ok(Domain::ThreePoint {
                    min,
                    middle,
                    max,
                    inverted,
                })
            }
            _ => Err(ColorError::InvalidDomain {
                reason: format!("expected 2 or 3 breakpoints, got {}", points.len()),
            }),
        }
    }

    pub fn min(&self) -> f64 {
        match *self {
            Domain::TwoPoint { min, .. } | Domain::ThreePoint { min, .. } => min,
        }
    }

    pub fn max(&self) -> f64 {
        match *self {
            Domain::TwoPoint { max, .. } | Domain::ThreePoint { max, .. } => max,
        }
    }

    pub fn is_inverted(&self) -> bool {
        match *self {
            Domain::TwoPoint { inverted, .. } | Domain::ThreePoint { inverted, .. } => inverted,
        }
    }

    /// The given middle breakpoint, or the mean of the endpoints.
    pub fn midpoint(&self) -> f64 {
        match *self {
            Domain::TwoPoint { min, max, .. } => (min + max) / 2.0,
            Domain::ThreePoint { middle, .. } => middle,
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min() {
            self.min()
        } else if value > self.max() {
            self.max()
        } else {
            value
        }
    }

    /// Which segment `value` falls in. Expects a clamped value.
    pub fn segment(&self, value: f64) -> Segment {
        match self {
            Domain::TwoPoint { .. } => Segment::Whole,
            Domain::ThreePoint { .. } => {
                if value >= self.min() && value <= self.midpoint() {
                    Segment::Lower
                } else {
                    Segment::Upper
                }
            }
        }
    }

    pub fn segment_bounds(&self, segment: Segment) -> (f64, f64) {
        match segment {
            Segment::Whole => (self.min(), self.max()),
            Segment::Lower => (self.min(), self.midpoint()),
            Segment::Upper => (self.midpoint(), self.max()),
        }
    }

    /// Position of `value` within `segment` on a `0..=1` scale.
    ///
    /// A zero-width segment yields 0.
    pub fn distance_fraction(&self, segment: Segment, value: f64) -> f64 {
        let (low, high) = self.segment_bounds(segment);
        let span = high - low;
        if span == 0.0 {
            log::debug!("zero-width {:?} segment at {}, snapping to its start", segment, low);
            return 0.0;
        }
        ((value - low) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "./domain_test.rs"]
mod domain_test;
