//! Map a number inside a two- or three-point domain to a `#rrggbb` colour.
//!
//! ```
//! use number_to_color::{GradientInterpolator, Palette};
//!
//! let color = GradientInterpolator::new(1, &[0, 1, 2], Palette::default()).unwrap();
//! assert_eq!(color.compute_hex_color(), "#ffffff");
//! ```

pub mod colors;
pub mod config;
pub mod domain;
pub mod error;
pub mod gradient;
pub mod palette;

pub use colors::Rgb;
pub use config::GradientConfig;
pub use domain::Domain;
pub use error::{ColorError, Result};
pub use gradient::{Gradient, GradientInterpolator};
pub use palette::{
    ColorInput, Palette, DEFAULT_END_COLOR, DEFAULT_MIDDLE_COLOR, DEFAULT_START_COLOR,
};
