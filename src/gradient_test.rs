use proptest::{prop_assert, prop_assert_eq, proptest};

use super::{Gradient, GradientInterpolator};
use crate::colors::Rgb;
use crate::error::ColorError;
use crate::palette::Palette;

const MAX_END: &str = "#0ea5e9";
const MAX_START: &str = "#f87171";
const MIDDLE: &str = "#ffffff";
const MIDDLE_PURPLE: &str = "#838bad";

fn hex(value: f64, domain: &[f64]) -> String {
    GradientInterpolator::with_default_palette(value, domain)
        .unwrap()
        .compute_hex_color()
}

fn hex_with(value: f64, domain: &[f64], palette: Palette) -> String {
    GradientInterpolator::new(value, domain, palette)
        .unwrap()
        .compute_hex_color()
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..]
            .bytes()
            .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c))
}

#[test]
fn test_three_point_colors() {
    assert_eq!(hex(1.0, &[0.0, 1.0, 2.0]), MIDDLE);
    assert_eq!(hex(2.0, &[0.0, 1.0, 2.0]), MAX_END);
    assert_eq!(hex(0.0, &[0.0, 1.0, 2.0]), MAX_START);

    assert_eq!(hex(2.0, &[0.0, 2.0, 4.0]), MIDDLE);
    assert_eq!(hex(4.0, &[0.0, 2.0, 4.0]), MAX_END);
    assert_eq!(hex(0.0, &[0.0, 2.0, 4.0]), MAX_START);
}

#[test]
fn test_reversed_domain() {
    assert_eq!(hex(1.0, &[2.0, 1.0, 0.0]), MIDDLE);
    assert_eq!(hex(0.0, &[2.0, 1.0, 0.0]), MAX_END);
    assert_eq!(hex(2.0, &[2.0, 1.0, 0.0]), MAX_START);

    assert_eq!(hex(0.0, &[2.0, 0.0]), MAX_END);
    assert_eq!(hex(2.0, &[2.0, 0.0]), MAX_START);
}

#[test]
fn test_non_linear_midpoint() {
    assert_eq!(hex(2.5, &[0.0, 2.5, 3.0]), MIDDLE);
}

#[test]
fn test_upper_half_blend() {
    // Halfway between white and blue: 255 * 0.5 + 14 * 0.5 = 134.5 -> 134.
    assert_eq!(hex(3.0, &[0.0, 2.0, 4.0]), "#86d2f4");
}

#[test]
fn test_clamping() {
    assert_eq!(hex(-5.0, &[0.0, 2.0]), hex(0.0, &[0.0, 2.0]));
    assert_eq!(hex(100.0, &[0.0, 2.0]), hex(2.0, &[0.0, 2.0]));
    assert_eq!(hex(0.0, &[0.0, 2.0]), MAX_START);
    assert_eq!(hex(2.0, &[0.0, 2.0]), MAX_END);
}

#[test]
fn test_custom_hex_colors() {
    let black = "#000000";

    let palette = Palette::default().middle(black).unwrap();
    assert_eq!(hex_with(1.0, &[0.0, 1.0, 2.0], palette), black);

    let palette = Palette::default().end(black).unwrap();
    assert_eq!(hex_with(2.0, &[0.0, 1.0, 2.0], palette), black);

    let palette = Palette::default().start(black).unwrap();
    assert_eq!(hex_with(0.0, &[0.0, 1.0, 2.0], palette), black);
}

#[test]
fn test_custom_rgb_colors() {
    let green = [22u8, 163, 74];

    let palette = Palette::default().middle(green).unwrap();
    assert_eq!(hex_with(1.0, &[0.0, 1.0, 2.0], palette), "#16a34a");

    let palette = Palette::default().end(green).unwrap();
    assert_eq!(hex_with(2.0, &[0.0, 1.0, 2.0], palette), "#16a34a");

    let palette = Palette::default().start(green).unwrap();
    assert_eq!(hex_with(0.0, &[0.0, 1.0, 2.0], palette), "#16a34a");

    let palette = Palette::default().positive(green).unwrap();
    assert_eq!(hex_with(2.0, &[0.0, 2.0], palette), "#16a34a");
}

#[test]
fn test_two_item_domain() {
    let palette = Palette::default().start("#ffffff").unwrap();
    assert_eq!(hex_with(0.0, &[0.0, 1.0], palette), MIDDLE);

    assert_eq!(hex(1.0, &[0.0, 1.0]), MAX_END);
    assert_eq!(hex(0.5, &[0.0, 1.0]), MIDDLE_PURPLE);
}

#[test]
fn test_two_item_domain_ignores_middle() {
    let palette = Palette::default().middle("#000000").unwrap();
    assert_eq!(hex_with(0.5, &[0.0, 1.0], palette), MIDDLE_PURPLE);
}

#[test]
fn test_integer_inputs() {
    let color = GradientInterpolator::with_default_palette(1u8, &[0i64, 1, 2]).unwrap();

    assert_eq!(color.value(), 1.0);
    assert_eq!(color.hex_color(), MIDDLE);
    assert_eq!(color.compute_rgb(), Rgb::new(255, 255, 255));
}

#[test]
fn test_degenerate_domains() {
    assert_eq!(hex(3.0, &[3.0, 3.0]), MAX_START);
    assert_eq!(hex(0.0, &[0.0, 0.0, 2.0]), MAX_START);
    assert_eq!(hex(2.0, &[0.0, 2.0, 2.0]), MIDDLE);
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        GradientInterpolator::with_default_palette(f64::NAN, &[0.0, 1.0]),
        Err(ColorError::InvalidValue)
    ));
    assert!(matches!(
        GradientInterpolator::with_default_palette(1.0, &[1.0]),
        Err(ColorError::InvalidDomain { .. })
    ));
}

#[test]
fn test_gradient_hex_colors() {
    let gradient = Gradient::new(&[-20, 0, 20], Palette::default()).unwrap();
    let colors = gradient.hex_colors(&[-40, -20, 0, 20, 40]).unwrap();

    assert_eq!(colors, vec![MAX_START, MAX_START, MIDDLE, MAX_END, MAX_END]);
    assert!(gradient.hex_colors(&[0.0, f64::INFINITY]).is_err());
}

#[test]
fn test_with_gradient_matches_new() {
    let gradient = Gradient::new(&[0.0, 2.5, 3.0], Palette::default()).unwrap();

    for value in [-1.0, 0.0, 1.2, 2.5, 2.75, 3.0, 9.0] {
        let shared = GradientInterpolator::with_gradient(value, gradient).unwrap();
        assert_eq!(shared.hex_color(), hex(value, &[0.0, 2.5, 3.0]));
    }
}

proptest! {
    #[test]
    fn output_is_hex_color(value in -1e6..1e6f64, a in -1e3..1e3f64, b in -1e3..1e3f64, m in 0.0..1.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let middle = low + (high - low) * m;

        prop_assert!(is_hex_color(&hex(value, &[a, b])));
        prop_assert!(is_hex_color(&hex(value, &[low, middle, high])));
        prop_assert!(is_hex_color(&hex(value, &[high, middle, low])));
    }

    #[test]
    fn deterministic(value in -10.0..10.0f64, a in -5.0..5.0f64, b in -5.0..5.0f64) {
        prop_assert_eq!(hex(value, &[a, b]), hex(value, &[a, b]));
    }

    #[test]
    fn two_point_blend_stays_between_endpoints(value in 0.01..0.99f64) {
        let Rgb { red, green, blue } = GradientInterpolator::with_default_palette(value, &[0.0, 1.0])
            .unwrap()
            .compute_rgb();

        prop_assert!((14..=248).contains(&red));
        prop_assert!((113..=165).contains(&green));
        prop_assert!((113..=233).contains(&blue));
    }

    #[test]
    fn inversion_mirrors_extremes(a in -100.0..0.0f64, b in 1.0..100.0f64) {
        prop_assert_eq!(hex(a, &[a, b]), hex(b, &[b, a]));
        prop_assert_eq!(hex(b, &[a, b]), hex(a, &[b, a]));
    }
}
