// SPDX-License-Identifier: LGPL-3.0-only

//! WCAG relative luminance, contrast ratio and contrast enforcement.
//!
//! Enforcement searches HSL lightness, keeping hue and saturation, and always
//! reaches the requested ratio when it is reachable at all. Against any
//! opaque background either white or black achieves at least `sqrt(21)`
//! (about 4.58), so WCAG AA (4.5) is always reachable.

use crate::color::Color;
use crate::space::Hsl;

/// WCAG AA minimum ratio for normal text.
pub const WCAG_AA: f64 = 4.5;
/// WCAG AA minimum ratio for large text and UI components.
pub const WCAG_AA_LARGE: f64 = 3.0;
/// WCAG AAA minimum ratio for normal text.
pub const WCAG_AAA: f64 = 7.0;
/// The ratio between pure white and pure black.
pub const MAX_RATIO: f64 = 21.0;

const SEARCH_STEPS: usize = 32;

fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.x, in `[0, 1]`. Alpha is ignored.
pub fn relative_luminance(color: Color) -> f64 {
    let r = linearize(color.r().unit());
    let g = linearize(color.g().unit());
    let b = linearize(color.b().unit());
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, in `[1, 21]`. Symmetric in its arguments.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether `ratio` satisfies `threshold`.
pub fn meets_minimum(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

fn with_lightness(candidate: Color, hsl: Hsl, l: f64) -> Color {
    Color::from_hsl(Hsl::new(hsl.h, hsl.s, l)).with_alpha(candidate.a())
}

/// Adjust `candidate` so its contrast against `background` is at least `minimum_ratio`.
///
/// Returns `candidate` unchanged when it already passes or when the background
/// is fully transparent. Otherwise the HSL lightness is moved towards white when
/// the candidate is the lighter of the two (towards black when it is darker),
/// falling back to the other direction if that extreme cannot reach the ratio.
/// The result is the passing color closest in lightness to the original.
/// When neither extreme passes, the extreme with the larger ratio is returned.
pub fn ensure_contrast(candidate: Color, background: Color, minimum_ratio: f64) -> Color {
    if background.is_transparent()
        || meets_minimum(contrast_ratio(candidate, background), minimum_ratio)
    {
        return candidate;
    }

    let hsl = candidate.to_hsl();
    let lighten_first = relative_luminance(candidate) >= relative_luminance(background);
    let targets = if lighten_first { [1.0, 0.0] } else { [0.0, 1.0] };

    for target in targets {
        let extreme = with_lightness(candidate, hsl, target);
        if !meets_minimum(contrast_ratio(extreme, background), minimum_ratio) {
            continue;
        }

        let (mut failing, mut passing) = (hsl.l, target);
        let mut best = extreme;
        for _ in 0..SEARCH_STEPS {
            let mid = (failing + passing) * 0.5;
            let trial = with_lightness(candidate, hsl, mid);
            if meets_minimum(contrast_ratio(trial, background), minimum_ratio) {
                best = trial;
                passing = mid;
            } else {
                failing = mid;
            }
        }

        log::trace!(
            "contrast adjusted {} -> {} against {} (ratio {:.2})",
            candidate,
            best,
            background,
            contrast_ratio(best, background)
        );
        return best;
    }

    let light = with_lightness(candidate, hsl, 1.0);
    let dark = with_lightness(candidate, hsl, 0.0);
    if contrast_ratio(light, background) >= contrast_ratio(dark, background) {
        light
    } else {
        dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(relative_luminance(Color::BLACK), 0.0, 1e-9));
        assert!(approx_eq(relative_luminance(Color::WHITE), 1.0, 1e-9));
        assert!(approx_eq(
            relative_luminance(Color::from_rgb8(255, 0, 0)),
            0.2126,
            1e-9
        ));
    }

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::WHITE, Color::BLACK);
        assert!(approx_eq(ratio, MAX_RATIO, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Color::from_rgb8(120, 40, 200);
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-9));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Color::from_rgb8(200, 50, 70);
        let b = Color::from_rgb8(20, 20, 100);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn meets_minimum_is_inclusive() {
        assert!(meets_minimum(4.5, WCAG_AA));
        assert!(!meets_minimum(4.49, WCAG_AA));
    }

    #[test]
    fn ensure_contrast_keeps_passing_colors() {
        let fg = Color::from_rgb8(10, 10, 10);
        assert_eq!(ensure_contrast(fg, Color::WHITE, WCAG_AA), fg);
    }

    #[test]
    fn ensure_contrast_darkens_on_light_background() {
        let fg = Color::from_rgb8(200, 200, 255);
        let adjusted = ensure_contrast(fg, Color::WHITE, WCAG_AA);
        assert!(contrast_ratio(adjusted, Color::WHITE) >= WCAG_AA);
        assert!(adjusted.to_hsl().l < fg.to_hsl().l);
    }

    #[test]
    fn ensure_contrast_lightens_on_dark_background() {
        let bg = Color::from_rgb8(30, 30, 30);
        let fg = Color::from_rgb8(60, 60, 90);
        let adjusted = ensure_contrast(fg, bg, WCAG_AA);
        assert!(contrast_ratio(adjusted, bg) >= WCAG_AA);
        assert!(adjusted.to_hsl().l > fg.to_hsl().l);
    }

    #[test]
    fn ensure_contrast_mid_gray_background() {
        let bg = Color::from_rgb8(119, 119, 119);
        let adjusted = ensure_contrast(bg, bg, WCAG_AA);
        assert!(contrast_ratio(adjusted, bg) >= WCAG_AA);
    }

    #[test]
    fn ensure_contrast_preserves_alpha() {
        let fg = Color::from_rgba8(240, 240, 240, 128);
        let adjusted = ensure_contrast(fg, Color::WHITE, WCAG_AA);
        assert_eq!(adjusted.a().value(), 128);
    }

    #[test]
    fn ensure_contrast_ignores_transparent_background() {
        let fg = Color::from_rgb8(250, 250, 250);
        assert_eq!(ensure_contrast(fg, Color::TRANSPARENT, WCAG_AA), fg);
    }

    #[test]
    fn ensure_contrast_unreachable_returns_best_extreme() {
        let bg = Color::from_rgb8(119, 119, 119);
        let adjusted = ensure_contrast(bg, bg, MAX_RATIO);
        assert!(adjusted == Color::WHITE || adjusted == Color::BLACK);
    }
}
