// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convert between RGB and HSL. All inputs and outputs are normalized to `[0, 1]`,
//! including hue (`1.0` is a full turn, 360°).
//!
//! More info: <https://en.wikipedia.org/wiki/HSL_and_HSV#Color_conversion_formulae>

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Returns `(hue, saturation, lightness)`.
///
/// Achromatic colors (`max == min`) have no hue; by convention both hue and saturation
/// are `0`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let lightness = (max + min) / 2.0;
    let chroma = max - min;

    if chroma < f64::EPSILON {
        return (0.0, 0.0, lightness);
    }

    let saturation = if lightness > 0.5 {
        chroma / (2.0 - max - min)
    } else {
        chroma / (max + min)
    };

    // `max` is one of the three inputs, so exact comparison picks the sector.
    let sector = if max == red {
        (green - blue) / chroma + if green < blue { 6.0 } else { 0.0 }
    } else if max == green {
        (blue - red) / chroma + 2.0
    } else {
        (red - green) / chroma + 4.0
    };

    (normalize_hue(sector / 6.0), saturation, lightness)
}

/// Returns `(red, green, blue)`. Zero saturation yields the gray `(l, l, l)` exactly.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    if saturation <= 0.0 {
        return (lightness, lightness, lightness);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    (
        hue_to_channel(p, q, hue + ONE_THIRD),
        hue_to_channel(p, q, hue),
        hue_to_channel(p, q, hue - ONE_THIRD),
    )
}

fn hue_to_channel(p: f64, q: f64, hue: f64) -> f64 {
    let t = hue.rem_euclid(1.0);
    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}

/// Wrap into `[0, 1)`. `rem_euclid` can round a tiny negative up to exactly `1.0`.
fn normalize_hue(hue: f64) -> f64 {
    let it = hue.rem_euclid(1.0);
    if it >= 1.0 { 0.0 } else { it }
}
