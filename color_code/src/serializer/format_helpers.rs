// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One formatter per syntax. Output never contains whitespace, and hex digits are lower
//! case.

use crate::{Color, MAX_HUE_DEGREES, MAX_PERCENTAGE};

/// Decimal places kept when formatting alpha.
pub const ALPHA_PRECISION: usize = 6;

/// `#rrggbb`.
#[must_use]
pub fn format_hex(color: Color) -> String {
    let [red, green, blue] = color.rgb8();
    format!("#{red:02x}{green:02x}{blue:02x}")
}

/// `#rgb`, keeping the most significant digit of each byte: `#6f7f8f` -> `#678`.
#[must_use]
pub fn format_short_hex(color: Color) -> String {
    let [red, green, blue] = color.rgb8();
    format!("#{:x}{:x}{:x}", red >> 4, green >> 4, blue >> 4)
}

/// `rgb(r,g,b)`.
#[must_use]
pub fn format_css_rgb(color: Color) -> String {
    let [red, green, blue] = color.rgb8();
    format!("rgb({red},{green},{blue})")
}

/// `rgba(r,g,b,a)`.
#[must_use]
pub fn format_css_rgba(color: Color) -> String {
    let [red, green, blue] = color.rgb8();
    let alpha = format_alpha(color.alpha());
    format!("rgba({red},{green},{blue},{alpha})")
}

/// `hsl(h,s%,l%)`.
#[must_use]
pub fn format_css_hsl(color: Color) -> String {
    let HslParts {
        degrees,
        saturation_percent,
        lightness_percent,
    } = HslParts::from(color);
    format!("hsl({degrees},{saturation_percent}%,{lightness_percent}%)")
}

/// `hsla(h,s%,l%,a)`.
#[must_use]
pub fn format_css_hsla(color: Color) -> String {
    let HslParts {
        degrees,
        saturation_percent,
        lightness_percent,
    } = HslParts::from(color);
    let alpha = format_alpha(color.alpha());
    format!("hsla({degrees},{saturation_percent}%,{lightness_percent}%,{alpha})")
}

/// Shortest decimal for `alpha` with at most [`ALPHA_PRECISION`] places, eg: `1`, `0.3`.
#[must_use]
pub fn format_alpha(alpha: f64) -> String {
    let it = format!("{alpha:.precision$}", precision = ALPHA_PRECISION);
    it.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// The integer components of an `hsl()` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HslParts {
    /// `[0, 360)`, a full turn folds to `0`.
    pub degrees: u16,
    pub saturation_percent: u8,
    pub lightness_percent: u8,
}

impl From<Color> for HslParts {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(color: Color) -> Self {
        let hsla = color.hsla();
        let max_hue = f64::from(MAX_HUE_DEGREES);
        let degrees = (hsla.hue * max_hue).round() as u16 % MAX_HUE_DEGREES;
        Self {
            degrees,
            saturation_percent: (hsla.saturation * MAX_PERCENTAGE).round() as u8,
            lightness_percent: (hsla.lightness * MAX_PERCENTAGE).round() as u8,
        }
    }
}
