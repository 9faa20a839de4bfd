// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parsers for `hsl(h,s%,l%)` and `hsla(h,s%,l%,a)`.
//!
//! - Hue is an integer number of degrees in `[0, 360]`.
//! - Saturation and lightness are percentages in `[0, 100]`, decimals allowed.
//! - Alpha is a decimal in `[0, 1]`.

use crate::{Color, MAX_HUE_DEGREES, close_css_function, comma, match_whole_input,
            open_css_function, parse_alpha, parse_hue_degrees, parse_percentage};
use nom::{IResult, Parser, combinator::map_res};

/// # Errors
///
/// Returns a nom error if the input is not a well formed `hsl()` with in range
/// channels.
#[rustfmt::skip]
pub fn parse_css_hsl(input: &str) -> IResult<&str, Color> {
    map_res(
        (
            open_css_function("hsl"),
            parse_hue_degrees, comma,
            parse_percentage, comma,
            parse_percentage,
            close_css_function,
        ),
        |(_, hue, _, saturation, _, lightness, _)| {
            color_from_hsl_parts(hue, saturation, lightness, 1.0)
        },
    )
    .parse(input)
}

/// # Errors
///
/// Returns a nom error if the input is not a well formed `hsla()` with in range
/// channels.
#[rustfmt::skip]
pub fn parse_css_hsla(input: &str) -> IResult<&str, Color> {
    map_res(
        (
            open_css_function("hsla"),
            parse_hue_degrees, comma,
            parse_percentage, comma,
            parse_percentage, comma,
            parse_alpha,
            close_css_function,
        ),
        |(_, hue, _, saturation, _, lightness, _, alpha, _)| {
            color_from_hsl_parts(hue, saturation, lightness, alpha)
        },
    )
    .parse(input)
}

#[must_use]
pub fn match_css_hsl(input: &str) -> Option<Color> { match_whole_input(input, parse_css_hsl) }

#[must_use]
pub fn match_css_hsla(input: &str) -> Option<Color> {
    match_whole_input(input, parse_css_hsla)
}

/// `hue` is in degrees, the rest are already normalized.
fn color_from_hsl_parts(
    hue: u16,
    saturation: f64,
    lightness: f64,
    alpha: f64,
) -> crate::ColorResult<Color> {
    let hue = f64::from(hue) / f64::from(MAX_HUE_DEGREES);
    Color::try_from_hsla(hue, saturation, lightness, alpha)
}
