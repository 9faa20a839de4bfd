// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parsers for `rgb(r,g,b)` and `rgba(r,g,b,a)`. Channels are integers in `[0, 255]`
//! and alpha is a decimal in `[0, 1]`. Whitespace between tokens is ignored.

use crate::{Color, close_css_function, comma, match_whole_input, open_css_function,
            parse_alpha, parse_byte_channel};
use nom::{IResult, Parser, combinator::map_res};

/// # Errors
///
/// Returns a nom error if the input is not a well formed `rgb()` with in range
/// channels.
#[rustfmt::skip]
pub fn parse_css_rgb(input: &str) -> IResult<&str, Color> {
    let (input, (_, red, _, green, _, blue, _)) = (
        open_css_function("rgb"),
        parse_byte_channel, comma,
        parse_byte_channel, comma,
        parse_byte_channel,
        close_css_function,
    )
        .parse(input)?;
    Ok((input, Color::from_rgb8(red, green, blue)))
}

/// # Errors
///
/// Returns a nom error if the input is not a well formed `rgba()` with in range
/// channels.
#[rustfmt::skip]
pub fn parse_css_rgba(input: &str) -> IResult<&str, Color> {
    map_res(
        (
            open_css_function("rgba"),
            parse_byte_channel, comma,
            parse_byte_channel, comma,
            parse_byte_channel, comma,
            parse_alpha,
            close_css_function,
        ),
        |(_, red, _, green, _, blue, _, alpha, _)| {
            Color::from_rgb8(red, green, blue).with_alpha(alpha)
        },
    )
    .parse(input)
}

#[must_use]
pub fn match_css_rgb(input: &str) -> Option<Color> { match_whole_input(input, parse_css_rgb) }

#[must_use]
pub fn match_css_rgba(input: &str) -> Option<Color> {
    match_whole_input(input, parse_css_rgba)
}
