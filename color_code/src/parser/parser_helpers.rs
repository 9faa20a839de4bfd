// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Small [nom] parsers shared by the per-syntax grammars.
//!
//! Each grammar in this module's siblings exposes two things:
//! 1. A `parse_*` function that implements [Parser] (returns an [`IResult`]) so it can be
//!    tested and composed like any other nom parser.
//! 2. A `match_*` function with the [`ColorCodeMatcher`] signature. It runs the parser
//!    against the whole (trimmed) input and is total: it always returns a color or
//!    [`None`], never an error.

use crate::Color;
use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::tag_no_case,
          character::complete::{char, digit1, multispace0},
          combinator::{all_consuming, map_res, opt, recognize},
          error::{Error, ErrorKind},
          sequence::{delimited, terminated}};

/// Largest hue accepted by `hsl()` and `hsla()`, in degrees.
pub const MAX_HUE_DEGREES: u16 = 360;

/// Largest percentage accepted for saturation and lightness.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Signature of a grammar matcher. See [`crate::ColorCodeType::matcher`].
pub type ColorCodeMatcher = fn(&str) -> Option<Color>;

/// Run `parser` against all of `input` minus surrounding whitespace. Any remainder means
/// no match.
pub fn match_whole_input<'a, P>(input: &'a str, parser: P) -> Option<Color>
where
    P: Parser<&'a str, Output = Color, Error = Error<&'a str>>,
{
    all_consuming(parser)
        .parse(input.trim())
        .ok()
        .map(|(_remainder, color)| color)
}

/// Discard whitespace on both sides of `inner`.
pub fn ws<'a, P>(inner: P) -> impl Parser<&'a str, Output = P::Output, Error = Error<&'a str>>
where
    P: Parser<&'a str, Error = Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

/// Matches a CSS function name (any case) and its opening paren, eg: `rgba (`.
pub fn open_css_function<'a>(
    name: &'static str,
) -> impl Parser<&'a str, Output = &'a str, Error = Error<&'a str>> {
    terminated(tag_no_case(name), ws(char('(')))
}

/// # Errors
///
/// Returns a nom error if the input does not start with `)`.
pub fn close_css_function(input: &str) -> IResult<&str, char> { ws(char(')')).parse(input) }

/// # Errors
///
/// Returns a nom error if the input does not start with `,`.
pub fn comma(input: &str) -> IResult<&str, char> { ws(char(',')).parse(input) }

/// An integer in `[0, 255]`. Larger values are an error, not wrapped.
///
/// # Errors
///
/// Returns a nom error if there are no digits, or the value does not fit in a byte.
pub fn parse_byte_channel(input: &str) -> IResult<&str, u8> {
    map_res(digit1, |digits: &str| digits.parse::<u8>()).parse(input)
}

/// An integer in `[0, 360]`.
///
/// # Errors
///
/// Returns a nom error if there are no digits, or the value is larger than
/// [`MAX_HUE_DEGREES`].
pub fn parse_hue_degrees(input: &str) -> IResult<&str, u16> {
    map_res(digit1, |digits: &str| {
        digits
            .parse::<u16>()
            .ok()
            .filter(|it| *it <= MAX_HUE_DEGREES)
            .ok_or(ErrorKind::Verify)
    })
    .parse(input)
}

/// A non-negative decimal: `1`, `1.`, `0.25`, `.5`. No sign, no exponent.
///
/// # Errors
///
/// Returns a nom error if the input does not start with a decimal number.
pub fn parse_unsigned_decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        alt((
            recognize((digit1, opt((char('.'), opt(digit1))))),
            recognize((char('.'), digit1)),
        )),
        |it: &str| it.parse::<f64>(),
    )
    .parse(input)
}

/// A decimal in `[0, 1]`.
///
/// # Errors
///
/// Returns a nom error if there is no number, or it is larger than `1`.
pub fn parse_alpha(input: &str) -> IResult<&str, f64> {
    map_res(parse_unsigned_decimal, |it| {
        if it <= 1.0 {
            Ok(it)
        } else {
            Err(ErrorKind::Verify)
        }
    })
    .parse(input)
}

/// A decimal in `[0, 100]` followed by `%`. The output is normalized to `[0, 1]`.
///
/// # Errors
///
/// Returns a nom error if there is no number, it is larger than [`MAX_PERCENTAGE`], or
/// the `%` is missing.
pub fn parse_percentage(input: &str) -> IResult<&str, f64> {
    terminated(
        map_res(parse_unsigned_decimal, |it| {
            if it <= MAX_PERCENTAGE {
                Ok(it / MAX_PERCENTAGE)
            } else {
                Err(ErrorKind::Verify)
            }
        }),
        ws(char('%')),
    )
    .parse(input)
}
