// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parsers for the two hex syntaxes:
//! - `#RRGGBB`, eg: `#2F14DF`.
//! - `#RGB`, eg: `#fff`, where each digit is doubled (`f` -> `ff`).
//!
//! Hex digits may be upper or lower case. Alpha is always `1`.

use crate::{Color, match_whole_input};
use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

/// # Errors
///
/// Returns a nom error if the input is not `#` followed by 6 hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    let (input, (_, red, green, blue)) = (
        tag("#"),
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    )
        .parse(input)?;
    Ok((input, Color::from_rgb8(red, green, blue)))
}

/// # Errors
///
/// Returns a nom error if the input is not `#` followed by 3 hex digits.
pub fn parse_short_hex_color(input: &str) -> IResult<&str, Color> {
    let (input, (_, red, green, blue)) = (
        tag("#"),
        helper_fns::parse_doubled_hex_digit,
        helper_fns::parse_doubled_hex_digit,
        helper_fns::parse_doubled_hex_digit,
    )
        .parse(input)?;
    Ok((input, Color::from_rgb8(red, green, blue)))
}

#[must_use]
pub fn match_hex(input: &str) -> Option<Color> { match_whole_input(input, parse_hex_color) }

#[must_use]
pub fn match_short_hex(input: &str) -> Option<Color> {
    match_whole_input(input, parse_short_hex_color)
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true` items
    /// will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// Two hex digits, one byte.
    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }

    /// One hex digit, repeated to make a byte: `a` -> `0xaa`.
    pub fn parse_doubled_hex_digit(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
            parse_str_to_hex_num(it).map(|nibble| nibble * 0x11)
        })
        .parse(input)
    }
}
