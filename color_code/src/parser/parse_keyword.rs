// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Color, lookup_keyword, match_whole_input};
use nom::{IResult, Parser, character::complete::alpha1, combinator::map_opt};

/// A CSS color keyword, any case, eg: `MidnightBlue` or `midnightblue`.
///
/// # Errors
///
/// Returns a nom error if the input does not start with a word, or the word is not in
/// the [`crate::keyword_table`].
pub fn parse_keyword_color(input: &str) -> IResult<&str, Color> {
    map_opt(alpha1, lookup_keyword).parse(input)
}

#[must_use]
pub fn match_keyword(input: &str) -> Option<Color> {
    match_whole_input(input, parse_keyword_color)
}
