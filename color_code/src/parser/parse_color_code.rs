// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Entry point of the parser. Picks the grammar(s) to try and reports which one matched.

use crate::{Color, ColorCodeError, ColorCodeMatcher, ColorCodeType, ColorResult,
            match_css_hsl, match_css_hsla, match_css_rgb, match_css_rgba, match_hex,
            match_keyword, match_short_hex};
use serde::Serialize;

/// A successfully parsed color code: the color, and the syntax it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedColorCode {
    pub color: Color,
    pub code_type: ColorCodeType,
}

impl ColorCodeType {
    /// The grammar for this syntax.
    #[must_use]
    pub fn matcher(self) -> ColorCodeMatcher {
        match self {
            ColorCodeType::Hex => match_hex,
            ColorCodeType::ShortHex => match_short_hex,
            ColorCodeType::CssRgb => match_css_rgb,
            ColorCodeType::CssRgba => match_css_rgba,
            ColorCodeType::CssHsl => match_css_hsl,
            ColorCodeType::CssHsla => match_css_hsla,
            ColorCodeType::CssKeyword => match_keyword,
        }
    }
}

/// Parse `input` as a color code.
///
/// - When `maybe_constrain_to` is [`Some`], only that syntax is tried.
/// - Otherwise every syntax is tried in [`ColorCodeType::parse_order`] and the first
///   match wins.
///
/// Returns [`None`] for empty input, unknown syntax, or in range syntax with out of
/// range values (eg: `rgb(256,0,0)`).
#[must_use]
pub fn parse_color_code(
    input: &str,
    maybe_constrain_to: Option<ColorCodeType>,
) -> Option<ParsedColorCode> {
    let try_one = |code_type: ColorCodeType| {
        code_type
            .matcher()(input)
            .map(|color| ParsedColorCode { color, code_type })
    };

    let result = match maybe_constrain_to {
        Some(code_type) => try_one(code_type),
        None => ColorCodeType::parse_order().find_map(try_one),
    };

    // % is Display, ? is Debug.
    tracing::trace!(
        message = "🎨 parse_color_code",
        input = ?input,
        constrain_to = ?maybe_constrain_to,
        result = ?result
    );

    result
}

/// Same as [`parse_color_code`] but reports a diagnostic instead of [`None`].
///
/// # Errors
///
/// Returns [`ColorCodeError::UnrecognizedColorCode`] if `input` does not parse.
pub fn try_parse_color_code(
    input: &str,
    maybe_constrain_to: Option<ColorCodeType>,
) -> ColorResult<ParsedColorCode> {
    parse_color_code(input, maybe_constrain_to).ok_or_else(|| {
        ColorCodeError::UnrecognizedColorCode {
            input: input.to_string(),
            expected: match maybe_constrain_to {
                Some(code_type) => format!("{code_type} (eg: {})", code_type.example()),
                None => "any color code".to_string(),
            },
        }
    })
}
