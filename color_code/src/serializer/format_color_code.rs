// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Entry point of the serializer.

use crate::{Color, ColorCodeError, ColorCodeType, ColorResult, format_css_hsl,
            format_css_hsla, format_css_rgb, format_css_rgba, format_hex, format_short_hex,
            lookup_color_keyword};

/// Format `color` as `code_type`.
///
/// Only [`ColorCodeType::CssKeyword`] can fail, when there is no keyword with the same
/// RGB triple as `color`. Alpha is ignored for keywords, and when several keywords share
/// a color the first one in alphabetical order is used, eg: `Aqua` rather than `Cyan`.
#[must_use]
pub fn format_color_code(color: Color, code_type: ColorCodeType) -> Option<String> {
    let it = match code_type {
        ColorCodeType::Hex => format_hex(color),
        ColorCodeType::ShortHex => format_short_hex(color),
        ColorCodeType::CssRgb => format_css_rgb(color),
        ColorCodeType::CssRgba => format_css_rgba(color),
        ColorCodeType::CssHsl => format_css_hsl(color),
        ColorCodeType::CssHsla => format_css_hsla(color),
        ColorCodeType::CssKeyword => lookup_color_keyword(color)?.to_string(),
    };
    Some(it)
}

/// Same as [`format_color_code`] but reports a diagnostic instead of [`None`].
///
/// # Errors
///
/// Returns [`ColorCodeError::NoKeywordForColor`] if `code_type` is
/// [`ColorCodeType::CssKeyword`] and no keyword matches.
pub fn try_format_color_code(color: Color, code_type: ColorCodeType) -> ColorResult<String> {
    format_color_code(color, code_type).ok_or_else(|| {
        tracing::debug!(message = "🏷️ No keyword for color", color = %color);
        ColorCodeError::NoKeywordForColor {
            hex: format_hex(color),
        }
    })
}

/// Every syntax that can represent `color`, in [`ColorCodeType::parse_order`].
#[must_use]
pub fn all_color_codes(color: Color) -> Vec<(ColorCodeType, String)> {
    ColorCodeType::parse_order()
        .filter_map(|code_type| {
            format_color_code(color, code_type).map(|code| (code_type, code))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, lookup_keyword, parse_color_code};
    use test_case::test_case;

    #[test_case(ColorCodeType::Hex, "#ffffff")]
    #[test_case(ColorCodeType::ShortHex, "#fff")]
    #[test_case(ColorCodeType::CssRgb, "rgb(255,255,255)")]
    #[test_case(ColorCodeType::CssRgba, "rgba(255,255,255,1)")]
    #[test_case(ColorCodeType::CssHsl, "hsl(0,0%,100%)")]
    #[test_case(ColorCodeType::CssHsla, "hsla(0,0%,100%,1)")]
    #[test_case(ColorCodeType::CssKeyword, "White")]
    fn test_format_white(code_type: ColorCodeType, expected: &str) {
        assert_eq2!(
            format_color_code(Color::WHITE, code_type).as_deref(),
            Some(expected)
        );
    }

    #[test]
    fn test_format_black_keyword() {
        assert_eq2!(
            format_color_code(Color::BLACK, ColorCodeType::CssKeyword).as_deref(),
            Some("Black")
        );
    }

    #[test]
    fn test_midnight_blue() {
        let color = lookup_keyword("MidnightBlue").unwrap();
        assert_eq2!(
            format_color_code(color, ColorCodeType::CssKeyword).as_deref(),
            Some("MidnightBlue")
        );
        assert_eq2!(
            format_color_code(color, ColorCodeType::Hex).as_deref(),
            Some("#191970")
        );
    }

    #[test]
    fn test_hsla_identity() {
        let parsed = parse_color_code("hsla(203,10%,20%,0.3)", None).unwrap();
        assert_eq2!(parsed.code_type, ColorCodeType::CssHsla);
        assert_eq2!(
            format_color_code(parsed.color, ColorCodeType::CssHsla).as_deref(),
            Some("hsla(203,10%,20%,0.3)")
        );
    }

    #[test]
    fn test_no_keyword() {
        let color = Color::from_rgb8(25, 25, 113);
        assert_eq2!(format_color_code(color, ColorCodeType::CssKeyword), None);
        assert_eq2!(
            try_format_color_code(color, ColorCodeType::CssKeyword),
            Err(ColorCodeError::NoKeywordForColor {
                hex: "#191971".to_string()
            })
        );
    }

    #[test]
    fn test_all_color_codes() {
        let color = Color::from_rgb8(0x00, 0x66, 0xaa);
        let codes = all_color_codes(color);
        assert_eq2!(codes.len(), 6);
        assert_eq2!(codes[0], (ColorCodeType::Hex, "#0066aa".to_string()));
        assert_eq2!(codes[1], (ColorCodeType::ShortHex, "#06a".to_string()));
        assert!(codes.iter().all(|(it, _)| *it != ColorCodeType::CssKeyword));

        assert_eq2!(all_color_codes(Color::WHITE).len(), 7);
    }
}
