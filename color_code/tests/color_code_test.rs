// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end checks of the public API: parse, then format, then parse again.

use color_code::{Color, ColorCodeType, all_color_codes, all_keywords, assert_color_approx_eq,
                 assert_eq2, format_color_code, keyword_table, lookup_keyword,
                 parse_color_code};
use test_case::test_case;

/// Integer percentages and degrees can move a channel by a few bytes.
const HSL_TOLERANCE: f64 = 0.03;

fn sample_colors() -> Vec<Color> {
    let mut it = keyword_table().iter().map(|it| it.color).collect::<Vec<_>>();
    it.extend([
        Color::from_rgb8(0x00, 0x66, 0xaa),
        Color::from_rgb8(0x6f, 0x7f, 0x8f),
        Color::from_rgb8(1, 2, 3),
        Color::from_rgb8(254, 253, 252),
    ]);
    it
}

#[test_case(ColorCodeType::Hex)]
#[test_case(ColorCodeType::CssRgb)]
fn test_lossless_round_trip(code_type: ColorCodeType) {
    for color in sample_colors() {
        let code = format_color_code(color, code_type).unwrap();
        let parsed = parse_color_code(&code, Some(code_type)).unwrap();
        assert_eq2!(parsed.color, color);
    }
}

#[test]
fn test_rgba_round_trip() {
    for (index, color) in sample_colors().into_iter().enumerate() {
        let alpha = f64::from(u8::try_from(index % 11).unwrap()) / 10.0;
        let color = color.with_alpha(alpha).unwrap();
        let code = format_color_code(color, ColorCodeType::CssRgba).unwrap();
        let parsed = parse_color_code(&code, None).unwrap();
        assert_eq2!(parsed.code_type, ColorCodeType::CssRgba);
        assert_color_approx_eq!(parsed.color, color);
    }
}

#[test_case(ColorCodeType::CssHsl)]
#[test_case(ColorCodeType::CssHsla)]
fn test_hsl_round_trip_within_rounding(code_type: ColorCodeType) {
    for color in sample_colors() {
        let code = format_color_code(color, code_type).unwrap();
        let parsed = parse_color_code(&code, Some(code_type)).unwrap();
        assert_color_approx_eq!(parsed.color, color, HSL_TOLERANCE);
    }
}

#[test_case("hsl(203,10%,20%)")]
#[test_case("hsla(203,10%,20%,0.3)")]
#[test_case("hsl(240,64%,27%)")]
#[test_case("hsla(0,100%,50%,1)")]
#[test_case("rgba(25,25,112,0.3)")]
#[test_case("rgb(0,102,170)")]
#[test_case("#191970")]
fn test_code_round_trip_is_identity(code: &str) {
    let parsed = parse_color_code(code, None).unwrap();
    assert_eq2!(
        format_color_code(parsed.color, parsed.code_type).as_deref(),
        Some(code)
    );
}

#[test]
fn test_short_hex_is_lossy() {
    let parsed = parse_color_code("#0066aa", None).unwrap();
    assert_eq2!(parsed.code_type, ColorCodeType::Hex);
    assert_eq2!(
        format_color_code(parsed.color, ColorCodeType::Hex).as_deref(),
        Some("#0066aa")
    );
    assert_eq2!(
        format_color_code(parsed.color, ColorCodeType::ShortHex).as_deref(),
        Some("#06a")
    );

    let short = parse_color_code("#06a", None).unwrap();
    assert_eq2!(short.code_type, ColorCodeType::ShortHex);
    assert_eq2!(short.color.rgb8(), [0x00, 0x66, 0xaa]);

    // Not a doubled digit pair in any channel, so precision is lost.
    let original = parse_color_code("#6f7f8f", None).unwrap().color;
    let short_code = format_color_code(original, ColorCodeType::ShortHex).unwrap();
    assert_eq2!(short_code, "#678");
    let reparsed = parse_color_code(&short_code, None).unwrap().color;
    assert_eq2!(reparsed.rgb8(), [0x66, 0x77, 0x88]);
    assert!(reparsed != original);
}

#[test]
fn test_short_hex_round_trips_doubled_digits() {
    for code in ["#000", "#fff", "#06a", "#c0f"] {
        let parsed = parse_color_code(code, None).unwrap();
        assert_eq2!(
            format_color_code(parsed.color, ColorCodeType::ShortHex).as_deref(),
            Some(code)
        );
    }
}

#[test]
fn test_keywords_round_trip() {
    for (name, color) in all_keywords() {
        let parsed = parse_color_code(name, None).unwrap();
        assert_eq2!(parsed.code_type, ColorCodeType::CssKeyword);
        assert_eq2!(parsed.color, color);
        let canonical = format_color_code(color, ColorCodeType::CssKeyword).unwrap();
        assert_eq2!(lookup_keyword(&canonical), Some(color));
    }
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
    assert_eq2!(lookup_keyword("foobar"), None);
}

#[test]
fn test_out_of_range_hex_value() {
    assert!(Color::try_from_hex(0x00FF_FFFF + 1).is_err());
    assert_eq2!(Color::try_from_hex(0x00FF_FFFF).unwrap(), Color::WHITE);
}

#[test]
fn test_hsl_accessor_round_trip() {
    let color = Color::try_from_hsla(0.1, 0.2, 0.3, 0.4).unwrap();
    let hsla = color.hsla();
    assert!((hsla.hue - 0.1).abs() < 1e-9);
    assert!((hsla.saturation - 0.2).abs() < 1e-9);
    assert!((hsla.lightness - 0.3).abs() < 1e-9);
    assert!((hsla.alpha - 0.4).abs() < 1e-9);
}

#[test]
fn test_all_color_codes_parse_back_to_their_type() {
    let color = lookup_keyword("orange").unwrap();
    for (code_type, code) in all_color_codes(color) {
        let parsed = parse_color_code(&code, None).unwrap();
        assert_eq2!(parsed.code_type, code_type, "{code}");
    }
}

#[test_case(" #FFFFFF ", ColorCodeType::Hex)]
#[test_case("\trgb( 255 , 255 , 255 )\n", ColorCodeType::CssRgb)]
#[test_case("HSLA(0, 0%, 100%, 1)", ColorCodeType::CssHsla)]
#[test_case("  WHITE  ", ColorCodeType::CssKeyword)]
fn test_whitespace_and_case_tolerance(code: &str, code_type: ColorCodeType) {
    let parsed = parse_color_code(code, None).unwrap();
    assert_eq2!(parsed.code_type, code_type);
    assert_eq2!(parsed.color, Color::WHITE);
}

#[test_case("rgb(256,0,0)")]
#[test_case("hsl(361,0%,0%)")]
#[test_case("hsl(0,101%,0%)")]
#[test_case("rgba(0,0,0,1.5)")]
#[test_case("#12345")]
#[test_case("rgb(1,2,3) trailing")]
fn test_out_of_range_literals_are_rejected(code: &str) {
    assert_eq2!(parse_color_code(code, None), None);
}
