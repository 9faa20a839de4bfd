// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fine grained errors for this crate, using [miette] and [thiserror].
//!
//! The parser and serializer signal failure with [`None`] (see
//! [`crate::parse_color_code`] and [`crate::format_color_code`]). The `try_*` variants of
//! those functions, and the fallible [`crate::Color`] constructors, return a
//! [`ColorResult`] with one of the variants below so that binaries can print a
//! diagnostic.

/// Type alias to make it easy to work with [Result]s that can fail with a
/// [`ColorCodeError`].
pub type ColorResult<T> = Result<T, ColorCodeError>;

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq)]
pub enum ColorCodeError {
    #[error("🎨 Channel `{channel}` has value {value}, which is outside of [0, 1]")]
    #[diagnostic(
        code(color_code::channel_out_of_range),
        help("Every channel (red, green, blue, alpha, hue, saturation, lightness) is normalized to [0, 1]")
    )]
    ChannelOutOfRange { channel: &'static str, value: f64 },

    #[error("🔢 Hex value {value:#x} is larger than 0xffffff")]
    #[diagnostic(
        code(color_code::hex_value_out_of_range),
        help("A hex value holds exactly 3 bytes: 0xRRGGBB")
    )]
    HexValueOutOfRange { value: u32 },

    #[error("🔍 Could not parse '{input}' as {expected}")]
    #[diagnostic(
        code(color_code::unrecognized_color_code),
        help(
            "Supported syntaxes: #rrggbb, #rgb, rgb(r,g,b), rgba(r,g,b,a), hsl(h,s%,l%), hsla(h,s%,l%,a), or a CSS color keyword like MidnightBlue"
        )
    )]
    UnrecognizedColorCode { input: String, expected: String },

    #[error("🏷️ There is no CSS color keyword for {hex}")]
    #[diagnostic(
        code(color_code::no_keyword_for_color),
        help("Only the 148 CSS named colors have a keyword, pick another syntax")
    )]
    NoKeywordForColor { hex: String },
}
