// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter, EnumString};

/// The textual syntax that a [`crate::Color`] was parsed from, or is to be formatted as.
///
/// The order of the variants is significant: when no syntax is requested,
/// [`crate::parse_color_code`] tries them in exactly this order and the first match
/// wins. Use [`ColorCodeType::parse_order`] to walk them.
///
/// The [`std::fmt::Display`], [`std::str::FromStr`] and serde representations all use the
/// same external names: `hex`, `shortHex`, `cssRGB`, `cssRGBa`, `cssHSL`, `cssHSLa`,
/// `cssKeyword`. [`std::str::FromStr`] ignores ASCII case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    EnumString,
    strum_macros::Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ColorCodeType {
    /// `#rrggbb`.
    #[strum(to_string = "hex")]
    #[serde(rename = "hex")]
    Hex,
    /// `#rgb`. Lossy when formatting.
    #[strum(to_string = "shortHex")]
    #[serde(rename = "shortHex")]
    ShortHex,
    /// `rgb(r,g,b)`.
    #[strum(to_string = "cssRGB")]
    #[serde(rename = "cssRGB")]
    CssRgb,
    /// `rgba(r,g,b,a)`.
    #[strum(to_string = "cssRGBa")]
    #[serde(rename = "cssRGBa")]
    CssRgba,
    /// `hsl(h,s%,l%)`.
    #[strum(to_string = "cssHSL")]
    #[serde(rename = "cssHSL")]
    CssHsl,
    /// `hsla(h,s%,l%,a)`.
    #[strum(to_string = "cssHSLa")]
    #[serde(rename = "cssHSLa")]
    CssHsla,
    /// A CSS color keyword, eg: `MidnightBlue`.
    #[strum(to_string = "cssKeyword")]
    #[serde(rename = "cssKeyword")]
    CssKeyword,
}

impl ColorCodeType {
    /// All the syntaxes, in the order that the parser tries them.
    pub fn parse_order() -> impl Iterator<Item = ColorCodeType> { Self::iter() }

    /// A short sample of this syntax, shown in parse errors.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            ColorCodeType::Hex => "#191970",
            ColorCodeType::ShortHex => "#fff",
            ColorCodeType::CssRgb => "rgb(25,25,112)",
            ColorCodeType::CssRgba => "rgba(25,25,112,0.3)",
            ColorCodeType::CssHsl => "hsl(240,64%,27%)",
            ColorCodeType::CssHsla => "hsla(203,10%,20%,0.3)",
            ColorCodeType::CssKeyword => "MidnightBlue",
        }
    }

    /// Only [`ColorCodeType::ShortHex`] drops precision when formatting.
    #[must_use]
    pub fn is_lossless(self) -> bool { !matches!(self, ColorCodeType::ShortHex) }
}
