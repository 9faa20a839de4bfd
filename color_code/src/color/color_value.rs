// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Color`] is an RGBA value with every channel normalized to `[0, 1]`.

use crate::{ColorCodeError, ColorCodeType, ColorResult, hsl_to_rgb, ok, rgb_to_hsl};
use serde::{Deserialize, Serialize};
use std::{fmt::{Display, Formatter},
          str::FromStr};

/// The largest value [`Color::try_from_hex`] accepts, `0xRRGGBB`.
pub const MAX_HEX_VALUE: u32 = 0x00FF_FFFF;

/// An immutable RGBA color. Every channel is a real number in `[0, 1]`, which is checked
/// on construction, so a [`Color`] that exists is always valid.
///
/// Create one with:
/// - [`Color::try_from_rgba`] or [`Color::try_from_hsla`] for normalized channels.
/// - [`Color::from_rgb8`] for byte channels (never fails).
/// - [`Color::try_from_hex`] for a `0xRRGGBB` value.
/// - [`Color::parse`] or [`str::parse`] for a color code.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorChannels")]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

/// The HSL form of a [`Color`]. All channels are in `[0, 1]`, so a hue of `0.5` is 180°.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

/// Unvalidated channels. Deserialization goes through this so that out of range values
/// are rejected by [`Color::try_from_rgba`].
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ColorChannels {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

fn opaque() -> f64 { 1.0 }

impl TryFrom<ColorChannels> for Color {
    type Error = ColorCodeError;

    fn try_from(it: ColorChannels) -> ColorResult<Self> {
        Color::try_from_rgba(it.red, it.green, it.blue, it.alpha)
    }
}

fn validate_channel(channel: &'static str, value: f64) -> ColorResult<f64> {
    if (0.0..=1.0).contains(&value) {
        ok!(value)
    } else {
        Err(ColorCodeError::ChannelOutOfRange { channel, value })
    }
}

/// Round a normalized channel to the nearest byte.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_byte(value: f64) -> u8 { (value.clamp(0.0, 1.0) * 255.0).round() as u8 }

impl Color {
    pub const WHITE: Color = Color {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    pub const BLACK: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// # Errors
    ///
    /// Returns [`ColorCodeError::ChannelOutOfRange`] if any channel is outside of `[0, 1]`
    /// or is NaN.
    pub fn try_from_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> ColorResult<Self> {
        ok!(Self {
            red: validate_channel("red", red)?,
            green: validate_channel("green", green)?,
            blue: validate_channel("blue", blue)?,
            alpha: validate_channel("alpha", alpha)?,
        })
    }

    /// Hue is normalized too: `0.1` is 36°. The derived RGB channels are clamped to
    /// `[0, 1]` to absorb floating point drift.
    ///
    /// # Errors
    ///
    /// Returns [`ColorCodeError::ChannelOutOfRange`] if any channel is outside of `[0, 1]`
    /// or is NaN.
    pub fn try_from_hsla(
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    ) -> ColorResult<Self> {
        let hue = validate_channel("hue", hue)?;
        let saturation = validate_channel("saturation", saturation)?;
        let lightness = validate_channel("lightness", lightness)?;
        let alpha = validate_channel("alpha", alpha)?;
        let (red, green, blue) = hsl_to_rgb(hue, saturation, lightness);
        ok!(Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha,
        })
    }

    /// Opaque color from byte channels.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            alpha: f64::from(alpha) / 255.0,
            ..Self::from_rgb8(red, green, blue)
        }
    }

    /// Opaque color from a `0xRRGGBB` value.
    ///
    /// # Errors
    ///
    /// Returns [`ColorCodeError::HexValueOutOfRange`] if `value` is larger than
    /// [`MAX_HEX_VALUE`].
    pub fn try_from_hex(value: u32) -> ColorResult<Self> {
        if value > MAX_HEX_VALUE {
            return Err(ColorCodeError::HexValueOutOfRange { value });
        }
        let [_, red, green, blue] = value.to_be_bytes();
        ok!(Self::from_rgb8(red, green, blue))
    }

    /// Copy of this color with a different alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorCodeError::ChannelOutOfRange`] if `alpha` is outside of `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> ColorResult<Self> {
        ok!(Self {
            alpha: validate_channel("alpha", alpha)?,
            ..self
        })
    }

    #[must_use]
    pub fn red(&self) -> f64 { self.red }

    #[must_use]
    pub fn green(&self) -> f64 { self.green }

    #[must_use]
    pub fn blue(&self) -> f64 { self.blue }

    #[must_use]
    pub fn alpha(&self) -> f64 { self.alpha }

    #[must_use]
    pub fn hsla(&self) -> Hsla {
        let (hue, saturation, lightness) = rgb_to_hsl(self.red, self.green, self.blue);
        Hsla {
            hue,
            saturation,
            lightness,
            alpha: self.alpha,
        }
    }

    /// Each channel rounded to the nearest byte.
    #[must_use]
    pub fn rgb8(&self) -> [u8; 3] {
        [
            channel_to_byte(self.red),
            channel_to_byte(self.green),
            channel_to_byte(self.blue),
        ]
    }

    /// The `0xRRGGBB` value of [`Color::rgb8`]. Alpha is dropped.
    #[must_use]
    pub fn hex_value(&self) -> u32 {
        let [red, green, blue] = self.rgb8();
        u32::from_be_bytes([0, red, green, blue])
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool { self.alpha >= 1.0 }

    /// `true` if every channel differs by less than `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Color, tolerance: f64) -> bool {
        (self.red - other.red).abs() < tolerance
            && (self.green - other.green).abs() < tolerance
            && (self.blue - other.blue).abs() < tolerance
            && (self.alpha - other.alpha).abs() < tolerance
    }

    /// Parse `code`, optionally only as `maybe_known_type`. Returns the color and the
    /// syntax that matched. See [`crate::parse_color_code`].
    #[must_use]
    pub fn parse(
        code: &str,
        maybe_known_type: Option<ColorCodeType>,
    ) -> Option<(Color, ColorCodeType)> {
        crate::parse_color_code(code, maybe_known_type)
            .map(|it| (it.color, it.code_type))
    }

    /// Format as `code_type`. [`None`] only for [`ColorCodeType::CssKeyword`] when no
    /// keyword has this color. See [`crate::format_color_code`].
    #[must_use]
    pub fn code(&self, code_type: ColorCodeType) -> Option<String> {
        crate::format_color_code(*self, code_type)
    }
}

impl Default for Color {
    fn default() -> Self { Self::BLACK }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self { Self::from_rgb8(red, green, blue) }
}

impl TryFrom<Hsla> for Color {
    type Error = ColorCodeError;

    fn try_from(it: Hsla) -> ColorResult<Self> {
        Color::try_from_hsla(it.hue, it.saturation, it.lightness, it.alpha)
    }
}

/// Opaque colors display as `#rrggbb`, translucent ones as `rgba(r,g,b,a)`.
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", crate::format_hex(*self))
        } else {
            write!(f, "{}", crate::format_css_rgba(*self))
        }
    }
}

/// Accepts any of the [`ColorCodeType`] syntaxes.
impl FromStr for Color {
    type Err = ColorCodeError;

    fn from_str(code: &str) -> ColorResult<Self> {
        crate::try_parse_color_code(code, None).map(|it| it.color)
    }
}
