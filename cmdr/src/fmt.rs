// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text styles for command output. Every function returns a plain [`String`] when the
//! [`ColorSupport`] is [`ColorSupport::Plain`].

use crate::GlobalOption;
use color_code::Color;
use crossterm::style::{self, Stylize};
use std::fmt::Display;

/// Whether output may contain ANSI escape codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSupport {
    Styled,
    Plain,
}

impl From<&GlobalOption> for ColorSupport {
    fn from(global_options: &GlobalOption) -> Self {
        if global_options.no_color {
            ColorSupport::Plain
        } else {
            ColorSupport::Styled
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum DefaultColors {
    LizardGreen,
    SlateGray,
    FrozenBlue,
}

impl DefaultColors {
    #[must_use]
    pub fn as_color(self) -> Color {
        match self {
            DefaultColors::LizardGreen => Color::from_rgb8(20, 244, 0),
            DefaultColors::SlateGray => Color::from_rgb8(94, 103, 111),
            DefaultColors::FrozenBlue => Color::from_rgb8(171, 204, 242),
        }
    }
}

/// The byte channels of `color` as a terminal color. Alpha is dropped.
#[must_use]
pub fn to_term_color(color: Color) -> style::Color {
    let [r, g, b] = color.rgb8();
    style::Color::Rgb { r, g, b }
}

fn paint(arg_text: impl Display, fg: DefaultColors, color_support: ColorSupport) -> String {
    match color_support {
        ColorSupport::Styled => arg_text
            .to_string()
            .with(to_term_color(fg.as_color()))
            .to_string(),
        ColorSupport::Plain => arg_text.to_string(),
    }
}

/// Emphasis text style to highlight.
pub fn emphasis(arg_text: impl Display, color_support: ColorSupport) -> String {
    paint(arg_text, DefaultColors::LizardGreen, color_support)
}

/// De-emphasize (dim) text.
pub fn dim(arg_text: impl Display, color_support: ColorSupport) -> String {
    paint(arg_text, DefaultColors::SlateGray, color_support)
}

pub fn normal(arg_text: impl Display, color_support: ColorSupport) -> String {
    paint(arg_text, DefaultColors::FrozenBlue, color_support)
}
