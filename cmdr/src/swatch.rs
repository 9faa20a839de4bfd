// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorSupport, to_term_color};
use color_code::Color;
use crossterm::style::Stylize;

/// Width of the swatch in columns, not counting the label.
pub const SWATCH_WIDTH: usize = 8;

/// Black or white, whichever reads better on top of `background`.
#[must_use]
pub fn contrasting_text_color(background: Color) -> Color {
    if background.hsla().lightness > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// A block filled with `color` and labelled with `label`. [`None`] when the output is
/// [`ColorSupport::Plain`]. The terminal can't blend, so alpha is dropped.
#[must_use]
pub fn render_swatch(color: Color, label: &str, color_support: ColorSupport) -> Option<String> {
    match color_support {
        ColorSupport::Plain => None,
        ColorSupport::Styled => {
            let text = format!("{label:^width$}", width = SWATCH_WIDTH.max(label.len() + 2));
            Some(
                text.with(to_term_color(contrasting_text_color(color)))
                    .on(to_term_color(color))
                    .to_string(),
            )
        }
    }
}
