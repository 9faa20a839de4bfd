// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # color_code
//!
//! Convert colors to and from the textual color codes used by color picker controls:
//!
//! | [`ColorCodeType`]        | example                  |
//! |--------------------------|--------------------------|
//! | [`ColorCodeType::Hex`]       | `#191970`            |
//! | [`ColorCodeType::ShortHex`]  | `#fff`               |
//! | [`ColorCodeType::CssRgb`]    | `rgb(25,25,112)`     |
//! | [`ColorCodeType::CssRgba`]   | `rgba(25,25,112,0.3)`|
//! | [`ColorCodeType::CssHsl`]    | `hsl(240,64%,27%)`   |
//! | [`ColorCodeType::CssHsla`]   | `hsla(203,10%,20%,0.3)` |
//! | [`ColorCodeType::CssKeyword`]| `MidnightBlue`       |
//!
//! Every [`Color`] is an RGBA value with each channel normalized to `[0, 1]`. Parsing
//! produces a [`ParsedColorCode`] (the color and the syntax that matched), and
//! formatting turns a [`Color`] back into text.
//!
//! ```
//! use color_code::{ColorCodeType, format_color_code, parse_color_code};
//!
//! let parsed = parse_color_code("#0066aa", None).unwrap();
//! assert_eq!(parsed.code_type, ColorCodeType::Hex);
//! assert_eq!(
//!     format_color_code(parsed.color, ColorCodeType::ShortHex).as_deref(),
//!     Some("#06a")
//! );
//! ```
//!
//! The keyword table is a process wide, read only singleton. See [`keyword_table`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod color;
pub mod common;
pub mod keyword;
pub mod log;
pub mod parser;
pub mod serializer;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use color::*;
pub use common::*;
pub use keyword::*;
pub use log::*;
pub use parser::*;
pub use serializer::*;
