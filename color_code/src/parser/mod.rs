// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod parse_color_code;
pub mod parse_css_hsl;
pub mod parse_css_rgb;
pub mod parse_hex;
pub mod parse_keyword;
pub mod parser_helpers;

// Re-export.
pub use parse_color_code::*;
pub use parse_css_hsl::*;
pub use parse_css_rgb::*;
pub use parse_hex::*;
pub use parse_keyword::*;
pub use parser_helpers::*;
