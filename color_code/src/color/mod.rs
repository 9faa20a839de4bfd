// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color_code_type;
pub mod color_value;
pub mod hsl_convert;

// Re-export.
pub use color_code_type::*;
pub use color_value::*;
pub use hsl_convert::*;
