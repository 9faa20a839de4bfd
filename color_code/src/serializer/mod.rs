// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod format_color_code;
pub mod format_helpers;

// Re-export.
pub use format_color_code::*;
pub use format_helpers::*;
