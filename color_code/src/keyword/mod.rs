// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod keyword_data;
pub mod keyword_table;

// Re-export.
pub use keyword_data::*;
pub use keyword_table::*;
