// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color_code_error;
pub mod decl_macros;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use color_code_error::*;
pub use miette_setup_global_report_handler::*;
