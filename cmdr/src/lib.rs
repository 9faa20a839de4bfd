// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # colorcode
//!
//! Command line front end for the [`color_code`] crate.
//!
//! ```text
//! colorcode parse '#0066aa'              # syntax, every other syntax, and a swatch
//! colorcode parse 'rgb(0,102,170)' --json
//! colorcode convert white --to cssHSL    # hsl(0,0%,100%)
//! colorcode lookup MidnightBlue          # #191970
//! colorcode keywords --filter blue
//! ```
//!
//! Global options:
//! - `-l`, `--enable-logging`: write a debug log to `log.txt`.
//! - `--log-file <PATH>`: write that log somewhere else.
//! - `--no-color`: plain text output, no swatch and no escape codes.
//!
//! The binary returns `miette::Result<()>`, so a code that does not parse, or that can't
//! be written in the requested syntax, exits non zero with a diagnostic on stderr.

// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod clap_config;
pub mod commands;
pub mod fmt;
pub mod swatch;
pub mod ui_strings;

// Re-export.
pub use clap_config::*;
pub use commands::*;
pub use fmt::*;
pub use swatch::*;
pub use ui_strings::*;

/// Shown at the bottom of every error report.
pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues";
