// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Install a [miette](https://docs.rs/miette/latest/miette/index.html) report handler
//! for binaries that print [`crate::ColorCodeError`] diagnostics.
//!
//! The hook is lazy. It only runs when a [`miette::Report`] is actually displayed, when
//! the top-level handler in `main() -> miette::Result<_>` is activated. So the terminal
//! width is measured just before output, and never if nothing errors out.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Register the global [`miette::ErrorHook`]. Calling this more than once is harmless, the
/// first registration wins.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| {
                    usize::from(columns)
                });
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
