// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use color_code::{DEFAULT_LOG_FILE_NAME, TracingConfig, WriterConfig,
                 setup_default_miette_global_report_handler,
                 try_initialize_logging_global};
use color_code_cmdr::{CLIArg, ISSUES_URL, UIStrings, try_run_command};
use tracing_core::LevelFilter;

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        let log_file = cli_arg
            .global_options
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());
        try_initialize_logging_global(TracingConfig {
            writer_config: WriterConfig::File(log_file),
            level_filter: LevelFilter::DEBUG,
        })?;
        // % is Display, ? is Debug.
        tracing::debug!(message = %UIStrings::StartLogging, cli_arg = ?cli_arg);
    }

    let result = try_run_command(&cli_arg);

    if let Err(error) = &result {
        // % is Display, ? is Debug.
        tracing::error!(message = "Could not run colorcode", error = ?error);
    }

    if enable_logging {
        tracing::debug!(message = %UIStrings::StopLogging);
    }

    println!("{}", result?);
    Ok(())
}
