// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Open (or create) the log file at `path_str`. The file is never rotated.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!("Log file {} has no parent folder", path.display())
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Log file {} has no file name", path.display())
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
