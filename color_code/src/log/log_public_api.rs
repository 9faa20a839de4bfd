// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Both [`try_initialize_logging_global`] and [`try_initialize_logging_thread_local`]
//! take an [`Into<TracingConfig>`], so a config can be built from whichever piece is at
//! hand, and pieces can be merged with `+`:
//!
//! ```no_run
//! use color_code::{DisplayPreference, TracingConfig, WriterConfig,
//!                  try_initialize_logging_global};
//!
//! let level_filter = tracing_core::LevelFilter::DEBUG;
//! let config_1: TracingConfig = level_filter.into();
//!
//! let config_2: TracingConfig = DisplayPreference::Stderr.into();
//!
//! let writer_config = WriterConfig::File("colorcode.log".to_string());
//! let config_3: TracingConfig = writer_config.into();
//!
//! try_initialize_logging_global(config_1 + config_2 + config_3).unwrap();
//! ```

use crate::{DisplayPreference, TracingConfig, WriterConfig, ok};
use std::ops::Add;
use tracing::dispatcher;
use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level wins, and the writer configs are merged.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two [`WriterConfig`]s. A display and a file combine into
/// [`WriterConfig::DisplayAndFile`]. When both sides set the same thing, `rhs` wins.
/// [`WriterConfig::None`] on either side leaves the other side as is.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, it) | (it, None) => it,

            // Same kind on both sides.
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),

            // Combine, or overwrite the part that rhs sets.
            (Display(display), File(file))
            | (File(file), Display(display))
            | (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(display, file))
            | (DisplayAndFile(_, file), Display(display))
            | (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
        }
    }
}

/// Install a process wide subscriber. This can only succeed once per process, so it is
/// meant for binaries.
///
/// Logging is **disabled** unless this (or [`try_initialize_logging_thread_local`]) is
/// called with a level other than [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be opened, or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    it.install_global()
}

/// Install a subscriber for the current thread until the returned guard is dropped.
/// Returns [`None`] when the level is [`LevelFilter::OFF`]. Meant for tests.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests_add_writer_configs {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_add_writer_configs() {
        let fname = "log.txt".to_string();
        let none = WriterConfig::None;
        let stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = WriterConfig::Display(DisplayPreference::Stderr);
        let file = WriterConfig::File(fname.clone());
        let other_file = WriterConfig::File("other.txt".to_string());
        let stdout_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, fname.clone());
        let stderr_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, fname.clone());
        let stdout_and_other_file = WriterConfig::DisplayAndFile(
            DisplayPreference::Stdout,
            "other.txt".to_string(),
        );

        // No collision merge.
        assert_eq2!(none.clone() + none.clone(), none);
        assert_eq2!(stdout.clone() + none.clone(), stdout);
        assert_eq2!(none.clone() + stdout.clone(), stdout);
        assert_eq2!(file.clone() + none.clone(), file);
        assert_eq2!(none.clone() + file.clone(), file);
        assert_eq2!(stdout.clone() + file.clone(), stdout_and_file);
        assert_eq2!(file.clone() + stdout.clone(), stdout_and_file);
        assert_eq2!(none.clone() + stderr_and_file.clone(), stderr_and_file);

        // Collision, rhs wins.
        assert_eq2!(stdout.clone() + stderr.clone(), stderr);
        assert_eq2!(stderr.clone() + stdout.clone(), stdout);
        assert_eq2!(file.clone() + other_file.clone(), other_file);
        assert_eq2!(stdout.clone() + stderr_and_file.clone(), stderr_and_file);
        assert_eq2!(stderr_and_file.clone() + stdout.clone(), stdout_and_file);
        assert_eq2!(
            stdout_and_file.clone() + other_file.clone(),
            stdout_and_other_file
        );
        assert_eq2!(other_file.clone() + stderr_and_file.clone(), stderr_and_file);
        assert_eq2!(
            stdout_and_other_file.clone() + stderr_and_file.clone(),
            stderr_and_file
        );
    }

    #[test]
    fn test_add_tracing_configs() {
        let config = TracingConfig::from(LevelFilter::WARN)
            + TracingConfig::from(DisplayPreference::Stderr);
        assert_eq2!(
            config,
            TracingConfig {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::DisplayAndFile(
                    DisplayPreference::Stderr,
                    DEFAULT_LOG_FILE_NAME.to_string()
                ),
            }
        );

        let config: TracingConfig = tracing::Level::TRACE.into();
        assert_eq2!(config.get_level_filter(), LevelFilter::TRACE);
    }
}
