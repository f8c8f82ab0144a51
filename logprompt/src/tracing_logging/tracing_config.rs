// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use tracing_core::LevelFilter;

use crate::LogHandle;

/// Used when a file is asked for without naming one.
pub const DEFAULT_TRACING_LOG_FILE: &str = "logprompt_debug.log";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout, stderr, or an editor's [`LogHandle`] (above the input line),
/// 3. both.
///
/// This configuration also allows you to set the log level.
///
/// You can use [`crate::tracing_setup::init()`] to initialize the tracing system with
/// this configuration.
#[derive(Debug)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

/// - `String` is the path of the log file, eg: `/tmp/my_app.log` or `my_app.log`.
/// - [`DisplayPreference`] is where display output goes.
#[derive(Debug, Clone)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Clone)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
    /// Print log output above the input line of the editor the handle came from. Use
    /// this instead of [`DisplayPreference::Stdout`] while an [`crate::Editor`] owns the
    /// terminal.
    LogHandle(LogHandle),
}

impl Debug for DisplayPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayPreference::Stdout => write!(f, "Stdout"),
            DisplayPreference::Stderr => write!(f, "Stderr"),
            DisplayPreference::LogHandle(_) => write!(f, "LogHandle"),
        }
    }
}

impl TracingConfig {
    /// Log to both the given [`DisplayPreference`] and a file.
    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_TRACING_LOG_FILE.to_string()),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_TRACING_LOG_FILE.to_string()),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let it = TracingConfig::new_file(None).with_level(tracing::Level::INFO);
        assert!(matches!(
            it.get_writer_config(),
            WriterConfig::File(name) if name == DEFAULT_TRACING_LOG_FILE
        ));
        assert_eq!(it.get_level_filter(), LevelFilter::INFO);

        let it = TracingConfig::new_file_and_display(
            Some("x.log".to_string()),
            DisplayPreference::Stderr,
        );
        assert_eq!(
            format!("{:?}", it.writer_config),
            r#"DisplayAndFile(Stderr, "x.log")"#
        );
    }
}
