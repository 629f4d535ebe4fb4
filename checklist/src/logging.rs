/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Tracing setup. The checklist owns stdout while it runs, so logs can only go to a
//! file or to stderr.
//!
//! ```no_run
//! use r3bl_checklist::logging::{TracingConfig, init};
//! init(TracingConfig::new_file("checklist.log", tracing::Level::DEBUG)).unwrap();
//! ```

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Log levels selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Stderr,
    File(String /* log file path */),
    StderrAndFile(String /* log file path */),
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

impl TracingConfig {
    pub fn new_file(path: impl Into<String>, level: impl Into<tracing::Level>) -> Self {
        Self {
            writer_config: WriterConfig::File(path.into()),
            level: level.into(),
        }
    }

    pub fn new_stderr(level: impl Into<tracing::Level>) -> Self {
        Self {
            writer_config: WriterConfig::Stderr,
            level: level.into(),
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}

/// Initialize the global tracing subscriber with the provided [`TracingConfig`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been set.
pub fn init(tracing_config: TracingConfig) -> miette::Result<()> {
    let layers = try_create_layers(&tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Returns the layers, without initializing anything. The first layer is always the
/// level filter.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter)];

    if let WriterConfig::Stderr | WriterConfig::StderrAndFile(_) =
        &tracing_config.writer_config
    {
        return_it.push(Box::new(
            create_fmt!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ));
    }

    if let WriterConfig::File(path) | WriterConfig::StderrAndFile(path) =
        &tracing_config.writer_config
    {
        let file = try_create_file_appender(path)?;
        return_it.push(Box::new(
            create_fmt!()
                .with_ansi(false)
                .with_writer(file)
                .with_filter(level_filter),
        ));
    }

    Ok(return_it)
}

/// A file appender that never rotates, writing to exactly `path_str`.
///
/// # Errors
///
/// Returns an error if the path has no file name, or the file can't be created.
pub fn try_create_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::assert_eq2;

    fn temp_log_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("r3bl_checklist_{name}_{}.log", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq2!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq2!(tracing::Level::from(LogLevel::default()), tracing::Level::DEBUG);
    }

    #[test]
    fn test_layers_for_each_writer_config() {
        let config = TracingConfig {
            writer_config: WriterConfig::None,
            level: tracing::Level::INFO,
        };
        assert_eq2!(try_create_layers(&config).unwrap().len(), 1);
        assert_eq2!(config.get_level_filter(), LevelFilter::INFO);

        let config = TracingConfig::new_stderr(LogLevel::Trace);
        assert_eq2!(try_create_layers(&config).unwrap().len(), 2);

        let path = temp_log_path("layers");
        let config = TracingConfig {
            writer_config: WriterConfig::StderrAndFile(path.clone()),
            level: tracing::Level::DEBUG,
        };
        assert_eq2!(try_create_layers(&config).unwrap().len(), 3);
        assert!(std::path::Path::new(&path).exists());
        drop(std::fs::remove_file(&path));
    }

    #[test]
    fn test_file_appender_rejects_path_without_file_name() {
        assert!(try_create_file_appender("/").is_err());
    }

    #[test]
    #[serial]
    fn test_init_only_once() {
        let path = temp_log_path("init");
        let config = TracingConfig::new_file(&path, LogLevel::Debug);
        assert!(init(config.clone()).is_ok());
        tracing::debug!(message = "hello from test_init_only_once");
        assert!(init(config).is_err());
        drop(std::fs::remove_file(&path));
    }
}
