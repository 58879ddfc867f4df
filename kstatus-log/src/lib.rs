// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0
//

pub mod prelude;

mod policy;
pub use policy::ReportPolicy;

mod reporter;
pub use reporter::{report, report_error, ReportExt};

use kstatus_core::config::Config;
use kstatus_core::{CoreResult, Error, ErrorCode};
use kstatus_os::io::IoResultExt;

use std::fs::File;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{span, Level, Span};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

pub struct Logging {
    log_level: Level,
    enable_logging: bool,
    env_filter: bool,
    log_file: Option<PathBuf>,

    file_guard: Option<WorkerGuard>,
}

pub struct LoggingBuilder {
    log_level: Level,
    enable_logging: bool,
    env_filter: bool,
    log_file: Option<PathBuf>,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            log_level: Level::INFO,
            enable_logging: false,
            env_filter: false,
            log_file: None,
        }
    }

    /// Take the settings from a configuration.
    ///
    /// Recognized keys are `level` (a `tracing` level name) and `file`
    /// (path of a log file). A `level` entry also enables stdout logging.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let mut builder = Self::new();

        if let Some(level) = config.get_str("level") {
            let level = level.parse::<Level>().map_err(|_| {
                Error::new(
                    ErrorCode::GenInvalidParam,
                    format!("unknown log level '{level}'"),
                )
            })?;
            builder = builder.global_log_level(level).enable_logging(true);
        }

        if let Some(file) = config.get_str("file") {
            builder = builder.log_file(file);
        }

        Ok(builder)
    }

    pub fn global_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    ///
    /// Enables logging to stdout
    ///
    pub fn enable_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }

    ///
    /// Lets `RUST_LOG` directives refine the global level
    ///
    pub fn env_filter(mut self, enable: bool) -> Self {
        self.env_filter = enable;
        self
    }

    ///
    /// Additionally writes all events to the given file
    ///
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn build(self) -> Logging {
        Logging {
            log_level: self.log_level,
            enable_logging: self.enable_logging,
            env_filter: self.env_filter,
            log_file: self.log_file,
            file_guard: None,
        }
    }
}

impl Logging {
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    fn filter(&self) -> EnvFilter {
        let builder = EnvFilter::builder().with_default_directive(LevelFilter::from_level(self.log_level).into());
        if self.env_filter {
            builder.from_env_lossy()
        } else {
            builder.parse_lossy("")
        }
    }

    /// Install the global subscriber.
    ///
    /// Does nothing if neither stdout logging nor a log file is enabled.
    /// Fails with `ERR_FS_*` codes if the log file cannot be created and with
    /// `ERR_SYS_INVALID_OP` if a global subscriber is already installed.
    pub fn init(&mut self) -> CoreResult<()> {
        let mut layers: Option<BoxedLayer> = None;

        if self.enable_logging {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .event_format(format::Format::default().with_thread_ids(true))
                .with_filter(self.filter());
            layers = Some(fmt_layer.boxed());
        }

        if let Some(path) = &self.log_file {
            let file = File::create(path).status()?;
            let (nb, guard) = tracing_appender::non_blocking(file);
            self.file_guard = Some(guard);

            let file_layer = fmt::layer()
                .with_writer(nb)
                .with_ansi(false)
                .with_filter(self.filter());

            layers = Some(match layers {
                Some(l) => l.and_then(file_layer).boxed(),
                None => file_layer.boxed(),
            });
        }

        let Some(layers) = layers else {
            return Ok(());
        };

        tracing::subscriber::set_global_default(Registry::default().with(layers))
            .map_err(|e| Error::new(ErrorCode::SysInvalidOp, e.to_string()))
    }

    /// Creates a span covering the process part that reports through this logger.
    /// The span name is fixed as `span!` needs it at compile time.
    pub fn create_span(&self) -> Span {
        span!(Level::TRACE, "kstatus")
    }
}
