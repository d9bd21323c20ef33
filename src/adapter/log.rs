// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Adapter over the [`log`] crate, the marker-capable backend.
//!
//! Markers ride on records as a `marker` key-value pair. With the `kv`
//! machinery they are first-class record data that `log` implementations can
//! filter and format on, so the marked-logger fast path hands markers to this
//! adapter instead of going through the plain operations.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use log::kv::Value;

use crate::error::LogError;
use crate::error::MarkerError;
use crate::logger::Logger;
use crate::logger::MarkerCapable;
use crate::marked::Origin;
use crate::marker::Marker;
use crate::severity::Severity;

/// A backend adapter over a [`log::Log`] implementation.
///
/// Severities map injectively onto [`log::Level`]: Verbose→Trace,
/// Debug→Debug, Info→Info, Warning→Warn, Error→Error. A `cause` is attached
/// as a `cause` key-value pair. `identity` is the record target the adapter
/// was constructed with.
///
/// # Examples
///
/// ```
/// use logmark::Logger;
/// use logmark::adapter::LogAdapter;
///
/// let adapter = LogAdapter::global("app::net");
/// adapter.info(Some("listener started"), None).unwrap();
/// ```
pub struct LogAdapter {
    logger: &'static dyn log::Log,
    target: String,
    marker: Option<Marker>,
}

impl fmt::Debug for LogAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogAdapter")
            .field("target", &self.target)
            .field("marker", &self.marker)
            .finish_non_exhaustive()
    }
}

impl LogAdapter {
    /// Creates an adapter over `logger`, tagging records with `target`.
    pub fn new(target: impl Into<String>, logger: &'static dyn log::Log) -> LogAdapter {
        LogAdapter {
            logger,
            target: target.into(),
            marker: None,
        }
    }

    /// Creates an adapter over the process-global [`log`] logger.
    pub fn global(target: impl Into<String>) -> LogAdapter {
        Self::new(target, log::logger())
    }

    /// Binds `marker` to this adapter; the plain logging operations attach it
    /// to every record.
    pub fn with_marker(mut self, marker: Marker) -> LogAdapter {
        self.marker = Some(marker);
        self
    }

    /// Derives a new adapter over the same [`log::Log`] handle, bound to a
    /// marker named `name` one level below the currently bound marker.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn sub_adapter(&self, name: &str) -> Result<LogAdapter, MarkerError> {
        let marker = match &self.marker {
            Some(parent) => Marker::with_parent(name, parent)?,
            None => Marker::of(name)?,
        };
        Ok(LogAdapter {
            logger: self.logger,
            target: self.target.clone(),
            marker: Some(marker),
        })
    }

    fn emit(
        &self,
        marker: Option<&Marker>,
        severity: Severity,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) {
        let mut kvs: Vec<(&str, Value)> = Vec::with_capacity(2);
        if let Some(marker) = marker {
            kvs.push(("marker", Value::from(marker.name())));
        }
        if let Some(cause) = cause {
            kvs.push(("cause", Value::from_dyn_error(cause)));
        }
        self.logger.log(
            &log::Record::builder()
                .args(format_args!("{}", message.unwrap_or_default()))
                .level(severity_to_level(severity))
                .target(&self.target)
                .key_values(&&kvs[..])
                .build(),
        );
    }
}

impl Logger for LogAdapter {
    fn log(
        &self,
        severity: Severity,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.emit(self.marker.as_ref(), severity, message, cause);
        Ok(())
    }

    fn enabled(&self, severity: Severity) -> bool {
        self.logger.enabled(
            &log::Metadata::builder()
                .level(severity_to_level(severity))
                .target(&self.target)
                .build(),
        )
    }

    fn identity(&self) -> Option<&str> {
        Some(&self.target)
    }
}

impl MarkerCapable for LogAdapter {
    fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    fn log_marked(
        &self,
        marker: &Marker,
        severity: Severity,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.emit(Some(marker), severity, message, cause);
        Ok(())
    }
}

impl From<Arc<LogAdapter>> for Origin {
    fn from(adapter: Arc<LogAdapter>) -> Origin {
        Origin::MarkerCapable(adapter)
    }
}

/// Verbose→Trace, Debug→Debug, Info→Info, Warning→Warn, Error→Error.
fn severity_to_level(severity: Severity) -> log::Level {
    match severity {
        Severity::Verbose => log::Level::Trace,
        Severity::Debug => log::Level::Debug,
        Severity::Info => log::Level::Info,
        Severity::Warning => log::Level::Warn,
        Severity::Error => log::Level::Error,
    }
}
