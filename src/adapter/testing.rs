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

use std::error::Error as StdError;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::error::LogError;
use crate::logger::Logger;
use crate::logger::MarkerCapable;
use crate::marked::Origin;
use crate::marker::Marker;
use crate::severity::Severity;

/// An adapter that captures log calls so a test harness can assert on them.
///
/// It implements both capability variants: wrap it in
/// [`Origin::marker_capable`] to observe the native-marker channel, or in
/// [`Origin::plain`] to model a backend with no marker concept.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logmark::Logger;
/// use logmark::Origin;
/// use logmark::Severity;
/// use logmark::adapter::Testing;
///
/// let backend = Arc::new(Testing::new().with_min_severity(Severity::Info));
/// let logger = logmark::sub_logger(Origin::plain(backend.clone()), "cache").unwrap();
///
/// logger.info(Some("warmed up"), None).unwrap();
///
/// assert!(!logger.is_debug_enabled());
/// assert_eq!(backend.records().len(), 1);
/// ```
#[derive(Debug)]
pub struct Testing {
    min_severity: Severity,
    identity: Option<String>,
    marker: Option<Marker>,
    records: Mutex<Vec<CapturedRecord>>,
}

/// A single captured log call.
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub message: Option<String>,
    /// The rendered `cause`, if one was passed.
    pub cause: Option<String>,
    /// The marker attached to the call: the native one on the marker channel,
    /// or the bound one on the plain path.
    pub marker: Option<Marker>,
    /// Whether the call arrived through the native-marker channel.
    pub native_marker: bool,
}

impl Default for Testing {
    fn default() -> Self {
        Self::new()
    }
}

impl Testing {
    /// Creates a capturing adapter with every severity enabled.
    pub fn new() -> Testing {
        Testing {
            min_severity: Severity::Verbose,
            identity: None,
            marker: None,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Severities below `severity` report disabled.
    pub fn with_min_severity(mut self, severity: Severity) -> Testing {
        self.min_severity = severity;
        self
    }

    /// Sets the label returned by [`Logger::identity`].
    pub fn with_identity(mut self, identity: impl Into<String>) -> Testing {
        self.identity = Some(identity.into());
        self
    }

    /// Binds `marker`, as a marker-capable backend constructed mid-hierarchy
    /// would carry.
    pub fn with_marker(mut self, marker: Marker) -> Testing {
        self.marker = Some(marker);
        self
    }

    /// A snapshot of the captured records, in call order.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn capture(&self, record: CapturedRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

impl Logger for Testing {
    fn log(
        &self,
        severity: Severity,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.capture(CapturedRecord {
            severity,
            message: message.map(str::to_owned),
            cause: cause.map(|cause| cause.to_string()),
            marker: self.marker.clone(),
            native_marker: false,
        });
        Ok(())
    }

    fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }
}

impl MarkerCapable for Testing {
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
        self.capture(CapturedRecord {
            severity,
            message: message.map(str::to_owned),
            cause: cause.map(|cause| cause.to_string()),
            marker: Some(marker.clone()),
            native_marker: true,
        });
        Ok(())
    }
}

impl From<Arc<Testing>> for Origin {
    fn from(adapter: Arc<Testing>) -> Origin {
        Origin::MarkerCapable(adapter)
    }
}
