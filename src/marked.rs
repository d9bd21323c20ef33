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

//! The composition layer that associates a [`Marker`] with an existing logger.

use std::error::Error as StdError;
use std::sync::Arc;

use crate::error::LogError;
use crate::error::MarkerError;
use crate::logger::Logger;
use crate::logger::MarkerCapable;
use crate::marker::Marker;
use crate::severity::Severity;

/// The innermost non-marked logger behind a [`MarkedLogger`].
///
/// The two variants are the capability split the dispatch fast path relies on:
/// a marker-capable origin receives markers through its native channel, while
/// a plain origin is forwarded to untouched. The split is decided once at
/// construction, never per call via type inspection.
#[derive(Clone, Debug)]
pub enum Origin {
    /// A backend adapter that accepts markers natively.
    MarkerCapable(Arc<dyn MarkerCapable>),
    /// A logger with no native marker concept.
    Plain(Arc<dyn Logger>),
}

impl Origin {
    /// Wraps a marker-capable backend adapter.
    pub fn marker_capable(logger: Arc<dyn MarkerCapable>) -> Origin {
        Origin::MarkerCapable(logger)
    }

    /// Wraps a logger with no native marker concept.
    pub fn plain(logger: Arc<dyn Logger>) -> Origin {
        Origin::Plain(logger)
    }

    /// The marker bound to the origin adapter, if it is marker-capable and has
    /// one bound.
    pub fn marker(&self) -> Option<Marker> {
        match self {
            Origin::MarkerCapable(logger) => logger.marker().cloned(),
            Origin::Plain(_) => None,
        }
    }

    /// Whether two origins refer to the same underlying logger instance.
    pub fn ptr_eq(&self, other: &Origin) -> bool {
        match (self, other) {
            (Origin::MarkerCapable(a), Origin::MarkerCapable(b)) => Arc::ptr_eq(a, b),
            (Origin::Plain(a), Origin::Plain(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn enabled(&self, severity: Severity) -> bool {
        match self {
            Origin::MarkerCapable(logger) => logger.enabled(severity),
            Origin::Plain(logger) => logger.enabled(severity),
        }
    }
}

impl From<&MarkedLogger> for Origin {
    /// Reuses the marked logger's origin instead of nesting wrappers.
    fn from(logger: &MarkedLogger) -> Origin {
        logger.origin.clone()
    }
}

impl From<MarkedLogger> for Origin {
    fn from(logger: MarkedLogger) -> Origin {
        logger.origin
    }
}

/// A logger decorated with exactly one [`Marker`].
///
/// Construction always stores the innermost non-marked origin: building a
/// `MarkedLogger` over another `MarkedLogger` reuses the existing origin, so
/// at most one marking layer exists over a given origin no matter how deep
/// sub-loggers nest, and dispatch stays O(1).
///
/// The marker never changes whether a severity is enabled; enablement is
/// always the origin's. It only changes what tag accompanies a record, and the
/// logger's [`identity`](Logger::identity), which becomes the marker name.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logmark::Logger;
/// use logmark::Origin;
/// use logmark::adapter::Testing;
///
/// let backend = Arc::new(Testing::new());
/// let net = logmark::sub_logger(Origin::plain(backend), "net").unwrap();
/// let http = net.sub_logger("http").unwrap();
///
/// assert_eq!(http.identity(), Some("http"));
/// assert!(net.origin().ptr_eq(http.origin()));
/// ```
#[derive(Clone, Debug)]
pub struct MarkedLogger {
    origin: Origin,
    marker: Marker,
}

impl MarkedLogger {
    /// Creates a marked logger over `origin` carrying `marker`, ignoring any
    /// marker already carried by `origin`.
    pub fn new(origin: impl Into<Origin>, marker: Marker) -> MarkedLogger {
        MarkedLogger {
            origin: origin.into(),
            marker,
        }
    }

    /// The marker attached to this logger.
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// The origin logger this instance decorates.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Derives a logger for subsystem `name` over the same origin, whose
    /// marker is a child of this logger's marker.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn sub_logger(&self, name: &str) -> Result<MarkedLogger, MarkerError> {
        let marker = Marker::with_parent(name, &self.marker)?;
        Ok(MarkedLogger {
            origin: self.origin.clone(),
            marker,
        })
    }
}

impl Logger for MarkedLogger {
    fn log(
        &self,
        severity: Severity,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        match &self.origin {
            // fast path: hand the marker straight to the backend
            Origin::MarkerCapable(logger) => {
                logger.log_marked(&self.marker, severity, message, cause)
            }
            Origin::Plain(logger) => logger.log(severity, message, cause),
        }
    }

    fn enabled(&self, severity: Severity) -> bool {
        self.origin.enabled(severity)
    }

    fn identity(&self) -> Option<&str> {
        Some(self.marker.name())
    }
}

/// Derives a marked logger named `name` from any origin.
///
/// The new marker's parent is the origin's bound marker when the origin is
/// marker-capable and has one; otherwise it is the well-known root marker, so
/// every marker in the process is reachable from the root.
///
/// To derive from an existing [`MarkedLogger`] use
/// [`MarkedLogger::sub_logger`], which parents under that logger's marker.
///
/// # Errors
///
/// Returns an error if `name` is empty.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logmark::Logger;
/// use logmark::adapter::LogAdapter;
///
/// let backend = Arc::new(LogAdapter::global("app"));
/// let net = logmark::sub_logger(backend, "app::net").unwrap();
/// net.info(Some("listener started"), None).unwrap();
/// ```
pub fn sub_logger(origin: impl Into<Origin>, name: &str) -> Result<MarkedLogger, MarkerError> {
    let origin = origin.into();
    let parent = origin.marker().unwrap_or_else(Marker::root);
    let marker = Marker::with_parent(name, &parent)?;
    Ok(MarkedLogger::new(origin, marker))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::MarkedLogger;
    use super::Origin;
    use super::sub_logger;
    use crate::adapter::Testing;
    use crate::logger::Logger;
    use crate::marker::Marker;
    use crate::severity::Severity;

    #[test]
    fn test_enablement_delegates_through_layers() {
        let backend = Arc::new(Testing::new().with_min_severity(Severity::Warning));
        let logger = sub_logger(Origin::plain(backend.clone()), "marked_enab_a").unwrap();
        let sub = logger.sub_logger("marked_enab_b").unwrap();

        for severity in Severity::ALL {
            assert_eq!(logger.enabled(severity), backend.enabled(severity));
            assert_eq!(sub.enabled(severity), backend.enabled(severity));
        }
        assert!(!sub.is_debug_enabled());
        assert!(sub.is_warning_enabled());
        assert!(sub.is_error_enabled());
    }

    #[test]
    fn test_derivation_never_nests_wrappers() {
        let backend = Arc::new(Testing::new());
        let a = sub_logger(Origin::plain(backend), "marked_nest_a").unwrap();
        let b = a.sub_logger("marked_nest_b").unwrap();
        let c = b.sub_logger("marked_nest_c").unwrap();

        assert!(a.origin().ptr_eq(b.origin()));
        assert!(a.origin().ptr_eq(c.origin()));

        // rewrapping with an explicit marker also reuses the origin
        let marker = Marker::of("marked_nest_m").unwrap();
        let rewrapped = MarkedLogger::new(&c, marker.clone());
        assert!(rewrapped.origin().ptr_eq(a.origin()));
        assert!(rewrapped.marker().same_as(&marker));
    }

    #[test]
    fn test_native_marker_path() {
        let marker = Marker::of("marked_native_m").unwrap();
        let backend = Arc::new(Testing::new().with_marker(marker.clone()));
        let logger = MarkedLogger::new(Origin::marker_capable(backend.clone()), marker.clone());

        logger.error(Some("boom"), None).unwrap();

        let records = backend.records();
        assert_eq!(records.len(), 1);
        assert!(records[0].native_marker);
        assert_eq!(records[0].severity, Severity::Error);
        assert_eq!(records[0].message.as_deref(), Some("boom"));
        assert!(records[0].marker.as_ref().unwrap().same_as(&marker));
    }

    #[test]
    fn test_plain_fallback_path() {
        let backend = Arc::new(Testing::new());
        let logger = sub_logger(Origin::plain(backend.clone()), "marked_fallback_m").unwrap();

        logger.error(Some("boom"), None).unwrap();

        let records = backend.records();
        assert_eq!(records.len(), 1);
        assert!(!records[0].native_marker);
        assert!(records[0].marker.is_none());
        // the marker is observable only via identity
        assert_eq!(logger.identity(), Some("marked_fallback_m"));
    }

    #[test]
    fn test_identity_overrides_origin() {
        let backend = Arc::new(Testing::new().with_identity("backend"));
        let logger = sub_logger(Origin::plain(backend.clone()), "marked_ident_m").unwrap();

        assert_eq!(backend.identity(), Some("backend"));
        assert_eq!(logger.identity(), Some("marked_ident_m"));
    }

    #[test]
    fn test_bound_marker_becomes_parent() {
        let bound = Marker::of("marked_bound_x").unwrap();
        let backend = Arc::new(Testing::new().with_marker(bound.clone()));
        let logger = sub_logger(Origin::marker_capable(backend), "marked_bound_y").unwrap();

        let parents = logger.marker().parents();
        assert_eq!(parents.len(), 1);
        assert!(parents[0].same_as(&bound));
    }

    #[test]
    fn test_cause_is_forwarded() {
        let backend = Arc::new(Testing::new());
        let logger = sub_logger(Origin::plain(backend.clone()), "marked_cause_m").unwrap();

        let cause = std::io::Error::other("disk on fire");
        logger.warning(Some("write failed"), Some(&cause)).unwrap();
        logger.debug(None, None).unwrap();

        let records = backend.records();
        assert_eq!(records[0].cause.as_deref(), Some("disk on fire"));
        assert_eq!(records[1].message, None);
        assert_eq!(records[1].cause, None);
    }
}
