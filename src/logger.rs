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

//! The abstract logging capability consumed by application code.

use std::error::Error as StdError;
use std::fmt;

use crate::error::LogError;
use crate::marker::Marker;
use crate::severity::Severity;

/// A uniform logging capability over one native logging backend.
///
/// Implementations translate the five abstract severities into the backend's
/// own levels and answer per-severity enablement queries. Logging is
/// fire-and-forget: each call performs exactly one native invocation, with no
/// retries and no buffering. Backend faults propagate as [`LogError`]; the
/// facade never catches or suppresses them.
///
/// The per-severity methods are conveniences over [`Logger::log`] and
/// [`Logger::enabled`]; implementors only provide the three required methods.
pub trait Logger: fmt::Debug + Send + Sync + 'static {
    /// Logs an optional `message` and an optional `cause` at `severity`.
    fn log(
        &self,
        severity: Severity,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError>;

    /// Whether `severity` is enabled on the underlying backend.
    fn enabled(&self, severity: Severity) -> bool;

    /// A human-readable label for this logger, if the backend has one.
    fn identity(&self) -> Option<&str>;

    /// Logs at [`Severity::Verbose`].
    fn verbose(
        &self,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log(Severity::Verbose, message, cause)
    }

    /// Logs at [`Severity::Debug`].
    fn debug(
        &self,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log(Severity::Debug, message, cause)
    }

    /// Logs at [`Severity::Info`].
    fn info(
        &self,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log(Severity::Info, message, cause)
    }

    /// Logs at [`Severity::Warning`].
    fn warning(
        &self,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log(Severity::Warning, message, cause)
    }

    /// Logs at [`Severity::Error`].
    fn error(
        &self,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log(Severity::Error, message, cause)
    }

    /// Whether [`Severity::Verbose`] is enabled.
    fn is_verbose_enabled(&self) -> bool {
        self.enabled(Severity::Verbose)
    }

    /// Whether [`Severity::Debug`] is enabled.
    fn is_debug_enabled(&self) -> bool {
        self.enabled(Severity::Debug)
    }

    /// Whether [`Severity::Info`] is enabled.
    fn is_info_enabled(&self) -> bool {
        self.enabled(Severity::Info)
    }

    /// Whether [`Severity::Warning`] is enabled.
    fn is_warning_enabled(&self) -> bool {
        self.enabled(Severity::Warning)
    }

    /// Whether [`Severity::Error`] is enabled.
    fn is_error_enabled(&self) -> bool {
        self.enabled(Severity::Error)
    }
}

/// A backend adapter whose native logging system understands markers as
/// first-class citizens.
///
/// [`MarkedLogger`](crate::MarkedLogger) prefers this channel whenever its
/// origin provides it: the marker is handed straight to the backend call,
/// bypassing the plain operations, so the backend can apply its own
/// marker-aware filtering and formatting.
pub trait MarkerCapable: Logger {
    /// The marker bound to this adapter at construction, if any.
    fn marker(&self) -> Option<&Marker>;

    /// Logs with `marker` attached natively to the backend call.
    fn log_marked(
        &self,
        marker: &Marker,
        severity: Severity,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError>;

    /// Logs at [`Severity::Verbose`] with `marker` attached.
    fn verbose_marked(
        &self,
        marker: &Marker,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log_marked(marker, Severity::Verbose, message, cause)
    }

    /// Logs at [`Severity::Debug`] with `marker` attached.
    fn debug_marked(
        &self,
        marker: &Marker,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log_marked(marker, Severity::Debug, message, cause)
    }

    /// Logs at [`Severity::Info`] with `marker` attached.
    fn info_marked(
        &self,
        marker: &Marker,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log_marked(marker, Severity::Info, message, cause)
    }

    /// Logs at [`Severity::Warning`] with `marker` attached.
    fn warning_marked(
        &self,
        marker: &Marker,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log_marked(marker, Severity::Warning, message, cause)
    }

    /// Logs at [`Severity::Error`] with `marker` attached.
    fn error_marked(
        &self,
        marker: &Marker,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        self.log_marked(marker, Severity::Error, message, cause)
    }
}
