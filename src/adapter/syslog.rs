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

//! Adapter over syslog.
//!
//! # Examples
//!
//! ```rust, no_run
//! use std::sync::Arc;
//!
//! use logmark::Logger;
//! use logmark::adapter::SyslogAdapter;
//! use logmark::adapter::syslog::SyslogFormat;
//!
//! let backend = SyslogAdapter::tcp_well_known()
//!     .unwrap()
//!     .with_format(SyslogFormat::RFC5424);
//! let logger = logmark::sub_logger(Arc::new(backend), "gateway").unwrap();
//!
//! logger.error(Some("upstream unreachable"), None).unwrap();
//! ```

use std::error::Error as StdError;
use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use fasyslog::SDElement;
use fasyslog::sender::SyslogSender;

use crate::error::LogError;
use crate::logger::Logger;
use crate::marked::Origin;
use crate::severity::Severity;

// re-exports to avoid version conflicts
mod exported {
    pub use fasyslog::Facility;
    pub use fasyslog::format::SyslogContext;
}
pub use exported::*;

/// The format of the syslog message.
#[derive(Debug, Copy, Clone)]
pub enum SyslogFormat {
    /// [RFC 3164] (BSD syslog Protocol)
    ///
    /// [RFC 3164]: https://datatracker.ietf.org/doc/html/rfc3164
    RFC3164,
    /// [RFC 5424] (The Syslog Protocol)
    ///
    /// [RFC 5424]: https://datatracker.ietf.org/doc/html/rfc5424
    RFC5424,
}

/// A backend adapter that sends log records to a syslog daemon.
///
/// Syslog has no trace-equivalent level, so Verbose and Debug collapse onto
/// `DEBUG`; Info→INFORMATIONAL, Warning→WARNING, Error→ERROR. Syslog offers
/// no enablement query either: every severity reports enabled and filtering
/// is the daemon's concern. `identity` is `None` — the native system has no
/// logger name. Send failures surface as [`LogError::Io`].
#[derive(Debug)]
pub struct SyslogAdapter {
    sender: Mutex<SyslogSender>,
    format: SyslogFormat,
    context: SyslogContext,
}

impl SyslogAdapter {
    fn new(sender: SyslogSender) -> SyslogAdapter {
        SyslogAdapter {
            sender: Mutex::new(sender),
            format: SyslogFormat::RFC3164,
            context: SyslogContext::default(),
        }
    }

    /// Creates an adapter that sends messages to the well-known TCP port (514).
    pub fn tcp_well_known() -> io::Result<SyslogAdapter> {
        fasyslog::sender::tcp_well_known().map(|sender| Self::new(SyslogSender::Tcp(sender)))
    }

    /// Creates an adapter that sends messages to the given TCP address.
    pub fn tcp<A: std::net::ToSocketAddrs>(addr: A) -> io::Result<SyslogAdapter> {
        fasyslog::sender::tcp(addr).map(|sender| Self::new(SyslogSender::Tcp(sender)))
    }

    /// Creates an adapter that sends messages to the well-known UDP port (514).
    pub fn udp_well_known() -> io::Result<SyslogAdapter> {
        fasyslog::sender::udp_well_known().map(|sender| Self::new(SyslogSender::Udp(sender)))
    }

    /// Creates an adapter that sends messages to the given UDP address.
    pub fn udp<L: std::net::ToSocketAddrs, R: std::net::ToSocketAddrs>(
        local: L,
        remote: R,
    ) -> io::Result<SyslogAdapter> {
        fasyslog::sender::udp(local, remote).map(|sender| Self::new(SyslogSender::Udp(sender)))
    }

    /// Creates an adapter that sends messages to the given Unix stream socket.
    #[cfg(unix)]
    pub fn unix_stream(path: impl AsRef<std::path::Path>) -> io::Result<SyslogAdapter> {
        fasyslog::sender::unix_stream(path)
            .map(|sender| Self::new(SyslogSender::UnixStream(sender)))
    }

    /// Creates an adapter that sends messages to the given Unix datagram socket.
    #[cfg(unix)]
    pub fn unix_datagram(path: impl AsRef<std::path::Path>) -> io::Result<SyslogAdapter> {
        fasyslog::sender::unix_datagram(path)
            .map(|sender| Self::new(SyslogSender::UnixDatagram(sender)))
    }

    /// Creates an adapter that sends messages to the given Unix socket.
    ///
    /// This method will automatically choose between `unix_stream` and
    /// `unix_datagram` based on the path.
    #[cfg(unix)]
    pub fn unix(path: impl AsRef<std::path::Path>) -> io::Result<SyslogAdapter> {
        fasyslog::sender::unix(path).map(Self::new)
    }

    /// Set the message format.
    pub fn with_format(mut self, format: SyslogFormat) -> SyslogAdapter {
        self.format = format;
        self
    }

    /// Set the syslog context (facility, hostname, app name).
    pub fn with_context(mut self, context: SyslogContext) -> SyslogAdapter {
        self.context = context;
        self
    }
}

impl Logger for SyslogAdapter {
    fn log(
        &self,
        severity: Severity,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        let severity = severity_to_syslog(severity);
        // syslog has no cause slot; render it into the message
        let message = match (message, cause) {
            (Some(message), Some(cause)) => format!("{message}: {cause}"),
            (Some(message), None) => message.to_owned(),
            (None, Some(cause)) => cause.to_string(),
            (None, None) => String::new(),
        };
        let line = match self.format {
            SyslogFormat::RFC3164 => {
                format!("{}", self.context.format_rfc3164(severity, Some(message)))
            }
            SyslogFormat::RFC5424 => {
                const EMPTY_MSGID: Option<&str> = None;
                const EMPTY_STRUCTURED_DATA: Vec<SDElement> = Vec::new();

                format!(
                    "{}",
                    self.context.format_rfc5424(
                        severity,
                        EMPTY_MSGID,
                        EMPTY_STRUCTURED_DATA,
                        Some(message)
                    )
                )
            }
        };

        let mut sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        sender.send_formatted(line.as_bytes())?;
        Ok(())
    }

    fn enabled(&self, _severity: Severity) -> bool {
        true
    }

    fn identity(&self) -> Option<&str> {
        None
    }
}

impl From<Arc<SyslogAdapter>> for Origin {
    fn from(adapter: Arc<SyslogAdapter>) -> Origin {
        Origin::Plain(adapter)
    }
}

/// Verbose→DEBUG, Debug→DEBUG, Info→INFORMATIONAL, Warning→WARNING,
/// Error→ERROR. Syslog has no trace level, so Verbose collapses onto DEBUG.
fn severity_to_syslog(severity: Severity) -> fasyslog::Severity {
    match severity {
        Severity::Verbose => fasyslog::Severity::DEBUG,
        Severity::Debug => fasyslog::Severity::DEBUG,
        Severity::Info => fasyslog::Severity::INFORMATIONAL,
        Severity::Warning => fasyslog::Severity::WARNING,
        Severity::Error => fasyslog::Severity::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::severity_to_syslog;
    use crate::severity::Severity;

    #[test]
    fn test_severity_mapping_collapses_verbose() {
        assert_eq!(
            severity_to_syslog(Severity::Verbose),
            severity_to_syslog(Severity::Debug)
        );
        assert_eq!(
            severity_to_syslog(Severity::Info),
            fasyslog::Severity::INFORMATIONAL
        );
        assert_eq!(
            severity_to_syslog(Severity::Warning),
            fasyslog::Severity::WARNING
        );
        assert_eq!(
            severity_to_syslog(Severity::Error),
            fasyslog::Severity::ERROR
        );
    }
}
