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

//! Adapter over OpenTelemetry logs.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::SystemTime;

use opentelemetry::InstrumentationScope;
use opentelemetry::logs::AnyValue;
use opentelemetry::logs::LogRecord;
use opentelemetry::logs::Logger;
use opentelemetry::logs::LoggerProvider;
use opentelemetry::logs::Severity as OtelSeverity;
use opentelemetry_sdk::logs::SdkLogger;
use opentelemetry_sdk::logs::SdkLoggerProvider;

use crate::error::LogError;
use crate::marked::Origin;
use crate::severity::Severity;

/// A backend adapter that emits log records through the OpenTelemetry SDK.
///
/// Severities map injectively: Verbose→Trace, Debug→Debug, Info→Info,
/// Warning→Warn, Error→Error. A `cause` is attached as a `cause` attribute.
/// `identity` is the instrumentation scope name. The stable OpenTelemetry
/// logs API offers no enablement query, so every severity reports enabled and
/// filtering is left to the SDK's processors.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use logmark::Logger;
/// use logmark::adapter::OpentelemetryAdapter;
/// use opentelemetry_sdk::logs::SdkLoggerProvider;
///
/// let provider = SdkLoggerProvider::builder().build();
/// let backend = Arc::new(OpentelemetryAdapter::new("my_service", provider));
/// let logger = logmark::sub_logger(backend, "my_service::net").unwrap();
/// logger.warning(Some("reconnecting"), None).unwrap();
/// ```
#[derive(Debug)]
pub struct OpentelemetryAdapter {
    name: String,
    logger: SdkLogger,
    provider: SdkLoggerProvider,
}

impl OpentelemetryAdapter {
    /// Creates an adapter emitting under the instrumentation scope `name`.
    pub fn new(name: impl Into<String>, provider: SdkLoggerProvider) -> OpentelemetryAdapter {
        let name = name.into();
        let scope = InstrumentationScope::builder(name.clone()).build();
        let logger = provider.logger_with_scope(scope);
        OpentelemetryAdapter {
            name,
            logger,
            provider,
        }
    }
}

impl crate::Logger for OpentelemetryAdapter {
    fn log(
        &self,
        severity: Severity,
        message: Option<&str>,
        cause: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), LogError> {
        let now = SystemTime::now();

        let mut record = self.logger.create_log_record();
        record.set_timestamp(now);
        record.set_observed_timestamp(now);
        record.set_severity_number(severity_to_otel(severity));
        record.set_severity_text(severity.name());
        record.set_target(self.name.clone());
        if let Some(message) = message {
            record.set_body(AnyValue::from(message.to_owned()));
        }
        if let Some(cause) = cause {
            record.add_attribute("cause", cause.to_string());
        }

        self.logger.emit(record);
        Ok(())
    }

    fn enabled(&self, _severity: Severity) -> bool {
        true
    }

    fn identity(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Drop for OpentelemetryAdapter {
    fn drop(&mut self) {
        let _ = self.provider.force_flush();
    }
}

impl From<Arc<OpentelemetryAdapter>> for Origin {
    fn from(adapter: Arc<OpentelemetryAdapter>) -> Origin {
        Origin::Plain(adapter)
    }
}

/// Verbose→Trace, Debug→Debug, Info→Info, Warning→Warn, Error→Error.
fn severity_to_otel(severity: Severity) -> OtelSeverity {
    match severity {
        Severity::Verbose => OtelSeverity::Trace,
        Severity::Debug => OtelSeverity::Debug,
        Severity::Info => OtelSeverity::Info,
        Severity::Warning => OtelSeverity::Warn,
        Severity::Error => OtelSeverity::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::OtelSeverity;
    use super::severity_to_otel;
    use crate::severity::Severity;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(severity_to_otel(Severity::Verbose), OtelSeverity::Trace);
        assert_eq!(severity_to_otel(Severity::Debug), OtelSeverity::Debug);
        assert_eq!(severity_to_otel(Severity::Info), OtelSeverity::Info);
        assert_eq!(severity_to_otel(Severity::Warning), OtelSeverity::Warn);
        assert_eq!(severity_to_otel(Severity::Error), OtelSeverity::Error);
    }
}
