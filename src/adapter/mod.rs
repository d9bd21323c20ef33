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

//! Backend adapters that translate the five abstract severities into each
//! native logging system's own levels.
//!
//! Each adapter wraps exactly one native logging system and performs exactly
//! one native invocation per call. [`LogAdapter`] is the marker-capable
//! backend; the others have no native marker concept and are wrapped as plain
//! origins.

mod log;
#[cfg(feature = "backend-opentelemetry")]
pub mod opentelemetry;
#[cfg(feature = "backend-syslog")]
pub mod syslog;
mod testing;

pub use self::log::LogAdapter;
#[cfg(feature = "backend-opentelemetry")]
pub use self::opentelemetry::OpentelemetryAdapter;
#[cfg(feature = "backend-syslog")]
pub use self::syslog::SyslogAdapter;
pub use self::testing::CapturedRecord;
pub use self::testing::Testing;
