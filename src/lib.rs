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

//! Logmark is a marker-aware logging facade: one uniform [`Logger`] capability
//! backed by heterogeneous native logging systems, with hierarchical
//! [`Marker`]s for grouping and filtering diagnostics by subsystem without
//! changing call sites.
//!
//! # Overview
//!
//! A backend adapter wraps one native logging system and translates the five
//! abstract [`Severity`] levels into that system's own levels. A
//! [`MarkedLogger`] decorates any logger with a marker and derives named
//! sub-loggers whose markers chain parent-to-child, mirroring subsystem
//! nesting. When the backend understands markers natively (the [`log`] crate
//! adapter, via key-values), the marker is handed straight to the backend;
//! otherwise calls fall through unchanged and the marker only shows up as the
//! logger's identity.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use logmark::Logger;
//! use logmark::adapter::LogAdapter;
//!
//! let backend = Arc::new(LogAdapter::global("app"));
//! let net = logmark::sub_logger(backend, "app::net").unwrap();
//! net.info(Some("listener started"), None).unwrap();
//!
//! let http = net.sub_logger("app::net::http").unwrap();
//! assert_eq!(http.identity(), Some("app::net::http"));
//! assert!(http.marker().is_within("app::net"));
//! ```
//!
//! Deriving sub-loggers never stacks wrappers: every derived logger holds the
//! same origin backend and exactly one marker, however deep the chain goes.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod adapter;

mod error;
mod logger;
mod marked;
mod marker;
mod severity;

pub use error::LogError;
pub use error::MarkerError;
pub use logger::Logger;
pub use logger::MarkerCapable;
pub use marked::MarkedLogger;
pub use marked::Origin;
pub use marked::sub_logger;
pub use marker::Marker;
pub use marker::ROOT_MARKER;
pub use severity::Severity;
