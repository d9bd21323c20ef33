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

/// Errors from constructing markers or deriving marked loggers.
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("marker name must not be empty")]
    EmptyName,
}

/// Errors raised by a native backend during a log call.
///
/// The facade never catches, suppresses, or retries these; they propagate to
/// the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
