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

use std::fmt;

/// The five abstract severities understood by every [`Logger`](crate::Logger),
/// ordered by increasing importance.
///
/// Each backend adapter maps these onto its own native levels. The mapping is
/// not required to be injective: a backend without a trace-equivalent level
/// collapses `Verbose` and `Debug` onto the same native level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// All severities, in increasing order of importance.
    pub const ALL: [Severity; 5] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// The uppercase label of this severity.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Severity;

    #[test]
    fn test_severity_order() {
        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
        assert!(Severity::Verbose < Severity::Debug);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_severity_name() {
        assert_eq!(Severity::Verbose.name(), "VERBOSE");
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }
}
