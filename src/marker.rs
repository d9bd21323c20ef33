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

//! Hierarchical markers for grouping and filtering diagnostics by subsystem.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::RwLock;

use crate::error::MarkerError;

/// The name of the well-known root marker.
///
/// Every marker derived through [`sub_logger`](crate::sub_logger) is reachable
/// from this marker.
pub const ROOT_MARKER: &str = "logmark";

static REGISTRY: LazyLock<Mutex<HashMap<String, Marker>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// A named hierarchical tag attachable to a log entry.
///
/// Markers are interned by name in a process-wide registry: creating a marker
/// by a name already seen returns the existing node, so markers with the same
/// name share identity for the lifetime of the process. A marker may declare
/// zero or more parent markers, forming a DAG over names.
///
/// `Marker` is a cheap handle; cloning it never copies the node.
///
/// # Examples
///
/// ```
/// use logmark::Marker;
///
/// let net = Marker::of("net").unwrap();
/// let http = Marker::with_parent("http", &net).unwrap();
///
/// assert!(http.is_within("net"));
/// assert!(Marker::of("net").unwrap().same_as(&net));
/// ```
#[derive(Clone)]
pub struct Marker {
    inner: Arc<MarkerInner>,
}

struct MarkerInner {
    name: String,
    parents: RwLock<Vec<Marker>>,
}

impl Marker {
    /// Returns the marker interned under `name`, creating it with no parents
    /// on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn of(name: &str) -> Result<Marker, MarkerError> {
        if name.is_empty() {
            return Err(MarkerError::EmptyName);
        }
        Ok(Self::intern(name, None))
    }

    /// Returns the marker interned under `name`, with `parent` added to its
    /// parents.
    ///
    /// Re-interning an existing name augments the existing node rather than
    /// creating a duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn with_parent(name: &str, parent: &Marker) -> Result<Marker, MarkerError> {
        if name.is_empty() {
            return Err(MarkerError::EmptyName);
        }
        Ok(Self::intern(name, Some(parent)))
    }

    /// The well-known root marker, named [`ROOT_MARKER`].
    pub fn root() -> Marker {
        Self::intern(ROOT_MARKER, None)
    }

    fn intern(name: &str, parent: Option<&Marker>) -> Marker {
        let marker = {
            let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
            registry
                .entry(name.to_owned())
                .or_insert_with(|| Marker {
                    inner: Arc::new(MarkerInner {
                        name: name.to_owned(),
                        parents: RwLock::new(Vec::new()),
                    }),
                })
                .clone()
        };
        if let Some(parent) = parent {
            marker.add_parent(parent);
        }
        marker
    }

    /// The name of this marker.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// A snapshot of this marker's parents, in insertion order.
    pub fn parents(&self) -> Vec<Marker> {
        self.inner
            .parents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Adds `parent` to this marker's parents; a parent already present is
    /// ignored.
    ///
    /// The parent relation must stay acyclic. Cycles are not detected: a
    /// self-referential parent chain is not rejected here and will hang
    /// hierarchy walks such as [`Marker::is_within`].
    pub fn add_parent(&self, parent: &Marker) {
        let mut parents = self
            .inner
            .parents
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if !parents.iter().any(|p| p.same_as(parent)) {
            parents.push(parent.clone());
        }
    }

    /// Whether this marker is named `name` or has an ancestor named `name`.
    pub fn is_within(&self, name: &str) -> bool {
        self.inner.name == name || self.parents().iter().any(|p| p.is_within(name))
    }

    /// Whether `self` and `other` are the same interned node.
    pub fn same_as(&self, other: &Marker) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Marker) -> bool {
        // interning makes name equality coincide with node identity
        self.inner.name == other.inner.name
    }
}

impl Eq for Marker {}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.name.hash(state);
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parents = self
            .parents()
            .iter()
            .map(|p| p.name().to_owned())
            .collect::<Vec<_>>();
        f.debug_struct("Marker")
            .field("name", &self.inner.name)
            .field("parents", &parents)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Marker;
    use super::ROOT_MARKER;
    use crate::error::MarkerError;

    // Marker names are globally interned; tests use unique names to stay
    // independent of each other within one test binary.

    #[test]
    fn test_interning_shares_nodes() {
        let a = Marker::of("marker_intern").unwrap();
        let b = Marker::of("marker_intern").unwrap();
        assert!(a.same_as(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reintern_augments_parents() {
        let p1 = Marker::of("marker_aug_p1").unwrap();
        let p2 = Marker::of("marker_aug_p2").unwrap();

        let m = Marker::with_parent("marker_aug", &p1).unwrap();
        let again = Marker::with_parent("marker_aug", &p2).unwrap();

        assert!(m.same_as(&again));
        let parents = m.parents();
        assert_eq!(parents.len(), 2);
        assert!(parents[0].same_as(&p1));
        assert!(parents[1].same_as(&p2));
    }

    #[test]
    fn test_add_parent_ignores_duplicates() {
        let p = Marker::of("marker_dup_p").unwrap();
        let m = Marker::with_parent("marker_dup", &p).unwrap();
        m.add_parent(&p);
        assert_eq!(m.parents().len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(Marker::of(""), Err(MarkerError::EmptyName)));
        let p = Marker::of("marker_empty_p").unwrap();
        assert!(matches!(
            Marker::with_parent("", &p),
            Err(MarkerError::EmptyName)
        ));
    }

    #[test]
    fn test_root_marker() {
        let root = Marker::root();
        assert_eq!(root.name(), ROOT_MARKER);
        assert!(root.same_as(&Marker::root()));
    }

    #[test]
    fn test_is_within_walks_ancestors() {
        let top = Marker::of("marker_walk_top").unwrap();
        let mid = Marker::with_parent("marker_walk_mid", &top).unwrap();
        let leaf = Marker::with_parent("marker_walk_leaf", &mid).unwrap();

        assert!(leaf.is_within("marker_walk_leaf"));
        assert!(leaf.is_within("marker_walk_mid"));
        assert!(leaf.is_within("marker_walk_top"));
        assert!(!leaf.is_within("marker_walk_other"));
        assert!(!top.is_within("marker_walk_leaf"));
    }

    #[test]
    fn test_display_and_debug() {
        let p = Marker::of("marker_fmt_p").unwrap();
        let m = Marker::with_parent("marker_fmt", &p).unwrap();
        assert_eq!(m.to_string(), "marker_fmt");
        let debug = format!("{m:?}");
        assert!(debug.contains("marker_fmt_p"));
    }
}
