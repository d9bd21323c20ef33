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

use std::sync::Arc;

use logmark::Logger;
use logmark::Marker;
use logmark::MarkerError;
use logmark::Origin;
use logmark::ROOT_MARKER;
use logmark::Severity;
use logmark::adapter::Testing;
use logmark::sub_logger;

#[test]
fn test_marker_chain_reaches_root() {
    let backend = Arc::new(Testing::new());
    let x = sub_logger(Origin::plain(backend), "it_chain_x").unwrap();
    let y = x.sub_logger("it_chain_y").unwrap();

    assert_eq!(y.marker().name(), "it_chain_y");

    let y_parents = y.marker().parents();
    assert_eq!(y_parents.len(), 1);
    assert_eq!(y_parents[0].name(), "it_chain_x");

    let x_parents = x.marker().parents();
    assert_eq!(x_parents.len(), 1);
    assert_eq!(x_parents[0].name(), ROOT_MARKER);
    assert!(x_parents[0].same_as(&Marker::root()));

    assert!(y.marker().is_within(ROOT_MARKER));
}

#[test]
fn test_derivation_depth_keeps_one_layer() {
    let backend = Arc::new(Testing::new());
    let a = sub_logger(backend.clone(), "it_depth_a").unwrap();
    let b = a.sub_logger("it_depth_b").unwrap();
    let c = b.sub_logger("it_depth_c").unwrap();

    assert!(a.origin().ptr_eq(b.origin()));
    assert!(b.origin().ptr_eq(c.origin()));

    // the marker-capable backend receives every call natively, at any depth
    c.info(Some("deep"), None).unwrap();
    let records = backend.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].native_marker);
    assert_eq!(records[0].marker.as_ref().unwrap().name(), "it_depth_c");
}

#[test]
fn test_interning_across_call_sites() {
    let first = Marker::of("it_intern_shared").unwrap();
    let second = Marker::of("it_intern_shared").unwrap();
    assert!(first.same_as(&second));
    assert_eq!(first, second);
}

#[test]
fn test_enablement_is_origin_enablement() {
    let backend = Arc::new(Testing::new().with_min_severity(Severity::Info));
    let logger = sub_logger(Origin::plain(backend.clone()), "it_enab").unwrap();
    let sub = logger.sub_logger("it_enab_sub").unwrap();

    for severity in Severity::ALL {
        assert_eq!(sub.enabled(severity), backend.enabled(severity));
    }
}

#[test]
fn test_empty_sub_logger_name_is_rejected() {
    let backend = Arc::new(Testing::new());
    let logger = sub_logger(Origin::plain(backend.clone()), "it_empty").unwrap();

    assert!(matches!(
        logger.sub_logger(""),
        Err(MarkerError::EmptyName)
    ));
    assert!(matches!(
        sub_logger(Origin::plain(backend), ""),
        Err(MarkerError::EmptyName)
    ));
}
