//! End-to-end parsing and serialization through the public API.

use glam::Vec4;
use insta::assert_snapshot;
use serde_json::{Value, json};
use sweatervest::{
    Geometry, Kind, Record, Registry, RegistryError, SceneError, SceneParser, parse_scene,
    serialize_scene,
};

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

fn parse_err(document: Value) -> SceneError {
    parse_scene(&document).unwrap_err()
}

// =============================================================================
// Error messages
// =============================================================================

#[test]
fn unknown_type_message() {
    let err = parse_err(json!({"__class__": "Scene", "root": {"__class__": "Hexagon"}}));
    assert_snapshot!(error_chain(&err), @"unknown geometry type `Hexagon` at $.root");
}

#[test]
fn missing_tag_message() {
    let err = parse_err(json!({"__class__": "Group", "children": [
        {"__class__": "Circle", "center": [0, 0], "radius": 1},
        {"center": [0, 0], "radius": 1},
    ]}));
    assert_snapshot!(error_chain(&err), @"node at $.children[1] has no `__class__` tag");
}

#[test]
fn invalid_dimension_message() {
    let err = parse_err(json!({"__class__": "Scene", "root": {"__class__": "Group", "children": [
        {"__class__": "ConvexPolygon", "vertices": [[0, 0, 0, 0, 0]]},
    ]}}));
    assert_snapshot!(
        error_chain(&err),
        @"malformed geometry at $.root.children[0]: vertex width is 5, expected one of 2, 3, 4 or 8"
    );
}

#[test]
fn invalid_rank_message() {
    let err = parse_err(json!({"__class__": "LinePath", "vertices": [0, 1, 2]}));
    assert_snapshot!(error_chain(&err), @"malformed geometry at $: vertex array has rank 1, expected 2");
}

#[test]
fn malformed_color_message() {
    let err = parse_err(json!({"__class__": "Circle", "center": [0, 0], "radius": 1, "color": "zzz"}));
    assert_snapshot!(error_chain(&err), @"malformed geometry at $: malformed color literal `zzz`");
}

#[test]
fn duplicate_tag_message() {
    let err = Registry::standard().with("Circle", Kind::Group).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateTag { .. }));
    assert_snapshot!(err.to_string(), @"tag `Circle` is already registered to Circle, cannot rebind it to Group");
}

#[test]
fn unregistered_variant_message() {
    let registry = Registry::new().with("Scene", Kind::Scene).unwrap();
    let scene = parse_scene(&json!({"__class__": "Circle", "center": [0, 0], "radius": 1})).unwrap();
    let err = SceneParser::new(&registry).serialize(&scene).unwrap_err();
    assert_snapshot!(err.to_string(), @"no tag registered for Circle records");
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn circle_parses_and_reserializes() {
    let scene = parse_scene(&json!({
        "__class__": "Circle", "center": [0, 0], "radius": 2, "color": "#f00"
    }))
    .unwrap();

    let Geometry::Circle(circle) = scene.root.as_ref() else {
        panic!("expected a circle root, got {:?}", scene.root);
    };
    assert_eq!(circle.center, Vec4::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(circle.radius, 2.0);
    assert_eq!(circle.color, Vec4::new(1.0, 0.0, 0.0, 1.0));

    let out = serialize_scene(&scene).unwrap();
    assert_eq!(
        out,
        json!({
            "__class__": "Circle",
            "center": [0.0, 0.0, 1.0, 1.0],
            "radius": 2.0,
            "color": [1.0, 0.0, 0.0, 1.0],
        })
    );
}

#[test]
fn group_order_survives_round_trip() {
    let doc = json!({"__class__": "Group", "children": [
        {"__class__": "Circle", "center": [3, 0], "radius": 1},
        {"__class__": "Circle", "center": [1, 0], "radius": 1},
        {"__class__": "Circle", "center": [2, 0], "radius": 1},
    ]});
    let scene = parse_scene(&doc).unwrap();
    let out = serialize_scene(&scene).unwrap();
    assert_eq!(out["__class__"], json!("Group"));
    let xs: Vec<f64> = out["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["center"][0].as_f64().unwrap())
        .collect();
    assert_eq!(xs, [3.0, 1.0, 2.0]);
}

#[test]
fn bare_top_level_documents_reserialize_unchanged() {
    let docs = [
        json!({"__class__": "Group", "children": []}),
        json!({"__class__": "LinePath", "vertices": [[0.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 1.0]]}),
        json!({"__class__": "Circle", "center": [0.0, 0.0, 1.0, 1.0], "radius": 2.0,
               "color": [1.0, 0.0, 0.0, 1.0], "label": "sun"}),
    ];
    for doc in docs {
        let scene = parse_scene(&doc).unwrap();
        assert_eq!(serialize_scene(&scene).unwrap(), doc);
    }
}

#[test]
fn out_of_range_radius_is_rejected() {
    let err = parse_err(json!({"__class__": "Circle", "center": [0, 0], "radius": 1e39}));
    assert_snapshot!(
        error_chain(&err),
        @"malformed geometry at $: field `radius` must be a finite 32-bit number"
    );
}

#[test]
fn canonical_vertices_are_reproduced_exactly() {
    let rows = json!([
        [0.0, 0.0, 1.0, 1.0, 0.25, 0.5, 0.75, 1.0],
        [1.5, -2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
    ]);
    let registry = Registry::standard();
    for tag in ["ConvexPolygon", "LinePath", "CubicHermitePath"] {
        let node = json!({"__class__": tag, "vertices": rows});
        let record = registry.decode_by_tag(&node).unwrap();
        let out = registry.encode(&record).unwrap();
        assert_eq!(out, node, "{tag} should reproduce canonical rows");
    }
}

#[test]
fn every_variant_round_trips() {
    let registry = Registry::standard();
    let nodes = [
        json!({"__class__": "Circle", "center": [1, 2, 3], "radius": 0.5, "color": [0, 64, 128, 255]}),
        json!({"__class__": "ConvexPolygon", "vertices": [[0, 0], [1, 0], [0, 1]], "color": "#102030"}),
        json!({"__class__": "LinePath", "vertices": [[0, 0, 0, 1]]}),
        json!({"__class__": "CubicHermitePath", "vertices": [[0, 0], [1, 1]], "color": "8888"}),
        json!({"__class__": "MicropolygonMesh", "vertices": [[[0, 0, 0], [1, 0, 0]]]}),
        json!({"__class__": "Group", "children": [], "name": "empty"}),
        json!({"__class__": "Scene", "root": {"__class__": "Group", "children": []}, "author": "me"}),
    ];
    for node in nodes {
        let record = registry.decode_by_tag(&node).unwrap();
        let encoded = registry.encode(&record).unwrap();
        let again = registry.decode_by_tag(&encoded).unwrap();
        assert_eq!(again, record, "round trip of {}", record.kind());
    }
}

#[test]
fn extra_fields_are_kept() {
    let doc = json!({"__class__": "Circle", "center": [0, 0], "radius": 1, "id": 7, "tags": ["a"]});
    let record = Registry::global().decode_by_tag(&doc).unwrap();
    let out = Registry::global().encode(&record).unwrap();
    assert_eq!(out["id"], json!(7));
    assert_eq!(out["tags"], json!(["a"]));
}

#[test]
fn records_walk_the_whole_scene() {
    let doc = json!({"__class__": "Scene", "root": {"__class__": "Group", "children": [
        {"__class__": "LinePath", "vertices": [[0, 0], [1, 1]]},
        {"__class__": "Group", "children": [
            {"__class__": "MicropolygonMesh", "vertices": [[[0, 0]]]},
        ]},
        {"__class__": "Circle", "center": [0, 0], "radius": 1},
    ]}});
    let scene = parse_scene(&doc).unwrap();
    let kinds: Vec<Kind> = scene.records().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        [Kind::Group, Kind::LinePath, Kind::Group, Kind::MicropolygonMesh, Kind::Circle]
    );
}

#[test]
fn parsing_is_shareable_across_threads() {
    let doc = json!({"__class__": "Group", "children": [
        {"__class__": "Circle", "center": [0, 0], "radius": 1},
    ]});
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| parse_scene(&doc))).collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    });
}
