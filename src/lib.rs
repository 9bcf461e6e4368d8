//! Scene graph schema for simple vector primitives.
//!
//! Documents are generic trees of maps and sequences (JSON here). Each node
//! names its geometry type under `__class__`; the [`Registry`] maps that tag to
//! a [`Kind`] and the [`SceneParser`] turns the tree into typed [`Geometry`]
//! records with canonical 8-component vertices, and back.
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({"__class__": "Circle", "center": [0, 0], "radius": 2, "color": "#f00"});
//! let scene = sweatervest::parse_scene(&doc).unwrap();
//! assert_eq!(scene.records().count(), 1);
//!
//! // the bare circle was wrapped in an implicit scene, which is not written back
//! let out = sweatervest::serialize_scene(&scene).unwrap();
//! assert_eq!(out["__class__"], "Circle");
//! ```

pub mod color;
pub mod defaults;
pub mod document;
pub mod errors;
pub mod geometry;
mod log;
pub mod parser;
pub mod registry;
pub mod shape;
pub mod types;

use std::path::Path;

pub use errors::{ColorError, GeometryError, RegistryError, SceneError};
pub use geometry::{
    Children, Circle, ConvexPolygon, CubicHermitePath, Geometry, Group, LinePath,
    MicropolygonMesh, Record, Scene,
};
pub use parser::SceneParser;
pub use registry::{Kind, Registry};
pub use shape::{Normalized, NumericArray, VertexGrid, VertexList, normalize};
pub use types::{NodePath, Vertex};

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a document into a scene using the standard registry
pub fn parse_scene(document: &serde_json::Value) -> Result<Scene, SceneError> {
    SceneParser::new(Registry::global()).parse(document)
}

/// Serialize a scene into a document using the standard registry
pub fn serialize_scene(scene: &Scene) -> Result<serde_json::Value, SceneError> {
    SceneParser::new(Registry::global()).serialize(scene)
}

/// Parse JSON text into a scene
pub fn parse_scene_str(source: &str) -> Result<Scene, miette::Report> {
    let document: serde_json::Value =
        serde_json::from_str(source).map_err(|e| miette::miette!("Invalid JSON document: {}", e))?;
    Ok(parse_scene(&document)?)
}

/// Read a JSON scene file and parse it
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, miette::Report> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))?;
    parse_scene_str(&source).map_err(|e| e.wrap_err(format!("in {}", path.display())))
}
