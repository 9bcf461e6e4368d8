//! Geometry record types
//!
//! Each record type knows how to:
//! - Decode itself from the fields of a document node
//! - Report its kind, its own document fields, and its child records
//!
//! Tags and child traversal are the parser's job, so records never see the
//! registry.

mod circle;
mod group;
mod mesh;
mod path;
mod polygon;

pub use circle::Circle;
pub use group::{Group, Scene};
pub use mesh::MicropolygonMesh;
pub use path::{CubicHermitePath, LinePath};
pub use polygon::ConvexPolygon;

use enum_dispatch::enum_dispatch;

use crate::defaults::{COLOR_KEY, TAG_KEY, VERTICES_KEY};
use crate::document::{Fields, extras, require};
use crate::errors::GeometryError;
use crate::registry::Kind;
use crate::shape::{NumericArray, VertexGrid, VertexList, normalize_grid, normalize_list};

/// Keys consumed by records that carry a `vertices` array
const VERTEX_RESERVED: &[&str] = &[TAG_KEY, VERTICES_KEY, COLOR_KEY];

/// Decode the `vertices` of a rank 2 record, plus its unrecognized fields
fn decode_vertex_list(fields: &Fields) -> Result<(VertexList, Fields), GeometryError> {
    let raw = NumericArray::from_value(require(fields, VERTICES_KEY)?, VERTICES_KEY)?;
    let vertices = normalize_list(&raw, fields.get(COLOR_KEY))?;
    Ok((vertices, extras(fields, VERTEX_RESERVED)))
}

/// Decode the `vertices` of a rank 3 record, plus its unrecognized fields
fn decode_vertex_grid(fields: &Fields) -> Result<(VertexGrid, Fields), GeometryError> {
    let raw = NumericArray::from_value(require(fields, VERTICES_KEY)?, VERTICES_KEY)?;
    let vertices = normalize_grid(&raw, fields.get(COLOR_KEY))?;
    Ok((vertices, extras(fields, VERTEX_RESERVED)))
}

/// Child records of a node, and where they live in its document form
#[derive(Clone, Copy, Debug)]
pub enum Children<'a> {
    /// A leaf record
    None,
    /// An ordered sequence under the `children` key
    List(&'a [Geometry]),
    /// A single record under the `root` key
    Root(&'a Geometry),
}

/// Common behavior for all geometry records
#[enum_dispatch]
pub trait Record {
    /// The kind of record, used to look up its tag
    fn kind(&self) -> Kind;

    /// Document fields, excluding the tag and child records
    fn fields(&self) -> Fields;

    /// Child records, in document order
    fn children(&self) -> Children<'_> {
        Children::None
    }
}

/// Any geometry record
#[enum_dispatch(Record)]
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Circle,
    ConvexPolygon,
    LinePath,
    CubicHermitePath,
    MicropolygonMesh,
    Group,
    Scene,
}

impl Geometry {
    /// Iterate over this record and every record below it, depth-first, in
    /// document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Depth-first iterator over a record tree
pub struct Descendants<'a> {
    stack: Vec<&'a Geometry>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Geometry;

    fn next(&mut self) -> Option<&'a Geometry> {
        let current = self.stack.pop()?;
        match current.children() {
            Children::None => {}
            Children::Root(root) => self.stack.push(root),
            Children::List(children) => self.stack.extend(children.iter().rev()),
        }
        Some(current)
    }
}
