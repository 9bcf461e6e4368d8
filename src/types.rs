//! Small value types shared across the crate.

use std::fmt;

use glam::Vec4;

/// One canonical vertex row: homogeneous position followed by RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vertex {
    pub position: Vec4,
    pub color: Vec4,
}

impl Vertex {
    /// Number of `f32` components in a canonical row
    pub const WIDTH: usize = 8;

    pub fn new(position: Vec4, color: Vec4) -> Self {
        Self { position, color }
    }

    /// Build a vertex from `[x, y, z, w, r, g, b, a]`
    pub fn from_array(row: [f32; 8]) -> Self {
        Self {
            position: Vec4::new(row[0], row[1], row[2], row[3]),
            color: Vec4::new(row[4], row[5], row[6], row[7]),
        }
    }

    /// Flatten to `[x, y, z, w, r, g, b, a]`
    pub fn to_array(self) -> [f32; 8] {
        let p = self.position.to_array();
        let c = self.color.to_array();
        [p[0], p[1], p[2], p[3], c[0], c[1], c[2], c[3]]
    }
}

/// A single step from a parent document node to a child
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a node inside a document, from the root.
///
/// Displays as `$` for the root, then `.key` and `[index]` steps,
/// e.g. `$.root.children[1]`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NodePath(Vec<PathSegment>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A new path with a map key appended
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.into()));
        Self(segments)
    }

    /// A new path with a sequence index appended
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
