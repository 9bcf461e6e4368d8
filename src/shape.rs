//! Vertex normalization
//!
//! Raw vertex data arrives as nested sequences whose innermost rows have a
//! width of 2, 3, 4 or 8 numbers. Normalization pads every row to the
//! canonical 8-component layout `[x, y, z, w, r, g, b, a]`:
//!
//! - width 2 gets `z = 1` and `w = 1`
//! - width 3 gets `w = 1`
//! - width 2, 3 and 4 get the node's resolved color in the last four slots
//! - width 8 is already canonical and is kept as is, color untouched
//!
//! Flat vertex lists (rank 2) and vertex grids (rank 3) are distinct types.

use glam::Vec4;
use serde_json::Value;

use crate::color;
use crate::defaults;
use crate::document::{floats, narrow};
use crate::errors::GeometryError;
use crate::types::Vertex;

/// A rectangular numeric array read from a document
#[derive(Clone, Debug, PartialEq)]
pub struct NumericArray {
    dims: Vec<usize>,
    values: Vec<f32>,
}

impl NumericArray {
    /// Read nested sequences of numbers. Every level must be rectangular.
    ///
    /// `field` names the document field for error messages.
    pub fn from_value(value: &Value, field: &'static str) -> Result<Self, GeometryError> {
        match value {
            Value::Number(n) => Ok(Self {
                dims: Vec::new(),
                values: vec![narrow(n.as_f64().unwrap_or_default(), field)?],
            }),
            Value::Array(items) => {
                let mut dims: Option<Vec<usize>> = None;
                let mut values = Vec::new();
                for item in items {
                    let child = Self::from_value(item, field)?;
                    match &dims {
                        Some(expected) if *expected != child.dims => {
                            return Err(GeometryError::RaggedArray { field });
                        }
                        Some(_) => {}
                        None => dims = Some(child.dims),
                    }
                    values.extend(child.values);
                }
                let mut shape = vec![items.len()];
                shape.extend(dims.unwrap_or_default());
                Ok(Self { dims: shape, values })
            }
            _ => Err(GeometryError::InvalidField {
                field,
                expected: "a nested sequence of numbers",
            }),
        }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Size of the last axis: the raw per-vertex width
    pub fn width(&self) -> usize {
        self.dims.last().copied().unwrap_or(0)
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// A flat sequence of canonical vertices
#[derive(Clone, Debug, PartialEq, Default)]
pub struct VertexList(Vec<Vertex>);

impl VertexList {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self(vertices)
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.0.iter()
    }

    /// Render as a sequence of 8-number rows
    pub fn to_value(&self) -> Value {
        Value::Array(self.0.iter().map(|v| floats(&v.to_array())).collect())
    }
}

/// A `rows x cols` grid of canonical vertices, stored row-major
#[derive(Clone, Debug, PartialEq, Default)]
pub struct VertexGrid {
    rows: usize,
    cols: usize,
    vertices: Vec<Vertex>,
}

impl VertexGrid {
    /// Build a grid from row-major vertices; there must be exactly
    /// `rows * cols` of them.
    pub fn new(rows: usize, cols: usize, vertices: Vec<Vertex>) -> Result<Self, GeometryError> {
        if rows.checked_mul(cols) != Some(vertices.len()) {
            return Err(GeometryError::GridShape {
                rows,
                cols,
                len: vertices.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            vertices,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Vertex> {
        if row < self.rows && col < self.cols {
            self.vertices.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[Vertex]> {
        if row < self.rows {
            Some(&self.vertices[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// All vertices in row-major order
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Render as rows of cells of 8-number vertices
    pub fn to_value(&self) -> Value {
        let rows = (0..self.rows)
            .filter_map(|r| self.row(r))
            .map(|row| Value::Array(row.iter().map(|v| floats(&v.to_array())).collect()))
            .collect();
        Value::Array(rows)
    }
}

/// Result of normalizing an array of either supported rank
#[derive(Clone, Debug, PartialEq)]
pub enum Normalized {
    List(VertexList),
    Grid(VertexGrid),
}

impl Normalized {
    pub fn to_value(&self) -> Value {
        match self {
            Normalized::List(list) => list.to_value(),
            Normalized::Grid(grid) => grid.to_value(),
        }
    }
}

/// Normalize a rank 2 or rank 3 array
pub fn normalize(array: &NumericArray, color: Option<&Value>) -> Result<Normalized, GeometryError> {
    match array.rank() {
        2 => normalize_list(array, color).map(Normalized::List),
        3 => normalize_grid(array, color).map(Normalized::Grid),
        rank => Err(GeometryError::InvalidRank {
            rank,
            expected: "2 or 3",
        }),
    }
}

/// Normalize a rank 2 array (a sequence of vertices)
pub fn normalize_list(array: &NumericArray, color: Option<&Value>) -> Result<VertexList, GeometryError> {
    if array.rank() != 2 {
        return Err(GeometryError::InvalidRank {
            rank: array.rank(),
            expected: "2",
        });
    }
    pad_rows(array, color).map(VertexList)
}

/// Normalize a rank 3 array (a grid of vertices)
pub fn normalize_grid(array: &NumericArray, color: Option<&Value>) -> Result<VertexGrid, GeometryError> {
    if array.rank() != 3 {
        return Err(GeometryError::InvalidRank {
            rank: array.rank(),
            expected: "3",
        });
    }
    let vertices = pad_rows(array, color)?;
    VertexGrid::new(array.dims[0], array.dims[1], vertices)
}

fn pad_rows(array: &NumericArray, color: Option<&Value>) -> Result<Vec<Vertex>, GeometryError> {
    let width = array.width();
    match width {
        Vertex::WIDTH => {
            return Ok(array
                .values
                .chunks_exact(Vertex::WIDTH)
                .map(|raw| {
                    let mut row = [0.0; Vertex::WIDTH];
                    row.copy_from_slice(raw);
                    Vertex::from_array(row)
                })
                .collect());
        }
        2..=4 => {}
        dimension => return Err(GeometryError::InvalidDimension { dimension }),
    }

    let rgba = color::resolve(color)?;
    Ok(array
        .values
        .chunks_exact(width)
        .map(|raw| Vertex::new(pad_position(raw), rgba))
        .collect())
}

/// Fill a short position with the homogeneous defaults
pub fn pad_position(raw: &[f32]) -> Vec4 {
    let mut position = defaults::POSITION;
    let n = raw.len().min(4);
    position[..n].copy_from_slice(&raw[..n]);
    Vec4::from_array(position)
}
