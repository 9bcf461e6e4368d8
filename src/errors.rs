//! Error types with diagnostics using miette
//!
//! Errors are layered: color errors nest inside geometry errors, and geometry
//! errors are wrapped with the offending node path by the scene parser.

use miette::Diagnostic;
use thiserror::Error;

use crate::registry::Kind;
use crate::types::NodePath;

// ============================================================================
// Color Errors
// ============================================================================

/// Errors that occur while resolving a color value
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("malformed color literal `{input}`")]
    #[diagnostic(
        code(sweatervest::color::malformed_literal),
        help("use `#` followed by 3, 4, 6 or 8 hex digits, e.g. `#f00` or `#ff000080`")
    )]
    MalformedLiteral { input: String },

    #[error("color sequence has {len} components, expected at least 4")]
    #[diagnostic(code(sweatervest::color::too_few_components))]
    TooFewComponents { len: usize },

    #[error("color component {index} is not a number")]
    #[diagnostic(code(sweatervest::color::non_numeric_component))]
    NonNumericComponent { index: usize },

    #[error("color component {index} does not fit a 32-bit float")]
    #[diagnostic(code(sweatervest::color::out_of_range))]
    OutOfRange { index: usize },

    #[error("color must be a hex string or a sequence of numbers, got {got}")]
    #[diagnostic(code(sweatervest::color::unsupported_value))]
    UnsupportedValue { got: &'static str },
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors that occur while constructing a single geometry record
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("vertex array has rank {rank}, expected {expected}")]
    #[diagnostic(code(sweatervest::geometry::invalid_rank))]
    InvalidRank { rank: usize, expected: &'static str },

    #[error("vertex width is {dimension}, expected one of 2, 3, 4 or 8")]
    #[diagnostic(code(sweatervest::geometry::invalid_dimension))]
    InvalidDimension { dimension: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    MalformedColor(#[from] ColorError),

    #[error("missing required field `{field}`")]
    #[diagnostic(code(sweatervest::geometry::missing_field))]
    MissingField { field: &'static str },

    #[error("field `{field}` must be {expected}")]
    #[diagnostic(code(sweatervest::geometry::invalid_field))]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{field}` is ragged: every row must have the same length")]
    #[diagnostic(code(sweatervest::geometry::ragged_array))]
    RaggedArray { field: &'static str },

    #[error("node must be a map, got {got}")]
    #[diagnostic(code(sweatervest::geometry::not_a_map))]
    NotAMap { got: &'static str },

    #[error("{len} vertices do not fill a {rows}x{cols} grid")]
    #[diagnostic(code(sweatervest::geometry::grid_shape))]
    GridShape { rows: usize, cols: usize, len: usize },

    #[error("nodes are nested more than {limit} levels deep")]
    #[diagnostic(code(sweatervest::geometry::too_deep))]
    TooDeep { limit: usize },
}

// ============================================================================
// Scene Errors
// ============================================================================

/// Errors that occur while parsing or serializing a scene
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("node at {path} has no `__class__` tag")]
    #[diagnostic(
        code(sweatervest::scene::missing_tag),
        help("every node needs a string `__class__` field naming its geometry type")
    )]
    MissingTag { path: NodePath },

    #[error("unknown geometry type `{tag}` at {path}")]
    #[diagnostic(code(sweatervest::scene::unknown_type))]
    UnknownType {
        tag: String,
        path: NodePath,
        #[help]
        suggestion: Option<String>,
    },

    #[error("no tag registered for {kind:?} records")]
    #[diagnostic(code(sweatervest::scene::unregistered_variant))]
    UnregisteredVariant { kind: Kind },

    #[error("malformed geometry at {path}")]
    #[diagnostic(code(sweatervest::scene::malformed_geometry))]
    MalformedGeometry {
        path: NodePath,
        #[source]
        #[diagnostic_source]
        source: GeometryError,
    },
}

impl SceneError {
    /// The node path the error refers to, when it has one
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            SceneError::MissingTag { path }
            | SceneError::UnknownType { path, .. }
            | SceneError::MalformedGeometry { path, .. } => Some(path),
            SceneError::UnregisteredVariant { .. } => None,
        }
    }

    /// The geometry error underneath a `MalformedGeometry`
    pub fn geometry_error(&self) -> Option<&GeometryError> {
        match self {
            SceneError::MalformedGeometry { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Registry Errors
// ============================================================================

/// Errors in registry configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("tag `{tag}` is already registered to {existing:?}, cannot rebind it to {requested:?}")]
    #[diagnostic(code(sweatervest::registry::duplicate_tag))]
    DuplicateTag {
        tag: String,
        existing: Kind,
        requested: Kind,
    },
}
