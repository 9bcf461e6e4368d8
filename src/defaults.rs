//! Defaults and reserved document keys

use glam::Vec4;

/// Color used when a node gives none: opaque white.
pub const COLOR: Vec4 = Vec4::ONE;

/// Homogeneous position defaults `(x, y, z, w)` for short positions.
pub const POSITION: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Key holding the type tag on every node
pub const TAG_KEY: &str = "__class__";

pub const CENTER_KEY: &str = "center";
pub const RADIUS_KEY: &str = "radius";
pub const COLOR_KEY: &str = "color";
pub const VERTICES_KEY: &str = "vertices";
pub const CHILDREN_KEY: &str = "children";
pub const ROOT_KEY: &str = "root";

/// Deepest node nesting the parser will walk, the same limit `serde_json`
/// applies when reading text
pub const MAX_DEPTH: usize = 128;
