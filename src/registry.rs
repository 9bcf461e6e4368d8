//! Geometry type registry
//!
//! Maps the string tag found under `__class__` to a [`Kind`], and each kind
//! back to the tag written when encoding. The set of kinds is closed; the
//! registry only decides which tags name them.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;

use crate::errors::{RegistryError, SceneError};
use crate::geometry::Geometry;
use crate::parser::SceneParser;

/// Every geometry type the format knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Circle,
    ConvexPolygon,
    LinePath,
    CubicHermitePath,
    MicropolygonMesh,
    Group,
    Scene,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::Circle,
        Kind::ConvexPolygon,
        Kind::LinePath,
        Kind::CubicHermitePath,
        Kind::MicropolygonMesh,
        Kind::Group,
        Kind::Scene,
    ];

    /// The type name, which is also the standard tag
    pub fn name(self) -> &'static str {
        match self {
            Kind::Circle => "Circle",
            Kind::ConvexPolygon => "ConvexPolygon",
            Kind::LinePath => "LinePath",
            Kind::CubicHermitePath => "CubicHermitePath",
            Kind::MicropolygonMesh => "MicropolygonMesh",
            Kind::Group => "Group",
            Kind::Scene => "Scene",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tag to kind mapping, built once and read-only afterwards
#[derive(Clone, Debug, Default)]
pub struct Registry {
    kinds: HashMap<String, Kind>,
    tags: HashMap<Kind, String>,
}

impl Registry {
    /// An empty registry. Nothing decodes until kinds are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every kind under its type name
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for kind in Kind::ALL {
            registry.tags.insert(kind, kind.name().to_string());
            registry.kinds.insert(kind.name().to_string(), kind);
        }
        registry
    }

    /// The process-wide standard registry.
    ///
    /// Built on first use; concurrent first calls block until it is ready.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::standard)
    }

    /// Bind `tag` to `kind`.
    ///
    /// Registering the same pair again is a no-op. Rebinding a tag to a
    /// different kind is rejected. A kind may have several tags; the first one
    /// registered is the one written on encode.
    pub fn register(&mut self, tag: impl Into<String>, kind: Kind) -> Result<(), RegistryError> {
        let tag = tag.into();
        if let Some(&existing) = self.kinds.get(&tag) {
            if existing == kind {
                crate::log::debug!(tag = %tag, kind = %kind, "tag already registered");
                return Ok(());
            }
            return Err(RegistryError::DuplicateTag {
                tag,
                existing,
                requested: kind,
            });
        }

        self.tags.entry(kind).or_insert_with(|| tag.clone());
        self.kinds.insert(tag, kind);
        Ok(())
    }

    /// Builder form of [`Registry::register`]
    pub fn with(mut self, tag: impl Into<String>, kind: Kind) -> Result<Self, RegistryError> {
        self.register(tag, kind)?;
        Ok(self)
    }

    pub fn lookup(&self, tag: &str) -> Option<Kind> {
        self.kinds.get(tag).copied()
    }

    /// The tag written when encoding records of `kind`
    pub fn tag_for(&self, kind: Kind) -> Option<&str> {
        self.tags.get(&kind).map(String::as_str)
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// The registered tag closest to `tag`, if one differs only in case
    pub(crate) fn suggest(&self, tag: &str) -> Option<&str> {
        self.kinds
            .keys()
            .find(|known| known.eq_ignore_ascii_case(tag))
            .map(String::as_str)
    }

    /// Decode one node (and everything under it) by its tag
    pub fn decode_by_tag(&self, node: &Value) -> Result<Geometry, SceneError> {
        SceneParser::new(self).parse_node(node)
    }

    /// Encode one record (and everything under it) with its registered tag
    pub fn encode(&self, record: &Geometry) -> Result<Value, SceneError> {
        SceneParser::new(self).serialize_node(record)
    }
}
