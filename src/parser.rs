//! Scene parser: document tree to typed records and back
//!
//! Decoding is depth-first. Container children are decoded in document order
//! before the container itself is built, and the first bad node aborts the
//! whole walk. Every error carries the path of the node it came from.
//! Nesting deeper than [`MAX_DEPTH`] is rejected in both directions.

use serde_json::Value;

use crate::defaults::{CHILDREN_KEY, MAX_DEPTH, ROOT_KEY, TAG_KEY};
use crate::document::{Fields, as_fields, extras};
use crate::errors::{GeometryError, SceneError};
use crate::geometry::{
    Children, Circle, ConvexPolygon, CubicHermitePath, Geometry, Group, LinePath,
    MicropolygonMesh, Record, Scene,
};
use crate::log::{debug, trace};
use crate::registry::{Kind, Registry};
use crate::types::NodePath;

const GROUP_RESERVED: &[&str] = &[TAG_KEY, CHILDREN_KEY];
const SCENE_RESERVED: &[&str] = &[TAG_KEY, ROOT_KEY];

/// Decodes and encodes documents against a registry
#[derive(Clone, Copy, Debug)]
pub struct SceneParser<'r> {
    registry: &'r Registry,
}

impl<'r> SceneParser<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Parse a document into a scene.
    ///
    /// A top-level node that is not a `Scene` is wrapped in an implicit one
    /// with empty metadata. [`SceneParser::serialize`] drops the wrapper again.
    pub fn parse(&self, document: &Value) -> Result<Scene, SceneError> {
        let scene = match self.parse_node(document)? {
            Geometry::Scene(scene) => scene,
            other => {
                debug!(kind = %other.kind(), "wrapping top-level record in a scene");
                Scene::wrap(other)
            }
        };
        debug!(records = scene.records().count(), "parsed scene");
        Ok(scene)
    }

    /// Decode a single node and everything below it
    pub fn parse_node(&self, node: &Value) -> Result<Geometry, SceneError> {
        self.decode(node, &NodePath::root(), 0)
    }

    /// Serialize a scene back into a document.
    ///
    /// An implicit scene serializes as its bare root record.
    pub fn serialize(&self, scene: &Scene) -> Result<Value, SceneError> {
        let root = NodePath::root();
        if scene.is_implicit() {
            self.encode(scene.root.as_ref(), &root, 0)
        } else {
            self.encode(scene, &root, 0)
        }
    }

    /// Serialize a single record and everything below it
    pub fn serialize_node(&self, record: &Geometry) -> Result<Value, SceneError> {
        match record {
            Geometry::Scene(scene) => self.serialize(scene),
            other => self.encode(other, &NodePath::root(), 0),
        }
    }

    fn decode(&self, node: &Value, path: &NodePath, depth: usize) -> Result<Geometry, SceneError> {
        check_depth(path, depth)?;
        let fields = as_fields(node).map_err(|source| malformed(path, source))?;

        let tag = fields
            .get(TAG_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| SceneError::MissingTag { path: path.clone() })?;

        let kind = self
            .registry
            .lookup(tag)
            .ok_or_else(|| SceneError::UnknownType {
                tag: tag.to_string(),
                path: path.clone(),
                suggestion: self
                    .registry
                    .suggest(tag)
                    .map(|known| format!("did you mean `{}`?", known)),
            })?;

        trace!(%path, %kind, "decoding node");

        let leaf = |decoded: Result<Geometry, GeometryError>| {
            decoded.map_err(|source| malformed(path, source))
        };

        match kind {
            Kind::Group => {
                let children = self.decode_children(fields, path, depth)?;
                Ok(Group::new(children, extras(fields, GROUP_RESERVED)).into())
            }
            Kind::Scene => {
                let root = fields.get(ROOT_KEY).ok_or_else(|| {
                    malformed(path, GeometryError::MissingField { field: ROOT_KEY })
                })?;
                let root = self.decode(root, &path.key(ROOT_KEY), depth + 1)?;
                Ok(Scene::new(root, extras(fields, SCENE_RESERVED)).into())
            }
            Kind::Circle => leaf(Circle::from_fields(fields).map(Geometry::from)),
            Kind::ConvexPolygon => leaf(ConvexPolygon::from_fields(fields).map(Geometry::from)),
            Kind::LinePath => leaf(LinePath::from_fields(fields).map(Geometry::from)),
            Kind::CubicHermitePath => leaf(CubicHermitePath::from_fields(fields).map(Geometry::from)),
            Kind::MicropolygonMesh => leaf(MicropolygonMesh::from_fields(fields).map(Geometry::from)),
        }
    }

    fn decode_children(
        &self,
        fields: &Fields,
        path: &NodePath,
        depth: usize,
    ) -> Result<Vec<Geometry>, SceneError> {
        let children = match fields.get(CHILDREN_KEY) {
            Some(Value::Array(children)) => children,
            Some(_) => {
                return Err(malformed(
                    path,
                    GeometryError::InvalidField {
                        field: CHILDREN_KEY,
                        expected: "a sequence of nodes",
                    },
                ));
            }
            None => {
                return Err(malformed(
                    path,
                    GeometryError::MissingField { field: CHILDREN_KEY },
                ));
            }
        };

        let list_path = path.key(CHILDREN_KEY);
        children
            .iter()
            .enumerate()
            .map(|(i, child)| self.decode(child, &list_path.index(i), depth + 1))
            .collect()
    }

    fn encode<R: Record + ?Sized>(
        &self,
        record: &R,
        path: &NodePath,
        depth: usize,
    ) -> Result<Value, SceneError> {
        check_depth(path, depth)?;
        let kind = record.kind();
        let mut fields = record.fields();

        match record.children() {
            Children::None => {}
            Children::List(children) => {
                let list_path = path.key(CHILDREN_KEY);
                let encoded = children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| self.encode(child, &list_path.index(i), depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                fields.insert(CHILDREN_KEY.into(), Value::Array(encoded));
            }
            Children::Root(root) => {
                fields.insert(ROOT_KEY.into(), self.encode(root, &path.key(ROOT_KEY), depth + 1)?);
            }
        }

        let tag = self
            .registry
            .tag_for(kind)
            .ok_or(SceneError::UnregisteredVariant { kind })?;
        fields.insert(TAG_KEY.into(), Value::String(tag.to_string()));
        Ok(Value::Object(fields))
    }
}

fn check_depth(path: &NodePath, depth: usize) -> Result<(), SceneError> {
    if depth > MAX_DEPTH {
        return Err(malformed(path, GeometryError::TooDeep { limit: MAX_DEPTH }));
    }
    Ok(())
}

fn malformed(path: &NodePath, source: GeometryError) -> SceneError {
    SceneError::MalformedGeometry {
        path: path.clone(),
        source,
    }
}
