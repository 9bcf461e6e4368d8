use super::{Children, Geometry, Record};
use crate::document::Fields;
use crate::registry::Kind;

/// An ordered collection of child records
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Group {
    pub children: Vec<Geometry>,
    pub extra: Fields,
}

impl Group {
    pub fn new(children: Vec<Geometry>, extra: Fields) -> Self {
        Self { children, extra }
    }
}

impl Record for Group {
    fn kind(&self) -> Kind {
        Kind::Group
    }

    fn fields(&self) -> Fields {
        self.extra.clone()
    }

    fn children(&self) -> Children<'_> {
        Children::List(&self.children)
    }
}

/// Top-level container: a single root record plus free-form metadata
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub root: Box<Geometry>,
    /// Every field of the scene node other than the tag and root
    pub metadata: Fields,
    /// Set when the document had no scene node of its own
    implicit: bool,
}

impl Scene {
    pub fn new(root: Geometry, metadata: Fields) -> Self {
        Self {
            root: Box::new(root),
            metadata,
            implicit: false,
        }
    }

    /// Wrap a bare top-level record.
    ///
    /// The wrapper is not part of the document: serializing the scene writes
    /// the root record alone.
    pub fn wrap(root: Geometry) -> Self {
        Self {
            implicit: true,
            ..Self::new(root, Fields::new())
        }
    }

    /// Whether this scene came from [`Scene::wrap`]
    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    /// Every record in the scene below the scene node itself, depth-first
    pub fn records(&self) -> super::Descendants<'_> {
        self.root.descendants()
    }
}

impl Record for Scene {
    fn kind(&self) -> Kind {
        Kind::Scene
    }

    fn fields(&self) -> Fields {
        self.metadata.clone()
    }

    fn children(&self) -> Children<'_> {
        Children::Root(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Circle;
    use glam::Vec4;
    use serde_json::json;

    #[test]
    fn group_exposes_children_in_order() {
        let a = Circle::new(Vec4::new(0.0, 0.0, 1.0, 1.0), 1.0, Vec4::ONE);
        let b = Circle::new(Vec4::new(5.0, 0.0, 1.0, 1.0), 2.0, Vec4::ONE);
        let group = Group::new(vec![a.clone().into(), b.clone().into()], Fields::new());
        match group.children() {
            Children::List(children) => {
                assert_eq!(children, [Geometry::from(a), Geometry::from(b)]);
            }
            other => panic!("expected a child list, got {other:?}"),
        }
    }

    #[test]
    fn scene_fields_are_metadata() {
        let mut metadata = Fields::new();
        metadata.insert("title".into(), json!("demo"));
        let scene = Scene::new(Group::default().into(), metadata);
        assert_eq!(scene.fields()["title"], json!("demo"));
        assert!(matches!(scene.children(), Children::Root(Geometry::Group(_))));
        assert_eq!(scene.records().count(), 1);
        assert!(!scene.is_implicit());
    }

    #[test]
    fn wrapped_scene_is_implicit() {
        let scene = Scene::wrap(Group::default().into());
        assert!(scene.is_implicit());
        assert!(scene.metadata.is_empty());
        assert_ne!(scene, Scene::new(Group::default().into(), Fields::new()));
    }
}
