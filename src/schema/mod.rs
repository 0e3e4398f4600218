//! Declarative schema for the mirrored object graph.
//!
//! A schema maps type names to type definitions. Object types carry an
//! ordered field map where each field is an ID, a primitive scalar, a
//! singular link to another object, or a paginated connection. Union types
//! are tag-only: they have no storage of their own and exist so that a link
//! can point at "one of these object types".
//!
//! Field maps are `BTreeMap`s, so iteration order (and therefore generated
//! column order and selection order) is lexicographic and deterministic, and
//! the serialized form is key-sorted without further canonicalization.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::MirrorError;

/// Version tag baked into the store fingerprint. Bumped whenever the
/// schema-to-layout mapping or the interpretation of the layout changes.
pub const VERSION: &str = "MIRROR_v1";

/// The kind of a single field on an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The object's globally unique id. Exactly one per object type.
    Id,
    /// A primitive scalar stored in the type's data table.
    Primitive,
    /// A singular link to another object.
    Node { target: String },
    /// A paginated, ordered list of child objects.
    Connection { element: String },
}

/// A named type in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Typedef {
    Object { fields: BTreeMap<String, Field> },
    Union { members: BTreeSet<String> },
}

/// A validated schema: the immutable input that shapes the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    types: BTreeMap<String, Typedef>,
}

/// Construct an ID field.
pub fn id() -> Field {
    Field::Id
}

/// Construct a primitive scalar field.
pub fn primitive() -> Field {
    Field::Primitive
}

/// Construct a singular link to `target`.
pub fn node(target: &str) -> Field {
    Field::Node {
        target: target.to_string(),
    }
}

/// Construct a paginated connection of `element` children.
pub fn connection(element: &str) -> Field {
    Field::Connection {
        element: element.to_string(),
    }
}

/// Construct an object type from (name, field) pairs.
pub fn object<'a>(fields: impl IntoIterator<Item = (&'a str, Field)>) -> Typedef {
    Typedef::Object {
        fields: fields
            .into_iter()
            .map(|(name, field)| (name.to_string(), field))
            .collect(),
    }
}

/// Construct a union type over the given member type names.
pub fn union_of<'a>(members: impl IntoIterator<Item = &'a str>) -> Typedef {
    Typedef::Union {
        members: members.into_iter().map(str::to_string).collect(),
    }
}

/// Construct and validate a schema from (name, typedef) pairs.
///
/// Validation: every object type has exactly one [`Field::Id`]; every
/// `Node` target and `Connection` element names a type present in the
/// schema; unions are non-empty and reference only object types.
pub fn schema<'a>(
    types: impl IntoIterator<Item = (&'a str, Typedef)>,
) -> Result<Schema, MirrorError> {
    let types: BTreeMap<String, Typedef> = types
        .into_iter()
        .map(|(name, typedef)| (name.to_string(), typedef))
        .collect();

    for (typename, typedef) in &types {
        match typedef {
            Typedef::Object { fields } => {
                let id_count = fields.values().filter(|f| **f == Field::Id).count();
                if id_count != 1 {
                    return Err(MirrorError::Validation(format!(
                        "Object type {:?} must have exactly one id field, found {}",
                        typename, id_count
                    )));
                }
                for (fieldname, field) in fields {
                    let referenced = match field {
                        Field::Id | Field::Primitive => continue,
                        Field::Node { target } => target,
                        Field::Connection { element } => element,
                    };
                    if !types.contains_key(referenced) {
                        return Err(MirrorError::Validation(format!(
                            "Field {:?} of {:?} references undefined type {:?}",
                            fieldname, typename, referenced
                        )));
                    }
                }
            }
            Typedef::Union { members } => {
                if members.is_empty() {
                    return Err(MirrorError::Validation(format!(
                        "Union type {:?} has no members",
                        typename
                    )));
                }
                for member in members {
                    match types.get(member) {
                        Some(Typedef::Object { .. }) => {}
                        Some(Typedef::Union { .. }) => {
                            return Err(MirrorError::Validation(format!(
                                "Union type {:?} member {:?} must be an object type, not a union",
                                typename, member
                            )));
                        }
                        None => {
                            return Err(MirrorError::Validation(format!(
                                "Union type {:?} references undefined member {:?}",
                                typename, member
                            )));
                        }
                    }
                }
            }
        }
    }

    Ok(Schema { types })
}

impl Schema {
    /// All types, keyed by name.
    pub fn types(&self) -> &BTreeMap<String, Typedef> {
        &self.types
    }

    /// Look up a type by name.
    pub fn get(&self, typename: &str) -> Option<&Typedef> {
        self.types.get(typename)
    }

    /// The canonical fingerprint blob stored in the `meta` table.
    ///
    /// Key-sorted JSON of `{schema, version}`: two stores are compatible iff
    /// their fingerprints are byte-equal.
    pub fn fingerprint(&self) -> Result<String, MirrorError> {
        let blob = serde_json::json!({
            "version": VERSION,
            "schema": self,
        });
        Ok(serde_json::to_string(&blob)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github_like() -> Result<Schema, MirrorError> {
        schema([
            (
                "Repository",
                object([
                    ("id", id()),
                    ("url", primitive()),
                    ("issues", connection("Issue")),
                ]),
            ),
            (
                "Issue",
                object([
                    ("id", id()),
                    ("url", primitive()),
                    ("title", primitive()),
                    ("comments", connection("IssueComment")),
                ]),
            ),
            (
                "IssueComment",
                object([("id", id()), ("body", primitive()), ("author", node("Actor"))]),
            ),
            ("Actor", union_of(["User", "Bot"])),
            ("User", object([("id", id()), ("login", primitive())])),
            ("Bot", object([("id", id()), ("login", primitive())])),
        ])
    }

    #[test]
    fn test_valid_schema() {
        assert!(github_like().is_ok());
    }

    #[test]
    fn test_object_requires_exactly_one_id() {
        let no_id = schema([("A", object([("name", primitive())]))]);
        assert!(matches!(no_id, Err(MirrorError::Validation(_))));

        let two_ids = schema([("A", object([("id", id()), ("alt", id())]))]);
        assert!(matches!(two_ids, Err(MirrorError::Validation(_))));
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let dangling = schema([("A", object([("id", id()), ("b", node("Missing"))]))]);
        assert!(matches!(dangling, Err(MirrorError::Validation(_))));
    }

    #[test]
    fn test_union_members_must_be_objects() {
        let nested = schema([
            ("A", object([("id", id())])),
            ("U", union_of(["A"])),
            ("V", union_of(["U"])),
        ]);
        assert!(matches!(nested, Err(MirrorError::Validation(_))));

        let empty = schema([("U", union_of([]))]);
        assert!(matches!(empty, Err(MirrorError::Validation(_))));
    }

    #[test]
    fn test_fingerprint_is_key_sorted_and_stable() {
        let a = github_like().unwrap().fingerprint().unwrap();
        let b = github_like().unwrap().fingerprint().unwrap();
        assert_eq!(a, b);
        // Top-level keys come out sorted regardless of construction order.
        assert!(a.starts_with("{\"schema\":"));
        assert!(a.contains("\"version\":\"MIRROR_v1\""));
    }

    #[test]
    fn test_fingerprint_distinguishes_schemas() {
        let a = schema([("A", object([("id", id())]))])
            .unwrap()
            .fingerprint()
            .unwrap();
        let b = schema([("B", object([("id", id())]))])
            .unwrap()
            .fingerprint()
            .unwrap();
        assert_ne!(a, b);
    }
}
