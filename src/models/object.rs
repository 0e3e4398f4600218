//! Object references, local and on the wire.

use serde::{Deserialize, Serialize};

/// A reference to one remote object: its concrete type and opaque id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    pub typename: String,
    pub id: String,
}

impl ObjectRef {
    pub fn new(typename: &str, id: &str) -> Self {
        Self {
            typename: typename.to_string(),
            id: id.to_string(),
        }
    }
}

/// A shallow node as it appears in a GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFieldResult {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub id: String,
}

impl From<NodeFieldResult> for ObjectRef {
    fn from(node: NodeFieldResult) -> Self {
        ObjectRef {
            typename: node.typename,
            id: node.id,
        }
    }
}
