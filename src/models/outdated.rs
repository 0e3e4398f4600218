//! Stale sets reported by staleness discovery.

use serde::{Deserialize, Serialize};

use super::ObjectRef;

/// Pagination position of a connection.
///
/// `Initial` means no fetch ever recorded a cursor and the next query must
/// omit `after`. `After(cursor)` means a cursor is known and the next query
/// must pass `after` with it, even when the known cursor is null.
/// Conflating the two states breaks pagination resumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cursor {
    Initial,
    After(Option<String>),
}

/// A connection that needs (re)fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaleConnection {
    /// Concrete type of the owning object.
    pub typename: String,
    /// Id of the owning object.
    pub object_id: String,
    pub fieldname: String,
    pub cursor: Cursor,
}

/// Everything stale as of one staleness threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outdated {
    pub objects: Vec<ObjectRef>,
    pub connections: Vec<StaleConnection>,
}

impl Outdated {
    /// True when nothing needs refreshing.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.connections.is_empty()
    }
}
