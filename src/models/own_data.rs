//! Readback of an object's own (non-connection) data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ObjectRef;

/// The mirrored own data of one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnData {
    /// Primitive field values. `None` means the column was never populated;
    /// `Some(Value::Null)` means the remote explicitly returned null.
    pub primitives: BTreeMap<String, Option<serde_json::Value>>,
    /// Link field targets. `None` means the link is unset or null.
    pub links: BTreeMap<String, Option<ObjectRef>>,
}
