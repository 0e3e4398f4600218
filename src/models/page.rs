//! Connection pages as returned by the remote.

use serde::{Deserialize, Serialize};

use super::NodeFieldResult;

/// Relay-style page info for one fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    /// Null when the connection is empty or the page ran past the end.
    pub end_cursor: Option<String>,
}

/// One fetched page of a paginated connection field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionFieldResult {
    pub total_count: i64,
    pub page_info: PageInfo,
    pub nodes: Vec<NodeFieldResult>,
}
