//! Mirror engine: store bootstrap, registration, staleness discovery, query
//! generation, and ingestion.
//!
//! A [`Mirror`] owns one SQLite file exclusively and incrementally converges
//! it to a snapshot of a remote GraphQL service. The refresh loop is driven
//! by the caller: register a root object, ask [`Mirror::find_outdated`] what
//! is stale, execute the generated queries against the remote, feed the
//! responses back through the `update_*` ingestors, and repeat until the
//! stale set is empty. The mirror never talks to the network itself.
//!
//! Every mutating operation comes in two layers: a transactional entry point
//! over the pool and a `*_with` core that executes against a borrowed
//! connection. Callers ingesting many pages per round-trip begin one
//! transaction and drive the cores directly.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, DEFAULT_PAGE_SIZE};
use crate::db;
use crate::errors::MirrorError;
use crate::graphql::{QueryValue, Selection};
use crate::models::{
    ConnectionFieldResult, Cursor, NodeFieldResult, ObjectRef, Outdated, OwnData, StaleConnection,
};
use crate::schema::{Field, Schema, Typedef};

/// Structural tables and indices shared by every store, whatever the schema.
const STRUCTURAL_DDL: &[&str] = &[
    "CREATE TABLE updates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        time_epoch_millis INTEGER NOT NULL
    )",
    "CREATE TABLE objects (
        id TEXT NOT NULL PRIMARY KEY,
        typename TEXT NOT NULL,
        last_update INTEGER REFERENCES updates(id)
    )",
    "CREATE TABLE links (
        parent_id TEXT NOT NULL REFERENCES objects(id),
        fieldname TEXT NOT NULL,
        child_id TEXT REFERENCES objects(id)
    )",
    "CREATE UNIQUE INDEX idx_links_parent_fieldname ON links(parent_id, fieldname)",
    "CREATE TABLE connections (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        object_id TEXT NOT NULL REFERENCES objects(id),
        fieldname TEXT NOT NULL,
        last_update INTEGER REFERENCES updates(id),
        total_count INTEGER,
        has_next_page INTEGER,
        end_cursor TEXT
    )",
    "CREATE UNIQUE INDEX idx_connections_object_fieldname ON connections(object_id, fieldname)",
    "CREATE TABLE connection_entries (
        connection_id INTEGER NOT NULL REFERENCES connections(id),
        idx INTEGER NOT NULL,
        child_id TEXT NOT NULL REFERENCES objects(id),
        UNIQUE (connection_id, idx)
    )",
    "CREATE INDEX idx_connection_entries_connection_id ON connection_entries(connection_id)",
];

/// Field layout of one object type, precomputed from the schema.
#[derive(Debug, Clone)]
struct ObjectLayout {
    id_field: String,
    primitives: Vec<String>,
    links: Vec<String>,
    connections: Vec<String>,
}

/// A local, persistent mirror of a remote GraphQL object graph.
#[derive(Debug)]
pub struct Mirror {
    pool: SqlitePool,
    schema: Schema,
    layouts: BTreeMap<String, ObjectLayout>,
    page_size: u32,
}

impl Mirror {
    // ==================== BOOTSTRAP ====================

    /// Construct a mirror over an existing pool, bootstrapping the store.
    ///
    /// Idempotent: re-running on an up-to-date store is a no-op. A store
    /// initialized with a different schema (or version) is rejected with
    /// `IncompatibleSchema` and left untouched. The pool must own its file
    /// exclusively; concurrent mirrors over one file are not supported.
    pub async fn new(pool: SqlitePool, schema: Schema) -> Result<Self, MirrorError> {
        let fingerprint = schema.fingerprint()?;

        let mut tx = pool.begin().await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS meta (
                zero INTEGER PRIMARY KEY CHECK (zero = 0),
                schema TEXT NOT NULL
            )",
        )
        .execute(&mut *tx)
        .await?;

        let stored: Option<String> = sqlx::query_scalar("SELECT schema FROM meta WHERE zero = 0")
            .fetch_optional(&mut *tx)
            .await?;

        match stored {
            Some(stored) if stored == fingerprint => {
                // Already bootstrapped with this exact schema, which passed
                // identifier validation back then.
                tx.commit().await?;
                let layouts = build_layouts(&schema)?;
                return Ok(Self {
                    pool,
                    schema,
                    layouts,
                    page_size: DEFAULT_PAGE_SIZE,
                });
            }
            Some(stored) => {
                // A fingerprint mismatch is reported before the requested
                // schema is inspected any further; dropping the transaction
                // rolls back the CREATE IF NOT EXISTS.
                return Err(MirrorError::IncompatibleSchema {
                    stored,
                    requested: fingerprint,
                });
            }
            None => {}
        }

        // Fresh store: validate identifiers while laying out the tables.
        let layouts = build_layouts(&schema)?;

        sqlx::query("INSERT INTO meta (zero, schema) VALUES (0, ?)")
            .bind(&fingerprint)
            .execute(&mut *tx)
            .await?;

        for ddl in STRUCTURAL_DDL {
            sqlx::query(ddl).execute(&mut *tx).await?;
        }

        for (typename, layout) in &layouts {
            let mut columns =
                vec!["\"id\" TEXT NOT NULL PRIMARY KEY REFERENCES objects(id)".to_string()];
            columns.extend(layout.primitives.iter().map(|f| format!("\"{}\" TEXT", f)));
            let ddl = format!("CREATE TABLE \"data_{}\" ({})", typename, columns.join(", "));
            sqlx::query(&ddl).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Mirror store initialized with {} object types",
            layouts.len()
        );

        Ok(Self {
            pool,
            schema,
            layouts,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Convenience constructor: build the pool from [`Config`] and bootstrap.
    ///
    /// Installs a global tracing subscriber at the configured log level,
    /// unless one is already set.
    pub async fn open(config: &Config, schema: Schema) -> Result<Self, MirrorError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .ok();

        let pool = db::init_database(&config.db_path).await?;
        let mut mirror = Self::new(pool, schema).await?;
        mirror.page_size = config.page_size;
        Ok(mirror)
    }

    /// The schema this store was bootstrapped with.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The underlying pool, for callers composing their own transactions.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ==================== UPDATES ====================

    /// Record one successful remote round-trip and return its update id.
    ///
    /// Every call yields a distinct id, even for duplicate timestamps. The
    /// caller obtains one id per round-trip and reuses it for all ingestion
    /// derived from that round-trip.
    pub async fn create_update(&self, timestamp: DateTime<Utc>) -> Result<i64, MirrorError> {
        let result = sqlx::query("INSERT INTO updates (time_epoch_millis) VALUES (?)")
            .bind(timestamp.timestamp_millis())
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    // ==================== REGISTRATION ====================

    /// Register an object by concrete type and id.
    ///
    /// Safe to call repeatedly: re-registration with the same typename is a
    /// no-op. The typename is write-once; a conflicting registration fails
    /// with `InconsistentType` and changes nothing.
    pub async fn register_object(&self, object: &ObjectRef) -> Result<(), MirrorError> {
        let mut tx = self.pool.begin().await?;
        self.register_object_with(&mut tx, object).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Core of [`Mirror::register_object`], for use inside a caller-owned
    /// transaction.
    pub async fn register_object_with(
        &self,
        conn: &mut SqliteConnection,
        object: &ObjectRef,
    ) -> Result<(), MirrorError> {
        let existing: Option<String> = sqlx::query_scalar("SELECT typename FROM objects WHERE id = ?")
            .bind(&object.id)
            .fetch_optional(&mut *conn)
            .await?;

        if let Some(existing) = existing {
            if existing == object.typename {
                return Ok(());
            }
            return Err(MirrorError::InconsistentType {
                id: object.id.clone(),
                existing,
                requested: object.typename.clone(),
            });
        }

        let layout = self.layout(&object.typename)?;

        sqlx::query("INSERT INTO objects (id, typename, last_update) VALUES (?, ?, NULL)")
            .bind(&object.id)
            .bind(&object.typename)
            .execute(&mut *conn)
            .await?;

        // One pre-created row per connection field; all NULL means "never fetched".
        for fieldname in &layout.connections {
            sqlx::query("INSERT INTO connections (object_id, fieldname) VALUES (?, ?)")
                .bind(&object.id)
                .bind(fieldname)
                .execute(&mut *conn)
                .await?;
        }

        tracing::debug!("Registered {} {:?}", object.typename, object.id);
        Ok(())
    }

    // ==================== STALENESS ====================

    /// Find every object and connection that needs refreshing.
    ///
    /// An object is stale when it was never own-data-loaded or its last
    /// update is strictly older than `since`. A connection is stale under
    /// the same clock rule, or whenever it still has pages remaining. Equal
    /// timestamps are fresh.
    pub async fn find_outdated(&self, since: DateTime<Utc>) -> Result<Outdated, MirrorError> {
        let since_ms = since.timestamp_millis();
        let mut tx = self.pool.begin().await?;

        let object_rows = sqlx::query(
            "SELECT objects.typename, objects.id FROM objects
             LEFT JOIN updates ON objects.last_update = updates.id
             WHERE objects.last_update IS NULL OR updates.time_epoch_millis < ?
             ORDER BY objects.rowid",
        )
        .bind(since_ms)
        .fetch_all(&mut *tx)
        .await?;

        let connection_rows = sqlx::query(
            "SELECT objects.typename, connections.object_id, connections.fieldname,
                    connections.last_update, connections.end_cursor
             FROM connections
             JOIN objects ON connections.object_id = objects.id
             LEFT JOIN updates ON connections.last_update = updates.id
             WHERE connections.last_update IS NULL
                OR updates.time_epoch_millis < ?
                OR connections.has_next_page = 1
             ORDER BY connections.id",
        )
        .bind(since_ms)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let objects = object_rows
            .iter()
            .map(|row| ObjectRef {
                typename: row.get("typename"),
                id: row.get("id"),
            })
            .collect();

        let connections = connection_rows
            .iter()
            .map(|row| {
                let last_update: Option<i64> = row.get("last_update");
                let end_cursor: Option<String> = row.get("end_cursor");
                // Initial only when no fetch ever recorded a cursor; any
                // known cursor is resumed from, even a null one.
                let cursor = match (last_update, end_cursor) {
                    (None, None) => Cursor::Initial,
                    (_, end_cursor) => Cursor::After(end_cursor),
                };
                StaleConnection {
                    typename: row.get("typename"),
                    object_id: row.get("object_id"),
                    fieldname: row.get("fieldname"),
                    cursor,
                }
            })
            .collect();

        Ok(Outdated {
            objects,
            connections,
        })
    }

    // ==================== QUERY GENERATION ====================

    /// Selection set sufficient to register any transitively referenced
    /// object: `{ __typename, id }`.
    pub fn query_shallow(&self) -> Vec<Selection> {
        vec![Selection::field("__typename"), Selection::field("id")]
    }

    /// Selection fetching one page of a connection field.
    ///
    /// The `after` argument is omitted on the initial fetch and included
    /// whenever a previous fetch recorded a cursor, even a null one.
    pub fn query_connection(&self, fieldname: &str, cursor: &Cursor, page_size: u32) -> Selection {
        let mut selection = Selection::field(fieldname).arg("first", page_size);
        if let Cursor::After(end_cursor) = cursor {
            let after = match end_cursor {
                Some(cursor) => QueryValue::String(cursor.clone()),
                None => QueryValue::Null,
            };
            selection = selection.arg("after", after);
        }
        selection.children([
            Selection::field("totalCount"),
            Selection::field("pageInfo").children([
                Selection::field("endCursor"),
                Selection::field("hasNextPage"),
            ]),
            Selection::field("nodes").children(self.query_shallow()),
        ])
    }

    /// Selection resuming a stale connection at the configured page size.
    pub fn query_stale_connection(&self, stale: &StaleConnection) -> Selection {
        self.query_connection(&stale.fieldname, &stale.cursor, self.page_size)
    }

    /// Selection set fetching one object's own data: its id, every
    /// primitive field, and every link field shallowly.
    pub fn query_own_data(&self, typename: &str) -> Result<Vec<Selection>, MirrorError> {
        let layout = self.layout(typename)?;
        let mut selections = vec![Selection::field(&layout.id_field)];
        selections.extend(layout.primitives.iter().map(|f| Selection::field(f)));
        selections.extend(
            layout
                .links
                .iter()
                .map(|f| Selection::field(f).children(self.query_shallow())),
        );
        Ok(selections)
    }

    // ==================== CONNECTION INGESTION ====================

    /// Ingest one fetched page of a connection.
    ///
    /// Children are registered transparently; entries are appended at
    /// strictly increasing indices and never renumbered.
    pub async fn update_connection(
        &self,
        update_id: i64,
        object_id: &str,
        fieldname: &str,
        page: &ConnectionFieldResult,
    ) -> Result<(), MirrorError> {
        let mut tx = self.pool.begin().await?;
        self.update_connection_with(&mut tx, update_id, object_id, fieldname, page)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    /// Core of [`Mirror::update_connection`], for use inside a caller-owned
    /// transaction.
    pub async fn update_connection_with(
        &self,
        conn: &mut SqliteConnection,
        update_id: i64,
        object_id: &str,
        fieldname: &str,
        page: &ConnectionFieldResult,
    ) -> Result<(), MirrorError> {
        let connection_id: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM connections WHERE object_id = ? AND fieldname = ?",
        )
        .bind(object_id)
        .bind(fieldname)
        .fetch_optional(&mut *conn)
        .await?;

        let connection_id = connection_id.ok_or_else(|| MirrorError::UnknownConnection {
            object_id: object_id.to_string(),
            fieldname: fieldname.to_string(),
        })?;

        sqlx::query(
            "UPDATE connections
             SET last_update = ?, total_count = ?, has_next_page = ?, end_cursor = ?
             WHERE id = ?",
        )
        .bind(update_id)
        .bind(page.total_count)
        .bind(page.page_info.has_next_page as i32)
        .bind(&page.page_info.end_cursor)
        .bind(connection_id)
        .execute(&mut *conn)
        .await?;

        let mut next_index: i64 = sqlx::query_scalar(
            "SELECT IFNULL(MAX(idx), 0) + 1 FROM connection_entries WHERE connection_id = ?",
        )
        .bind(connection_id)
        .fetch_one(&mut *conn)
        .await?;

        for node in &page.nodes {
            let child = ObjectRef::from(node.clone());
            self.register_object_with(conn, &child).await?;

            sqlx::query(
                "INSERT INTO connection_entries (connection_id, idx, child_id) VALUES (?, ?, ?)",
            )
            .bind(connection_id)
            .bind(next_index)
            .bind(&node.id)
            .execute(&mut *conn)
            .await?;
            next_index += 1;
        }

        tracing::debug!(
            "Ingested {} nodes into {:?} of {:?}",
            page.nodes.len(),
            fieldname,
            object_id
        );
        Ok(())
    }

    // ==================== OWN DATA ====================

    /// Ingest one object's own data: primitives into the type's data table,
    /// links into the link table, and the freshness stamp onto the object.
    pub async fn update_own_data(
        &self,
        update_id: i64,
        typename: &str,
        id: &str,
        response: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), MirrorError> {
        let mut tx = self.pool.begin().await?;
        self.update_own_data_with(&mut tx, update_id, typename, id, response)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    /// Core of [`Mirror::update_own_data`], for use inside a caller-owned
    /// transaction.
    pub async fn update_own_data_with(
        &self,
        conn: &mut SqliteConnection,
        update_id: i64,
        typename: &str,
        id: &str,
        response: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), MirrorError> {
        let layout = self.layout(typename)?;

        let existing: Option<String> = sqlx::query_scalar("SELECT typename FROM objects WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        match existing {
            Some(existing) if existing == typename => {}
            Some(existing) => {
                return Err(MirrorError::InconsistentType {
                    id: id.to_string(),
                    existing,
                    requested: typename.to_string(),
                });
            }
            None => {
                return Err(MirrorError::Validation(format!(
                    "Cannot update own data of unregistered object {:?}",
                    id
                )));
            }
        }

        match response.get(&layout.id_field) {
            Some(serde_json::Value::String(remote_id)) if remote_id == id => {}
            Some(other) => {
                return Err(MirrorError::Validation(format!(
                    "Own-data response id {} does not match target {:?}",
                    other, id
                )));
            }
            None => {
                return Err(MirrorError::Validation(format!(
                    "Missing id field {:?} in own-data response for {:?}",
                    layout.id_field, id
                )));
            }
        }

        // Primitives are stored as their JSON encodings.
        let sql = if layout.primitives.is_empty() {
            format!(
                "INSERT INTO \"data_{}\" (\"id\") VALUES (?) ON CONFLICT(\"id\") DO NOTHING",
                typename
            )
        } else {
            let columns: Vec<String> = layout
                .primitives
                .iter()
                .map(|f| format!("\"{}\"", f))
                .collect();
            let placeholders = vec!["?"; layout.primitives.len()];
            let assignments: Vec<String> = layout
                .primitives
                .iter()
                .map(|f| format!("\"{0}\" = excluded.\"{0}\"", f))
                .collect();
            format!(
                "INSERT INTO \"data_{}\" (\"id\", {}) VALUES (?, {}) ON CONFLICT(\"id\") DO UPDATE SET {}",
                typename,
                columns.join(", "),
                placeholders.join(", "),
                assignments.join(", ")
            )
        };

        let mut query = sqlx::query(&sql).bind(id);
        for field in &layout.primitives {
            let value = response.get(field).ok_or_else(|| {
                MirrorError::Validation(format!(
                    "Missing primitive field {:?} in own-data response for {:?}",
                    field, id
                ))
            })?;
            query = query.bind(value.to_string());
        }
        query.execute(&mut *conn).await?;

        for field in &layout.links {
            let value = response.get(field).ok_or_else(|| {
                MirrorError::Validation(format!(
                    "Missing link field {:?} in own-data response for {:?}",
                    field, id
                ))
            })?;
            let child: Option<NodeFieldResult> = serde_json::from_value(value.clone())?;

            let child_id = match child {
                Some(node) => {
                    let target = ObjectRef {
                        typename: node.typename,
                        id: node.id,
                    };
                    self.register_object_with(conn, &target).await?;
                    Some(target.id)
                }
                None => None,
            };

            sqlx::query(
                "INSERT INTO links (parent_id, fieldname, child_id) VALUES (?, ?, ?)
                 ON CONFLICT(parent_id, fieldname) DO UPDATE SET child_id = excluded.child_id",
            )
            .bind(id)
            .bind(field)
            .bind(&child_id)
            .execute(&mut *conn)
            .await?;
        }

        sqlx::query("UPDATE objects SET last_update = ? WHERE id = ?")
            .bind(update_id)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        tracing::debug!("Ingested own data of {} {:?}", typename, id);
        Ok(())
    }

    /// Read back one object's mirrored own data, or `None` when its own
    /// data was never ingested.
    pub async fn read_own_data(
        &self,
        typename: &str,
        id: &str,
    ) -> Result<Option<OwnData>, MirrorError> {
        let layout = self.layout(typename)?;

        let mut columns = vec!["\"id\"".to_string()];
        columns.extend(layout.primitives.iter().map(|f| format!("\"{}\"", f)));
        let sql = format!(
            "SELECT {} FROM \"data_{}\" WHERE \"id\" = ?",
            columns.join(", "),
            typename
        );

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(row) = row else {
            tx.commit().await?;
            return Ok(None);
        };

        let mut primitives = BTreeMap::new();
        for field in &layout.primitives {
            let raw: Option<String> = row.get(field.as_str());
            let value = match raw {
                Some(encoded) => Some(serde_json::from_str(&encoded)?),
                None => None,
            };
            primitives.insert(field.clone(), value);
        }

        let mut links: BTreeMap<String, Option<ObjectRef>> = layout
            .links
            .iter()
            .map(|f| (f.clone(), None))
            .collect();

        let link_rows = sqlx::query(
            "SELECT links.fieldname, links.child_id, objects.typename
             FROM links LEFT JOIN objects ON links.child_id = objects.id
             WHERE links.parent_id = ?",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        for row in &link_rows {
            let fieldname: String = row.get("fieldname");
            let child_id: Option<String> = row.get("child_id");
            let child_typename: Option<String> = row.get("typename");
            let target = match (child_id, child_typename) {
                (Some(child_id), Some(typename)) => Some(ObjectRef {
                    typename,
                    id: child_id,
                }),
                _ => None,
            };
            links.insert(fieldname, target);
        }

        Ok(Some(OwnData { primitives, links }))
    }

    // ==================== INTERNAL ====================

    /// Resolve a typename to its object layout, or the error a caller of a
    /// concrete-type operation should see.
    fn layout(&self, typename: &str) -> Result<&ObjectLayout, MirrorError> {
        match self.layouts.get(typename) {
            Some(layout) => Ok(layout),
            // Every object type has a layout, so a miss is a union or unknown.
            None => match self.schema.get(typename) {
                Some(Typedef::Union { .. }) => Err(MirrorError::AmbiguousType(typename.to_string())),
                _ => Err(MirrorError::UnknownType(typename.to_string())),
            },
        }
    }
}

/// Precompute per-type field layouts, gating every interpolated identifier
/// through the whitelist. Unions have no storage and no layout.
fn build_layouts(schema: &Schema) -> Result<BTreeMap<String, ObjectLayout>, MirrorError> {
    let mut layouts = BTreeMap::new();
    for (typename, typedef) in schema.types() {
        let Typedef::Object { fields } = typedef else {
            continue;
        };
        if !is_sql_safe(typename) {
            return Err(MirrorError::UnsafeIdentifier(typename.clone()));
        }

        let mut layout = ObjectLayout {
            id_field: String::new(),
            primitives: Vec::new(),
            links: Vec::new(),
            connections: Vec::new(),
        };
        for (fieldname, field) in fields {
            match field {
                Field::Id => layout.id_field = fieldname.clone(),
                Field::Primitive => {
                    if !is_sql_safe(fieldname) {
                        return Err(MirrorError::UnsafeIdentifier(fieldname.clone()));
                    }
                    layout.primitives.push(fieldname.clone());
                }
                Field::Node { .. } => layout.links.push(fieldname.clone()),
                Field::Connection { .. } => layout.connections.push(fieldname.clone()),
            }
        }
        layouts.insert(typename.clone(), layout);
    }
    Ok(layouts)
}

/// Identifier whitelist for table and column interpolation. Everything else
/// flows through parameter bindings.
fn is_sql_safe(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_safe_identifiers() {
        assert!(is_sql_safe("Repository"));
        assert!(is_sql_safe("time_epoch_millis"));
        assert!(is_sql_safe("v2"));
        assert!(!is_sql_safe(""));
        assert!(!is_sql_safe("drop table"));
        assert!(!is_sql_safe("na\u{00ef}ve"));
        assert!(!is_sql_safe("semi;colon"));
    }
}
