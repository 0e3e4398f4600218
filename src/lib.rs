//! Local, persistent mirror of a remote GraphQL object graph.
//!
//! Callers describe the remote's object types with [`schema`], open a
//! [`Mirror`] over a SQLite file, and drive refresh rounds: register a root
//! object, execute the selection sets the mirror generates for whatever
//! [`Mirror::find_outdated`] reports, and feed the responses back through
//! the `update_*` ingestors. The mirror owns staleness bookkeeping,
//! pagination resumption, and referential integrity; the GraphQL transport
//! stays with the caller, so any `execute(query) -> response` function
//! plugs in.
//!
//! Interrupting the process is always safe: every mutation runs inside a
//! single transaction, and a re-opened mirror resumes exactly where the
//! last committed round-trip left off.

pub mod config;
pub mod db;
pub mod errors;
pub mod graphql;
pub mod mirror;
pub mod models;
pub mod schema;

pub use config::Config;
pub use errors::MirrorError;
pub use mirror::Mirror;
