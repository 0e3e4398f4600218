//! Error handling module for the mirror.
//!
//! Provides a centralized error type with stable error codes. Every failing
//! mutation either errors before touching the store or inside a transaction
//! that rolls back, so callers always observe the pre-operation state.

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const INCOMPATIBLE_SCHEMA: &str = "INCOMPATIBLE_SCHEMA";
    pub const UNSAFE_IDENTIFIER: &str = "UNSAFE_IDENTIFIER";
    pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";
    pub const AMBIGUOUS_TYPE: &str = "AMBIGUOUS_TYPE";
    pub const INCONSISTENT_TYPE: &str = "INCONSISTENT_TYPE";
    pub const UNKNOWN_CONNECTION: &str = "UNKNOWN_CONNECTION";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

/// Mirror error type.
#[derive(Debug)]
pub enum MirrorError {
    /// The store was initialized with a different schema or version
    IncompatibleSchema { stored: String, requested: String },
    /// A type or field name is not usable as a SQL identifier
    UnsafeIdentifier(String),
    /// An operation mentions a type not present in the schema
    UnknownType(String),
    /// A union typename was used where a concrete object type is required
    AmbiguousType(String),
    /// An id is already registered with a different typename
    InconsistentType {
        id: String,
        existing: String,
        requested: String,
    },
    /// Ingestion references an owner/field pair that is not registered
    UnknownConnection { object_id: String, fieldname: String },
    /// Schema construction or response shape error
    Validation(String),
    /// Low-level database error
    Database(String),
}

impl MirrorError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            MirrorError::IncompatibleSchema { .. } => codes::INCOMPATIBLE_SCHEMA,
            MirrorError::UnsafeIdentifier(_) => codes::UNSAFE_IDENTIFIER,
            MirrorError::UnknownType(_) => codes::UNKNOWN_TYPE,
            MirrorError::AmbiguousType(_) => codes::AMBIGUOUS_TYPE,
            MirrorError::InconsistentType { .. } => codes::INCONSISTENT_TYPE,
            MirrorError::UnknownConnection { .. } => codes::UNKNOWN_CONNECTION,
            MirrorError::Validation(_) => codes::VALIDATION_ERROR,
            MirrorError::Database(_) => codes::DATABASE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            MirrorError::IncompatibleSchema { stored, requested } => format!(
                "Store initialized with a different schema: stored {}, requested {}",
                stored, requested
            ),
            MirrorError::UnsafeIdentifier(name) => {
                format!("Unsafe SQL identifier: {:?}", name)
            }
            MirrorError::UnknownType(name) => format!("Unknown type: {:?}", name),
            MirrorError::AmbiguousType(name) => format!(
                "Ambiguous type {:?} is a union; register a concrete member type",
                name
            ),
            MirrorError::InconsistentType {
                id,
                existing,
                requested,
            } => format!(
                "Inconsistent type for id {:?}: already registered as {:?}, requested {:?}",
                id, existing, requested
            ),
            MirrorError::UnknownConnection {
                object_id,
                fieldname,
            } => format!(
                "Unknown connection {:?} on object {:?}",
                fieldname, object_id
            ),
            MirrorError::Validation(msg) => msg.clone(),
            MirrorError::Database(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for MirrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for MirrorError {}

impl From<sqlx::Error> for MirrorError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        MirrorError::Database(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for MirrorError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        MirrorError::Validation(format!("JSON error: {}", err))
    }
}
