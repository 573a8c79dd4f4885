/// Asset primary keys are UUIDs, exposed as strings on the wire.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
