/// Clothing item primary keys are v4 UUIDs generated at registration.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
