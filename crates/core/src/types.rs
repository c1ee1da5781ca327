/// Document identifiers as issued by the CMS (opaque strings).
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
