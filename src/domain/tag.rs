use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A taxonomy tag attachable to asks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A tag with its ask count, for the top-tags listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: Tag,
    pub ask_count: i64,
}
