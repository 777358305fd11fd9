use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::rating::RatingValue;

/// Sentinel owner for records left behind by a deleted account.
pub const DELETED_USER: &str = "deleted-user";

/// Stalls older than this belong to the community and can no longer be
/// deleted by whoever posted them.
pub const COMMUNITY_OWNED_AFTER_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stall {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub location: Location,
    pub added_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub verified: bool,

    // Cache fields over the rating set, maintained by the aggregator.
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub ratings_count: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A stall tagged with its storage id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StallEntry {
    pub id: String,
    #[serde(flatten)]
    pub stall: Stall,
}

/// Submission payload. The creator's rating seeds the aggregate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStall {
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub location: Location,
    pub rating: Option<RatingValue>,
}

/// Owner edit. Only provided fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StallUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}
