use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user document: favorites plus login activity stamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    #[serde(default)]
    pub saved_stalls: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_active_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,   // user ID
    pub email: String, // stable identity, hashed for rating keys
    pub exp: usize,    // expiration time
}
