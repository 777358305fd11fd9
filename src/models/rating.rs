use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire values are the labels the app shows on the rating buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingValue {
    #[serde(rename = "Accha")]
    Good,
    #[serde(rename = "Thik-Thak")]
    Average,
    #[serde(rename = "Nahi")]
    Poor,
}

impl RatingValue {
    pub fn score(self) -> u32 {
        match self {
            RatingValue::Good => 3,
            RatingValue::Average => 2,
            RatingValue::Poor => 1,
        }
    }
}

/// One identity's rating of one stall. `user_id` is nulled when the
/// account is deleted; the rating value itself is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub rating: RatingValue,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A rating tagged with its storage key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingEntry {
    pub id: String,
    #[serde(flatten)]
    pub rating: Rating,
}

/// Denormalized mean and count written onto the stall document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average_rating: f64,
    pub ratings_count: u32,
}

impl RatingSummary {
    pub fn empty() -> Self {
        Self {
            average_rating: 0.0,
            ratings_count: 0,
        }
    }

    /// Mean of the numeric encoding (Nahi=1, Thik-Thak=2, Accha=3),
    /// rounded to one decimal place.
    pub fn of(values: &[RatingValue]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let sum: u32 = values.iter().map(|v| v.score()).sum();
        let mean = f64::from(sum) / values.len() as f64;

        Self {
            average_rating: (mean * 10.0).round() / 10.0,
            ratings_count: values.len() as u32,
        }
    }
}
