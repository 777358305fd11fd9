pub mod get;
pub mod patch;
pub mod post;

pub use get::{get_rating_for, list_ratings};
pub use patch::recompute_aggregate;
pub use post::submit_rating;

use sha2::{Digest, Sha256};

/// Rating documents are keyed by a hash of the rater's identity so the
/// raw identity never appears as a storage key. Deterministic: the same
/// identity always maps to the same key, which is what makes resubmission
/// an overwrite instead of an append.
pub fn identity_key(identity: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(identity.trim().to_lowercase().as_bytes());
    hex::encode(hasher.finalize())
}
