/// Collection paths in the document store. Document ids never contain `:`,
/// so a nested collection path stays distinguishable from a document key.
pub struct StorePath;

impl StorePath {
    pub fn stalls() -> String {
        "stalls".to_string()
    }

    pub fn stall_ratings(stall_id: &str) -> String {
        format!("stalls:{stall_id}:ratings")
    }

    pub fn users() -> String {
        "users".to_string()
    }
}
