use std::collections::BTreeMap;

use accha_chai_be::{db::store::DocumentStore, errors::AppError};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

/// In-memory stand-in for the Redis-backed store, using the same
/// `{collection}:{id}` key layout and merge semantics.
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<BTreeMap<String, Value>>,
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, AppError> {
        let docs = self.docs.lock().await;
        Ok(docs.get(&format!("{collection}:{id}")).cloned())
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        record: Value,
        merge: bool,
    ) -> Result<(), AppError> {
        let mut docs = self.docs.lock().await;
        let key = format!("{collection}:{id}");

        if merge {
            if let (Some(Value::Object(existing)), Value::Object(fields)) =
                (docs.get_mut(&key), &record)
            {
                for (name, value) in fields {
                    existing.insert(name.clone(), value.clone());
                }
                return Ok(());
            }
        }

        docs.insert(key, record);
        Ok(())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<(String, Value)>, AppError> {
        let docs = self.docs.lock().await;
        let prefix = format!("{collection}:");

        Ok(docs
            .iter()
            .filter_map(|(key, value)| {
                let id = key.strip_prefix(&prefix)?;
                if id.contains(':') {
                    return None;
                }
                Some((id.to_string(), value.clone()))
            })
            .collect())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), AppError> {
        let mut docs = self.docs.lock().await;
        docs.remove(&format!("{collection}:{id}"));
        Ok(())
    }
}
