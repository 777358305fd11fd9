use async_trait::async_trait;
use bb8::PooledConnection;
use bb8_redis::RedisConnectionManager;
use redis::AsyncCommands;
use serde_json::Value;

use crate::{errors::AppError, state::RedisClient};

/// The document-store surface the rest of the crate is written against.
/// Documents live in named collections and are addressed by string ids.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, AppError>;

    /// With `merge`, top-level fields of `record` overlay the stored
    /// document, creating the document if it does not exist yet. Without
    /// it the document is replaced wholesale.
    async fn set(
        &self,
        collection: &str,
        id: &str,
        record: Value,
        merge: bool,
    ) -> Result<(), AppError>;

    /// Every document in the collection, tagged with its id.
    async fn list_all(&self, collection: &str) -> Result<Vec<(String, Value)>, AppError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<(), AppError>;
}

/// Production store: one JSON document per Redis key, `{collection}:{id}`.
#[derive(Clone)]
pub struct RedisStore {
    pool: RedisClient,
}

impl RedisStore {
    pub fn new(pool: RedisClient) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> Result<PooledConnection<'_, RedisConnectionManager>, AppError> {
        self.pool.get().await.map_err(|e| match e {
            bb8::RunError::User(err) => AppError::RedisCommandError(err),
            bb8::RunError::TimedOut => {
                AppError::RedisPoolError("Redis connection timed out".into())
            }
        })
    }
}

#[async_trait]
impl DocumentStore for RedisStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, AppError> {
        let mut conn = self.conn().await?;
        let key = format!("{collection}:{id}");

        let raw: Option<String> = conn.get(&key).await.map_err(AppError::RedisCommandError)?;

        match raw {
            Some(raw) => {
                let value = serde_json::from_str(&raw)
                    .map_err(|e| AppError::Deserialization(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        record: Value,
        merge: bool,
    ) -> Result<(), AppError> {
        let mut conn = self.conn().await?;
        let key = format!("{collection}:{id}");

        let doc = if merge {
            let existing: Option<String> =
                conn.get(&key).await.map_err(AppError::RedisCommandError)?;
            match existing {
                Some(raw) => {
                    let mut current: Value = serde_json::from_str(&raw)
                        .map_err(|e| AppError::Deserialization(e.to_string()))?;
                    merge_fields(&mut current, record);
                    current
                }
                None => record,
            }
        } else {
            record
        };

        let json =
            serde_json::to_string(&doc).map_err(|e| AppError::Serialization(e.to_string()))?;

        let _: () = conn
            .set(&key, json)
            .await
            .map_err(AppError::RedisCommandError)?;

        Ok(())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<(String, Value)>, AppError> {
        let mut conn = self.conn().await?;
        let prefix = format!("{collection}:");

        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(format!("{collection}:*"))
            .query_async(&mut *conn)
            .await
            .map_err(AppError::RedisCommandError)?;

        let mut docs = Vec::new();

        for key in keys {
            let Some(id) = key.strip_prefix(&prefix) else {
                continue;
            };
            // Skip keys of nested collections, e.g. stall ratings when
            // listing stalls. Document ids never contain ':'.
            if id.contains(':') {
                continue;
            }

            let raw: Option<String> = conn.get(&key).await.map_err(AppError::RedisCommandError)?;
            if let Some(raw) = raw {
                let value = serde_json::from_str(&raw)
                    .map_err(|e| AppError::Deserialization(e.to_string()))?;
                docs.push((id.to_string(), value));
            }
        }

        Ok(docs)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), AppError> {
        let mut conn = self.conn().await?;
        let key = format!("{collection}:{id}");

        let _: () = conn
            .del(&key)
            .await
            .map_err(AppError::RedisCommandError)?;

        Ok(())
    }
}

fn merge_fields(current: &mut Value, patch: Value) {
    match (current, patch) {
        (Value::Object(doc), Value::Object(fields)) => {
            for (name, value) in fields {
                doc.insert(name, value);
            }
        }
        (doc, patch) => *doc = patch,
    }
}
