use bb8::Pool;
use bb8_redis::RedisConnectionManager;

use crate::db::store::RedisStore;

#[derive(Clone)]
pub struct AppState {
    pub store: RedisStore,
}

pub type RedisClient = Pool<RedisConnectionManager>;
