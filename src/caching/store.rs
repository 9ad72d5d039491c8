//! 캐시 저장소 추상화
//!
//! [`EntityCache`](crate::caching::EntityCache)는 이 트레이트만 사용합니다.
//! 운영 구현은 [`RedisClient`](crate::caching::redis::RedisClient)입니다.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::errors::AppResult;

#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get_value(&self, key: &str) -> AppResult<Option<Value>>;

    /// `ttl_seconds` 후 만료되는 값을 저장합니다.
    async fn put_value(&self, key: &str, value: &Value, ttl_seconds: usize) -> AppResult<()>;

    async fn remove(&self, key: &str) -> AppResult<()>;
}
