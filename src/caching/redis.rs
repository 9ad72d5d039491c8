//! # Redis 캐시 클라이언트
//!
//! 엔티티 단건 조회를 위한 읽기 캐시입니다. 값은 JSON 문자열로 저장되며
//! 모든 연산은 멀티플렉싱 연결 위에서 비동기로 수행됩니다.

use async_trait::async_trait;
use log::info;
use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::caching::store::CacheStore;
use crate::config::CacheConfig;
use crate::core::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

fn serde_failure(what: &'static str, e: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::TypeError, what, e.to_string()))
}

impl RedisClient {
    /// `REDIS_URL`로 연결하고 PING으로 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::open(CacheConfig::redis_url())?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| serde_json::from_str(&json).map_err(|e| serde_failure("Deserialization failed", e)))
            .transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| serde_failure("Serialization failed", e))?;
        conn.set_ex(key, json, seconds as u64).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }
}

fn cache_failure(e: redis::RedisError) -> AppError {
    AppError::RedisError(e.to_string())
}

#[async_trait]
impl CacheStore for RedisClient {
    async fn get_value(&self, key: &str) -> AppResult<Option<Value>> {
        self.get::<Value>(key).await.map_err(cache_failure)
    }

    async fn put_value(&self, key: &str, value: &Value, ttl_seconds: usize) -> AppResult<()> {
        self.set_with_expiry(key, value, ttl_seconds).await.map_err(cache_failure)
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.del(key).await.map_err(cache_failure)
    }
}
