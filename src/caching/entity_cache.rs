//! 엔티티 단건 조회 read-through 캐시
//!
//! 캐시 장애는 요청을 실패시키지 않습니다. 실패는 경고 로그로만 남기고
//! 저장소 조회로 넘어갑니다.

use std::sync::Arc;

use log::warn;
use serde_json::Value;

use crate::caching::store::CacheStore;

/// 컬렉션 하나에 대한 캐시 핸들
///
/// 키 형식: `<collection>:<id>`
#[derive(Clone)]
pub struct EntityCache {
    store: Arc<dyn CacheStore>,
    collection: String,
    ttl_seconds: usize,
}

impl EntityCache {
    pub fn new(store: Arc<dyn CacheStore>, collection: &str, ttl_seconds: usize) -> Self {
        Self {
            store,
            collection: collection.to_string(),
            ttl_seconds,
        }
    }

    pub fn key(&self, id: i64) -> String {
        cache_key(&self.collection, id)
    }

    pub async fn get(&self, id: i64) -> Option<Value> {
        match self.store.get_value(&self.key(id)).await {
            Ok(value) => value,
            Err(e) => {
                warn!("캐시 조회 실패 ({}): {}", self.key(id), e);
                None
            }
        }
    }

    pub async fn put(&self, id: i64, value: &Value) {
        if let Err(e) = self.store.put_value(&self.key(id), value, self.ttl_seconds).await {
            warn!("캐시 저장 실패 ({}): {}", self.key(id), e);
        }
    }

    pub async fn evict(&self, id: i64) {
        if let Err(e) = self.store.remove(&self.key(id)).await {
            warn!("캐시 무효화 실패 ({}): {}", self.key(id), e);
        }
    }
}

pub fn cache_key(collection: &str, id: i64) -> String {
    format!("{}:{}", collection, id)
}
