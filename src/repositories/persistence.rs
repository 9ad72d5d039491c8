//! 저장소 진입점
//!
//! 설정에 따라 저장소 백엔드와 캐시를 고르고, 엔티티 타입별 저장소를 만들어 줍니다.
//!
//! | `STORAGE_BACKEND` | 백엔드 | 식별자 시퀀스 |
//! |-------------------|--------|---------------|
//! | `mongodb` (기본) | [`MongoBackend`] | `sequences` 컬렉션 ([`SequenceRepository`]) |
//! | `memory` | [`MemoryBackend`] | 프로세스 내 원자 카운터 |

use std::sync::Arc;

use log::{info, warn};

use crate::caching::{CacheStore, EntityCache};
use crate::caching::redis::RedisClient;
use crate::config::{CacheConfig, StorageBackendKind, StorageConfig};
use crate::core::registry::ServiceLocator;
use crate::db::Database;
use crate::domain::entities::Entity;
use crate::repositories::document_collection::StorageBackend;
use crate::repositories::entity_repo::EntityRepository;
use crate::repositories::memory::MemoryBackend;
use crate::repositories::mongo::MongoBackend;
use crate::repositories::search_repo::SearchRepository;
use crate::repositories::sequence_repo::SequenceRepository;

pub struct Persistence {
    backend: Arc<dyn StorageBackend>,
    cache: Option<Arc<dyn CacheStore>>,
    cache_ttl_seconds: usize,
}

impl Persistence {
    pub fn new(
        backend: Arc<dyn StorageBackend>,
        cache: Option<Arc<dyn CacheStore>>,
        cache_ttl_seconds: usize,
    ) -> Self {
        Self {
            backend,
            cache,
            cache_ttl_seconds,
        }
    }

    /// 캐시 없는 메모리 저장소
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()), None, CacheConfig::ttl_seconds())
    }

    /// 환경 설정으로 백엔드와 캐시를 연결합니다.
    ///
    /// MongoDB를 쓰는 경우 `Database`를 `ServiceLocator`에 등록하고
    /// `#[repository]` 싱글톤(`SequenceRepository`)을 초기화합니다.
    /// 캐시 연결에 실패하면 캐시 없이 계속합니다.
    pub async fn connect() -> Result<Self, Box<dyn std::error::Error>> {
        let cache = if CacheConfig::enabled() {
            match RedisClient::new().await {
                Ok(redis) => {
                    let redis = Arc::new(redis);
                    ServiceLocator::set(redis.clone());
                    Some(redis as Arc<dyn CacheStore>)
                }
                Err(e) => {
                    warn!("⚠️ Redis 연결 실패, 캐시 없이 시작합니다: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let backend: Arc<dyn StorageBackend> = match StorageConfig::backend() {
            StorageBackendKind::Memory => {
                info!("🧪 메모리 저장소를 사용합니다 (재시작 시 데이터 소멸)");
                Arc::new(MemoryBackend::new())
            }
            StorageBackendKind::MongoDb => {
                let database = Arc::new(Database::new().await?);
                ServiceLocator::set(database.clone());
                ServiceLocator::initialize_all().await?;

                Arc::new(MongoBackend::new(database, SequenceRepository::instance()))
            }
        };

        Ok(Self::new(backend, cache, CacheConfig::ttl_seconds()))
    }

    pub fn backend_kind(&self) -> StorageBackendKind {
        self.backend.kind()
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn repository<E: Entity>(&self) -> EntityRepository<E> {
        let cache = self
            .cache
            .as_ref()
            .map(|store| EntityCache::new(store.clone(), E::COLLECTION, self.cache_ttl_seconds));

        EntityRepository::new(self.backend.collection(E::COLLECTION), cache)
    }

    pub fn search_repository<E: Entity>(&self) -> SearchRepository<E::Dto> {
        SearchRepository::new(self.backend.collection(&E::search_index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Merchant, MerchantStatus};

    #[actix_web::test]
    async fn test_repositories_share_backend_state() {
        let persistence = Persistence::in_memory();

        let saved = persistence
            .repository::<Merchant>()
            .save(Merchant {
                name: Some("Acme".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let found = persistence.repository::<Merchant>().find_by_id(saved.id.unwrap()).await.unwrap();
        assert!(found.is_some());
        assert!(persistence.repository::<MerchantStatus>().find_all().await.unwrap().is_empty());
        assert_eq!(persistence.backend_kind(), StorageBackendKind::Memory);
        assert!(!persistence.cache_enabled());
    }

    #[test]
    fn test_search_index_names() {
        let persistence = Persistence::in_memory();

        assert_eq!(persistence.search_repository::<Merchant>().index_name(), "merchant_search");
        assert_eq!(
            persistence.search_repository::<MerchantStatus>().index_name(),
            "merchant_status_search"
        );
    }
}
