//! 타입이 있는 엔티티 저장소
//!
//! [`DocumentCollection`] 위에서 엔티티 직렬화, 식별자 발급, 읽기 캐시를 담당합니다.
//! JHipster의 `JpaRepository` + `JpaSpecificationExecutor`에 해당합니다.

use std::marker::PhantomData;
use std::sync::Arc;

use log::debug;
use mongodb::bson::{self, Bson, Document};

use crate::caching::EntityCache;
use crate::core::errors::{AppError, AppResult};
use crate::domain::criteria::EntityCriteria;
use crate::domain::entities::Entity;
use crate::domain::models::{Page, Pageable};
use crate::repositories::document_collection::DocumentCollection;

pub struct EntityRepository<E> {
    collection: Arc<dyn DocumentCollection>,
    cache: Option<EntityCache>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityRepository<E> {
    pub fn new(collection: Arc<dyn DocumentCollection>, cache: Option<EntityCache>) -> Self {
        Self {
            collection,
            cache,
            _entity: PhantomData,
        }
    }

    fn to_document(entity: &E) -> AppResult<Document> {
        bson::to_document(entity).map_err(|e| {
            AppError::InternalError(format!("failed to serialize {}: {}", E::DISPLAY_NAME, e))
        })
    }

    fn from_document(document: Document) -> AppResult<E> {
        bson::from_document(document).map_err(|e| {
            AppError::DatabaseError(format!("failed to read {}: {}", E::DISPLAY_NAME, e))
        })
    }

    /// 식별자가 없으면 시퀀스에서 발급한 뒤 저장합니다.
    pub async fn save(&self, mut entity: E) -> AppResult<E> {
        let id = match entity.id() {
            Some(id) => id,
            None => {
                let id = self.collection.next_id().await?;
                entity.set_id(id);
                id
            }
        };

        let document = Self::to_document(&entity)?;
        self.collection.upsert(id, document).await?;

        if let Some(cache) = &self.cache {
            cache.evict(id).await;
        }

        Ok(entity)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(id).await {
                match json_to_document(cached) {
                    Some(document) => return Self::from_document(document).map(Some),
                    None => debug!("캐시 항목 형식 불일치, 저장소에서 다시 읽습니다: {}", cache.key(id)),
                }
            }
        }

        let Some(document) = self.collection.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(cache) = &self.cache {
            cache.put(id, &document_to_json(&document)).await;
        }

        Self::from_document(document).map(Some)
    }

    pub async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let deleted = self.collection.delete_by_id(id).await?;

        if let Some(cache) = &self.cache {
            cache.evict(id).await;
        }

        Ok(deleted)
    }

    pub async fn find_by_criteria(&self, criteria: &E::Criteria, pageable: &Pageable) -> AppResult<Page<E>> {
        let filter = criteria.to_filter();
        let total = self.collection.count(filter.clone()).await?;
        let documents = self.collection.find(filter, Some(pageable)).await?;

        let content = documents
            .into_iter()
            .map(Self::from_document)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Page::new(content, total, pageable.clone()))
    }

    pub async fn count_by_criteria(&self, criteria: &E::Criteria) -> AppResult<u64> {
        self.collection.count(criteria.to_filter()).await
    }

    /// 식별자 순 전체 조회
    pub async fn find_all(&self) -> AppResult<Vec<E>> {
        let mut documents = self.collection.find(Document::new(), None).await?;
        documents.sort_by_key(|document| document.get_i64("_id").unwrap_or_default());

        documents.into_iter().map(Self::from_document).collect()
    }
}

/// 캐시에는 canonical Extended JSON으로 저장하여 `i64`와 날짜 타입을 보존합니다.
fn document_to_json(document: &Document) -> serde_json::Value {
    Bson::Document(document.clone()).into_canonical_extjson()
}

fn json_to_document(value: serde_json::Value) -> Option<Document> {
    match Bson::try_from(value) {
        Ok(Bson::Document(document)) => Some(document),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::store::memory::MemoryCacheStore;
    use crate::domain::criteria::MerchantCriteria;
    use crate::domain::entities::{Merchant, Order};
    use crate::domain::models::{QueryParams, SortOrder};
    use crate::repositories::memory::MemoryBackend;
    use crate::repositories::document_collection::StorageBackend;

    fn repository<E: Entity>(backend: &MemoryBackend) -> EntityRepository<E> {
        EntityRepository::new(backend.collection(E::COLLECTION), None)
    }

    fn cached_repository<E: Entity>(backend: &MemoryBackend, store: &Arc<MemoryCacheStore>) -> EntityRepository<E> {
        let cache = EntityCache::new(store.clone(), E::COLLECTION, 600);
        EntityRepository::new(backend.collection(E::COLLECTION), Some(cache))
    }

    fn merchant(name: &str) -> Merchant {
        Merchant {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_save_assigns_sequence_id() {
        let backend = MemoryBackend::new();
        let repo = repository::<Merchant>(&backend);

        let first = repo.save(merchant("Acme")).await.unwrap();
        let second = repo.save(merchant("Globex")).await.unwrap();

        assert_eq!(first.id, Some(1000));
        assert_eq!(second.id, Some(1001));
        assert_eq!(repo.find_by_id(1000).await.unwrap().unwrap().name.as_deref(), Some("Acme"));
    }

    #[actix_web::test]
    async fn test_save_with_id_replaces() {
        let backend = MemoryBackend::new();
        let repo = repository::<Merchant>(&backend);

        let mut saved = repo.save(merchant("Acme")).await.unwrap();
        saved.name = Some("Acme Corp".to_string());
        repo.save(saved).await.unwrap();

        let found = repo.find_by_id(1000).await.unwrap().unwrap();
        assert_eq!(found.name.as_deref(), Some("Acme Corp"));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_delete_then_find_is_none() {
        let backend = MemoryBackend::new();
        let repo = repository::<Merchant>(&backend);
        repo.save(merchant("Acme")).await.unwrap();

        assert!(repo.delete_by_id(1000).await.unwrap());
        assert!(repo.find_by_id(1000).await.unwrap().is_none());
        assert!(!repo.exists_by_id(1000).await.unwrap());
    }

    #[actix_web::test]
    async fn test_find_by_criteria_pages_and_counts() {
        let backend = MemoryBackend::new();
        let repo = repository::<Merchant>(&backend);
        for name in ["Acme", "Acme West", "Globex", "Initech"] {
            repo.save(merchant(name)).await.unwrap();
        }

        let params: QueryParams = vec![("name.contains", "acme")].into_iter().collect();
        let criteria = MerchantCriteria::from_params(&params).unwrap();
        let pageable = Pageable::of(0, 1).with_sort(SortOrder::desc("name"));

        let page = repo.find_by_criteria(&criteria, &pageable).await.unwrap();
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name.as_deref(), Some("Acme West"));
        assert_eq!(repo.count_by_criteria(&MerchantCriteria::default()).await.unwrap(), 4);
    }

    #[actix_web::test]
    async fn test_timestamps_survive_storage() {
        let backend = MemoryBackend::new();
        let repo = repository::<Order>(&backend);
        let created_at = bson::DateTime::from_millis(1_709_288_130_123);

        repo.save(Order {
            code: Some("O-1".to_string()),
            created_at: Some(created_at),
            ..Default::default()
        })
        .await
        .unwrap();

        let found = repo.find_by_id(1000).await.unwrap().unwrap();
        assert_eq!(found.created_at, Some(created_at));
    }

    #[actix_web::test]
    async fn test_find_by_id_fills_cache() {
        let backend = MemoryBackend::new();
        let store = Arc::new(MemoryCacheStore::new());
        let repo = cached_repository::<Merchant>(&backend, &store);
        repo.save(merchant("Acme")).await.unwrap();
        assert!(store.entry("merchant:1000").is_none());

        repo.find_by_id(1000).await.unwrap().unwrap();

        let (cached, ttl) = store.entry("merchant:1000").unwrap();
        assert_eq!(ttl, 600);
        assert_eq!(cached["name"], "Acme");
        assert_eq!(cached["_id"]["$numberLong"], "1000");
    }

    #[actix_web::test]
    async fn test_cached_read_after_update_is_fresh() {
        let backend = MemoryBackend::new();
        let store = Arc::new(MemoryCacheStore::new());
        let repo = cached_repository::<Merchant>(&backend, &store);

        let mut saved = repo.save(merchant("Acme")).await.unwrap();
        repo.find_by_id(1000).await.unwrap();

        saved.name = Some("Acme Corp".to_string());
        repo.save(saved).await.unwrap();
        assert!(store.entry("merchant:1000").is_none());

        let found = repo.find_by_id(1000).await.unwrap().unwrap();
        assert_eq!(found.name.as_deref(), Some("Acme Corp"));
        assert_eq!(store.entry("merchant:1000").unwrap().0["name"], "Acme Corp");
    }

    #[actix_web::test]
    async fn test_delete_evicts_cached_entity() {
        let backend = MemoryBackend::new();
        let store = Arc::new(MemoryCacheStore::new());
        let repo = cached_repository::<Merchant>(&backend, &store);
        repo.save(merchant("Acme")).await.unwrap();
        repo.find_by_id(1000).await.unwrap();
        assert!(store.entry("merchant:1000").is_some());

        repo.delete_by_id(1000).await.unwrap();

        assert!(store.entry("merchant:1000").is_none());
        assert!(repo.find_by_id(1000).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_cache_hit_served_without_store_read() {
        let backend = MemoryBackend::new();
        let store = Arc::new(MemoryCacheStore::new());
        let repo = cached_repository::<Merchant>(&backend, &store);
        repo.save(merchant("Acme")).await.unwrap();
        repo.find_by_id(1000).await.unwrap();

        // 저장소를 우회해 문서를 지우면 TTL 동안은 캐시 값이 보입니다.
        backend.collection(Merchant::COLLECTION).delete_by_id(1000).await.unwrap();

        let found = repo.find_by_id(1000).await.unwrap().unwrap();
        assert_eq!(found.name.as_deref(), Some("Acme"));
    }

    #[actix_web::test]
    async fn test_unavailable_cache_falls_back_to_store() {
        let backend = MemoryBackend::new();
        let store = Arc::new(MemoryCacheStore::failing());
        let repo = cached_repository::<Merchant>(&backend, &store);

        repo.save(merchant("Acme")).await.unwrap();
        let found = repo.find_by_id(1000).await.unwrap().unwrap();
        assert_eq!(found.name.as_deref(), Some("Acme"));
        assert!(repo.delete_by_id(1000).await.unwrap());
    }

    #[test]
    fn test_cache_json_round_trip_keeps_types() {
        let document = mongodb::bson::doc! {
            "_id": 1000_i64,
            "price": 12.5,
            "createdAt": bson::DateTime::from_millis(1_000),
        };

        let restored = json_to_document(document_to_json(&document)).unwrap();
        assert_eq!(restored, document);
    }
}
