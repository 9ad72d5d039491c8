//! 메모리 저장소 백엔드
//!
//! `STORAGE_BACKEND=memory` 또는 테스트에서 사용합니다. 컬렉션마다
//! `RwLock<BTreeMap>`을 두고, 식별자 시퀀스는 모든 컬렉션이 하나의
//! 원자 카운터를 공유합니다. 프로세스가 끝나면 데이터는 사라집니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::config::StorageBackendKind;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::Pageable;
use crate::repositories::document_collection::{DocumentCollection, SEQUENCE_START, StorageBackend};
use crate::repositories::matcher;

fn poisoned(name: &str) -> AppError {
    AppError::InternalError(format!("collection lock poisoned: {}", name))
}

pub struct MemoryCollection {
    name: String,
    documents: RwLock<BTreeMap<i64, Document>>,
    sequence: Arc<AtomicI64>,
}

impl MemoryCollection {
    fn new(name: &str, sequence: Arc<AtomicI64>) -> Self {
        Self {
            name: name.to_string(),
            documents: RwLock::new(BTreeMap::new()),
            sequence,
        }
    }

    fn matching(&self, filter: &Document) -> AppResult<Vec<Document>> {
        let documents = self.documents.read().map_err(|_| poisoned(&self.name))?;

        let mut result = Vec::new();
        for document in documents.values() {
            if matcher::matches(document, filter)? {
                result.push(document.clone());
            }
        }
        Ok(result)
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn next_id(&self) -> AppResult<i64> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst))
    }

    async fn upsert(&self, id: i64, mut document: Document) -> AppResult<()> {
        document.insert("_id", id);
        let mut documents = self.documents.write().map_err(|_| poisoned(&self.name))?;
        documents.insert(id, document);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Document>> {
        let documents = self.documents.read().map_err(|_| poisoned(&self.name))?;
        Ok(documents.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut documents = self.documents.write().map_err(|_| poisoned(&self.name))?;
        Ok(documents.remove(&id).is_some())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut documents = self.documents.write().map_err(|_| poisoned(&self.name))?;
        let removed = documents.len() as u64;
        documents.clear();
        Ok(removed)
    }

    async fn find(&self, filter: Document, pageable: Option<&Pageable>) -> AppResult<Vec<Document>> {
        let mut documents = self.matching(&filter)?;

        let Some(pageable) = pageable else {
            return Ok(documents);
        };

        matcher::sort_documents(&mut documents, &pageable.sort_document());
        Ok(documents
            .into_iter()
            .skip(pageable.offset() as usize)
            .take(pageable.size as usize)
            .collect())
    }

    async fn count(&self, filter: Document) -> AppResult<u64> {
        Ok(self.matching(&filter)?.len() as u64)
    }
}

/// 메모리 컬렉션 모음
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Arc<MemoryCollection>>>,
    sequence: Arc<AtomicI64>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            sequence: Arc::new(AtomicI64::new(SEQUENCE_START)),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn kind(&self) -> StorageBackendKind {
        StorageBackendKind::Memory
    }

    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection> {
        if let Ok(collections) = self.collections.read() {
            if let Some(collection) = collections.get(name) {
                return collection.clone();
            }
        }

        let mut collections = self
            .collections
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        collections
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryCollection::new(name, self.sequence.clone())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SortOrder;
    use mongodb::bson::doc;

    #[actix_web::test]
    async fn test_sequence_is_shared_and_starts_at_1000() {
        let backend = MemoryBackend::new();
        let merchants = backend.collection("merchant");
        let products = backend.collection("product");

        assert_eq!(merchants.next_id().await.unwrap(), 1000);
        assert_eq!(products.next_id().await.unwrap(), 1001);
        assert_eq!(merchants.next_id().await.unwrap(), 1002);
    }

    #[actix_web::test]
    async fn test_same_name_returns_same_collection() {
        let backend = MemoryBackend::new();
        backend
            .collection("merchant")
            .upsert(1000, doc! { "name": "Acme" })
            .await
            .unwrap();

        let found = backend.collection("merchant").find_by_id(1000).await.unwrap();
        assert_eq!(found.unwrap().get_str("name").unwrap(), "Acme");
        assert!(backend.collection("product").find_by_id(1000).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_find_with_paging_and_sort() {
        let backend = MemoryBackend::new();
        let collection = backend.collection("product");
        for (id, name) in [(1000, "c"), (1001, "a"), (1002, "b"), (1003, "d")] {
            collection.upsert(id, doc! { "name": name }).await.unwrap();
        }

        let pageable = Pageable::of(1, 2).with_sort(SortOrder::asc("name"));
        let page = collection.find(Document::new(), Some(&pageable)).await.unwrap();
        let names: Vec<&str> = page.iter().map(|d| d.get_str("name").unwrap()).collect();
        assert_eq!(names, vec!["c", "d"]);

        let filter = doc! { "name": { "$in": ["a", "b"] } };
        assert_eq!(collection.count(filter).await.unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_delete() {
        let backend = MemoryBackend::new();
        let collection = backend.collection("order");
        collection.upsert(1000, doc! { "code": "O-1" }).await.unwrap();
        collection.upsert(1001, doc! { "code": "O-2" }).await.unwrap();

        assert!(collection.delete_by_id(1000).await.unwrap());
        assert!(!collection.delete_by_id(1000).await.unwrap());
        assert_eq!(collection.delete_all().await.unwrap(), 1);
        assert_eq!(collection.count(Document::new()).await.unwrap(), 0);
    }
}
