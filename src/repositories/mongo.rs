//! MongoDB 저장소 백엔드
//!
//! 엔티티 문서는 `_id: i64`로 저장되며, 식별자는 [`SequenceRepository`]가 발급합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::options::{FindOptions, ReplaceOptions};

use crate::config::StorageBackendKind;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::models::Pageable;
use crate::repositories::document_collection::{DocumentCollection, StorageBackend};
use crate::repositories::sequence_repo::{ENTITY_SEQUENCE, SequenceRepository};

fn database_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

pub struct MongoCollection {
    name: String,
    collection: mongodb::Collection<Document>,
    sequences: Arc<SequenceRepository>,
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn next_id(&self) -> AppResult<i64> {
        self.sequences.next_value(ENTITY_SEQUENCE).await
    }

    async fn upsert(&self, id: i64, mut document: Document) -> AppResult<()> {
        document.insert("_id", id);
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(doc! { "_id": id }, document)
            .with_options(options)
            .await
            .map_err(database_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Document>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(database_error)?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(database_error)?;
        Ok(result.deleted_count)
    }

    async fn find(&self, filter: Document, pageable: Option<&Pageable>) -> AppResult<Vec<Document>> {
        let mut options = FindOptions::default();
        if let Some(pageable) = pageable {
            options.sort = Some(pageable.sort_document());
            options.skip = Some(pageable.offset());
            options.limit = Some(pageable.size as i64);
        }

        let cursor = self
            .collection
            .find(filter)
            .with_options(options)
            .await
            .map_err(database_error)?;

        cursor.try_collect::<Vec<Document>>().await.map_err(database_error)
    }

    async fn count(&self, filter: Document) -> AppResult<u64> {
        self.collection
            .count_documents(filter)
            .await
            .map_err(database_error)
    }
}

/// MongoDB 데이터베이스 하나를 저장소로 사용합니다.
pub struct MongoBackend {
    database: Arc<Database>,
    sequences: Arc<SequenceRepository>,
}

impl MongoBackend {
    pub fn new(database: Arc<Database>, sequences: Arc<SequenceRepository>) -> Self {
        Self { database, sequences }
    }
}

impl StorageBackend for MongoBackend {
    fn kind(&self) -> StorageBackendKind {
        StorageBackendKind::MongoDb
    }

    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection> {
        Arc::new(MongoCollection {
            name: name.to_string(),
            collection: self.database.get_database().collection::<Document>(name),
            sequences: self.sequences.clone(),
        })
    }
}
