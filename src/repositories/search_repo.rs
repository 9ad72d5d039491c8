//! 검색 색인 저장소
//!
//! JHipster의 `*SearchRepository`(Elasticsearch) 역할입니다. 비정규화된 DTO를
//! 그대로 문서로 색인하고, [`SearchQuery`]가 만든 필터로 조회합니다.
//! DTO의 `id`는 문서의 `_id`로 옮겨 저장됩니다.

use std::marker::PhantomData;
use std::sync::Arc;

use mongodb::bson::{self, Document};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::EntityDto;
use crate::domain::models::{Page, Pageable, SearchQuery};
use crate::repositories::document_collection::DocumentCollection;

pub struct SearchRepository<D> {
    collection: Arc<dyn DocumentCollection>,
    _dto: PhantomData<fn() -> D>,
}

impl<D: EntityDto> SearchRepository<D> {
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self {
            collection,
            _dto: PhantomData,
        }
    }

    pub fn index_name(&self) -> &str {
        self.collection.name()
    }

    pub async fn index(&self, dto: &D) -> AppResult<()> {
        let id = dto.id().ok_or_else(|| {
            AppError::InternalError(format!("cannot index a document without id in {}", self.index_name()))
        })?;

        let mut document = bson::to_document(dto)
            .context("failed to build search document")?;
        document.remove("id");

        self.collection.upsert(id, document).await
    }

    pub async fn remove(&self, id: i64) -> AppResult<()> {
        self.collection.delete_by_id(id).await?;
        Ok(())
    }

    pub async fn search(&self, query: &SearchQuery, pageable: &Pageable) -> AppResult<Page<D>> {
        let filter = query.to_filter(D::SEARCH_FIELDS);
        let total = self.collection.count(filter.clone()).await?;
        let documents = self.collection.find(filter, Some(pageable)).await?;

        let content = documents
            .into_iter()
            .map(Self::from_document)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Page::new(content, total, pageable.clone()))
    }

    /// 색인 전체 삭제, 삭제된 문서 수를 돌려줍니다.
    pub async fn clear(&self) -> AppResult<u64> {
        self.collection.delete_all().await
    }

    fn from_document(mut document: Document) -> AppResult<D> {
        let id = document.get_i64("_id").ok();
        document.remove("_id");

        let mut dto: D = bson::from_document(document)
            .map_err(|e| AppError::DatabaseError(format!("failed to read search document: {}", e)))?;
        dto.set_id(id);
        Ok(dto)
    }
}
