//! 저장소 추상화
//!
//! 엔티티 저장소와 검색 색인은 모두 `_id: i64`를 키로 하는 BSON 문서 컬렉션
//! 위에서 동작합니다. MongoDB와 메모리 두 구현이 있습니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::config::StorageBackendKind;
use crate::core::errors::AppResult;
use crate::domain::models::Pageable;

/// `_id: i64` 키 문서 컬렉션
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    fn name(&self) -> &str;

    /// 전체 컬렉션이 공유하는 시퀀스의 다음 값
    async fn next_id(&self) -> AppResult<i64>;

    /// `_id`가 `id`인 문서를 통째로 교체하거나 새로 넣습니다.
    async fn upsert(&self, id: i64, document: Document) -> AppResult<()>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Document>>;

    /// 삭제된 문서가 있으면 `true`
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    async fn delete_all(&self) -> AppResult<u64>;

    /// 필터에 맞는 문서. `pageable`이 있으면 정렬 후 해당 페이지만 돌려줍니다.
    async fn find(&self, filter: Document, pageable: Option<&Pageable>) -> AppResult<Vec<Document>>;

    async fn count(&self, filter: Document) -> AppResult<u64>;
}

/// 이름으로 컬렉션 핸들을 내어주는 저장소 백엔드
pub trait StorageBackend: Send + Sync {
    fn kind(&self) -> StorageBackendKind;

    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection>;
}

/// 시퀀스 시작 값 (JHipster `sequenceGenerator`의 `initialValue`)
pub const SEQUENCE_START: i64 = 1000;
