//! 식별자 시퀀스 저장소 (MongoDB)
//!
//! `sequences` 컬렉션의 카운터 문서를 `$inc`로 원자적으로 증가시킵니다.
//! 모든 엔티티가 `entity_id` 카운터 하나를 공유하므로 식별자는 컬렉션을
//! 가로질러 한 번만 쓰입니다.
//!
//! ```text
//! { "_id": "entity_id", "value": 17 }   →   다음 식별자 1000 + 17 - 1
//! ```

use std::sync::Arc;

use mongodb::bson::{Document, doc};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use singleton_macro::repository;

use crate::core::errors::AppError;
use crate::db::Database;
use crate::repositories::document_collection::SEQUENCE_START;

/// 엔티티 공용 카운터 이름
pub const ENTITY_SEQUENCE: &str = "entity_id";

#[repository(name = "sequence", collection = "sequences")]
pub struct SequenceRepository {
    db: Arc<Database>,
}

impl SequenceRepository {
    pub async fn next_value(&self, sequence: &str) -> Result<i64, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .collection::<Document>()
            .find_one_and_update(doc! { "_id": sequence }, doc! { "$inc": { "value": 1_i64 } })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError(format!("sequence '{}' was not created", sequence)))?;

        let value = counter
            .get_i64("value")
            .map_err(|e| AppError::DatabaseError(format!("sequence '{}' is corrupted: {}", sequence, e)))?;

        Ok(SEQUENCE_START + value - 1)
    }
}
