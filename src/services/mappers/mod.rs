//! # Entity ↔ DTO Mappers
//!
//! JHipster의 MapStruct 매퍼에 해당합니다. 참조 필드 때문에 비동기입니다.
//!
//! - `to_dto`: 참조 대상의 표시 값(`merchantTypeName` 등)을 채웁니다.
//! - `to_entity`: 참조 대상이 존재하는지 확인하고, `<name>Name` 입력은 버립니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::Entity;
use crate::services::references::ReferenceResolver;

mod commission_placeholder_mapper;
mod lookup_mapper;
mod merchant_mapper;
mod order_mapper;
mod order_status_history_mapper;
mod product_mapper;

#[async_trait]
pub trait EntityMapper: Entity {
    async fn to_dto(&self, refs: &ReferenceResolver) -> AppResult<Self::Dto>;

    async fn to_entity(dto: Self::Dto, refs: &ReferenceResolver) -> AppResult<Self>;
}
