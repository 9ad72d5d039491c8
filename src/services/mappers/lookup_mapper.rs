use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::LookupDto;
use crate::domain::entities::{Lookup, LookupKind};
use crate::services::mappers::EntityMapper;
use crate::services::references::ReferenceResolver;

#[async_trait]
impl<K: LookupKind> EntityMapper for Lookup<K> {
    async fn to_dto(&self, _refs: &ReferenceResolver) -> AppResult<LookupDto> {
        Ok(LookupDto {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
        })
    }

    async fn to_entity(dto: LookupDto, _refs: &ReferenceResolver) -> AppResult<Self> {
        Ok(Lookup::with_fields(dto.id, dto.name, dto.code, dto.description))
    }
}
