use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::CommissionPlaceholderDto;
use crate::domain::entities::{CommissionPlaceholder, Entity, Merchant, ProductType, Status};
use crate::services::mappers::EntityMapper;
use crate::services::references::ReferenceResolver;

#[async_trait]
impl EntityMapper for CommissionPlaceholder {
    async fn to_dto(&self, refs: &ReferenceResolver) -> AppResult<CommissionPlaceholderDto> {
        Ok(CommissionPlaceholderDto {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
            rate: self.rate,
            merchant_id: self.merchant_id,
            merchant_name: refs.label::<Merchant>(self.merchant_id).await?,
            product_type_id: self.product_type_id,
            product_type_name: refs.label::<ProductType>(self.product_type_id).await?,
            status_id: self.status_id,
            status_name: refs.label::<Status>(self.status_id).await?,
        })
    }

    async fn to_entity(dto: CommissionPlaceholderDto, refs: &ReferenceResolver) -> AppResult<Self> {
        let owner = Self::ENTITY_NAME;
        Ok(CommissionPlaceholder {
            id: dto.id,
            name: dto.name,
            code: dto.code,
            description: dto.description,
            rate: dto.rate,
            merchant_id: refs.require::<Merchant>(owner, dto.merchant_id).await?,
            product_type_id: refs.require::<ProductType>(owner, dto.product_type_id).await?,
            status_id: refs.require::<Status>(owner, dto.status_id).await?,
        })
    }
}
