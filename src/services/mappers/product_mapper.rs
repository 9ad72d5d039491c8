use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::ProductDto;
use crate::domain::entities::{Currency, Entity, Merchant, Product, ProductStatus, ProductType};
use crate::services::mappers::EntityMapper;
use crate::services::references::ReferenceResolver;

#[async_trait]
impl EntityMapper for Product {
    async fn to_dto(&self, refs: &ReferenceResolver) -> AppResult<ProductDto> {
        Ok(ProductDto {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
            price: self.price,
            merchant_id: self.merchant_id,
            merchant_name: refs.label::<Merchant>(self.merchant_id).await?,
            product_type_id: self.product_type_id,
            product_type_name: refs.label::<ProductType>(self.product_type_id).await?,
            product_status_id: self.product_status_id,
            product_status_name: refs.label::<ProductStatus>(self.product_status_id).await?,
            currency_id: self.currency_id,
            currency_name: refs.label::<Currency>(self.currency_id).await?,
        })
    }

    async fn to_entity(dto: ProductDto, refs: &ReferenceResolver) -> AppResult<Self> {
        let owner = Self::ENTITY_NAME;
        Ok(Product {
            id: dto.id,
            name: dto.name,
            code: dto.code,
            description: dto.description,
            price: dto.price,
            merchant_id: refs.require::<Merchant>(owner, dto.merchant_id).await?,
            product_type_id: refs.require::<ProductType>(owner, dto.product_type_id).await?,
            product_status_id: refs.require::<ProductStatus>(owner, dto.product_status_id).await?,
            currency_id: refs.require::<Currency>(owner, dto.currency_id).await?,
        })
    }
}
