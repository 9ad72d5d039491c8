use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::OrderDto;
use crate::domain::entities::{Currency, Entity, Merchant, Order, OrderStatus, OrderType, PayType, Product};
use crate::domain::models::time;
use crate::services::mappers::EntityMapper;
use crate::services::references::ReferenceResolver;

#[async_trait]
impl EntityMapper for Order {
    async fn to_dto(&self, refs: &ReferenceResolver) -> AppResult<OrderDto> {
        Ok(OrderDto {
            id: self.id,
            code: self.code.clone(),
            description: self.description.clone(),
            amount: self.amount,
            created_at: self.created_at.map(time::to_chrono),
            merchant_id: self.merchant_id,
            merchant_name: refs.label::<Merchant>(self.merchant_id).await?,
            product_id: self.product_id,
            product_name: refs.label::<Product>(self.product_id).await?,
            order_type_id: self.order_type_id,
            order_type_name: refs.label::<OrderType>(self.order_type_id).await?,
            order_status_id: self.order_status_id,
            order_status_name: refs.label::<OrderStatus>(self.order_status_id).await?,
            pay_type_id: self.pay_type_id,
            pay_type_name: refs.label::<PayType>(self.pay_type_id).await?,
            currency_id: self.currency_id,
            currency_name: refs.label::<Currency>(self.currency_id).await?,
        })
    }

    /// `createdAt`이 없으면 새 주문은 현재 시각, 기존 주문은 저장된 값을 씁니다.
    async fn to_entity(dto: OrderDto, refs: &ReferenceResolver) -> AppResult<Self> {
        let owner = Self::ENTITY_NAME;
        let created_at = match (dto.id, dto.created_at) {
            (_, Some(created_at)) => Some(time::to_bson(created_at)),
            (None, None) => Some(time::to_bson(time::now())),
            (Some(id), None) => refs
                .repository::<Order>()
                .find_by_id(id)
                .await?
                .and_then(|stored| stored.created_at),
        };

        Ok(Order {
            id: dto.id,
            code: dto.code,
            description: dto.description,
            amount: dto.amount,
            created_at,
            merchant_id: refs.require::<Merchant>(owner, dto.merchant_id).await?,
            product_id: refs.require::<Product>(owner, dto.product_id).await?,
            order_type_id: refs.require::<OrderType>(owner, dto.order_type_id).await?,
            order_status_id: refs.require::<OrderStatus>(owner, dto.order_status_id).await?,
            pay_type_id: refs.require::<PayType>(owner, dto.pay_type_id).await?,
            currency_id: refs.require::<Currency>(owner, dto.currency_id).await?,
        })
    }
}
