use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::OrderStatusHistoryDto;
use crate::domain::entities::{Entity, OperatorType, Order, OrderStatus, OrderStatusHistory};
use crate::domain::models::time;
use crate::services::mappers::EntityMapper;
use crate::services::references::ReferenceResolver;

#[async_trait]
impl EntityMapper for OrderStatusHistory {
    async fn to_dto(&self, refs: &ReferenceResolver) -> AppResult<OrderStatusHistoryDto> {
        Ok(OrderStatusHistoryDto {
            id: self.id,
            description: self.description.clone(),
            created_at: self.created_at.map(time::to_chrono),
            order_id: self.order_id,
            order_code: refs.label::<Order>(self.order_id).await?,
            order_status_id: self.order_status_id,
            order_status_name: refs.label::<OrderStatus>(self.order_status_id).await?,
            operator_type_id: self.operator_type_id,
            operator_type_name: refs.label::<OperatorType>(self.operator_type_id).await?,
        })
    }

    async fn to_entity(dto: OrderStatusHistoryDto, refs: &ReferenceResolver) -> AppResult<Self> {
        let owner = Self::ENTITY_NAME;
        let created_at = match (dto.id, dto.created_at) {
            (_, Some(created_at)) => Some(time::to_bson(created_at)),
            (None, None) => Some(time::to_bson(time::now())),
            (Some(id), None) => refs
                .repository::<OrderStatusHistory>()
                .find_by_id(id)
                .await?
                .and_then(|stored| stored.created_at),
        };

        Ok(OrderStatusHistory {
            id: dto.id,
            description: dto.description,
            created_at,
            order_id: refs.require::<Order>(owner, dto.order_id).await?,
            order_status_id: refs.require::<OrderStatus>(owner, dto.order_status_id).await?,
            operator_type_id: refs.require::<OperatorType>(owner, dto.operator_type_id).await?,
        })
    }
}
