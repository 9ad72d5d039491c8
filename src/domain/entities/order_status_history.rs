use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::criteria::OrderStatusHistoryCriteria;
use crate::domain::dto::OrderStatusHistoryDto;
use crate::domain::entities::{Entity, impl_identity};

/// 주문 상태 변경 이력
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusHistory {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub description: Option<String>,
    pub created_at: Option<DateTime>,
    pub order_id: Option<i64>,
    pub order_status_id: Option<i64>,
    pub operator_type_id: Option<i64>,
}

impl_identity!(OrderStatusHistory);

impl Entity for OrderStatusHistory {
    const ENTITY_NAME: &'static str = "orderStatusHistory";
    const DISPLAY_NAME: &'static str = "OrderStatusHistory";
    const COLLECTION: &'static str = "order_status_history";
    const RESOURCE_PATH: &'static str = "order-status-histories";

    type Dto = OrderStatusHistoryDto;
    type Criteria = OrderStatusHistoryCriteria;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn label(&self) -> Option<String> {
        self.description.clone()
    }
}
