use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::criteria::OrderCriteria;
use crate::domain::dto::OrderDto;
use crate::domain::entities::{Entity, impl_identity};

/// 주문
///
/// 다른 엔티티에는 `code`가 표시 값으로 실립니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub created_at: Option<DateTime>,
    pub merchant_id: Option<i64>,
    pub product_id: Option<i64>,
    pub order_type_id: Option<i64>,
    pub order_status_id: Option<i64>,
    pub pay_type_id: Option<i64>,
    pub currency_id: Option<i64>,
}

impl_identity!(Order);

impl Entity for Order {
    const ENTITY_NAME: &'static str = "order";
    const DISPLAY_NAME: &'static str = "Order";
    const COLLECTION: &'static str = "order";
    const RESOURCE_PATH: &'static str = "orders";

    type Dto = OrderDto;
    type Criteria = OrderCriteria;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn label(&self) -> Option<String> {
        self.code.clone()
    }
}
