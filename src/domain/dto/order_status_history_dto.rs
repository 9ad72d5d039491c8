use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::EntityDto;
use crate::utils::string_utils::deserialize_optional_string;

/// 주문 상태 이력 DTO
///
/// 주문은 `orderCode`로 표시됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusHistoryDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub order_code: Option<String>,

    #[serde(default)]
    pub order_status_id: Option<i64>,
    #[serde(default)]
    pub order_status_name: Option<String>,

    #[serde(default)]
    pub operator_type_id: Option<i64>,
    #[serde(default)]
    pub operator_type_name: Option<String>,
}

impl EntityDto for OrderStatusHistoryDto {
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "description",
        "orderCode",
        "orderStatusName",
        "operatorTypeName",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}
