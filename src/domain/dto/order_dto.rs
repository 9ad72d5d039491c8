use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::EntityDto;
use crate::utils::string_utils::deserialize_optional_string;

/// 주문 DTO
///
/// `createdAt`이 없으면 새 주문은 저장 시각으로 채워지고, 수정 시에는 기존 값이 유지됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "code must be at most 50 characters"))]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: Option<f64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub merchant_id: Option<i64>,
    #[serde(default)]
    pub merchant_name: Option<String>,

    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_name: Option<String>,

    #[serde(default)]
    pub order_type_id: Option<i64>,
    #[serde(default)]
    pub order_type_name: Option<String>,

    #[serde(default)]
    pub order_status_id: Option<i64>,
    #[serde(default)]
    pub order_status_name: Option<String>,

    #[serde(default)]
    pub pay_type_id: Option<i64>,
    #[serde(default)]
    pub pay_type_name: Option<String>,

    #[serde(default)]
    pub currency_id: Option<i64>,
    #[serde(default)]
    pub currency_name: Option<String>,
}

impl EntityDto for OrderDto {
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "code",
        "description",
        "merchantName",
        "productName",
        "orderTypeName",
        "orderStatusName",
        "payTypeName",
        "currencyName",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}
