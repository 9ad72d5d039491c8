use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::EntityDto;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MerchantDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "name is required"))]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "code must be at most 50 characters"))]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub merchant_type_id: Option<i64>,
    #[serde(default)]
    pub merchant_type_name: Option<String>,

    #[serde(default)]
    pub merchant_status_id: Option<i64>,
    #[serde(default)]
    pub merchant_status_name: Option<String>,

    #[serde(default)]
    pub merchant_audit_status_id: Option<i64>,
    #[serde(default)]
    pub merchant_audit_status_name: Option<String>,

    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub parent_name: Option<String>,
}

impl EntityDto for MerchantDto {
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "name",
        "code",
        "description",
        "merchantTypeName",
        "merchantStatusName",
        "merchantAuditStatusName",
        "parentName",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}
