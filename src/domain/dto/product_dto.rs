use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::EntityDto;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
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
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,

    #[serde(default)]
    pub merchant_id: Option<i64>,
    #[serde(default)]
    pub merchant_name: Option<String>,

    #[serde(default)]
    pub product_type_id: Option<i64>,
    #[serde(default)]
    pub product_type_name: Option<String>,

    #[serde(default)]
    pub product_status_id: Option<i64>,
    #[serde(default)]
    pub product_status_name: Option<String>,

    #[serde(default)]
    pub currency_id: Option<i64>,
    #[serde(default)]
    pub currency_name: Option<String>,
}

impl EntityDto for ProductDto {
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "name",
        "code",
        "description",
        "merchantName",
        "productTypeName",
        "productStatusName",
        "currencyName",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_price_rejected() {
        let dto = ProductDto {
            name: Some("Coffee".to_string()),
            price: Some(-1.0),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = ProductDto {
            price: Some(0.0),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }
}
