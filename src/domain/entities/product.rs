use serde::{Deserialize, Serialize};

use crate::domain::criteria::ProductCriteria;
use crate::domain::dto::ProductDto;
use crate::domain::entities::{Entity, impl_identity};

/// 가맹점이 판매하는 상품
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub merchant_id: Option<i64>,
    pub product_type_id: Option<i64>,
    pub product_status_id: Option<i64>,
    pub currency_id: Option<i64>,
}

impl_identity!(Product);

impl Entity for Product {
    const ENTITY_NAME: &'static str = "product";
    const DISPLAY_NAME: &'static str = "Product";
    const COLLECTION: &'static str = "product";
    const RESOURCE_PATH: &'static str = "products";

    type Dto = ProductDto;
    type Criteria = ProductCriteria;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn label(&self) -> Option<String> {
        self.name.clone()
    }
}
