use serde::{Deserialize, Serialize};

use crate::domain::criteria::MerchantCriteria;
use crate::domain::dto::MerchantDto;
use crate::domain::entities::{Entity, impl_identity};

/// 가맹점
///
/// `parent_id`로 상위 가맹점을 가리키며, 저장 시 상위 체인에 순환이 없는지 검사합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub merchant_type_id: Option<i64>,
    pub merchant_status_id: Option<i64>,
    pub merchant_audit_status_id: Option<i64>,
    pub parent_id: Option<i64>,
}

impl_identity!(Merchant);

impl Entity for Merchant {
    const ENTITY_NAME: &'static str = "merchant";
    const DISPLAY_NAME: &'static str = "Merchant";
    const COLLECTION: &'static str = "merchant";
    const RESOURCE_PATH: &'static str = "merchants";

    type Dto = MerchantDto;
    type Criteria = MerchantCriteria;

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
