use serde::{Deserialize, Serialize};

use crate::domain::criteria::CommissionPlaceholderCriteria;
use crate::domain::dto::CommissionPlaceholderDto;
use crate::domain::entities::{Entity, impl_identity};

/// 가맹점/상품 유형별 수수료율 자리표시 엔티티
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionPlaceholder {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub rate: Option<f64>,
    pub merchant_id: Option<i64>,
    pub product_type_id: Option<i64>,
    pub status_id: Option<i64>,
}

impl_identity!(CommissionPlaceholder);

impl Entity for CommissionPlaceholder {
    const ENTITY_NAME: &'static str = "commissionPlaceholder";
    const DISPLAY_NAME: &'static str = "CommissionPlaceholder";
    const COLLECTION: &'static str = "commission_placeholder";
    const RESOURCE_PATH: &'static str = "commission-placeholders";

    type Dto = CommissionPlaceholderDto;
    type Criteria = CommissionPlaceholderCriteria;

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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[test]
    fn test_transient_instances_are_never_equal() {
        let placeholder = CommissionPlaceholder::default();

        assert_ne!(placeholder, placeholder.clone());
        assert!(placeholder != placeholder.clone());
    }

    #[test]
    fn test_hash_depends_on_id_only() {
        let mut first = CommissionPlaceholder {
            name: Some("A".to_string()),
            ..Default::default()
        };
        first.set_id(1001);
        let second = CommissionPlaceholder {
            id: Some(1001),
            name: Some("B".to_string()),
            ..Default::default()
        };

        let hash = |value: &CommissionPlaceholder| {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        };

        assert_eq!(first, second);
        assert_eq!(hash(&first), hash(&second));
    }
}
