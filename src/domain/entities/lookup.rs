//! 룩업 테이블 엔티티
//!
//! 열한 종류의 룩업 테이블은 모양(`name`, `code`, `description`)이 같으므로
//! 하나의 제네릭 타입 [`Lookup<K>`]으로 표현하고, 종류별 이름/컬렉션/경로는
//! 마커 타입의 [`LookupKind`] 구현이 제공합니다.
//!
//! ```rust,ignore
//! let status = MerchantStatus::new("Active", "ACTIVE");
//! assert_eq!(MerchantStatus::RESOURCE_PATH, "merchant-statuses");
//! ```

use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::domain::criteria::LookupCriteria;
use crate::domain::dto::LookupDto;
use crate::domain::entities::Entity;

/// 룩업 종류별 메타데이터
pub trait LookupKind: Debug + Clone + Copy + Default + Send + Sync + 'static {
    const ENTITY_NAME: &'static str;
    const DISPLAY_NAME: &'static str;
    const COLLECTION: &'static str;
    const RESOURCE_PATH: &'static str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct Lookup<K: LookupKind> {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K: LookupKind> Lookup<K> {
    pub fn new(name: &str, code: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            code: Some(code.to_string()),
            ..Self::default()
        }
    }

    pub fn with_fields(
        id: Option<i64>,
        name: Option<String>,
        code: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            code,
            description,
            kind: PhantomData,
        }
    }
}

impl<K: LookupKind> Default for Lookup<K> {
    fn default() -> Self {
        Self::with_fields(None, None, None, None)
    }
}

impl<K: LookupKind> PartialEq for Lookup<K> {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<K: LookupKind> Hash for Lookup<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        K::COLLECTION.hash(state);
        self.id.hash(state);
    }
}

impl<K: LookupKind> Entity for Lookup<K> {
    const ENTITY_NAME: &'static str = K::ENTITY_NAME;
    const DISPLAY_NAME: &'static str = K::DISPLAY_NAME;
    const COLLECTION: &'static str = K::COLLECTION;
    const RESOURCE_PATH: &'static str = K::RESOURCE_PATH;

    type Dto = LookupDto;
    type Criteria = LookupCriteria;

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

macro_rules! lookup_kinds {
    ($($kind:ident => $alias:ident {
        entity: $entity:literal,
        collection: $collection:literal,
        path: $path:literal $(,)?
    })*) => {
        $(
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $kind;

            impl LookupKind for $kind {
                const ENTITY_NAME: &'static str = $entity;
                const DISPLAY_NAME: &'static str = stringify!($alias);
                const COLLECTION: &'static str = $collection;
                const RESOURCE_PATH: &'static str = $path;
            }

            pub type $alias = Lookup<$kind>;
        )*
    };
}

lookup_kinds! {
    StatusKind => Status {
        entity: "status", collection: "status", path: "statuses",
    }
    MerchantTypeKind => MerchantType {
        entity: "merchantType", collection: "merchant_type", path: "merchant-types",
    }
    MerchantStatusKind => MerchantStatus {
        entity: "merchantStatus", collection: "merchant_status", path: "merchant-statuses",
    }
    MerchantAuditStatusKind => MerchantAuditStatus {
        entity: "merchantAuditStatus", collection: "merchant_audit_status", path: "merchant-audit-statuses",
    }
    OperatorTypeKind => OperatorType {
        entity: "operatorType", collection: "operator_type", path: "operator-types",
    }
    OrderStatusKind => OrderStatus {
        entity: "orderStatus", collection: "order_status", path: "order-statuses",
    }
    OrderTypeKind => OrderType {
        entity: "orderType", collection: "order_type", path: "order-types",
    }
    ProductStatusKind => ProductStatus {
        entity: "productStatus", collection: "product_status", path: "product-statuses",
    }
    ProductTypeKind => ProductType {
        entity: "productType", collection: "product_type", path: "product-types",
    }
    CurrencyKind => Currency {
        entity: "currency", collection: "currency", path: "currencies",
    }
    PayTypeKind => PayType {
        entity: "payType", collection: "pay_type", path: "pay-types",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(MerchantAuditStatus::ENTITY_NAME, "merchantAuditStatus");
        assert_eq!(MerchantAuditStatus::DISPLAY_NAME, "MerchantAuditStatus");
        assert_eq!(MerchantAuditStatus::RESOURCE_PATH, "merchant-audit-statuses");
        assert_eq!(Currency::COLLECTION, "currency");
        assert_eq!(Currency::search_index(), "currency_search");
    }

    #[test]
    fn test_equality_uses_id_only() {
        let mut a = Status::new("Active", "A");
        let mut b = Status::new("Inactive", "I");
        assert_ne!(a, a.clone());
        assert_ne!(a, b);

        a.set_id(1001);
        b.set_id(1001);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.set_id(1002);
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialized_shape() {
        let mut status = PayType::new("Card", "CARD");
        status.set_id(1005);

        let document = mongodb::bson::to_document(&status).unwrap();
        assert_eq!(document.get_i64("_id").unwrap(), 1005);
        assert_eq!(document.get_str("name").unwrap(), "Card");
        assert!(!document.contains_key("kind"));

        let restored: PayType = mongodb::bson::from_document(document).unwrap();
        assert_eq!(restored.label().as_deref(), Some("Card"));
    }
}
