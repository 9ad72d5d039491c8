//! # Criteria Module
//!
//! 목록/카운트 API의 필터 조건입니다. JHipster `*Criteria` 클래스에 해당합니다.
//!
//! ```text
//! GET /api/products?name.contains=coffee&price.lessThan=5000&merchantId.in=1001,1002
//!         │
//!         ▼  ProductCriteria::from_params
//! ProductCriteria { name: contains "coffee", price: < 5000, merchant_id: in [1001, 1002] }
//!         │
//!         ▼  to_filter
//! { "$and": [ { "name": { "$regex": "coffee", "$options": "i" } },
//!             { "price": { "$lt": 5000.0 } },
//!             { "merchantId": { "$in": [1001, 1002] } } ] }
//! ```
//!
//! 알 수 없는 파라미터(`page`, `sort`, 오타 등)는 무시합니다.

use std::fmt::Debug;

use mongodb::bson::Document;

use crate::core::errors::AppResult;
use crate::domain::models::QueryParams;

pub mod filter;

pub use filter::*;

/// 엔티티별 필터 조건 묶음
pub trait EntityCriteria: Clone + Debug + Default + Send + Sync + 'static {
    fn from_params(params: &QueryParams) -> AppResult<Self>;

    /// 저장소 필터 문서. 조건이 없으면 빈 문서입니다.
    fn to_filter(&self) -> Document;
}

/// 기준 구조체와 `EntityCriteria` 구현을 생성합니다.
///
/// `필드: 필터타입 = "파라미터 이름" => "저장 필드 이름"`
macro_rules! entity_criteria {
    ($(#[$meta:meta])* $name:ident {
        $($field:ident : $filter:ty = $param:literal => $storage:literal),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $field: Option<$filter>,)*
        }

        impl EntityCriteria for $name {
            fn from_params(params: &QueryParams) -> AppResult<Self> {
                Ok(Self {
                    $($field: <$filter as FieldFilter>::from_params(params, $param)?,)*
                })
            }

            fn to_filter(&self) -> Document {
                FilterDocumentBuilder::new()
                    $(.with($storage, &self.$field))*
                    .build()
            }
        }
    };
}

entity_criteria! {
    /// 룩업 테이블 공용 기준
    LookupCriteria {
        id: LongFilter = "id" => "_id",
        name: StringFilter = "name" => "name",
        code: StringFilter = "code" => "code",
        description: StringFilter = "description" => "description",
    }
}

entity_criteria! {
    MerchantCriteria {
        id: LongFilter = "id" => "_id",
        name: StringFilter = "name" => "name",
        code: StringFilter = "code" => "code",
        description: StringFilter = "description" => "description",
        merchant_type_id: LongFilter = "merchantTypeId" => "merchantTypeId",
        merchant_status_id: LongFilter = "merchantStatusId" => "merchantStatusId",
        merchant_audit_status_id: LongFilter = "merchantAuditStatusId" => "merchantAuditStatusId",
        parent_id: LongFilter = "parentId" => "parentId",
    }
}

entity_criteria! {
    ProductCriteria {
        id: LongFilter = "id" => "_id",
        name: StringFilter = "name" => "name",
        code: StringFilter = "code" => "code",
        description: StringFilter = "description" => "description",
        price: DoubleFilter = "price" => "price",
        merchant_id: LongFilter = "merchantId" => "merchantId",
        product_type_id: LongFilter = "productTypeId" => "productTypeId",
        product_status_id: LongFilter = "productStatusId" => "productStatusId",
        currency_id: LongFilter = "currencyId" => "currencyId",
    }
}

entity_criteria! {
    OrderCriteria {
        id: LongFilter = "id" => "_id",
        code: StringFilter = "code" => "code",
        description: StringFilter = "description" => "description",
        amount: DoubleFilter = "amount" => "amount",
        created_at: InstantFilter = "createdAt" => "createdAt",
        merchant_id: LongFilter = "merchantId" => "merchantId",
        product_id: LongFilter = "productId" => "productId",
        order_type_id: LongFilter = "orderTypeId" => "orderTypeId",
        order_status_id: LongFilter = "orderStatusId" => "orderStatusId",
        pay_type_id: LongFilter = "payTypeId" => "payTypeId",
        currency_id: LongFilter = "currencyId" => "currencyId",
    }
}

entity_criteria! {
    OrderStatusHistoryCriteria {
        id: LongFilter = "id" => "_id",
        description: StringFilter = "description" => "description",
        created_at: InstantFilter = "createdAt" => "createdAt",
        order_id: LongFilter = "orderId" => "orderId",
        order_status_id: LongFilter = "orderStatusId" => "orderStatusId",
        operator_type_id: LongFilter = "operatorTypeId" => "operatorTypeId",
    }
}

entity_criteria! {
    CommissionPlaceholderCriteria {
        id: LongFilter = "id" => "_id",
        name: StringFilter = "name" => "name",
        code: StringFilter = "code" => "code",
        description: StringFilter = "description" => "description",
        rate: DoubleFilter = "rate" => "rate",
        merchant_id: LongFilter = "merchantId" => "merchantId",
        product_type_id: LongFilter = "productTypeId" => "productTypeId",
        status_id: LongFilter = "statusId" => "statusId",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let criteria = MerchantCriteria::from_params(&params(&[("page", "0"), ("sort", "id,desc")])).unwrap();

        assert_eq!(criteria, MerchantCriteria::default());
        assert_eq!(criteria.to_filter(), Document::new());
    }

    #[test]
    fn test_product_criteria_to_filter() {
        let criteria = ProductCriteria::from_params(&params(&[
            ("name.contains", "coffee"),
            ("price.lessThan", "5000"),
            ("merchantId.in", "1001,1002"),
        ]))
        .unwrap();

        assert_eq!(
            criteria.to_filter(),
            doc! { "$and": [
                { "name": { "$regex": "coffee", "$options": "i" } },
                { "price": { "$lt": 5000.0 } },
                { "merchantId": { "$in": [1001_i64, 1002_i64] } },
            ] }
        );
    }

    #[test]
    fn test_id_maps_to_storage_key() {
        let criteria = LookupCriteria::from_params(&params(&[("id.equals", "1000")])).unwrap();

        assert_eq!(
            criteria.to_filter(),
            doc! { "$and": [ { "_id": { "$eq": 1000_i64 } } ] }
        );
    }

    #[test]
    fn test_bad_value_is_rejected() {
        assert!(OrderCriteria::from_params(&params(&[("createdAt.lessThan", "yesterday")])).is_err());
    }
}
