//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응되는 영속 엔티티들입니다.
//!
//! ## 공통 규칙
//!
//! - **식별자**: `_id`에 저장되는 `i64`. 저장소 공용 시퀀스(1000부터)에서 발급됩니다.
//! - **동등성**: 식별자만 비교합니다. 식별자가 없는 두 엔티티는 서로 다릅니다.
//! - **해시**: 식별자 기반이며, 식별자가 없으면 타입별 상수입니다.
//! - **참조**: 다른 엔티티는 `<name>Id` 필드에 식별자로만 보관합니다.
//! - **필드 이름**: camelCase (`merchantTypeId`, `createdAt`)
//!
//! ## 엔티티 목록
//!
//! | 타입 | 컬렉션 | REST 경로 |
//! |------|--------|-----------|
//! | [`Status`] 외 10개 [`Lookup`] 종류 | `status`, `merchant_type`, ... | `/api/statuses`, ... |
//! | [`Merchant`] | `merchant` | `/api/merchants` |
//! | [`Product`] | `product` | `/api/products` |
//! | [`Order`] | `order` | `/api/orders` |
//! | [`OrderStatusHistory`] | `order_status_history` | `/api/order-status-histories` |
//! | [`CommissionPlaceholder`] | `commission_placeholder` | `/api/commission-placeholders` |

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

use crate::domain::criteria::EntityCriteria;
use crate::domain::dto::EntityDto;

pub mod commission_placeholder;
pub mod lookup;
pub mod merchant;
pub mod order;
pub mod order_status_history;
pub mod product;

pub use commission_placeholder::CommissionPlaceholder;
pub use lookup::*;
pub use merchant::Merchant;
pub use order::Order;
pub use order_status_history::OrderStatusHistory;
pub use product::Product;

/// 영속 엔티티 공통 인터페이스
///
/// 저장소, 서비스, REST 리소스는 모두 이 trait 하나로 제네릭하게 동작합니다.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// 알림 헤더와 에러 응답에 쓰이는 이름 (`merchantAuditStatus`)
    const ENTITY_NAME: &'static str;
    /// 로그용 이름 (`MerchantAuditStatus`)
    const DISPLAY_NAME: &'static str;
    const COLLECTION: &'static str;
    /// `/api/` 아래 경로 (`merchant-audit-statuses`)
    const RESOURCE_PATH: &'static str;

    type Dto: EntityDto;
    type Criteria: EntityCriteria;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// 다른 엔티티의 DTO에 비정규화되어 실리는 표시 값
    fn label(&self) -> Option<String>;

    /// 검색 색인 컬렉션 이름
    fn search_index() -> String {
        format!("{}_search", Self::COLLECTION)
    }
}

/// 식별자 기반 `PartialEq`/`Hash` 구현
///
/// `Eq`는 구현하지 않습니다. 식별자가 없는 값은 자기 자신과도 같지 않기 때문입니다.
macro_rules! impl_identity {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                match (self.id, other.id) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
        }

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::any::type_name::<Self>().hash(state);
                self.id.hash(state);
            }
        }
    };
}

pub(crate) use impl_identity;
