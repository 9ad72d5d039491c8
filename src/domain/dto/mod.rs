//! # Data Transfer Objects (DTO) Module
//!
//! REST 요청/응답 본문이자 검색 색인 문서로 쓰이는 평탄화된 엔티티 표현입니다.
//!
//! ## Spring / JHipster와의 비교
//!
//! | JHipster | 이 시스템 |
//! |--------|-----------|
//! | `MerchantDTO` | [`MerchantDto`] |
//! | `@Valid` + Bean Validation | `validator::Validate` |
//! | MapStruct `@Mapping(source = "merchantType.name")` | `merchantTypeName` 비정규화 필드 |
//! | `@Document(indexName = "merchant")` | `SearchRepository<MerchantDto>` |
//!
//! ## 필드 규칙
//!
//! - JSON 키는 camelCase입니다.
//! - 참조는 `<name>Id`로 주고받고, 응답에는 `<name>Name`(주문은 `orderCode`)이
//!   함께 실립니다. 요청의 `<name>Name` 값은 무시됩니다.
//! - 문자열은 앞뒤 공백이 제거되고, 빈 문자열은 `null`로 취급합니다.
//!
//! ```json
//! {
//!   "id": 1003,
//!   "name": "Acme",
//!   "code": "ACME",
//!   "description": null,
//!   "merchantTypeId": 1000,
//!   "merchantTypeName": "Retail",
//!   "parentId": null,
//!   "parentName": null
//! }
//! ```

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

pub mod commission_placeholder_dto;
pub mod lookup_dto;
pub mod merchant_dto;
pub mod order_dto;
pub mod order_status_history_dto;
pub mod product_dto;

pub use commission_placeholder_dto::CommissionPlaceholderDto;
pub use lookup_dto::LookupDto;
pub use merchant_dto::MerchantDto;
pub use order_dto::OrderDto;
pub use order_status_history_dto::OrderStatusHistoryDto;
pub use product_dto::ProductDto;

/// DTO 공통 인터페이스
pub trait EntityDto:
    Clone + Debug + Default + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    /// 필드를 지정하지 않은 검색어가 검사하는 필드 (JSON 이름)
    const SEARCH_FIELDS: &'static [&'static str];

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: Option<i64>);
}
