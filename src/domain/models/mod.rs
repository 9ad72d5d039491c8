//! # Domain Models Module
//!
//! 엔티티와 DTO 사이에서 쓰이는 값 객체들입니다.
//!
//! | 모듈 | Spring / JHipster 대응 | 역할 |
//! |------|------------------------|------|
//! | [`page`] | `Pageable`, `Page<T>` | 페이지 요청과 결과 |
//! | [`query_params`] | `@RequestParam MultiValueMap` | 반복 가능한 쿼리 파라미터 |
//! | [`search_query`] | `QueryStringQuery` | 검색어 해석과 필터 변환 |
//! | [`time`] | `Instant` | BSON ↔ chrono 시각 변환 |

pub mod page;
pub mod query_params;
pub mod search_query;
pub mod time;

pub use page::{Direction, Page, Pageable, SortOrder};
pub use query_params::QueryParams;
pub use search_query::SearchQuery;
