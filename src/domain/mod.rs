//! # Domain Layer Module
//!
//! 가맹점/상품/주문 도메인의 데이터 구조를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - MongoDB 문서와 1:1 대응되는 영속 엔티티
//! ├── dto        - REST 본문 & 검색 색인 문서 (비정규화)
//! ├── criteria   - 목록 API 필터 조건
//! └── models     - 페이지, 검색어, 쿼리 파라미터 등 값 객체
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! ## Spring / JHipster와의 비교
//!
//! | JHipster | 이 시스템 |
//! |--------|-----------|
//! | `domain.Merchant` | [`entities::Merchant`] |
//! | `service.dto.MerchantDTO` | [`dto::MerchantDto`] |
//! | `service.criteria.MerchantCriteria` | [`criteria::MerchantCriteria`] |
//! | `Pageable` / `Page<T>` | [`models::Pageable`] / [`models::Page`] |

pub mod criteria;
pub mod dto;
pub mod entities;
pub mod models;
