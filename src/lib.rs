//! 가맹점/상품/주문 백엔드
//!
//! JHipster 스타일의 엔티티 CRUD 백엔드입니다. 모든 엔티티가 같은 규칙의
//! REST 리소스, 필터 조건 목록 조회, 그리고 비정규화된 검색 색인을 가집니다.
//!
//! # Features
//!
//! - **엔티티 CRUD**: 가맹점, 상품, 주문, 주문 상태 이력, 수수료, 11종 룩업 테이블
//! - **조건 조회**: `field.operator=value` 쿼리 파라미터 필터와 페이지네이션
//! - **검색 색인**: DTO 문서 색인과 Lucene 스타일 검색어
//! - **저장소**: MongoDB 또는 메모리 백엔드
//! - **Redis**: 단건 조회 캐시
//! - **싱글톤 DI**: 매크로 기반 `ServiceLocator`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/Memory  │ ← 저장소 (+ Redis 캐시)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use merchant_order_backend::domain::entities::Merchant;
//! use merchant_order_backend::repositories::Persistence;
//! use merchant_order_backend::services::EntityService;
//!
//! let persistence = Arc::new(Persistence::connect().await?);
//! let merchants = EntityService::<Merchant>::new(persistence);
//! let saved = merchants.save(dto).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
