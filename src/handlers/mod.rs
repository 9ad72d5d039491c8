//! HTTP 요청 핸들러 모듈
//!
//! JHipster `*Resource` 클래스에 해당하는 REST 핸들러입니다. 엔티티마다 같은
//! 규칙을 따르므로 핸들러는 엔티티 타입에 대해 제네릭이며, 라우트 등록 시
//! `create_entity::<Merchant>`처럼 타입을 지정합니다.
//!
//! # Modules
//!
//! - [`resource`] - 엔티티 CRUD/목록/카운트/검색 핸들러
//! - [`index`] - 검색 색인 재구축 핸들러
//!
//! # Response Headers
//!
//! | 헤더 | 언제 |
//! |------|------|
//! | `X-<app>-alert`, `X-<app>-params` | 생성/수정/삭제 성공 |
//! | `X-<app>-error`, `X-<app>-params` | 요청 규칙 위반 (400) |
//! | `X-Total-Count`, `Link` | 목록/검색 |
//! | `Location` | 생성 (201) |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let state = web::Data::new(AppState::new(Arc::new(Persistence::in_memory())));
//! let app = App::new()
//!     .app_data(state)
//!     .route("/api/merchants", web::post().to(resource::create_entity::<Merchant>));
//! ```

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponseBuilder, web};

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::QueryParams;
use crate::repositories::Persistence;
use crate::services::{EntityMapper, EntityService};
use crate::utils::header_util::Header;

pub mod index;
pub mod resource;

/// 핸들러가 공유하는 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    pub persistence: Arc<Persistence>,
}

impl AppState {
    pub fn new(persistence: Arc<Persistence>) -> Self {
        Self { persistence }
    }

    pub fn service<E: EntityMapper>(&self) -> EntityService<E> {
        EntityService::new(self.persistence.clone())
    }
}

/// 반복 키를 보존하며 쿼리 문자열을 읽습니다.
pub(crate) fn query_params(req: &HttpRequest) -> AppResult<QueryParams> {
    web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|query| QueryParams::new(query.into_inner()))
        .map_err(|e| AppError::ValidationError(format!("잘못된 쿼리 문자열: {}", e)))
}

pub(crate) fn insert_headers(builder: &mut HttpResponseBuilder, headers: Vec<Header>) {
    for header in headers {
        builder.insert_header(header);
    }
}
