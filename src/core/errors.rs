//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 JHipster의 `BadRequestAlertException`을
//! Rust의 타입 시스템과 결합하여 일관된 HTTP 에러 응답을 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `BadRequestAlert` | 400 Bad Request | `idexists`, `idnull`, `idinvalid`, `idnotfound` 등 리소스 규칙 위반 |
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 필터 값 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## BadRequestAlert 응답 형식
//!
//! ```json
//! {
//!   "entityName": "merchant",
//!   "errorKey": "idexists",
//!   "title": "A new merchant cannot already have an ID",
//!   "status": 400,
//!   "message": "error.idexists",
//!   "params": "merchant"
//! }
//! ```
//!
//! 응답 헤더에는 `X-<app>-error: error.idexists`, `X-<app>-params: merchant`가
//! 함께 실립니다.

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::config::ApplicationConfig;
use crate::utils::header_util;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 전파된 에러가 그대로 HTTP 응답이 됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 리소스 규칙 위반
/// return Err(AppError::bad_request_alert(
///     "A new merchant cannot already have an ID", "merchant", "idexists",
/// ));
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 엔티티 단위 요청 규칙 위반 (400)
    ///
    /// JHipster의 `BadRequestAlertException`과 같은 역할입니다.
    /// `error_key`는 클라이언트 i18n 키(`error.<key>`)로 사용됩니다.
    #[error("{message}")]
    BadRequestAlert {
        message: String,
        entity_name: String,
        error_key: String,
    },

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn bad_request_alert(
        message: impl Into<String>,
        entity_name: impl Into<String>,
        error_key: impl Into<String>,
    ) -> Self {
        AppError::BadRequestAlert {
            message: message.into(),
            entity_name: entity_name.into(),
            error_key: error_key.into(),
        }
    }

    /// 에러 키를 반환합니다. `BadRequestAlert`가 아닌 경우 `None`.
    pub fn error_key(&self) -> Option<&str> {
        match self {
            AppError::BadRequestAlert { error_key, .. } => Some(error_key),
            _ => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequestAlert { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        match self {
            AppError::BadRequestAlert { message, entity_name, error_key } => {
                let mut builder = actix_web::HttpResponse::build(status);
                for header in header_util::failure_alert(&ApplicationConfig::name(), entity_name, error_key) {
                    builder.insert_header(header);
                }

                builder.json(serde_json::json!({
                    "entityName": entity_name,
                    "errorKey": error_key,
                    "title": message,
                    "status": status.as_u16(),
                    "message": format!("error.{}", error_key),
                    "params": entity_name,
                }))
            }
            _ => actix_web::HttpResponse::build(status)
                .json(serde_json::json!({
                    "error": self.to_string()
                })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
