//! # Core Framework Module
//!
//! 백엔드 서비스 전반에서 쓰이는 프레임워크 기능입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입별 싱글톤 인스턴스 관리
//! - **자동 레지스트리**: `inventory` 기반 `#[service]` / `#[repository]` 수집
//! - **순환 참조 감지**: 초기화 중인 타입 추적
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: `actix_web::ResponseError` 구현 (JHipster 알림 헤더 포함)
//!
//! ## Spring / JHipster와의 비교
//!
//! | Spring / JHipster | 이 프로젝트 |
//! |--------|---------------|
//! | `@Repository` | `#[repository]` |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `BadRequestAlertException` | `AppError::BadRequestAlert` |
//! | `@ExceptionHandler` | `AppError::error_response()` |

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
