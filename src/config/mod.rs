//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! Spring의 `@ConfigurationProperties`와 비슷하게, 설정 항목마다
//! 정적 함수를 가진 구조체로 노출합니다.
//!
//! - [`data_config`] - 저장소, 캐시, 서버, 페이지네이션 설정
//! - [`application_config`] - 알림 헤더용 애플리케이션 이름
//!
//! ## 환경 변수
//!
//! ```bash
//! # 저장소
//! export STORAGE_BACKEND="mongodb"     # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="merchant_order_dev"
//!
//! # 캐시
//! export CACHE_ENABLED="true"
//! export REDIS_URL="redis://localhost:6379"
//! export CACHE_TTL_SECONDS="600"
//!
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export APPLICATION_NAME="merchantOrderApp"
//! ```

pub mod data_config;
pub mod application_config;

pub use data_config::*;
pub use application_config::*;
