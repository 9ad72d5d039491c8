//! 공통 유틸리티 함수 모듈
//! 
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리, 응답 헤더 생성, 터미널 출력 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 와일드카드 변환 유틸리티
//! - [`header_util`] - 생성/수정/삭제/실패 알림 헤더
//! - [`pagination_util`] - `X-Total-Count`, `Link` 헤더
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::header_util::entity_creation_alert;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! // 알림 헤더
//! let headers = entity_creation_alert("merchantOrderApp", "merchant", "1001");
//!
//! // 터미널 출력
//! print_boxed_title("System Initialized");
//! ```

pub mod string_utils;
pub mod header_util;
pub mod pagination_util;
pub mod display_terminal;
