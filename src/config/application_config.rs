//! 애플리케이션 식별 설정
//!
//! JHipster 알림 헤더(`X-<app>-alert`)에 쓰이는 애플리케이션 이름을 관리합니다.

use std::env;

pub struct ApplicationConfig;

impl ApplicationConfig {
    pub const DEFAULT_NAME: &'static str = "merchantOrderApp";

    /// `APPLICATION_NAME` 환경 변수, 없으면 `merchantOrderApp`
    pub fn name() -> String {
        env::var("APPLICATION_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_NAME.to_string())
    }
}
