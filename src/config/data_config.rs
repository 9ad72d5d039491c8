//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소, 캐시, 서버, 페이지네이션 관련 설정을 환경 변수에서 읽습니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 엔티티 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackendKind {
    /// MongoDB 컬렉션 (기본값)
    MongoDb,
    /// 프로세스 메모리 (개발/테스트용, 재시작 시 소멸)
    Memory,
}

impl StorageBackendKind {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackendKind::Memory,
            _ => StorageBackendKind::MongoDb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackendKind::MongoDb => "mongodb",
            StorageBackendKind::Memory => "memory",
        }
    }
}

pub struct StorageConfig;

impl StorageConfig {
    /// `STORAGE_BACKEND=mongodb|memory`
    pub fn backend() -> StorageBackendKind {
        StorageBackendKind::from_str(
            &env::var("STORAGE_BACKEND").unwrap_or_else(|_| "mongodb".to_string()),
        )
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "merchant_order_dev".to_string())
    }
}

/// Redis 읽기 캐시 설정
///
/// 엔티티 단건 조회 결과를 TTL 동안 캐싱합니다. TTL 안에서는
/// 오래된 값이 보일 수 있습니다(nonstrict read-write).
pub struct CacheConfig;

impl CacheConfig {
    pub fn enabled() -> bool {
        env::var("CACHE_ENABLED")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false)
    }

    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    pub fn ttl_seconds() -> usize {
        env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(600)
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }
}

/// 목록/검색 API 페이지 크기 설정
pub struct PaginationConfig;

impl PaginationConfig {
    pub const DEFAULT_SIZE: u64 = 20;
    pub const MAX_SIZE: u64 = 2000;

    pub fn default_size() -> u64 {
        env::var("PAGE_DEFAULT_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(Self::DEFAULT_SIZE)
    }

    pub fn max_size() -> u64 {
        env::var("PAGE_MAX_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(Self::MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackendKind::from_str("memory"), StorageBackendKind::Memory);
        assert_eq!(StorageBackendKind::from_str(" In-Memory "), StorageBackendKind::Memory);
        assert_eq!(StorageBackendKind::from_str("mongodb"), StorageBackendKind::MongoDb);
        assert_eq!(StorageBackendKind::from_str("anything"), StorageBackendKind::MongoDb);
        assert_eq!(StorageBackendKind::Memory.as_str(), "memory");
    }

    #[test]
    fn test_defaults_when_unset() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }
        if env::var("CACHE_TTL_SECONDS").is_err() {
            assert_eq!(CacheConfig::ttl_seconds(), 600);
        }
        if env::var("PAGE_MAX_SIZE").is_err() {
            assert_eq!(PaginationConfig::max_size(), 2000);
        }
    }
}
