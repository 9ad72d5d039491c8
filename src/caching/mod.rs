//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 엔티티 읽기 캐시입니다.
//!
//! - [`store`] - 캐시 저장소 트레이트 ([`CacheStore`])
//! - [`redis`] - JSON 직렬화를 지원하는 Redis 클라이언트 (`CacheStore` 구현)
//! - [`entity_cache`] - 컬렉션 단위 TTL read-through 캐시
//!
//! ```bash
//! CACHE_ENABLED=true
//! REDIS_URL=redis://localhost:6379
//! CACHE_TTL_SECONDS=600
//! ```

pub mod store;
pub mod redis;
pub mod entity_cache;

pub use entity_cache::EntityCache;
pub use store::CacheStore;
