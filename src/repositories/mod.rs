//! # Repositories Module
//!
//! 데이터 접근 계층입니다.
//!
//! ```text
//! EntityRepository<E> ─┐
//!                      ├─▶ dyn DocumentCollection ─┬─▶ MongoCollection (+ SequenceRepository)
//! SearchRepository<D> ─┘                           └─▶ MemoryCollection (+ matcher)
//!          │
//!          └─▶ EntityCache (Redis, 선택)
//! ```
//!
//! ## Spring / JHipster와의 비교
//!
//! | JHipster | 이 시스템 |
//! |--------|-----------|
//! | `MerchantRepository extends JpaRepository` | [`EntityRepository<Merchant>`](EntityRepository) |
//! | `MerchantSearchRepository` (Elasticsearch) | [`SearchRepository<MerchantDto>`](SearchRepository) |
//! | `@SequenceGenerator("sequenceGenerator")` | [`SequenceRepository`] / 메모리 원자 카운터 |
//! | Hibernate 2차 캐시 | [`crate::caching::EntityCache`] |

pub mod document_collection;
pub mod entity_repo;
pub mod matcher;
pub mod memory;
pub mod mongo;
pub mod persistence;
pub mod search_repo;
pub mod sequence_repo;

pub use document_collection::{DocumentCollection, SEQUENCE_START, StorageBackend};
pub use entity_repo::EntityRepository;
pub use memory::MemoryBackend;
pub use mongo::MongoBackend;
pub use persistence::Persistence;
pub use search_repo::SearchRepository;
pub use sequence_repo::SequenceRepository;
