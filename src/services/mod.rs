//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 엔티티마다 서비스를 따로 두지 않고, [`EntityMapper`]를 구현한 모든 엔티티에
//! 대해 동작하는 [`EntityService`] 하나를 둡니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::EntityService;
//! use crate::domain::entities::Merchant;
//!
//! let service = EntityService::<Merchant>::new(persistence.clone());
//! let saved = service.save(dto).await?;
//! ```

pub mod entity_service;
pub mod index_service;
pub mod mappers;
pub mod references;

pub use entity_service::EntityService;
pub use index_service::{reindex_all, IndexReport};
pub use mappers::EntityMapper;
pub use references::ReferenceResolver;
