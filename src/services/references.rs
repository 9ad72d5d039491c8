//! 참조 엔티티 해석
//!
//! DTO 변환 시 참조 대상의 표시 값을 채우고, 저장 전 참조 대상이 실제로
//! 있는지 확인합니다. 관계형 저장소의 외래 키 제약을 대신합니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Entity;
use crate::repositories::{EntityRepository, Persistence};

#[derive(Clone)]
pub struct ReferenceResolver {
    persistence: Arc<Persistence>,
}

impl ReferenceResolver {
    pub fn new(persistence: Arc<Persistence>) -> Self {
        Self { persistence }
    }

    pub fn repository<R: Entity>(&self) -> EntityRepository<R> {
        self.persistence.repository::<R>()
    }

    /// 참조 대상의 표시 값. 참조가 없거나 대상이 지워졌으면 `None`.
    pub async fn label<R: Entity>(&self, id: Option<i64>) -> AppResult<Option<String>> {
        let Some(id) = id else {
            return Ok(None);
        };

        Ok(self
            .repository::<R>()
            .find_by_id(id)
            .await?
            .and_then(|referenced| referenced.label()))
    }

    /// 참조 대상이 존재하는지 확인하고 식별자를 그대로 돌려줍니다.
    ///
    /// `owner`는 저장하려는 엔티티 이름으로, 에러 응답의 `entityName`이 됩니다.
    pub async fn require<R: Entity>(&self, owner: &str, id: Option<i64>) -> AppResult<Option<i64>> {
        if let Some(id) = id {
            if !self.repository::<R>().exists_by_id(id).await? {
                return Err(AppError::bad_request_alert(
                    format!("{} {} does not exist", R::DISPLAY_NAME, id),
                    owner,
                    "referencenotfound",
                ));
            }
        }
        Ok(id)
    }
}
