//! # Entity Service
//!
//! 엔티티 하나에 대한 서비스 계층입니다. JHipster가 엔티티마다 생성하는
//! `*Service` + `*QueryService` 쌍을 하나의 제네릭 타입으로 합쳤습니다.
//!
//! | 작업 | 저장소 | 검색 색인 |
//! |------|--------|-----------|
//! | `save` / `update` / `partial_update` | 저장 | DTO 색인 |
//! | `delete` | 삭제 | 문서 제거 |
//! | `find_by_criteria` / `count_by_criteria` / `find_one` | 조회 | - |
//! | `search` | - | 조회 |
//!
//! 서비스 자체는 상태가 없고 [`Persistence`]만 공유하므로, 핸들러에서 요청마다
//! 만들어 써도 됩니다.

use std::sync::Arc;

use log::debug;
use serde_json::Value;
use validator::Validate;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::EntityDto;
use crate::domain::models::{Page, Pageable, SearchQuery};
use crate::repositories::{EntityRepository, Persistence, SearchRepository};
use crate::services::mappers::EntityMapper;
use crate::services::references::ReferenceResolver;

pub struct EntityService<E: EntityMapper> {
    repository: EntityRepository<E>,
    search_repository: SearchRepository<E::Dto>,
    refs: ReferenceResolver,
}

impl<E: EntityMapper> EntityService<E> {
    pub fn new(persistence: Arc<Persistence>) -> Self {
        Self {
            repository: persistence.repository::<E>(),
            search_repository: persistence.search_repository::<E>(),
            refs: ReferenceResolver::new(persistence),
        }
    }

    /// DTO를 검증하고 저장한 뒤, 저장된 상태를 다시 DTO로 만들어 색인합니다.
    pub async fn save(&self, dto: E::Dto) -> AppResult<E::Dto> {
        debug!("Request to save {} : {:?}", E::DISPLAY_NAME, dto);

        dto.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let entity = E::to_entity(dto, &self.refs).await?;
        let saved = self.repository.save(entity).await?;
        let result = saved.to_dto(&self.refs).await?;

        self.search_repository.index(&result).await?;
        Ok(result)
    }

    pub async fn update(&self, dto: E::Dto) -> AppResult<E::Dto> {
        debug!("Request to update {} : {:?}", E::DISPLAY_NAME, dto);
        self.save(dto).await
    }

    /// 저장된 DTO 위에 `patch`의 null이 아닌 필드만 덮어씁니다.
    ///
    /// 대상이 없으면 `None`. `id`는 patch로 바꿀 수 없습니다.
    pub async fn partial_update(&self, id: i64, patch: Value) -> AppResult<Option<E::Dto>> {
        debug!("Request to partially update {} {} : {}", E::DISPLAY_NAME, id, patch);

        let Some(existing) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut merged = serde_json::to_value(existing.to_dto(&self.refs).await?)
            .with_context(|| format!("failed to serialize {}", E::DISPLAY_NAME))?;

        if let (Value::Object(target), Value::Object(fields)) = (&mut merged, patch) {
            for (key, value) in fields {
                if key != "id" && !value.is_null() {
                    target.insert(key, value);
                }
            }
        }

        let mut dto: E::Dto = serde_json::from_value(merged)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        dto.set_id(Some(id));

        self.save(dto).await.map(Some)
    }

    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        self.repository.exists_by_id(id).await
    }

    pub async fn find_by_criteria(
        &self,
        criteria: &E::Criteria,
        pageable: &Pageable,
    ) -> AppResult<Page<E::Dto>> {
        debug!("find by criteria : {:?}, page: {:?}", criteria, pageable);

        let page = self.repository.find_by_criteria(criteria, pageable).await?;
        let mut content = Vec::with_capacity(page.content.len());
        for entity in &page.content {
            content.push(entity.to_dto(&self.refs).await?);
        }

        Ok(Page::new(content, page.total_elements, page.pageable))
    }

    pub async fn count_by_criteria(&self, criteria: &E::Criteria) -> AppResult<u64> {
        debug!("count by criteria : {:?}", criteria);
        self.repository.count_by_criteria(criteria).await
    }

    pub async fn find_one(&self, id: i64) -> AppResult<Option<E::Dto>> {
        debug!("Request to get {} : {}", E::DISPLAY_NAME, id);

        match self.repository.find_by_id(id).await? {
            Some(entity) => Ok(Some(entity.to_dto(&self.refs).await?)),
            None => Ok(None),
        }
    }

    /// 저장소와 검색 색인에서 모두 지웁니다. 대상이 없어도 성공입니다.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        debug!("Request to delete {} : {}", E::DISPLAY_NAME, id);

        self.repository.delete_by_id(id).await?;
        self.search_repository.remove(id).await
    }

    pub async fn search(&self, query: &str, pageable: &Pageable) -> AppResult<Page<E::Dto>> {
        debug!("Request to search for a page of {} for query {}", E::DISPLAY_NAME, query);

        let query = SearchQuery::parse(query);
        self.search_repository.search(&query, pageable).await
    }

    /// 색인을 비우고 저장소의 모든 엔티티를 다시 색인합니다.
    pub async fn reindex(&self) -> AppResult<u64> {
        self.search_repository.clear().await?;

        let mut indexed = 0;
        for entity in self.repository.find_all().await? {
            let dto = entity.to_dto(&self.refs).await?;
            self.search_repository.index(&dto).await?;
            indexed += 1;
        }

        debug!("Reindexed {} {} documents into {}", indexed, E::DISPLAY_NAME, self.search_repository.index_name());
        Ok(indexed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::criteria::{EntityCriteria, ProductCriteria};
    use crate::domain::dto::{LookupDto, MerchantDto, ProductDto};
    use crate::domain::entities::{Currency, Merchant, Product};
    use crate::domain::models::QueryParams;

    fn persistence() -> Arc<Persistence> {
        Arc::new(Persistence::in_memory())
    }

    fn merchant(name: &str) -> MerchantDto {
        MerchantDto {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_save_assigns_id_and_indexes() {
        let service = EntityService::<Merchant>::new(persistence());

        let saved = service.save(merchant("Acme Store")).await.unwrap();
        assert!(saved.id.is_some());

        let found = service.search("acme", &Pageable::default()).await.unwrap();
        assert_eq!(found.total_elements, 1);
        assert_eq!(found.content[0].id, saved.id);
    }

    #[actix_web::test]
    async fn test_save_rejects_invalid_dto() {
        let service = EntityService::<Merchant>::new(persistence());

        let result = service.save(merchant("")).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_update_then_find_reflects_change() {
        let service = EntityService::<Merchant>::new(persistence());
        let mut saved = service.save(merchant("Before")).await.unwrap();

        saved.name = Some("After".to_string());
        service.update(saved.clone()).await.unwrap();

        let found = service.find_one(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.name.as_deref(), Some("After"));

        let hits = service.search("before", &Pageable::default()).await.unwrap();
        assert_eq!(hits.total_elements, 0);
    }

    #[actix_web::test]
    async fn test_partial_update_merges_non_null_fields() {
        let service = EntityService::<Merchant>::new(persistence());
        let saved = service
            .save(MerchantDto {
                name: Some("Acme".to_string()),
                code: Some("ACM".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let id = saved.id.unwrap();

        let patched = service
            .partial_update(id, json!({ "code": "ACME", "name": null, "id": 1 }))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(patched.id, Some(id));
        assert_eq!(patched.name.as_deref(), Some("Acme"));
        assert_eq!(patched.code.as_deref(), Some("ACME"));

        assert!(service.partial_update(9999, json!({})).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_delete_removes_from_store_and_index() {
        let service = EntityService::<Merchant>::new(persistence());
        let id = service.save(merchant("Gone")).await.unwrap().id.unwrap();

        service.delete(id).await.unwrap();

        assert!(service.find_one(id).await.unwrap().is_none());
        assert_eq!(service.search("*", &Pageable::default()).await.unwrap().total_elements, 0);
        // 없는 대상 삭제도 성공
        service.delete(id).await.unwrap();
    }

    #[actix_web::test]
    async fn test_find_by_criteria_returns_denormalized_dtos() {
        let persistence = persistence();
        let currencies = EntityService::<Currency>::new(persistence.clone());
        let products = EntityService::<Product>::new(persistence);

        let won = currencies
            .save(LookupDto {
                name: Some("Korean Won".to_string()),
                code: Some("KRW".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        for (name, price) in [("Cheap", 1.0), ("Pricey", 100.0)] {
            products
                .save(ProductDto {
                    name: Some(name.to_string()),
                    price: Some(price),
                    currency_id: won.id,
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let params: QueryParams = [("price.greaterThan", "10")].into_iter().collect();
        let criteria = ProductCriteria::from_params(&params).unwrap();
        let page = products.find_by_criteria(&criteria, &Pageable::default()).await.unwrap();

        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].name.as_deref(), Some("Pricey"));
        assert_eq!(page.content[0].currency_name.as_deref(), Some("Korean Won"));
        assert_eq!(products.count_by_criteria(&criteria).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_reindex_rebuilds_from_store() {
        let persistence = persistence();
        let service = EntityService::<Merchant>::new(persistence.clone());
        service.save(merchant("One")).await.unwrap();
        service.save(merchant("Two")).await.unwrap();

        persistence.search_repository::<Merchant>().clear().await.unwrap();
        assert_eq!(service.search("*", &Pageable::default()).await.unwrap().total_elements, 0);

        assert_eq!(service.reindex().await.unwrap(), 2);
        assert_eq!(service.search("*", &Pageable::default()).await.unwrap().total_elements, 2);
    }
}
