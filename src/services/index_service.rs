//! 검색 색인 재구축
//!
//! `POST /api/elasticsearch/index`의 본체입니다. 모든 엔티티의 색인을 비우고
//! 저장소 내용으로 다시 채웁니다.

use std::sync::Arc;

use log::info;
use serde::Serialize;

use crate::core::errors::AppResult;
use crate::domain::entities::*;
use crate::repositories::Persistence;
use crate::services::entity_service::EntityService;
use crate::services::mappers::EntityMapper;

/// 엔티티 하나의 재색인 결과
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexReport {
    pub entity_name: String,
    pub index_name: String,
    pub indexed: u64,
}

async fn reindex<E: EntityMapper>(persistence: &Arc<Persistence>) -> AppResult<IndexReport> {
    let indexed = EntityService::<E>::new(persistence.clone()).reindex().await?;
    info!("🔎 {} 색인 완료: {}건", E::DISPLAY_NAME, indexed);

    Ok(IndexReport {
        entity_name: E::ENTITY_NAME.to_string(),
        index_name: E::search_index(),
        indexed,
    })
}

/// 참조 대상 이름이 먼저 채워지도록 룩업 테이블부터 순서대로 재색인합니다.
pub async fn reindex_all(persistence: Arc<Persistence>) -> AppResult<Vec<IndexReport>> {
    Ok(vec![
        reindex::<Status>(&persistence).await?,
        reindex::<MerchantType>(&persistence).await?,
        reindex::<MerchantStatus>(&persistence).await?,
        reindex::<MerchantAuditStatus>(&persistence).await?,
        reindex::<OperatorType>(&persistence).await?,
        reindex::<OrderStatus>(&persistence).await?,
        reindex::<OrderType>(&persistence).await?,
        reindex::<ProductStatus>(&persistence).await?,
        reindex::<ProductType>(&persistence).await?,
        reindex::<Currency>(&persistence).await?,
        reindex::<PayType>(&persistence).await?,
        reindex::<Merchant>(&persistence).await?,
        reindex::<Product>(&persistence).await?,
        reindex::<Order>(&persistence).await?,
        reindex::<OrderStatusHistory>(&persistence).await?,
        reindex::<CommissionPlaceholder>(&persistence).await?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_reindex_all_reports_every_entity() {
        let persistence = Arc::new(Persistence::in_memory());
        persistence
            .repository::<Currency>()
            .save(Currency::new("Euro", "EUR"))
            .await
            .unwrap();

        let reports = reindex_all(persistence).await.unwrap();

        assert_eq!(reports.len(), 16);
        let currency = reports.iter().find(|r| r.entity_name == "currency").unwrap();
        assert_eq!(currency.indexed, 1);
        assert_eq!(currency.index_name, "currency_search");
        assert!(reports.iter().filter(|r| r.entity_name != "currency").all(|r| r.indexed == 0));
    }
}
