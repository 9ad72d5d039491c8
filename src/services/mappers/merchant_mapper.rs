use std::collections::HashSet;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::MerchantDto;
use crate::domain::entities::{Entity, Merchant, MerchantAuditStatus, MerchantStatus, MerchantType};
use crate::services::mappers::EntityMapper;
use crate::services::references::ReferenceResolver;

#[async_trait]
impl EntityMapper for Merchant {
    async fn to_dto(&self, refs: &ReferenceResolver) -> AppResult<MerchantDto> {
        Ok(MerchantDto {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
            merchant_type_id: self.merchant_type_id,
            merchant_type_name: refs.label::<MerchantType>(self.merchant_type_id).await?,
            merchant_status_id: self.merchant_status_id,
            merchant_status_name: refs.label::<MerchantStatus>(self.merchant_status_id).await?,
            merchant_audit_status_id: self.merchant_audit_status_id,
            merchant_audit_status_name: refs
                .label::<MerchantAuditStatus>(self.merchant_audit_status_id)
                .await?,
            parent_id: self.parent_id,
            parent_name: refs.label::<Merchant>(self.parent_id).await?,
        })
    }

    async fn to_entity(dto: MerchantDto, refs: &ReferenceResolver) -> AppResult<Self> {
        let owner = Self::ENTITY_NAME;
        let merchant = Merchant {
            id: dto.id,
            name: dto.name,
            code: dto.code,
            description: dto.description,
            merchant_type_id: refs.require::<MerchantType>(owner, dto.merchant_type_id).await?,
            merchant_status_id: refs.require::<MerchantStatus>(owner, dto.merchant_status_id).await?,
            merchant_audit_status_id: refs
                .require::<MerchantAuditStatus>(owner, dto.merchant_audit_status_id)
                .await?,
            parent_id: refs.require::<Merchant>(owner, dto.parent_id).await?,
        };

        check_parent_cycle(&merchant, refs).await?;
        Ok(merchant)
    }
}

/// 상위 체인을 따라 올라가며 자기 자신에 도달하는지 확인합니다.
///
/// 이미 저장된 체인에 다른 순환이 있어도 무한 루프에 빠지지 않도록
/// 방문한 식별자를 기록합니다.
async fn check_parent_cycle(merchant: &Merchant, refs: &ReferenceResolver) -> AppResult<()> {
    let (Some(id), Some(parent_id)) = (merchant.id, merchant.parent_id) else {
        return Ok(());
    };

    let repository = refs.repository::<Merchant>();
    let mut visited = HashSet::new();
    let mut current = Some(parent_id);

    while let Some(ancestor) = current {
        if ancestor == id {
            return Err(AppError::bad_request_alert(
                format!("Merchant {} cannot be its own ancestor", id),
                Merchant::ENTITY_NAME,
                "parentcycle",
            ));
        }
        if !visited.insert(ancestor) {
            break;
        }
        current = repository
            .find_by_id(ancestor)
            .await?
            .and_then(|parent| parent.parent_id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::repositories::Persistence;

    async fn save(refs: &ReferenceResolver, name: &str, parent_id: Option<i64>) -> Merchant {
        refs.repository::<Merchant>()
            .save(Merchant {
                name: Some(name.to_string()),
                parent_id,
                ..Default::default()
            })
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn test_to_dto_fills_names() {
        let persistence = Arc::new(Persistence::in_memory());
        let refs = ReferenceResolver::new(persistence.clone());
        let retail = persistence
            .repository::<MerchantType>()
            .save(MerchantType::new("Retail", "RETAIL"))
            .await
            .unwrap();
        let parent = save(&refs, "Head Office", None).await;

        let child = Merchant {
            id: Some(2000),
            name: Some("Branch".to_string()),
            merchant_type_id: retail.id,
            parent_id: parent.id,
            ..Default::default()
        };
        let dto = child.to_dto(&refs).await.unwrap();

        assert_eq!(dto.merchant_type_name.as_deref(), Some("Retail"));
        assert_eq!(dto.parent_name.as_deref(), Some("Head Office"));
        assert_eq!(dto.merchant_status_name, None);
    }

    #[actix_web::test]
    async fn test_to_entity_rejects_missing_reference() {
        let refs = ReferenceResolver::new(Arc::new(Persistence::in_memory()));
        let dto = MerchantDto {
            name: Some("Acme".to_string()),
            merchant_status_id: Some(4242),
            ..Default::default()
        };

        let error = Merchant::to_entity(dto, &refs).await.unwrap_err();
        assert_eq!(error.error_key(), Some("referencenotfound"));
    }

    #[actix_web::test]
    async fn test_parent_cycle_detected() {
        let refs = ReferenceResolver::new(Arc::new(Persistence::in_memory()));
        let root = save(&refs, "Root", None).await;
        let middle = save(&refs, "Middle", root.id).await;
        let leaf = save(&refs, "Leaf", middle.id).await;

        let reparent_root = MerchantDto {
            id: root.id,
            name: Some("Root".to_string()),
            parent_id: leaf.id,
            ..Default::default()
        };
        let error = Merchant::to_entity(reparent_root, &refs).await.unwrap_err();
        assert_eq!(error.error_key(), Some("parentcycle"));

        let self_parent = MerchantDto {
            id: middle.id,
            name: Some("Middle".to_string()),
            parent_id: middle.id,
            ..Default::default()
        };
        let error = Merchant::to_entity(self_parent, &refs).await.unwrap_err();
        assert_eq!(error.error_key(), Some("parentcycle"));

        let valid = MerchantDto {
            id: leaf.id,
            name: Some("Leaf".to_string()),
            parent_id: root.id,
            ..Default::default()
        };
        assert!(Merchant::to_entity(valid, &refs).await.is_ok());
    }
}
