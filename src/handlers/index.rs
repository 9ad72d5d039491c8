//! 검색 색인 관리 핸들러

use actix_web::{HttpResponse, post, web};
use log::info;

use crate::config::ApplicationConfig;
use crate::core::errors::AppError;
use crate::handlers::{AppState, insert_headers};
use crate::services::reindex_all;
use crate::utils::header_util;

/// 모든 엔티티의 검색 색인을 저장소 내용으로 다시 만듭니다.
///
/// # Endpoint
/// `POST /api/elasticsearch/index`
///
/// 응답 본문은 엔티티별 색인 건수입니다.
#[post("/api/elasticsearch/index")]
pub async fn reindex(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    info!("🔎 REST request to reindex all search indices");

    let reports = reindex_all(state.persistence.clone()).await?;
    let total: u64 = reports.iter().map(|report| report.indexed).sum();

    let mut response = HttpResponse::Accepted();
    insert_headers(
        &mut response,
        header_util::alert(&ApplicationConfig::name(), "elasticsearch.reindex.accepted", &total.to_string()),
    );
    Ok(response.json(reports))
}
