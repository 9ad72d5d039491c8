//! 엔티티 REST 리소스 핸들러
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/api/{entities}` | [`create_entity`] |
//! | `PUT` | `/api/{entities}` | [`update_entity`] |
//! | `PUT` | `/api/{entities}/{id}` | [`update_entity_by_id`] |
//! | `PATCH` | `/api/{entities}/{id}` | [`partial_update_entity`] |
//! | `GET` | `/api/{entities}` | [`list_entities`] |
//! | `GET` | `/api/{entities}/count` | [`count_entities`] |
//! | `GET` | `/api/{entities}/{id}` | [`get_entity`] |
//! | `DELETE` | `/api/{entities}/{id}` | [`delete_entity`] |
//! | `GET` | `/api/_search/{entities}` | [`search_entities`] |

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use log::debug;
use serde_json::Value;

use crate::config::ApplicationConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::criteria::EntityCriteria;
use crate::domain::dto::EntityDto;
use crate::domain::models::Pageable;
use crate::handlers::{AppState, insert_headers, query_params};
use crate::services::EntityMapper;
use crate::utils::{header_util, pagination_util};

fn id_exists<E: EntityMapper>() -> AppError {
    AppError::bad_request_alert(
        format!("A new {} cannot already have an ID", E::ENTITY_NAME),
        E::ENTITY_NAME,
        "idexists",
    )
}

fn id_null<E: EntityMapper>() -> AppError {
    AppError::bad_request_alert("Invalid id", E::ENTITY_NAME, "idnull")
}

fn id_invalid<E: EntityMapper>() -> AppError {
    AppError::bad_request_alert("Invalid ID", E::ENTITY_NAME, "idinvalid")
}

fn id_not_found<E: EntityMapper>() -> AppError {
    AppError::bad_request_alert("Entity not found", E::ENTITY_NAME, "idnotfound")
}

fn not_found<E: EntityMapper>(id: i64) -> AppError {
    AppError::NotFound(format!("{} {}", E::DISPLAY_NAME, id))
}

async fn create<E: EntityMapper>(state: &AppState, dto: E::Dto) -> AppResult<HttpResponse> {
    if dto.id().is_some() {
        return Err(id_exists::<E>());
    }

    let result = state.service::<E>().save(dto).await?;
    let id = result.id().map(|id| id.to_string()).unwrap_or_default();

    let mut response = HttpResponse::Created();
    response.insert_header((header::LOCATION, format!("/api/{}/{}", E::RESOURCE_PATH, id)));
    insert_headers(
        &mut response,
        header_util::entity_creation_alert(&ApplicationConfig::name(), E::ENTITY_NAME, &id),
    );
    Ok(response.json(result))
}

async fn update<E: EntityMapper>(state: &AppState, id: i64, dto: E::Dto) -> AppResult<HttpResponse> {
    let service = state.service::<E>();
    if !service.exists(id).await? {
        return Err(id_not_found::<E>());
    }

    let result = service.update(dto).await?;

    let mut response = HttpResponse::Ok();
    insert_headers(
        &mut response,
        header_util::entity_update_alert(&ApplicationConfig::name(), E::ENTITY_NAME, &id.to_string()),
    );
    Ok(response.json(result))
}

/// 생성 요청. 본문에 `id`가 있으면 400 `idexists`.
pub async fn create_entity<E: EntityMapper>(
    state: web::Data<AppState>,
    payload: web::Json<E::Dto>,
) -> Result<HttpResponse, AppError> {
    let dto = payload.into_inner();
    debug!("REST request to save {} : {:?}", E::DISPLAY_NAME, dto);

    create::<E>(&state, dto).await
}

/// 컬렉션 경로에 대한 PUT
///
/// `id`가 없으면 생성으로 처리하고, 저장소에 없는 `id`면 400 `idnotfound`.
pub async fn update_entity<E: EntityMapper>(
    state: web::Data<AppState>,
    payload: web::Json<E::Dto>,
) -> Result<HttpResponse, AppError> {
    let dto = payload.into_inner();
    debug!("REST request to update {} : {:?}", E::DISPLAY_NAME, dto);

    match dto.id() {
        None => create::<E>(&state, dto).await,
        Some(id) => update::<E>(&state, id, dto).await,
    }
}

pub async fn update_entity_by_id<E: EntityMapper>(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<E::Dto>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let dto = payload.into_inner();
    debug!("REST request to update {} : {}, {:?}", E::DISPLAY_NAME, id, dto);

    match dto.id() {
        None => Err(id_null::<E>()),
        Some(body_id) if body_id != id => Err(id_invalid::<E>()),
        Some(_) => update::<E>(&state, id, dto).await,
    }
}

/// 부분 수정. 본문의 null이 아닌 필드만 반영하며, 대상이 없으면 404.
pub async fn partial_update_entity<E: EntityMapper>(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = payload.into_inner();
    debug!("REST request to partial update {} partially : {}, {}", E::DISPLAY_NAME, id, patch);

    if !patch.is_object() {
        return Err(AppError::ValidationError("요청 본문은 JSON 객체여야 합니다".to_string()));
    }

    match patch.get("id").and_then(Value::as_i64) {
        None => return Err(id_null::<E>()),
        Some(body_id) if body_id != id => return Err(id_invalid::<E>()),
        Some(_) => {}
    }

    let result = state
        .service::<E>()
        .partial_update(id, patch)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;

    let mut response = HttpResponse::Ok();
    insert_headers(
        &mut response,
        header_util::entity_update_alert(&ApplicationConfig::name(), E::ENTITY_NAME, &id.to_string()),
    );
    Ok(response.json(result))
}

/// 필터 조건과 페이지 요청에 맞는 목록
pub async fn list_entities<E: EntityMapper>(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let params = query_params(&req)?;
    let criteria = E::Criteria::from_params(&params)?;
    let pageable = Pageable::from_params(&params);
    debug!("REST request to get {} by criteria: {:?}", E::DISPLAY_NAME, criteria);

    let page = state.service::<E>().find_by_criteria(&criteria, &pageable).await?;

    let mut response = HttpResponse::Ok();
    insert_headers(
        &mut response,
        pagination_util::generate_pagination_headers(req.path(), &params, &page),
    );
    Ok(response.json(page.content))
}

pub async fn count_entities<E: EntityMapper>(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let params = query_params(&req)?;
    let criteria = E::Criteria::from_params(&params)?;
    debug!("REST request to count {} by criteria: {:?}", E::DISPLAY_NAME, criteria);

    let count = state.service::<E>().count_by_criteria(&criteria).await?;
    Ok(HttpResponse::Ok().json(count))
}

pub async fn get_entity<E: EntityMapper>(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!("REST request to get {} : {}", E::DISPLAY_NAME, id);

    let dto = state
        .service::<E>()
        .find_one(id)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;

    Ok(HttpResponse::Ok().json(dto))
}

/// 삭제. 대상이 없어도 204입니다.
pub async fn delete_entity<E: EntityMapper>(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!("REST request to delete {} : {}", E::DISPLAY_NAME, id);

    state.service::<E>().delete(id).await?;

    let mut response = HttpResponse::NoContent();
    insert_headers(
        &mut response,
        header_util::entity_deletion_alert(&ApplicationConfig::name(), E::ENTITY_NAME, &id.to_string()),
    );
    Ok(response.finish())
}

/// `query` 파라미터로 검색 색인을 조회합니다. 비어 있으면 전체.
pub async fn search_entities<E: EntityMapper>(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let params = query_params(&req)?;
    let query = params.first("query").unwrap_or_default().to_string();
    let pageable = Pageable::from_params(&params);
    debug!("REST request to search for a page of {} for query {}", E::DISPLAY_NAME, query);

    let page = state.service::<E>().search(&query, &pageable).await?;

    let mut response = HttpResponse::Ok();
    insert_headers(
        &mut response,
        pagination_util::generate_pagination_headers(req.path(), &params, &page),
    );
    Ok(response.json(page.content))
}
