//! API 라우트 설정 모듈
//!
//! 모든 엔티티가 같은 REST 규칙을 따르므로, 엔티티 타입 하나로 리소스 라우트
//! 전체를 등록하는 [`configure_entity_routes`]를 엔티티마다 호출합니다.
//!
//! ```text
//! /api/merchants            POST, PUT, GET
//! /api/merchants/count      GET
//! /api/merchants/{id}       GET, PUT, PATCH, DELETE
//! /api/_search/merchants    GET
//! ```
//!
//! `/count`는 `/{id}`보다 먼저 등록되어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(AppState::new(persistence)))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::domain::entities::*;
use crate::handlers::{self, AppState, resource};
use crate::services::EntityMapper;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    cfg.service(handlers::index::reindex);
    configure_resource_routes(cfg);
}

/// 엔티티 하나의 리소스 라우트를 등록합니다
pub fn configure_entity_routes<E: EntityMapper>(cfg: &mut web::ServiceConfig) {
    let collection = format!("/api/{}", E::RESOURCE_PATH);

    cfg.service(
        web::resource(collection.as_str())
            .route(web::post().to(resource::create_entity::<E>))
            .route(web::put().to(resource::update_entity::<E>))
            .route(web::get().to(resource::list_entities::<E>)),
    )
    .service(
        web::resource(format!("{}/count", collection))
            .route(web::get().to(resource::count_entities::<E>)),
    )
    .service(
        web::resource(format!("{}/{{id}}", collection))
            .route(web::get().to(resource::get_entity::<E>))
            .route(web::put().to(resource::update_entity_by_id::<E>))
            .route(web::patch().to(resource::partial_update_entity::<E>))
            .route(web::delete().to(resource::delete_entity::<E>)),
    )
    .service(
        web::resource(format!("/api/_search/{}", E::RESOURCE_PATH))
            .route(web::get().to(resource::search_entities::<E>)),
    );
}

macro_rules! entity_resources {
    ($($entity:ty),* $(,)?) => {
        /// 모든 엔티티의 리소스 라우트를 등록합니다
        pub fn configure_resource_routes(cfg: &mut web::ServiceConfig) {
            $(configure_entity_routes::<$entity>(cfg);)*
        }

        /// 등록되는 리소스 경로 (`/api/` 아래)
        pub fn resource_paths() -> Vec<&'static str> {
            vec![$(<$entity as Entity>::RESOURCE_PATH),*]
        }
    };
}

entity_resources!(
    Status,
    MerchantType,
    MerchantStatus,
    MerchantAuditStatus,
    OperatorType,
    OrderStatus,
    OrderType,
    ProductStatus,
    ProductType,
    Currency,
    PayType,
    Merchant,
    Product,
    Order,
    OrderStatusHistory,
    CommissionPlaceholder,
);

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "merchant_order_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": { "storage": "mongodb", "cache": "redis" }
/// }
/// ```
#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": state.persistence.backend_kind().as_str(),
            "cache": if state.persistence.cache_enabled() { "redis" } else { "disabled" },
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::Value;

    use crate::repositories::Persistence;

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Arc::new(Persistence::in_memory())))
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(App::new().app_data($state.clone()).configure(configure_all_routes)).await
        };
    }

    fn header<'a>(resp: &'a actix_web::dev::ServiceResponse, name: &str) -> Option<&'a str> {
        resp.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[actix_web::test]
    async fn test_health_check() {
        let state = app_state();
        let app = init_app!(state);

        let resp: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp["status"], "healthy");
        assert_eq!(resp["features"]["storage"], "memory");
    }

    #[actix_web::test]
    async fn test_create_returns_location_and_alert() {
        let state = app_state();
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/merchants")
            .set_json(serde_json::json!({ "name": "Acme", "code": "ACM" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = header(&resp, "location").unwrap().to_string();
        let alert = header(&resp, "x-merchantorderapp-alert").unwrap().to_string();
        assert_eq!(alert, "merchantOrderApp.merchant.created");

        let body: Value = test::read_body_json(resp).await;
        let id = body["id"].as_i64().unwrap();
        assert!(id >= 1000);
        assert_eq!(location, format!("/api/merchants/{}", id));
    }

    #[actix_web::test]
    async fn test_create_with_id_is_rejected() {
        let state = app_state();
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/merchants")
            .set_json(serde_json::json!({ "id": 5, "name": "Acme" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(header(&resp, "x-merchantorderapp-error"), Some("error.idexists"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errorKey"], "idexists");
        assert_eq!(body["entityName"], "merchant");
    }

    #[actix_web::test]
    async fn test_update_then_get_and_delete() {
        let state = app_state();
        let app = init_app!(state);

        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/api/currencies")
                .set_json(serde_json::json!({ "name": "Euro", "code": "EUR" }))
                .to_request(),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/currencies/{}", id))
                .set_json(serde_json::json!({ "id": id, "name": "Euro", "code": "EURO" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let fetched: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri(&format!("/api/currencies/{}", id)).to_request(),
        )
        .await;
        assert_eq!(fetched["code"], "EURO");

        let resp = test::call_service(
            &app,
            test::TestRequest::delete().uri(&format!("/api/currencies/{}", id)).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(header(&resp, "x-merchantorderapp-alert"), Some("merchantOrderApp.currency.deleted"));

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri(&format!("/api/currencies/{}", id)).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_by_id_rules() {
        let state = app_state();
        let app = init_app!(state);

        let cases = [
            ("/api/products/1000", serde_json::json!({ "name": "P" }), "idnull"),
            ("/api/products/1000", serde_json::json!({ "id": 1001, "name": "P" }), "idinvalid"),
            ("/api/products/1000", serde_json::json!({ "id": 1000, "name": "P" }), "idnotfound"),
        ];

        for (uri, body, key) in cases {
            let resp = test::call_service(&app, test::TestRequest::put().uri(uri).set_json(body).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", key);
            assert_eq!(header(&resp, "x-merchantorderapp-error"), Some(format!("error.{}", key).as_str()));
        }

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/products")
                .set_json(serde_json::json!({ "id": 4242, "name": "P" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // id 없는 컬렉션 PUT은 생성
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/products")
                .set_json(serde_json::json!({ "name": "New" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_partial_update() {
        let state = app_state();
        let app = init_app!(state);

        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/api/products")
                .set_json(serde_json::json!({ "name": "Coffee", "price": 3.5 }))
                .to_request(),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let patched: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::patch()
                .uri(&format!("/api/products/{}", id))
                .set_json(serde_json::json!({ "id": id, "price": 4.0 }))
                .to_request(),
        )
        .await;
        assert_eq!(patched["name"], "Coffee");
        assert_eq!(patched["price"], 4.0);

        let resp = test::call_service(
            &app,
            test::TestRequest::patch()
                .uri("/api/products/9999")
                .set_json(serde_json::json!({ "id": 9999, "price": 1.0 }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_with_criteria_and_pagination_headers() {
        let state = app_state();
        let app = init_app!(state);

        for name in ["Alpha", "Beta", "Gamma"] {
            let req = test::TestRequest::post()
                .uri("/api/merchants")
                .set_json(serde_json::json!({ "name": name }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/merchants?page=0&size=2&sort=name,desc").to_request(),
        )
        .await;
        assert_eq!(header(&resp, "x-total-count"), Some("3"));
        assert!(header(&resp, "link").unwrap().contains("rel=\"next\""));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["name"], "Gamma");
        assert_eq!(body.as_array().unwrap().len(), 2);

        let filtered: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/merchants?name.contains=ph").to_request(),
        )
        .await;
        assert_eq!(filtered.as_array().unwrap().len(), 1);

        let count: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/merchants/count?name.in=Alpha,Beta").to_request(),
        )
        .await;
        assert_eq!(count, 2);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/merchants?id.greaterThan=abc").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_page_number_at_u64_max_returns_empty_page() {
        let state = app_state();
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/merchants")
            .set_json(serde_json::json!({ "name": "Acme" }))
            .to_request();
        test::call_service(&app, req).await;

        for uri in [
            "/api/merchants?page=18446744073709551615",
            "/api/_search/merchants?query=acme&page=18446744073709551615",
        ] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
            assert_eq!(header(&resp, "x-total-count"), Some("1"));
            assert!(!header(&resp, "link").unwrap().contains("rel=\"next\""));

            let body: Value = test::read_body_json(resp).await;
            assert!(body.as_array().unwrap().is_empty());
        }
    }

    #[actix_web::test]
    async fn test_negative_filters_skip_missing_fields() {
        let state = app_state();
        let app = init_app!(state);

        for body in [
            serde_json::json!({ "name": "A", "description": "foo" }),
            serde_json::json!({ "name": "B" }),
            serde_json::json!({ "name": "C", "description": "bar" }),
        ] {
            let req = test::TestRequest::post().uri("/api/merchants").set_json(body).to_request();
            test::call_service(&app, req).await;
        }

        for filter in [
            "description.notEquals=foo",
            "description.notIn=foo",
            "description.doesNotContain=fo",
        ] {
            let found: Value = test::call_and_read_body_json(
                &app,
                test::TestRequest::get().uri(&format!("/api/merchants?{}", filter)).to_request(),
            )
            .await;
            let names: Vec<&str> = found.as_array().unwrap().iter().map(|m| m["name"].as_str().unwrap()).collect();
            assert_eq!(names, vec!["C"], "{}", filter);
        }
    }

    #[actix_web::test]
    async fn test_search_and_reindex() {
        let state = app_state();
        let app = init_app!(state);

        for name in ["Seoul Coffee", "Busan Tea"] {
            let req = test::TestRequest::post()
                .uri("/api/merchants")
                .set_json(serde_json::json!({ "name": name }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/_search/merchants?query=coffee").to_request(),
        )
        .await;
        assert_eq!(header(&resp, "x-total-count"), Some("1"));
        let hits: Value = test::read_body_json(resp).await;
        assert_eq!(hits[0]["name"], "Seoul Coffee");

        let all: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/_search/merchants").to_request(),
        )
        .await;
        assert_eq!(all.as_array().unwrap().len(), 2);

        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/elasticsearch/index").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        let reports: Value = test::read_body_json(resp).await;
        let merchant = reports
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["entityName"] == "merchant")
            .unwrap();
        assert_eq!(merchant["indexed"], 2);
    }

    #[actix_web::test]
    async fn test_reference_must_exist() {
        let state = app_state();
        let app = init_app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/orders")
                .set_json(serde_json::json!({ "code": "ORD-1", "merchantId": 4242 }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(header(&resp, "x-merchantorderapp-error"), Some("error.referencenotfound"));
    }

    #[actix_web::test]
    async fn test_resource_paths_cover_every_entity() {
        let paths = resource_paths();
        assert_eq!(paths.len(), 16);
        assert!(paths.contains(&"order-status-histories"));
        assert!(paths.contains(&"commission-placeholders"));
    }
}
