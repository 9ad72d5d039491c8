//! JHipster 알림 헤더
//!
//! | 상황 | 헤더 |
//! |------|------|
//! | 생성/수정/삭제 성공 | `X-<app>-alert: <app>.<entity>.created` + `X-<app>-params: <id>` |
//! | 요청 규칙 위반 | `X-<app>-error: error.<key>` + `X-<app>-params: <entity>` |
//!
//! 파라미터 값은 URL 인코딩되어 헤더에 실립니다.

pub type Header = (String, String);

pub fn alert(application_name: &str, message: &str, param: &str) -> Vec<Header> {
    vec![
        (format!("X-{}-alert", application_name), message.to_string()),
        (
            format!("X-{}-params", application_name),
            urlencoding::encode(param).into_owned(),
        ),
    ]
}

pub fn entity_creation_alert(application_name: &str, entity_name: &str, param: &str) -> Vec<Header> {
    alert(
        application_name,
        &format!("{}.{}.created", application_name, entity_name),
        param,
    )
}

pub fn entity_update_alert(application_name: &str, entity_name: &str, param: &str) -> Vec<Header> {
    alert(
        application_name,
        &format!("{}.{}.updated", application_name, entity_name),
        param,
    )
}

pub fn entity_deletion_alert(application_name: &str, entity_name: &str, param: &str) -> Vec<Header> {
    alert(
        application_name,
        &format!("{}.{}.deleted", application_name, entity_name),
        param,
    )
}

pub fn failure_alert(application_name: &str, entity_name: &str, error_key: &str) -> Vec<Header> {
    vec![
        (format!("X-{}-error", application_name), format!("error.{}", error_key)),
        (format!("X-{}-params", application_name), entity_name.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation_alert() {
        let headers = entity_creation_alert("shopApp", "merchant", "1001");

        assert_eq!(
            headers,
            vec![
                ("X-shopApp-alert".to_string(), "shopApp.merchant.created".to_string()),
                ("X-shopApp-params".to_string(), "1001".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_and_deletion_alert_messages() {
        assert_eq!(entity_update_alert("a", "order", "7")[0].1, "a.order.updated");
        assert_eq!(entity_deletion_alert("a", "order", "7")[0].1, "a.order.deleted");
    }

    #[test]
    fn test_alert_params_are_url_encoded() {
        let headers = alert("a", "a.merchant.created", "Acme & Co");
        assert_eq!(headers[1].1, "Acme%20%26%20Co");
    }

    #[test]
    fn test_failure_alert() {
        let headers = failure_alert("shopApp", "product", "idnull");

        assert_eq!(headers[0], ("X-shopApp-error".to_string(), "error.idnull".to_string()));
        assert_eq!(headers[1], ("X-shopApp-params".to_string(), "product".to_string()));
    }
}
