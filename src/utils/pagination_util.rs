//! 페이지 응답 헤더
//!
//! JHipster `PaginationUtil.generatePaginationHttpHeaders`와 같은 헤더를 만듭니다.
//!
//! ```text
//! X-Total-Count: 45
//! Link: </api/merchants?page=1&size=20>; rel="next",</api/merchants?page=2&size=20>; rel="last",
//!       </api/merchants?page=0&size=20>; rel="first"
//! ```
//!
//! `page`/`size`를 제외한 요청 파라미터(`sort`, `query`, 필터)는 링크에 그대로 남습니다.

use crate::domain::models::{Page, QueryParams};
use crate::utils::header_util::Header;

pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

pub fn generate_pagination_headers<T>(path: &str, params: &QueryParams, page: &Page<T>) -> Vec<Header> {
    let number = page.number();
    let size = page.pageable.size;
    let last = page.total_pages().saturating_sub(1);
    let retained = params.without(&["page", "size"]);

    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(link(path, &retained, number + 1, size, "next"));
    }
    if page.has_previous() {
        links.push(link(path, &retained, number - 1, size, "prev"));
    }
    links.push(link(path, &retained, last, size, "last"));
    links.push(link(path, &retained, 0, size, "first"));

    vec![
        (TOTAL_COUNT_HEADER.to_string(), page.total_elements.to_string()),
        ("Link".to_string(), links.join(",")),
    ]
}

fn link(path: &str, retained: &[(&str, &str)], page: u64, size: u64, rel: &str) -> String {
    let mut query: Vec<String> = retained
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    query.push(format!("page={}", page));
    query.push(format!("size={}", size));

    format!("<{}?{}>; rel=\"{}\"", path, query.join("&"), rel)
}
