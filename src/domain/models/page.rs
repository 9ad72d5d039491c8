//! 페이지 요청과 결과
//!
//! Spring Data의 `Pageable`/`Page`에 해당합니다.
//!
//! | 파라미터 | 기본값 | 비고 |
//! |----------|--------|------|
//! | `page` | `0` | 0부터 시작, 잘못된 값은 기본값 |
//! | `size` | `20` | 최대 2000으로 잘림 |
//! | `sort` | `id,asc` | `prop[,prop...][,asc\|desc]`, 여러 번 지정 가능 |

use mongodb::bson::Document;

use crate::config::PaginationConfig;
use crate::domain::models::QueryParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(property: &str) -> Self {
        Self {
            property: property.to_string(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: &str) -> Self {
        Self {
            property: property.to_string(),
            direction: Direction::Desc,
        }
    }

    /// `sort` 파라미터 값 하나를 해석합니다.
    ///
    /// 마지막 토큰이 `asc`/`desc`이면 앞의 모든 속성에 적용됩니다.
    pub fn parse(value: &str) -> Vec<SortOrder> {
        let mut tokens: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        let direction = match tokens.last().map(|t| t.to_lowercase()) {
            Some(last) if last == "desc" => {
                tokens.pop();
                Direction::Desc
            }
            Some(last) if last == "asc" => {
                tokens.pop();
                Direction::Asc
            }
            _ => Direction::Asc,
        };

        tokens
            .into_iter()
            .map(|property| SortOrder {
                property: property.to_string(),
                direction,
            })
            .collect()
    }

    /// 저장소 필드 이름 (`id`는 `_id`로 저장됩니다)
    pub fn storage_field(&self) -> &str {
        if self.property == "id" { "_id" } else { &self.property }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pageable {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl Pageable {
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.clamp(1, PaginationConfig::max_size()),
            sort: Vec::new(),
        }
    }

    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort.push(order);
        self
    }

    pub fn from_params(params: &QueryParams) -> Self {
        let page = params
            .first("page")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);
        let size = params
            .first("size")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|size| *size > 0)
            .unwrap_or_else(PaginationConfig::default_size);

        let sort = params
            .all("sort")
            .into_iter()
            .flat_map(SortOrder::parse)
            .collect();

        Self {
            sort,
            ..Self::of(page, size)
        }
    }

    /// 건너뛸 문서 수. MongoDB `skip`이 받는 `i64` 범위로 제한됩니다.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(i64::MAX as u64)
    }

    /// MongoDB 정렬 문서
    ///
    /// 정렬이 지정되지 않으면 `_id` 오름차순이고, 지정된 경우에도 `_id`를
    /// 마지막 기준으로 덧붙여 페이지 경계가 흔들리지 않게 합니다.
    pub fn sort_document(&self) -> Document {
        let mut document = Document::new();
        for order in &self.sort {
            let value = match order.direction {
                Direction::Asc => 1,
                Direction::Desc => -1,
            };
            if !document.contains_key(order.storage_field()) {
                document.insert(order.storage_field(), value);
            }
        }
        if !document.contains_key("_id") {
            document.insert("_id", 1);
        }
        document
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self::of(0, PaginationConfig::default_size())
    }
}

/// 한 페이지 분량의 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub pageable: Pageable,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, pageable: Pageable) -> Self {
        Self {
            content,
            total_elements,
            pageable,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.pageable.size)
    }

    pub fn number(&self) -> u64 {
        self.pageable.page
    }

    /// `page`는 요청 값 그대로이므로 `u64::MAX`여도 넘치지 않게 비교합니다.
    pub fn has_next(&self) -> bool {
        self.number() < self.total_pages().saturating_sub(1)
    }

    pub fn has_previous(&self) -> bool {
        self.number() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_sort_parsing() {
        assert_eq!(SortOrder::parse("name,desc"), vec![SortOrder::desc("name")]);
        assert_eq!(SortOrder::parse("name"), vec![SortOrder::asc("name")]);
        assert_eq!(
            SortOrder::parse("name,code,DESC"),
            vec![SortOrder::desc("name"), SortOrder::desc("code")]
        );
        assert!(SortOrder::parse(",").is_empty());
    }

    #[test]
    fn test_pageable_defaults_and_clamping() {
        let params = QueryParams::default();
        let pageable = Pageable::from_params(&params);
        assert_eq!(pageable.page, 0);
        assert_eq!(pageable.size, PaginationConfig::default_size());
        assert_eq!(pageable.sort_document(), doc! { "_id": 1 });

        let params: QueryParams = vec![("page", "-1"), ("size", "999999")].into_iter().collect();
        let pageable = Pageable::from_params(&params);
        assert_eq!(pageable.page, 0);
        assert_eq!(pageable.size, PaginationConfig::max_size());
    }

    #[test]
    fn test_sort_document_maps_id_and_appends_tiebreaker() {
        let params: QueryParams = vec![("sort", "name,desc"), ("sort", "id,asc")].into_iter().collect();
        let pageable = Pageable::from_params(&params);

        assert_eq!(pageable.sort_document(), doc! { "name": -1, "_id": 1 });
        assert_eq!(
            Pageable::of(0, 10).with_sort(SortOrder::desc("price")).sort_document(),
            doc! { "price": -1, "_id": 1 }
        );
    }

    #[test]
    fn test_page_navigation() {
        let page = Page::new(vec![1, 2], 45, Pageable::of(1, 20));
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());

        let empty: Page<i32> = Page::new(vec![], 0, Pageable::of(0, 20));
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());
        assert!(!empty.has_previous());
    }

    #[test]
    fn test_page_navigation_past_the_end() {
        let page: Page<i32> = Page::new(vec![], 45, Pageable::of(u64::MAX, 20));
        assert!(!page.has_next());
        assert!(page.has_previous());
        assert_eq!(page.pageable.offset(), i64::MAX as u64);
    }
}
