//! 필드 필터
//!
//! JHipster `tech.jhipster.service.filter`의 필터 계층을 옮긴 것입니다.
//! 쿼리 파라미터 `<field>.<operator>=<value>`를 해석해 MongoDB 조건으로 바꿉니다.
//!
//! | 필터 | 연산자 |
//! |------|--------|
//! | 공통 | `equals`, `notEquals`, `specified`, `in`, `notIn` |
//! | [`RangeFilter`] | + `greaterThan`, `lessThan`, `greaterThanOrEqual`, `lessThanOrEqual` |
//! | [`StringFilter`] | + `contains`, `doesNotContain` (대소문자 무시) |
//!
//! `in`/`notIn`은 쉼표로 구분하거나 파라미터를 반복해서 지정합니다.

use std::fmt::Debug;

use mongodb::bson::{self, Bson, Document, doc};

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::QueryParams;

/// `{ field: value }` 문서 하나를 만듭니다.
pub fn field_condition(field: &str, value: impl Into<Bson>) -> Document {
    let mut document = Document::new();
    document.insert(field, value);
    document
}

/// 필터 대상이 될 수 있는 값 타입
pub trait FilterValue: Clone + Debug + PartialEq + Send + Sync + Sized {
    fn parse_value(raw: &str) -> Option<Self>;
    fn to_bson(&self) -> Bson;
}

impl FilterValue for i64 {
    fn parse_value(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }

    fn to_bson(&self) -> Bson {
        Bson::Int64(*self)
    }
}

impl FilterValue for f64 {
    fn parse_value(raw: &str) -> Option<Self> {
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn to_bson(&self) -> Bson {
        Bson::Double(*self)
    }
}

impl FilterValue for String {
    fn parse_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn to_bson(&self) -> Bson {
        Bson::String(self.clone())
    }
}

impl FilterValue for bool {
    fn parse_value(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn to_bson(&self) -> Bson {
        Bson::Boolean(*self)
    }
}

/// RFC 3339 (`2024-03-01T10:15:30Z`)
impl FilterValue for bson::DateTime {
    fn parse_value(raw: &str) -> Option<Self> {
        bson::DateTime::parse_rfc3339_str(raw.trim()).ok()
    }

    fn to_bson(&self) -> Bson {
        Bson::DateTime(*self)
    }
}

fn invalid(key: &str, raw: &str) -> AppError {
    AppError::ValidationError(format!("Invalid value '{}' for filter '{}'", raw, key))
}

fn parse_single<T: FilterValue>(params: &QueryParams, key: &str) -> AppResult<Option<T>> {
    match params.first(key) {
        None => Ok(None),
        Some(raw) => T::parse_value(raw).map(Some).ok_or_else(|| invalid(key, raw)),
    }
}

fn parse_list<T: FilterValue>(params: &QueryParams, key: &str) -> AppResult<Option<Vec<T>>> {
    let raws = params.all(key);
    if raws.is_empty() {
        return Ok(None);
    }

    let mut values = Vec::new();
    for raw in raws {
        for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            values.push(T::parse_value(item).ok_or_else(|| invalid(key, item))?);
        }
    }
    Ok(Some(values))
}

/// SQL `<>`/`NOT IN`/`NOT LIKE`처럼 부정 조건은 값이 없는 문서를 제외합니다.
fn present(field: &str) -> Document {
    field_condition(field, doc! { "$ne": Bson::Null })
}

fn to_bson_array<T: FilterValue>(values: &[T]) -> Bson {
    Bson::Array(values.iter().map(FilterValue::to_bson).collect())
}

/// 엔티티 기준(criteria)을 구성하는 필드 필터
pub trait FieldFilter: Clone + Debug + Sized {
    /// `<field>.*` 파라미터가 하나도 없으면 `None`
    fn from_params(params: &QueryParams, field: &str) -> AppResult<Option<Self>>;

    /// `storage_field`에 대한 조건 문서들 (모두 AND로 결합됨)
    fn clauses(&self, storage_field: &str) -> Vec<Document>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter<T> {
    pub equals: Option<T>,
    pub not_equals: Option<T>,
    pub specified: Option<bool>,
    pub in_list: Option<Vec<T>>,
    pub not_in: Option<Vec<T>>,
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self {
            equals: None,
            not_equals: None,
            specified: None,
            in_list: None,
            not_in: None,
        }
    }
}

impl<T: FilterValue> Filter<T> {
    fn parse(params: &QueryParams, field: &str) -> AppResult<Self> {
        Ok(Self {
            equals: parse_single(params, &format!("{}.equals", field))?,
            not_equals: parse_single(params, &format!("{}.notEquals", field))?,
            specified: parse_single(params, &format!("{}.specified", field))?,
            in_list: parse_list(params, &format!("{}.in", field))?,
            not_in: parse_list(params, &format!("{}.notIn", field))?,
        })
    }

    fn is_empty(&self) -> bool {
        self.equals.is_none()
            && self.not_equals.is_none()
            && self.specified.is_none()
            && self.in_list.is_none()
            && self.not_in.is_none()
    }

    fn push_clauses(&self, field: &str, out: &mut Vec<Document>) {
        if let Some(value) = &self.equals {
            out.push(field_condition(field, doc! { "$eq": value.to_bson() }));
        }
        if let Some(value) = &self.not_equals {
            out.push(field_condition(field, doc! { "$ne": value.to_bson() }));
            out.push(present(field));
        }
        match self.specified {
            Some(true) => out.push(field_condition(field, doc! { "$ne": Bson::Null })),
            Some(false) => out.push(field_condition(field, doc! { "$eq": Bson::Null })),
            None => {}
        }
        if let Some(values) = &self.in_list {
            out.push(field_condition(field, doc! { "$in": to_bson_array(values) }));
        }
        if let Some(values) = &self.not_in {
            out.push(field_condition(field, doc! { "$nin": to_bson_array(values) }));
            out.push(present(field));
        }
    }
}

impl<T: FilterValue> FieldFilter for Filter<T> {
    fn from_params(params: &QueryParams, field: &str) -> AppResult<Option<Self>> {
        let filter = Self::parse(params, field)?;
        Ok((!filter.is_empty()).then_some(filter))
    }

    fn clauses(&self, storage_field: &str) -> Vec<Document> {
        let mut out = Vec::new();
        self.push_clauses(storage_field, &mut out);
        out
    }
}

/// 크기 비교가 가능한 값의 필터
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter<T> {
    pub base: Filter<T>,
    pub greater_than: Option<T>,
    pub less_than: Option<T>,
    pub greater_than_or_equal: Option<T>,
    pub less_than_or_equal: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            base: Filter::default(),
            greater_than: None,
            less_than: None,
            greater_than_or_equal: None,
            less_than_or_equal: None,
        }
    }
}

impl<T: FilterValue> FieldFilter for RangeFilter<T> {
    fn from_params(params: &QueryParams, field: &str) -> AppResult<Option<Self>> {
        let filter = Self {
            base: Filter::parse(params, field)?,
            greater_than: parse_single(params, &format!("{}.greaterThan", field))?,
            less_than: parse_single(params, &format!("{}.lessThan", field))?,
            greater_than_or_equal: parse_single(params, &format!("{}.greaterThanOrEqual", field))?,
            less_than_or_equal: parse_single(params, &format!("{}.lessThanOrEqual", field))?,
        };

        let is_empty = filter.base.is_empty()
            && filter.greater_than.is_none()
            && filter.less_than.is_none()
            && filter.greater_than_or_equal.is_none()
            && filter.less_than_or_equal.is_none();
        Ok((!is_empty).then_some(filter))
    }

    fn clauses(&self, storage_field: &str) -> Vec<Document> {
        let mut out = Vec::new();
        self.base.push_clauses(storage_field, &mut out);

        let bounds = [
            ("$gt", &self.greater_than),
            ("$lt", &self.less_than),
            ("$gte", &self.greater_than_or_equal),
            ("$lte", &self.less_than_or_equal),
        ];
        for (operator, bound) in bounds {
            if let Some(value) = bound {
                out.push(field_condition(storage_field, field_condition(operator, value.to_bson())));
            }
        }
        out
    }
}

/// 문자열 필터
///
/// `contains`/`doesNotContain`은 입력을 정규식 이스케이프한 뒤
/// 대소문자 무시(`$options: "i"`)로 비교합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringFilter {
    pub base: Filter<String>,
    pub contains: Option<String>,
    pub does_not_contain: Option<String>,
}

impl FieldFilter for StringFilter {
    fn from_params(params: &QueryParams, field: &str) -> AppResult<Option<Self>> {
        let filter = Self {
            base: Filter::parse(params, field)?,
            contains: parse_single(params, &format!("{}.contains", field))?,
            does_not_contain: parse_single(params, &format!("{}.doesNotContain", field))?,
        };

        let is_empty = filter.base.is_empty() && filter.contains.is_none() && filter.does_not_contain.is_none();
        Ok((!is_empty).then_some(filter))
    }

    fn clauses(&self, storage_field: &str) -> Vec<Document> {
        let mut out = Vec::new();
        self.base.push_clauses(storage_field, &mut out);

        if let Some(value) = &self.contains {
            out.push(field_condition(
                storage_field,
                doc! { "$regex": regex::escape(value), "$options": "i" },
            ));
        }
        if let Some(value) = &self.does_not_contain {
            out.push(field_condition(
                storage_field,
                doc! { "$not": { "$regex": regex::escape(value), "$options": "i" } },
            ));
            out.push(present(storage_field));
        }
        out
    }
}

pub type LongFilter = RangeFilter<i64>;
pub type DoubleFilter = RangeFilter<f64>;
pub type InstantFilter = RangeFilter<bson::DateTime>;

/// 필드별 조건을 모아 하나의 필터 문서로 만듭니다.
///
/// 조건이 없으면 빈 문서(전체 일치), 있으면 `{ "$and": [...] }`입니다.
#[derive(Debug, Default)]
pub struct FilterDocumentBuilder {
    clauses: Vec<Document>,
}

impl FilterDocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F: FieldFilter>(mut self, storage_field: &str, filter: &Option<F>) -> Self {
        if let Some(filter) = filter {
            self.clauses.extend(filter.clauses(storage_field));
        }
        self
    }

    pub fn build(self) -> Document {
        if self.clauses.is_empty() {
            Document::new()
        } else {
            doc! { "$and": self.clauses }
        }
    }
}
