//! 메모리 저장소용 BSON 질의 평가기
//!
//! 기준(criteria)과 검색어가 만들어 내는 MongoDB 필터 문서를 그대로 평가하여
//! 두 저장소가 같은 질의 언어를 쓰도록 합니다.
//!
//! | 지원 연산자 | 비고 |
//! |-------------|------|
//! | `$and`, `$or`, `$nor` | 최상위 논리 연산 |
//! | `$eq`, `$ne`, `$in`, `$nin` | `null`은 누락 필드와도 일치 |
//! | `$gt`, `$gte`, `$lt`, `$lte` | 정수/실수는 서로 비교 가능 |
//! | `$regex` + `$options` | `i`, `m`, `s` 옵션 |
//! | `$not`, `$exists` | 필드 단위 |
//!
//! 배열 필드의 원소 단위 일치는 지원하지 않습니다.

use std::cmp::Ordering;

use mongodb::bson::{Bson, Document};
use regex::RegexBuilder;

use crate::core::errors::{AppError, AppResult};

/// 문서가 필터를 만족하는지 검사합니다. 빈 필터는 모든 문서와 일치합니다.
pub fn matches(document: &Document, filter: &Document) -> AppResult<bool> {
    for (key, condition) in filter {
        let matched = match key.as_str() {
            "$and" => all(document, clauses(key, condition)?)?,
            "$or" => any(document, clauses(key, condition)?)?,
            "$nor" => !any(document, clauses(key, condition)?)?,
            operator if operator.starts_with('$') => return Err(unsupported(operator)),
            field => matches_field(lookup(document, field), condition)?,
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

/// 정렬 문서(`{ field: 1 | -1 }`)에 따라 정렬합니다.
///
/// 누락/`null` 값이 가장 앞에 옵니다.
pub fn sort_documents(documents: &mut [Document], sort: &Document) {
    documents.sort_by(|a, b| {
        for (field, direction) in sort {
            let ordering = compare_for_sort(lookup(a, field), lookup(b, field));
            let ordering = if is_descending(direction) { ordering.reverse() } else { ordering };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

/// 같은 종류의 값끼리 비교합니다. 숫자는 타입이 달라도 비교됩니다.
pub fn compare_values(a: &Bson, b: &Bson) -> Option<Ordering> {
    match (a, b) {
        (Bson::Int64(x), Bson::Int64(y)) => Some(x.cmp(y)),
        (Bson::Int32(x), Bson::Int32(y)) => Some(x.cmp(y)),
        _ if is_number(a) && is_number(b) => as_f64(a)?.partial_cmp(&as_f64(b)?),
        (Bson::String(x), Bson::String(y)) => Some(x.cmp(y)),
        (Bson::DateTime(x), Bson::DateTime(y)) => Some(x.cmp(y)),
        (Bson::Boolean(x), Bson::Boolean(y)) => Some(x.cmp(y)),
        (Bson::Null, Bson::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

fn unsupported(operator: &str) -> AppError {
    AppError::ValidationError(format!("Unsupported query operator '{}'", operator))
}

fn clauses<'a>(operator: &str, value: &'a Bson) -> AppResult<Vec<&'a Document>> {
    let Bson::Array(items) = value else {
        return Err(AppError::ValidationError(format!("'{}' expects an array", operator)));
    };
    items
        .iter()
        .map(|item| {
            item.as_document().ok_or_else(|| {
                AppError::ValidationError(format!("'{}' expects an array of documents", operator))
            })
        })
        .collect()
}

fn all(document: &Document, clauses: Vec<&Document>) -> AppResult<bool> {
    for clause in clauses {
        if !matches(document, clause)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn any(document: &Document, clauses: Vec<&Document>) -> AppResult<bool> {
    for clause in clauses {
        if matches(document, clause)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// 점 표기 경로(`a.b`)로 값을 찾습니다.
fn lookup<'a>(document: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut parts = path.split('.');
    let mut current = document.get(parts.next()?)?;
    for part in parts {
        current = current.as_document()?.get(part)?;
    }
    Some(current)
}

fn operator_document(condition: &Bson) -> Option<&Document> {
    match condition {
        Bson::Document(document) if document.keys().next().is_some_and(|k| k.starts_with('$')) => {
            Some(document)
        }
        _ => None,
    }
}

fn matches_field(value: Option<&Bson>, condition: &Bson) -> AppResult<bool> {
    let Some(operators) = operator_document(condition) else {
        return Ok(equals(value, condition));
    };

    let options = operators.get_str("$options").unwrap_or("");
    for (operator, operand) in operators {
        let matched = match operator.as_str() {
            "$eq" => equals(value, operand),
            "$ne" => !equals(value, operand),
            "$in" => array(operator, operand)?.iter().any(|item| equals(value, item)),
            "$nin" => !array(operator, operand)?.iter().any(|item| equals(value, item)),
            "$gt" => compare(value, operand) == Some(Ordering::Greater),
            "$gte" => matches!(compare(value, operand), Some(Ordering::Greater | Ordering::Equal)),
            "$lt" => compare(value, operand) == Some(Ordering::Less),
            "$lte" => matches!(compare(value, operand), Some(Ordering::Less | Ordering::Equal)),
            "$regex" => {
                let pattern = operand
                    .as_str()
                    .ok_or_else(|| AppError::ValidationError("'$regex' expects a string".to_string()))?;
                regex_matches(value, pattern, options)?
            }
            "$options" => true,
            "$not" => !matches_field(value, operand)?,
            "$exists" => value.is_some() == operand.as_bool().unwrap_or(true),
            other => return Err(unsupported(other)),
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

fn array<'a>(operator: &str, operand: &'a Bson) -> AppResult<&'a Vec<Bson>> {
    operand
        .as_array()
        .ok_or_else(|| AppError::ValidationError(format!("'{}' expects an array", operator)))
}

fn equals(value: Option<&Bson>, operand: &Bson) -> bool {
    match (value, operand) {
        (None | Some(Bson::Null), Bson::Null) => true,
        (None, _) => false,
        (Some(value), operand) => compare_values(value, operand) == Some(Ordering::Equal),
    }
}

fn compare(value: Option<&Bson>, operand: &Bson) -> Option<Ordering> {
    value.and_then(|value| compare_values(value, operand))
}

fn regex_matches(value: Option<&Bson>, pattern: &str, options: &str) -> AppResult<bool> {
    let Some(Bson::String(text)) = value else {
        return Ok(false);
    };

    let regex = RegexBuilder::new(pattern)
        .case_insensitive(options.contains('i'))
        .multi_line(options.contains('m'))
        .dot_matches_new_line(options.contains('s'))
        .build()
        .map_err(|e| AppError::ValidationError(format!("Invalid pattern '{}': {}", pattern, e)))?;

    Ok(regex.is_match(text))
}

fn is_number(value: &Bson) -> bool {
    matches!(value, Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_))
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}

fn is_descending(direction: &Bson) -> bool {
    match direction {
        Bson::Int32(v) => *v < 0,
        Bson::Int64(v) => *v < 0,
        Bson::Double(v) => *v < 0.0,
        _ => false,
    }
}

/// MongoDB의 타입 간 정렬 순서를 단순화한 순위
fn type_rank(value: Option<&Bson>) -> u8 {
    match value {
        None | Some(Bson::Null) => 0,
        Some(Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_)) => 1,
        Some(Bson::String(_)) => 2,
        Some(Bson::Document(_)) => 3,
        Some(Bson::Array(_)) => 4,
        Some(Bson::Boolean(_)) => 5,
        Some(Bson::DateTime(_)) => 6,
        Some(_) => 7,
    }
}

fn compare_for_sort(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            compare_values(x, y).unwrap_or_else(|| type_rank(a).cmp(&type_rank(b)))
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}
