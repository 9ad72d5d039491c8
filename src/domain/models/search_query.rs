//! 검색 질의
//!
//! Elasticsearch `query_string`의 자주 쓰는 부분만 지원하는 간이 문법입니다.
//!
//! | 문법 | 의미 |
//! |------|------|
//! | `acme` | 검색 필드 중 하나라도 부분 일치 (대소문자 무시) |
//! | `"acme corp"` | 구문을 그대로 부분 일치 |
//! | `name:acme` | 특정 필드만 검사 |
//! | `ac*e`, `ac?e` | 와일드카드 |
//! | `+term` | 반드시 일치 |
//! | `-term`, `NOT term` | 일치하면 제외 |
//! | 빈 문자열, `*` | 전체 |
//!
//! 일반 항들은 OR로 묶이고, `+` 항이 하나라도 있으면 일반 항은 무시됩니다.
//! `AND`/`OR` 키워드는 구분자로만 취급합니다.
//! 숫자 항은 문자열 부분 일치 외에 숫자 필드(`id` 포함)의 값 일치도 검사합니다.

use mongodb::bson::{Bson, Document, doc};

use crate::domain::criteria::field_condition;
use crate::utils::string_utils::wildcard_to_regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    Should,
    Must,
    MustNot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    pub field: Option<String>,
    pub text: String,
    pub phrase: bool,
    pub occur: Occur,
}

impl SearchTerm {
    fn parse(token: &str) -> Option<Self> {
        let (occur, rest) = if let Some(rest) = token.strip_prefix('+') {
            (Occur::Must, rest)
        } else if let Some(rest) = token.strip_prefix('-') {
            (Occur::MustNot, rest)
        } else {
            (Occur::Should, token)
        };

        let (field, value) = match rest.split_once(':') {
            Some((field, value)) if is_field_name(field) && !value.is_empty() => {
                (Some(field.to_string()), value)
            }
            _ => (None, rest),
        };

        let (text, phrase) = if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            (&value[1..value.len() - 1], true)
        } else {
            (value.trim_matches('"'), false)
        };

        if text.is_empty() {
            return None;
        }

        Some(Self {
            field,
            text: text.to_string(),
            phrase,
            occur,
        })
    }

    fn is_match_all(&self) -> bool {
        self.field.is_none() && !self.phrase && self.text.chars().all(|c| c == '*')
    }

    fn pattern(&self) -> String {
        if self.phrase {
            regex::escape(&self.text)
        } else {
            wildcard_to_regex(&self.text)
        }
    }

    fn number(&self) -> Option<f64> {
        if self.phrase {
            return None;
        }
        self.text.parse::<f64>().ok().filter(|n| n.is_finite())
    }

    fn clause(&self, default_fields: &[&str]) -> Document {
        let fields: Vec<&str> = match &self.field {
            Some(field) if field == "id" => vec!["_id"],
            Some(field) => vec![field.as_str()],
            None => default_fields.to_vec(),
        };

        let pattern = self.pattern();
        let mut alternatives: Vec<Bson> = fields
            .iter()
            .map(|field| {
                Bson::Document(field_condition(
                    field,
                    doc! { "$regex": pattern.as_str(), "$options": "i" },
                ))
            })
            .collect();

        if let Some(number) = self.number() {
            let mut numeric_fields = fields.clone();
            if self.field.is_none() {
                numeric_fields.push("_id");
            }
            alternatives.extend(
                numeric_fields
                    .into_iter()
                    .map(|field| Bson::Document(field_condition(field, number))),
            );
        }

        if alternatives.is_empty() {
            return doc! { "_id": { "$in": [] } };
        }
        doc! { "$or": alternatives }
    }
}

fn is_field_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// 공백으로 나누되 따옴표 안의 공백은 유지합니다.
fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in raw.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            current.push(c);
        } else if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    terms: Vec<SearchTerm>,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let mut terms = Vec::new();
        let mut negate_next = false;

        for token in tokenize(raw) {
            match token.as_str() {
                "AND" | "OR" | "&&" | "||" => continue,
                "NOT" | "!" => {
                    negate_next = true;
                    continue;
                }
                _ => {}
            }

            if let Some(mut term) = SearchTerm::parse(&token) {
                if negate_next {
                    term.occur = Occur::MustNot;
                }
                terms.push(term);
            }
            negate_next = false;
        }

        Self { terms }
    }

    pub fn terms(&self) -> &[SearchTerm] {
        &self.terms
    }

    pub fn is_match_all(&self) -> bool {
        self.terms
            .iter()
            .all(|t| t.occur != Occur::MustNot && t.is_match_all())
    }

    /// `default_fields`를 기본 검색 대상으로 하는 필터 문서를 만듭니다.
    pub fn to_filter(&self, default_fields: &[&str]) -> Document {
        let mut must = Vec::new();
        let mut should = Vec::new();
        let mut must_not = Vec::new();
        let mut should_matches_all = false;

        for term in &self.terms {
            let clause = if term.is_match_all() {
                Document::new()
            } else {
                term.clause(default_fields)
            };

            match term.occur {
                Occur::Must => {
                    if !clause.is_empty() {
                        must.push(Bson::Document(clause));
                    }
                }
                Occur::Should => {
                    should_matches_all |= clause.is_empty();
                    should.push(Bson::Document(clause));
                }
                Occur::MustNot => must_not.push(Bson::Document(clause)),
            }
        }

        let has_must = self.terms.iter().any(|t| t.occur == Occur::Must);
        let mut clauses = must;
        if !has_must && !should.is_empty() && !should_matches_all {
            clauses.push(Bson::Document(doc! { "$or": should }));
        }
        if !must_not.is_empty() {
            clauses.push(Bson::Document(doc! { "$nor": must_not }));
        }

        if clauses.is_empty() {
            Document::new()
        } else {
            doc! { "$and": clauses }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["name", "code"];

    #[test]
    fn test_parse_terms_and_modifiers() {
        let query = SearchQuery::parse(r#"acme +name:"big shop" -code:X1 NOT closed"#);
        let terms = query.terms();

        assert_eq!(terms.len(), 4);
        assert_eq!(terms[0].occur, Occur::Should);
        assert_eq!(terms[1].field.as_deref(), Some("name"));
        assert_eq!(terms[1].text, "big shop");
        assert!(terms[1].phrase);
        assert_eq!(terms[1].occur, Occur::Must);
        assert_eq!(terms[2].occur, Occur::MustNot);
        assert_eq!(terms[3].text, "closed");
        assert_eq!(terms[3].occur, Occur::MustNot);
    }

    #[test]
    fn test_empty_and_star_match_all() {
        assert!(SearchQuery::parse("").is_match_all());
        assert!(SearchQuery::parse("  * ").is_match_all());
        assert_eq!(SearchQuery::parse("*").to_filter(FIELDS), Document::new());
        assert!(!SearchQuery::parse("acme").is_match_all());
    }

    #[test]
    fn test_single_term_searches_default_fields() {
        let filter = SearchQuery::parse("ac*e").to_filter(FIELDS);

        assert_eq!(
            filter,
            doc! { "$and": [ { "$or": [ { "$or": [
                { "name": { "$regex": "ac.*e", "$options": "i" } },
                { "code": { "$regex": "ac.*e", "$options": "i" } },
            ] } ] } ] }
        );
    }

    #[test]
    fn test_numeric_term_also_matches_id() {
        let filter = SearchQuery::parse("id:1001").to_filter(FIELDS);
        let rendered = filter.to_string();

        assert!(rendered.contains("\"_id\""));
        assert!(rendered.contains("1001"));
    }

    #[test]
    fn test_required_terms_drop_optional_terms() {
        let filter = SearchQuery::parse("foo +bar").to_filter(FIELDS);
        let clauses = filter.get_array("$and").unwrap();

        assert_eq!(clauses.len(), 1);
        assert!(!filter.to_string().contains("foo"));
    }

    #[test]
    fn test_negative_only_query_keeps_everything_else() {
        let filter = SearchQuery::parse("-closed").to_filter(FIELDS);
        let clauses = filter.get_array("$and").unwrap();

        assert_eq!(clauses.len(), 1);
        assert!(clauses[0].as_document().unwrap().contains_key("$nor"));
    }
}
