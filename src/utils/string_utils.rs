//! # 문자열 유틸리티
//!
//! DTO 입력 정리와 검색 패턴 변환에 쓰이는 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// `None`, 빈 문자열, 공백만 있는 문자열은 모두 `None`이 되고
/// 나머지는 앞뒤 공백을 제거해 돌려줍니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// serde 역직렬화 시 [`clean_optional_string`]을 적용합니다.
///
/// 필드가 아예 없을 수 있으면 `#[serde(default)]`를 함께 붙여야 합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct MerchantDto {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     name: Option<String>,
/// }
///
/// // {"name": "  Acme  "} → Some("Acme")
/// // {"name": "   "}      → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 와일드카드 검색어를 정규식 본문으로 바꿉니다.
///
/// `*`는 임의 길이, `?`는 한 글자에 대응하고 나머지 문자는 모두 이스케이프됩니다.
/// 앵커를 붙이지 않으므로 부분 일치로 동작합니다.
pub fn wildcard_to_regex(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 8);
    let mut literal = String::new();

    for c in text.chars() {
        match c {
            '*' | '?' => {
                pattern.push_str(&regex::escape(&literal));
                literal.clear();
                pattern.push_str(if c == '*' { ".*" } else { "." });
            }
            _ => literal.push(c),
        }
    }
    pattern.push_str(&regex::escape(&literal));
    pattern
}
