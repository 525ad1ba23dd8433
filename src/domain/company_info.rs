use serde::Serialize;
use serde_json::Value;

use super::search_response::SearchResponse;

/// Shown wherever the homepage could not be determined.
pub const NO_INFO: &str = "정보없음";

const EMPTY_ANSWER: &str = "{}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyInfo {
    pub company_name: String,
    pub business_number: String,
    pub website: String,
    pub description: String,
}

impl CompanyInfo {
    /// Builds the record from the provider's `answer`.
    ///
    /// The provider is asked for `{"description": .., "url": ..}` but may
    /// answer with prose. Anything that parses as JSON is read with key
    /// lookups (missing keys and non-object values fall back to defaults),
    /// anything else becomes the description as-is.
    pub fn from_answer(answer: Option<&str>, company_name: &str, business_number: &str) -> Self {
        let answer = match answer {
            Some(a) if !a.is_empty() => a,
            _ => EMPTY_ANSWER,
        };

        let (description, website) = match serde_json::from_str::<Value>(answer) {
            Ok(parsed) => (
                parsed
                    .get("description")
                    .and_then(field_text)
                    .unwrap_or_default(),
                parsed
                    .get("url")
                    .and_then(field_text)
                    .unwrap_or_else(|| NO_INFO.to_string()),
            ),
            Err(e) => {
                log::warn!(
                    "Answer for {} is not json, using it as description: {:?}",
                    company_name,
                    e
                );
                (answer.to_string(), NO_INFO.to_string())
            }
        };

        CompanyInfo {
            company_name: company_name.to_string(),
            business_number: business_number.to_string(),
            website,
            description,
        }
    }
}

pub fn extract_company_info(
    search_response: &SearchResponse,
    company_name: &str,
    business_number: &str,
) -> CompanyInfo {
    CompanyInfo::from_answer(
        search_response.answer.as_deref(),
        company_name,
        business_number,
    )
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        company_info::{extract_company_info, CompanyInfo, NO_INFO},
        search_response::SearchResponse,
    };

    const NAME: &str = "오리온";
    const NUMBER: &str = "1018100340";

    fn extract_answer(answer: &str) -> CompanyInfo {
        extract_company_info(&SearchResponse::with_answer(answer), NAME, NUMBER)
    }

    #[test]
    fn json_answer_with_both_keys() {
        let info = extract_answer(
            r#"{"description": "Leading snack maker", "url": "https://example.com"}"#,
        );

        assert_eq!(
            info,
            CompanyInfo {
                company_name: NAME.to_string(),
                business_number: NUMBER.to_string(),
                website: "https://example.com".to_string(),
                description: "Leading snack maker".to_string(),
            }
        );
    }

    #[test]
    fn plain_text_answer_becomes_description() {
        let info = extract_answer("Not JSON at all");

        assert_eq!(info.description, "Not JSON at all");
        assert_eq!(info.website, NO_INFO);
    }

    #[test]
    fn fenced_json_is_not_json() {
        let answer = "```json\n{\"description\": \"Snacks\", \"url\": \"https://example.com\"}\n```";
        let info = extract_answer(answer);

        assert_eq!(info.description, answer);
        assert_eq!(info.website, NO_INFO);
    }

    #[test]
    fn missing_answer() {
        let info = extract_company_info(&SearchResponse::default(), NAME, NUMBER);

        assert_eq!(info.description, "");
        assert_eq!(info.website, NO_INFO);
    }

    #[test]
    fn empty_answer() {
        let info = extract_answer("");

        assert_eq!(info.description, "");
        assert_eq!(info.website, NO_INFO);
    }

    #[test]
    fn json_answer_missing_keys() {
        let info = extract_answer(r#"{"description": "Snacks"}"#);
        assert_eq!(info.description, "Snacks");
        assert_eq!(info.website, NO_INFO);

        let info = extract_answer(r#"{"url": "https://example.com"}"#);
        assert_eq!(info.description, "");
        assert_eq!(info.website, "https://example.com");
    }

    #[test]
    fn empty_url_is_kept_verbatim() {
        let info = extract_answer(r#"{"description": "Snacks", "url": ""}"#);

        assert_eq!(info.description, "Snacks");
        assert_eq!(info.website, "");
    }

    #[test]
    fn website_key_is_ignored() {
        let info = extract_answer(r#"{"description": "Snacks", "website": "https://example.com"}"#);

        assert_eq!(info.website, NO_INFO);
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let info = extract_answer(r#"{"description": null, "url": null}"#);

        assert_eq!(info.description, "");
        assert_eq!(info.website, NO_INFO);
    }

    #[test]
    fn non_string_fields_are_rendered_as_json() {
        let info = extract_answer(r#"{"description": ["snacks", "drinks"], "url": 42}"#);

        assert_eq!(info.description, r#"["snacks","drinks"]"#);
        assert_eq!(info.website, "42");
    }

    #[test]
    fn non_object_json_uses_defaults() {
        for answer in [r#""hello""#, "42", "null", "[1,2]", "true"] {
            let info = extract_answer(answer);

            assert_eq!(info.description, "", "answer: {}", answer);
            assert_eq!(info.website, NO_INFO, "answer: {}", answer);
        }
    }

    #[test]
    fn caller_values_pass_through_on_every_path() {
        let name = " 주식회사 오리온 ";
        let number = "101-81-00340";

        for answer in [
            Some(r#"{"description": "x", "url": "y"}"#),
            Some("prose"),
            Some("[1,2]"),
            Some(""),
            None,
        ] {
            let info = CompanyInfo::from_answer(answer, name, number);

            assert_eq!(info.company_name, name);
            assert_eq!(info.business_number, number);
        }
    }

    #[test]
    fn serializes_all_four_keys() {
        let info = extract_answer("prose");
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "company_name": NAME,
                "business_number": NUMBER,
                "website": NO_INFO,
                "description": "prose",
            })
        );
    }
}
