//! Request body parsing.
//!
//! Bodies arrive as raw text so that a missing body, malformed JSON and an
//! empty object can all be reported as a 400 with a JSON error message.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use ideabox_types::{IdeaPatch, IdeaReplace, NewIdea};

use crate::error::ApiError;

const EMPTY_BODY: &str = "missing request data";

/// Body of `POST /api/ideas`.
#[derive(Debug, Deserialize)]
struct CreateIdeaBody {
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
    date: Option<String>,
    completed: Option<bool>,
}

/// Body of `PUT /api/ideas/{id}`. Any `date` or `completed` is ignored.
#[derive(Debug, Deserialize)]
struct ReplaceIdeaBody {
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
}

/// Parses the body into a non-empty JSON object.
fn parse_object(body: &str) -> Result<Map<String, Value>, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::BadRequest(EMPTY_BODY.to_string()));
    }
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON: {e}")))?;
    match value {
        Value::Null => Err(ApiError::BadRequest(EMPTY_BODY.to_string())),
        Value::Object(map) if map.is_empty() => Err(ApiError::BadRequest(EMPTY_BODY.to_string())),
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        )),
    }
}

fn decode<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(map))
        .map_err(|e| ApiError::BadRequest(format!("invalid field: {e}")))
}

fn required(title: Option<String>, content: Option<String>) -> Result<(String, String), ApiError> {
    match (title, content) {
        (Some(title), Some(content)) => Ok((title, content)),
        _ => Err(ApiError::BadRequest(
            "title and content are required".to_string(),
        )),
    }
}

/// Parses a create request, filling in defaults for omitted fields.
pub(crate) fn parse_new_idea(body: &str) -> Result<NewIdea, ApiError> {
    let raw: CreateIdeaBody = decode(parse_object(body)?)?;
    let (title, content) = required(raw.title, raw.content)?;
    let mut idea = NewIdea::new(title, content);
    if let Some(category) = raw.category {
        idea = idea.with_category(category);
    }
    if let Some(date) = raw.date {
        idea = idea.with_date(date);
    }
    if let Some(completed) = raw.completed {
        idea = idea.with_completed(completed);
    }
    Ok(idea)
}

/// Parses a full-update request.
pub(crate) fn parse_replace(body: &str) -> Result<IdeaReplace, ApiError> {
    let raw: ReplaceIdeaBody = decode(parse_object(body)?)?;
    let (title, content) = required(raw.title, raw.content)?;
    Ok(IdeaReplace::new(title, content, raw.category))
}

/// Parses a partial-update request. Unrecognized keys are ignored, so the
/// resulting patch may be empty.
pub(crate) fn parse_patch(body: &str) -> Result<IdeaPatch, ApiError> {
    decode(parse_object(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_with_required_fields_only() {
        let idea = parse_new_idea(r#"{"title":"t","content":"c"}"#).expect("parse");
        assert_eq!(idea.category, "ideia");
        assert!(!idea.completed);
    }

    #[test]
    fn create_keeps_supplied_values() {
        let idea = parse_new_idea(
            r#"{"title":"t","content":"c","category":"meta","date":"2024-01-02","completed":true}"#,
        )
        .expect("parse");
        assert_eq!(idea.category, "meta");
        assert_eq!(idea.date, "2024-01-02");
        assert!(idea.completed);
    }

    #[test]
    fn create_missing_content_rejected() {
        let err = parse_new_idea(r#"{"title":"t"}"#).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn empty_bodies_rejected() {
        for body in ["", "   ", "null", "{}"] {
            let err = parse_patch(body).unwrap_err();
            assert_eq!(err.to_string(), EMPTY_BODY, "body {body:?}");
        }
    }

    #[test]
    fn malformed_json_rejected() {
        let err = parse_new_idea("{title:").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn non_object_rejected() {
        assert!(parse_replace("[1,2]").is_err());
    }

    #[test]
    fn wrong_field_type_rejected() {
        let err = parse_patch(r#"{"completed":"yes"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid field"));
    }

    #[test]
    fn replace_ignores_date_and_completed() {
        let r = parse_replace(r#"{"title":"t","content":"c","completed":true,"date":"x"}"#)
            .expect("parse");
        assert_eq!(r.category, "ideia");
    }

    #[test]
    fn patch_with_only_unknown_keys_is_empty() {
        let patch = parse_patch(r#"{"date":"2024-01-01"}"#).expect("parse");
        assert!(patch.is_empty());
    }
}
