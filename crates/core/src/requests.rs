//! Wire contracts shared by the HTTP server and the CLI.
//!
//! Missing request fields decode to empty values so that `validate` reports
//! them instead of the JSON decoder.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::recommend::LinksByCategory;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendRequest {
    pub skin_type: String,
    #[serde(alias = "products")]
    pub categories: Vec<String>,
}

impl RecommendRequest {
    pub fn new(skin_type: impl Into<String>, categories: Vec<String>) -> Self {
        Self { skin_type: skin_type.into(), categories }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_skin_type(&self.skin_type)?;
        if self.categories.is_empty() {
            return Err(ValidationError::MissingCategories);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub skin_type: String,
    pub categories: Vec<String>,
    pub links_by_category: LinksByCategory,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    #[serde(alias = "q")]
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutineRequest {
    pub skin_type: String,
    pub concerns: Vec<String>,
}

impl RoutineRequest {
    pub fn new(skin_type: impl Into<String>, concerns: Vec<String>) -> Self {
        Self { skin_type: skin_type.into(), concerns }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_skin_type(&self.skin_type)
    }
}

fn require_skin_type(skin_type: &str) -> Result<(), ValidationError> {
    if skin_type.trim().is_empty() {
        return Err(ValidationError::MissingSkinType);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ChatRequest, RecommendRequest, RoutineRequest};
    use crate::errors::ValidationError;

    #[test]
    fn recommend_request_accepts_legacy_products_field() {
        let request: RecommendRequest =
            serde_json::from_str(r#"{"skinType":"oily","products":["toner"]}"#).expect("decode");

        assert_eq!(request.categories, vec!["toner".to_string()]);
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn recommend_request_requires_skin_type_and_categories() {
        let missing_skin: RecommendRequest =
            serde_json::from_str(r#"{"categories":["toner"]}"#).expect("decode");
        assert_eq!(missing_skin.validate(), Err(ValidationError::MissingSkinType));

        let blank_skin = RecommendRequest::new("   ", vec!["toner".to_string()]);
        assert_eq!(blank_skin.validate(), Err(ValidationError::MissingSkinType));

        let no_categories = RecommendRequest::new("oily", Vec::new());
        assert_eq!(no_categories.validate(), Err(ValidationError::MissingCategories));
    }

    #[test]
    fn chat_request_accepts_q_alias_and_missing_text() {
        let legacy: ChatRequest = serde_json::from_str(r#"{"q":"spf?"}"#).expect("decode");
        assert_eq!(legacy.text, "spf?");

        let empty: ChatRequest = serde_json::from_str("{}").expect("decode");
        assert!(empty.text.is_empty());
    }

    #[test]
    fn routine_request_allows_empty_concerns() {
        let request: RoutineRequest =
            serde_json::from_str(r#"{"skinType":"dry"}"#).expect("decode");

        assert!(request.concerns.is_empty());
        assert_eq!(request.validate(), Ok(()));
        assert_eq!(
            RoutineRequest::new("", Vec::new()).validate(),
            Err(ValidationError::MissingSkinType)
        );
    }
}
