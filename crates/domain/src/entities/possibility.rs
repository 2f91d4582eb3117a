//! Possibility entity - a named outcome or ingredient referenced by artifacts

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;
use crate::ids::PossibilityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Possibility {
    pub id: PossibilityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Possibility {
    pub fn new(id: PossibilityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Lenient shape of a stored possibility.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPossibility {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawPossibility {
    /// Possibilities have no positional id fallback; both `id` and `name` are
    /// required.
    pub fn normalize(self) -> Result<Possibility, DomainError> {
        let id = self
            .id
            .ok_or_else(|| DomainError::validation("possibility id is required"))?;
        let name = self
            .name
            .ok_or_else(|| DomainError::validation("possibility name is required"))?;
        Ok(Possibility {
            id: PossibilityId::new(id),
            name,
            description: self.description,
        })
    }
}

pub fn normalize_possibilities(records: Vec<Value>) -> Result<Vec<Possibility>, DomainError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<RawPossibility>(value)
                .map_err(|e| DomainError::validation(e.to_string()))
                .and_then(RawPossibility::normalize)
                .map_err(|e| e.in_record("possibilities", index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn description_is_optional_both_ways() {
        let possibilities = normalize_possibilities(vec![
            json!({ "id": "dust", "name": "Dust" }),
            json!({ "id": "ash", "name": "Ash", "description": "grey" }),
        ])
        .expect("valid");

        assert_eq!(possibilities[0].description, None);
        assert_eq!(
            serde_json::to_value(&possibilities[0]).expect("serialize"),
            json!({ "id": "dust", "name": "Dust" })
        );
        assert_eq!(possibilities[1].description.as_deref(), Some("grey"));
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = normalize_possibilities(vec![json!({ "name": "Dust" })])
            .expect_err("id is required");
        assert_eq!(err.to_string(), "possibilities[0]: possibility id is required");
    }
}
