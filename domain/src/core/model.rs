//! Model value object representing an LLM model

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported LLM models (Value Object)
///
/// The chatbot supports exactly these three OpenAI chat models. Unknown
/// identifiers are rejected at parse time rather than passed through,
/// so a typo surfaces before any API call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4oMini,
    Gpt4,
    Gpt35Turbo,
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4 => "gpt-4",
            Model::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }

    /// All supported models, in selector order
    pub fn all() -> [Model; 3] {
        [Model::Gpt4oMini, Model::Gpt4, Model::Gpt35Turbo]
    }
}

impl Default for Model {
    /// Returns the default model (gpt-3.5-turbo)
    fn default() -> Self {
        Model::Gpt35Turbo
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpt-4o-mini" => Ok(Model::Gpt4oMini),
            "gpt-4" => Ok(Model::Gpt4),
            "gpt-3.5-turbo" => Ok(Model::Gpt35Turbo),
            other => Err(DomainError::InvalidModel(other.to_string())),
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::all() {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_unknown_model_rejected() {
        let result: Result<Model, _> = "gpt-9000".parse();
        assert!(matches!(result, Err(DomainError::InvalidModel(_))));
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gpt35Turbo);
    }

    #[test]
    fn test_model_serde_as_string() {
        let json = serde_json::to_string(&Model::Gpt4oMini).unwrap();
        assert_eq!(json, "\"gpt-4o-mini\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::Gpt4oMini);
    }
}
