//! Supported model identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::ConfigurationValidationError;

/// Closed set of models a configuration may target.
///
/// Adding a model means adding a variant here and to [`SupportedModel::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SupportedModel {
    #[default]
    Gpt4,
    Gpt4Turbo,
    Gpt35Turbo,
    Claude3Opus,
    Claude3Sonnet,
    Claude3Haiku,
    GeminiPro,
    Gemini15Pro,
    Llama2_70b,
    Llama2_13b,
}

impl SupportedModel {
    /// Every supported model, in presentation order
    pub const ALL: [SupportedModel; 10] = [
        Self::Gpt4,
        Self::Gpt4Turbo,
        Self::Gpt35Turbo,
        Self::Claude3Opus,
        Self::Claude3Sonnet,
        Self::Claude3Haiku,
        Self::GeminiPro,
        Self::Gemini15Pro,
        Self::Llama2_70b,
        Self::Llama2_13b,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gpt4 => "gpt-4",
            Self::Gpt4Turbo => "gpt-4-turbo",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
            Self::Claude3Opus => "claude-3-opus",
            Self::Claude3Sonnet => "claude-3-sonnet",
            Self::Claude3Haiku => "claude-3-haiku",
            Self::GeminiPro => "gemini-pro",
            Self::Gemini15Pro => "gemini-1.5-pro",
            Self::Llama2_70b => "llama-2-70b",
            Self::Llama2_13b => "llama-2-13b",
        }
    }

    /// Check whether an identifier names a supported model (exact match)
    pub fn is_supported(model: &str) -> bool {
        Self::ALL.iter().any(|m| m.as_str() == model)
    }
}

impl FromStr for SupportedModel {
    type Err = ConfigurationValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or(ConfigurationValidationError::InvalidModel)
    }
}

impl TryFrom<String> for SupportedModel {
    type Error = ConfigurationValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SupportedModel> for String {
    fn from(model: SupportedModel) -> Self {
        model.as_str().to_string()
    }
}

impl fmt::Display for SupportedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for model in SupportedModel::ALL {
            assert_eq!(model.as_str().parse::<SupportedModel>(), Ok(model));
        }
    }

    #[test]
    fn test_is_supported() {
        assert!(SupportedModel::is_supported("gpt-4"));
        assert!(SupportedModel::is_supported("gemini-1.5-pro"));
        assert!(!SupportedModel::is_supported("gpt-5"));
        assert!(!SupportedModel::is_supported("GPT-4"));
        assert!(!SupportedModel::is_supported(" gpt-4"));
        assert!(!SupportedModel::is_supported(""));
    }

    #[test]
    fn test_default_is_gpt4() {
        assert_eq!(SupportedModel::default().as_str(), "gpt-4");
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&SupportedModel::Claude3Haiku).unwrap();
        assert_eq!(json, "\"claude-3-haiku\"");

        let parsed: SupportedModel = serde_json::from_str("\"llama-2-13b\"").unwrap();
        assert_eq!(parsed, SupportedModel::Llama2_13b);

        assert!(serde_json::from_str::<SupportedModel>("\"mistral\"").is_err());
    }
}
