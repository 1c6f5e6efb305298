// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// AI provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderType {
    #[default]
    Gemini,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

/// `[ai.gemini]` section
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: default_model(),
        }
    }
}

/// `[ai]` section
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub provider: AiProviderType,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            enabled: true,
            provider: AiProviderType::Gemini,
            gemini: GeminiConfig::default(),
        }
    }
}

/// `[sound]` section
#[derive(Debug, Clone, Deserialize)]
pub struct SoundConfig {
    #[serde(default)]
    pub muted: bool,
    #[serde(default = "default_true")]
    pub ambience: bool,
}

impl Default for SoundConfig {
    fn default() -> Self {
        SoundConfig {
            muted: false,
            ambience: true,
        }
    }
}

/// `[storage]` section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Overrides the default storage file location
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ai.enabled);
        assert_eq!(config.ai.provider, AiProviderType::Gemini);
        assert_eq!(config.ai.gemini.model, DEFAULT_GEMINI_MODEL);
        assert!(config.ai.gemini.api_key.is_none());
        assert!(!config.sound.muted);
        assert!(config.sound.ambience);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
[ai]
enabled = false
provider = "gemini"

[ai.gemini]
api_key = "AIza-test"
model = "gemini-2.0-flash"

[sound]
muted = true
ambience = false

[storage]
path = "/tmp/chisha.json"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(!config.ai.enabled);
        assert_eq!(config.ai.gemini.api_key.as_deref(), Some("AIza-test"));
        assert_eq!(config.ai.gemini.model, "gemini-2.0-flash");
        assert!(config.sound.muted);
        assert!(!config.sound.ambience);
        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/chisha.json")));
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[ai]\nprovider = \"openai\"\n");
        assert!(result.is_err());
    }

    // Missing optional fields always fall back to their defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_sound_section in prop::bool::ANY,
            include_muted in prop::bool::ANY,
            include_gemini_section in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_sound_section {
                toml_content.push_str("[sound]\n");
                if include_muted {
                    toml_content.push_str("muted = true\n");
                }
            }
            if include_gemini_section {
                toml_content.push_str("[ai.gemini]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let config = config.unwrap();

            prop_assert_eq!(config.sound.muted, include_sound_section && include_muted);
            prop_assert!(config.sound.ambience);
            prop_assert_eq!(config.ai.gemini.model.as_str(), DEFAULT_GEMINI_MODEL);
            prop_assert!(config.ai.enabled);
        }
    }
}
