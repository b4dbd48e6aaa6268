pub mod entities;
pub mod services;

pub const DEFAULT_LLM_BASE_URL: &str = "https://api-inference.modelscope.cn/v1";
pub const DEFAULT_LLM_MODEL: &str = "Qwen/Qwen3-32B";

#[derive(Clone, Debug)]
pub struct CalorieLensConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            temperature: 0.3,
            max_tokens: 2000,
            stream: false,
            timeout_secs: 120,
        }
    }
}

impl LLMConfig {
    /// The credential, if one is set and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = LLMConfig {
            api_key: Some("   ".to_string()),
            ..LLMConfig::default()
        };

        assert_eq!(config.credential(), None);
    }

    #[test]
    fn api_key_is_trimmed() {
        let config = LLMConfig {
            api_key: Some(" ms-123 \n".to_string()),
            ..LLMConfig::default()
        };

        assert_eq!(config.credential(), Some("ms-123"));
    }
}
