use calorielens_core::domain::common::{
    CalorieLensConfig, DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, LLMConfig,
};
use clap::{ArgAction, Args as ClapArgs, Parser};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "CalorieLens meal analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 7860)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:7860"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "server-metrics-enabled",
        env = "SERVER_METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "llm-api-key", env = "MODELSCOPE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL", default_value = DEFAULT_LLM_BASE_URL)]
    pub base_url: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub model: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.3)]
    pub temperature: f32,

    #[arg(long = "llm-max-tokens", env = "LLM_MAX_TOKENS", default_value_t = 2000)]
    pub max_tokens: u32,

    /// Stream the reply over SSE and accumulate it before parsing
    #[arg(long = "llm-stream", env = "LLM_STREAM", default_value_t = false, action = ArgAction::Set)]
    pub stream: bool,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<LlmArgs> for LLMConfig {
    fn from(args: LlmArgs) -> Self {
        LLMConfig {
            api_key: args.api_key,
            base_url: args.base_url,
            model: args.model,
            temperature: args.temperature,
            max_tokens: args.max_tokens,
            stream: args.stream,
            timeout_secs: args.timeout_secs,
        }
    }
}

impl From<Args> for CalorieLensConfig {
    fn from(args: Args) -> Self {
        CalorieLensConfig {
            llm: LLMConfig::from(args.llm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "calorielens-api",
            "--server-port",
            "8080",
            "--server-allowed-origins",
            "http://a.test,http://b.test",
            "--llm-api-key",
            "ms-key",
            "--llm-stream",
            "true",
        ])
        .unwrap();

        assert_eq!(args.server.port, 8080);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );

        let config = CalorieLensConfig::from(args);
        assert_eq!(config.llm.credential(), Some("ms-key"));
        assert!(config.llm.stream);
    }
}
