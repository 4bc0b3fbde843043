use crate::error::RelayError;
use clap::Parser;

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const MODEL_ID: &str = "x-ai/grok-4-fast:free";
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "chat-relay", version, about = "Relay chat messages to an OpenRouter model")]
pub struct CliArgs {
    /// Host address to bind the server to
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// OpenRouter API key
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log filter, e.g. "info" or "chat_relay=debug"
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub upstream_url: String,
    pub model: String,
    pub timeout: u64,
}

impl RelayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        RelayConfig {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            api_key: api_key.into(),
            upstream_url: OPENROUTER_URL.to_string(),
            model: MODEL_ID.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = url.into();
        self
    }

    /// Overrides the fixed upstream timeout. Not reachable from the CLI.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

impl TryFrom<CliArgs> for RelayConfig {
    type Error = RelayError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_key = match args.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(RelayError::Configuration(
                    "OPENROUTER_API_KEY environment variable is not set".to_string(),
                ));
            }
        };
        Ok(RelayConfig {
            host: args.host,
            port: args.port,
            ..RelayConfig::new(api_key)
        })
    }
}
