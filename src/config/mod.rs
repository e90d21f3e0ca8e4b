use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::CoachError;

/// Provider names are matched case-insensitively, in the file and in
/// `COACH_PROVIDER` alike.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ProviderKind {
    #[default]
    Gemini,
    Claude,
}

impl FromStr for ProviderKind {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "claude" => Ok(ProviderKind::Claude),
            other => Err(CoachError::Config(format!("unknown provider: {other}"))),
        }
    }
}

impl TryFrom<String> for ProviderKind {
    type Error = CoachError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: consts::DEFAULT_HOST.to_string(),
            port: consts::DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub model_name: Option<String>,
    pub api_url: Option<String>,
    /// Name of the environment variable holding the credential.
    pub api_key_env: Option<String>,
    pub max_tokens: Option<u32>,
}

impl ProviderConfig {
    pub fn model_name(&self) -> &str {
        match (&self.model_name, self.kind) {
            (Some(name), _) => name.as_str(),
            (None, ProviderKind::Gemini) => consts::GEMINI_DEFAULT_MODEL,
            (None, ProviderKind::Claude) => consts::CLAUDE_DEFAULT_MODEL,
        }
    }

    pub fn api_url(&self) -> &str {
        let url = match (&self.api_url, self.kind) {
            (Some(url), _) => url.as_str(),
            (None, ProviderKind::Gemini) => consts::GEMINI_DEFAULT_URL,
            (None, ProviderKind::Claude) => consts::CLAUDE_DEFAULT_URL,
        };
        url.trim_end_matches('/')
    }

    pub fn api_key_env(&self) -> &str {
        match (&self.api_key_env, self.kind) {
            (Some(var), _) => var.as_str(),
            (None, ProviderKind::Gemini) => consts::GEMINI_KEY_ENV,
            (None, ProviderKind::Claude) => consts::CLAUDE_KEY_ENV,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(consts::DEFAULT_MAX_TOKENS)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    /// Resolved credential; never read from or written to the file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, CoachError>;
}

/// Reads the JSON file named by `COACH_CONFIG_FILE`, then applies
/// environment overrides and resolves the provider credential.
pub struct FileConfigLoader;

impl FileConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, CoachError> {
        let config_file = std::env::var(consts::CONFIG_FILE_ENV)
            .unwrap_or(consts::DEFAULT_CONFIG_FILE.to_string());

        let mut config = match std::fs::read_to_string(&config_file) {
            Ok(config_str) => parse_config(&config_str)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("config file {config_file} not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(e.into()),
        };

        apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
        Ok(config)
    }
}

pub(crate) fn parse_config(config_str: &str) -> Result<Config, CoachError> {
    serde_json::from_str(config_str).map_err(|e| CoachError::Config(e.to_string()))
}

/// Applies `COACH_*` overrides and resolves the credential through `lookup`.
/// A missing or empty credential is kept as `None`.
pub(crate) fn apply_env_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), CoachError> {
    if let Some(provider) = lookup(consts::PROVIDER_ENV) {
        let kind: ProviderKind = provider.parse()?;
        if kind != config.provider.kind {
            // Model, URL and key variable from the file belong to the old provider.
            log::info!("provider overridden to {kind:?}, using its defaults");
            config.provider = ProviderConfig {
                kind,
                max_tokens: config.provider.max_tokens,
                ..ProviderConfig::default()
            };
        }
    }
    if let Some(host) = lookup(consts::HOST_ENV) {
        config.server.host = host;
    }
    if let Some(port) = lookup(consts::PORT_ENV) {
        config.server.port = port
            .parse()
            .map_err(|_| CoachError::Config(format!("invalid port: {port}")))?;
    }

    config.api_key = lookup(config.provider.api_key_env()).filter(|key| !key.trim().is_empty());
    Ok(())
}

pub fn load_config() -> Result<Config, CoachError> {
    let loader = FileConfigLoader::new();
    loader.load_config()
}
