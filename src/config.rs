use crate::LabseedError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct LabseedConfig {
    #[serde(default)]
    pub sink: SinkConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Connection settings for the trace-store the seeder uploads to.
#[derive(Debug, Deserialize, Clone)]
pub struct SinkConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub workspace: Option<String>,
    #[serde(default = "default_project")]
    pub project: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_flush_timeout")]
    pub flush_timeout_secs: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            workspace: None,
            project: default_project(),
            timeout_secs: default_timeout(),
            flush_timeout_secs: default_flush_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5173/api".into()
}

fn default_project() -> String {
    "OhmSweetOhm-Support-Chatbot".into()
}

fn default_timeout() -> u64 {
    30
}

fn default_flush_timeout() -> u64 {
    10
}

/// Shape of the synthesized history: how many threads, how far back,
/// and what model the fake LLM steps claim to be.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    #[serde(default = "default_sessions")]
    pub sessions: usize,
    #[serde(default = "default_days_back")]
    pub days_back: u32,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            sessions: default_sessions(),
            days_back: default_days_back(),
            model: default_model(),
            provider: default_provider(),
        }
    }
}

fn default_sessions() -> usize {
    75
}

fn default_days_back() -> u32 {
    30
}

fn default_model() -> String {
    "gpt-5".into()
}

fn default_provider() -> String {
    "openai".into()
}

/// Load config from LABSEED_CONFIG env var, ~/.labseed/config.toml, or defaults.
pub fn load_config() -> Result<LabseedConfig, LabseedError> {
    let path = config_path();
    match path {
        Some(p) if p.exists() => {
            let content = std::fs::read_to_string(&p)?;
            let config: LabseedConfig = toml::from_str(&content)
                .map_err(|e| LabseedError::Config(format!("{}: {e}", p.display())))?;
            validate_config(&config)?;
            Ok(config)
        }
        _ => Ok(LabseedConfig::default()),
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("LABSEED_CONFIG") {
        return Some(PathBuf::from(p));
    }
    let home = std::env::var("HOME").ok()?;
    Some(Path::new(&home).join(".labseed").join("config.toml"))
}

fn validate_config(config: &LabseedConfig) -> Result<(), LabseedError> {
    let url = &config.sink.base_url;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(LabseedError::Config(format!(
            "sink.base_url must be an http(s) URL, got {url:?}"
        )));
    }
    if config.sink.project.trim().is_empty() {
        return Err(LabseedError::Config("sink.project must not be empty".into()));
    }
    if config.seed.sessions == 0 {
        return Err(LabseedError::Config("seed.sessions must be at least 1".into()));
    }
    if config.seed.days_back == 0 {
        return Err(LabseedError::Config("seed.days_back must be at least 1".into()));
    }
    Ok(())
}

/// API key: LABSEED_API_KEY env var > config file > none (self-hosted sinks need no key).
pub fn resolve_api_key(config: &SinkConfig) -> Option<String> {
    if let Ok(k) = std::env::var("LABSEED_API_KEY")
        && !k.is_empty()
    {
        return Some(k);
    }
    config.api_key.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_when_no_file() {
        let config = LabseedConfig::default();
        assert_eq!(config.sink.base_url, "http://localhost:5173/api");
        assert_eq!(config.sink.project, "OhmSweetOhm-Support-Chatbot");
        assert_eq!(config.sink.timeout_secs, 30);
        assert_eq!(config.sink.flush_timeout_secs, 10);
        assert!(config.sink.api_key.is_none());
        assert_eq!(config.seed.sessions, 75);
        assert_eq!(config.seed.days_back, 30);
        assert_eq!(config.seed.model, "gpt-5");
        assert_eq!(config.seed.provider, "openai");
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[sink]
base_url = "https://traces.example.com/api"
api_key = "sk-demo"
workspace = "showcase"
project = "OhmBot-Staging"
timeout_secs = 15
flush_timeout_secs = 5

[seed]
sessions = 10
days_back = 7
model = "gpt-4o"
provider = "azure"
"#;
        let config: LabseedConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sink.base_url, "https://traces.example.com/api");
        assert_eq!(config.sink.api_key.as_deref(), Some("sk-demo"));
        assert_eq!(config.sink.workspace.as_deref(), Some("showcase"));
        assert_eq!(config.sink.project, "OhmBot-Staging");
        assert_eq!(config.sink.timeout_secs, 15);
        assert_eq!(config.seed.sessions, 10);
        assert_eq!(config.seed.days_back, 7);
        assert_eq!(config.seed.model, "gpt-4o");
        assert_eq!(config.seed.provider, "azure");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: LabseedConfig = toml::from_str(
            r#"
[seed]
sessions = 5
"#,
        )
        .unwrap();
        assert_eq!(config.seed.sessions, 5);
        assert_eq!(config.seed.days_back, 30);
        assert_eq!(config.sink.base_url, "http://localhost:5173/api");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config: LabseedConfig = toml::from_str(
            r#"
[sink]
base_url = "traces.example.com"
"#,
        )
        .unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_zero_sessions() {
        let config: LabseedConfig = toml::from_str(
            r#"
[seed]
sessions = 0
"#,
        )
        .unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_empty_project() {
        let config: LabseedConfig = toml::from_str(
            r#"
[sink]
project = "  "
"#,
        )
        .unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn api_key_from_config_when_env_unset() {
        // Tests run in parallel; only assert the config-file path here and
        // leave LABSEED_API_KEY manipulation to the integration suite.
        let sink = SinkConfig {
            api_key: Some("file-key".into()),
            ..Default::default()
        };
        if std::env::var("LABSEED_API_KEY").is_err() {
            assert_eq!(resolve_api_key(&sink).as_deref(), Some("file-key"));
        }
    }
}
