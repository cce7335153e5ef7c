use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub artifacts: ArtifactSettings,
    #[serde(default)]
    pub transcription: TranscriptionSettings,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layered load: optional `appsettings.<env>.json` file, then
    /// `SHOWSCRIBE__`-prefixed environment variables on top.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(EnvironmentSource::with_prefix("SHOWSCRIBE").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSettings {
    /// Directory all per-job temp files and finished documents land in.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    #[serde(default = "default_whisper_binary")]
    pub whisper_binary: String,
    #[serde(default = "default_whisper_model_dir")]
    pub whisper_model_dir: String,
    #[serde(default = "default_whisper_docker_image")]
    pub whisper_docker_image: String,
    #[serde(default)]
    pub deepgram_api_key: Option<String>,
    #[serde(default)]
    pub assembly_api_key: Option<String>,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            whisper_binary: default_whisper_binary(),
            whisper_model_dir: default_whisper_model_dir(),
            whisper_docker_image: default_whisper_docker_image(),
            deepgram_api_key: None,
            assembly_api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default)]
    pub cohere_api_key: Option<String>,
    #[serde(default)]
    pub mistral_api_key: Option<String>,
    #[serde(default)]
    pub octo_api_key: Option<String>,
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub deepseek_api_key: Option<String>,
    #[serde(default)]
    pub fireworks_api_key: Option<String>,
    #[serde(default = "default_ollama_base_url")]
    pub ollama_base_url: String,
    #[serde(default = "default_llama_base_url")]
    pub llama_base_url: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            anthropic_api_key: None,
            cohere_api_key: None,
            mistral_api_key: None,
            octo_api_key: None,
            gemini_api_key: None,
            deepseek_api_key: None,
            fireworks_api_key: None,
            ollama_base_url: default_ollama_base_url(),
            llama_base_url: default_llama_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            enable_json: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_dir() -> String {
    "content".to_string()
}

fn default_whisper_binary() -> String {
    "whisper-cli".to_string()
}

fn default_whisper_model_dir() -> String {
    "models".to_string()
}

fn default_whisper_docker_image() -> String {
    "ghcr.io/ggml-org/whisper.cpp:main".to_string()
}

fn default_ollama_base_url() -> String {
    "http://localhost:11434/v1".to_string()
}

fn default_llama_base_url() -> String {
    "http://localhost:8080/v1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
