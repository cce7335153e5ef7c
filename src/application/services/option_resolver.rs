use serde_json::{Map, Value};

use crate::domain::{
    JobConfig, LlmProvider, LlmSelection, TranscriptionProvider, TranscriptionSelection,
};

/// Turn an untyped flat request map into a canonical [`JobConfig`].
///
/// Backend keys are checked in enumeration order and the first present one
/// wins. A request naming no LLM backend disables the LLM stage, which is a
/// valid outcome, not an error. Unrecognized keys are ignored so callers can
/// send newer options to older deployments.
pub fn resolve(request: &Map<String, Value>) -> Result<JobConfig, ConfigError> {
    if request.is_empty() {
        return Err(ConfigError::EmptyRequest);
    }

    let llm = LlmProvider::ALL.iter().find_map(|provider| {
        let value = request.get(provider.as_str())?;
        selected_model(value).map(|model| LlmSelection {
            provider: *provider,
            model,
        })
    });

    let mut transcription = TranscriptionProvider::ALL
        .iter()
        .find_map(|provider| {
            let value = request.get(provider.as_str())?;
            selected_model(value).map(|model| TranscriptionSelection {
                provider: *provider,
                model,
            })
        })
        .unwrap_or(TranscriptionSelection {
            provider: TranscriptionProvider::Whisper,
            model: None,
        });
    if transcription.model.is_none()
        && matches!(
            transcription.provider,
            TranscriptionProvider::Whisper | TranscriptionProvider::WhisperDocker
        )
    {
        transcription.model = Some("base".to_string());
    }

    Ok(JobConfig {
        transcription,
        llm,
        speaker_labels: bool_flag(request, "speakerLabels"),
        prompt: string_flag(request, "prompt"),
        no_clean_up: bool_flag(request, "noCleanUp"),
        order: string_flag(request, "order"),
        skip: request.get("skip").and_then(Value::as_u64),
        info: bool_flag(request, "info"),
        item: string_flag(request, "item"),
    })
}

/// `None` when the key's value does not select the backend at all (false or
/// null); `Some(None)` selects it with the default model; `Some(Some(_))`
/// carries an explicit model.
fn selected_model(value: &Value) -> Option<Option<String>> {
    match value {
        Value::Bool(false) | Value::Null => None,
        Value::String(model) if !model.is_empty() => Some(Some(model.clone())),
        _ => Some(None),
    }
}

fn bool_flag(request: &Map<String, Value>, key: &str) -> bool {
    request.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn string_flag(request: &Map<String, Value>, key: &str) -> Option<String> {
    request
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("empty request: no options provided")]
    EmptyRequest,
}
