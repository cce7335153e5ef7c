use serde_json::{Map, Value, json};

use showscribe::application::services::{ConfigError, resolve};
use showscribe::domain::{LlmProvider, TranscriptionProvider};

fn request(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[test]
fn given_each_llm_key_when_resolving_then_that_backend_is_selected() {
    let cases = [
        ("chatgpt", LlmProvider::ChatGpt),
        ("claude", LlmProvider::Claude),
        ("cohere", LlmProvider::Cohere),
        ("mistral", LlmProvider::Mistral),
        ("octo", LlmProvider::Octo),
        ("llama", LlmProvider::Llama),
        ("ollama", LlmProvider::Ollama),
        ("gemini", LlmProvider::Gemini),
        ("deepseek", LlmProvider::DeepSeek),
        ("fireworks", LlmProvider::Fireworks),
    ];

    for (key, expected) in cases {
        let config = resolve(&request(&[(key, json!(true))])).unwrap();
        let selection = config.llm.expect("llm backend should be selected");
        assert_eq!(selection.provider, expected, "key: {}", key);
        assert_eq!(selection.model, None, "key: {}", key);
    }
}

#[test]
fn given_llm_key_with_model_string_when_resolving_then_model_is_carried() {
    let config = resolve(&request(&[("claude", json!("claude-3-opus"))])).unwrap();

    let selection = config.llm.unwrap();
    assert_eq!(selection.provider, LlmProvider::Claude);
    assert_eq!(selection.model.as_deref(), Some("claude-3-opus"));
}

#[test]
fn given_no_llm_key_when_resolving_then_llm_stage_is_disabled() {
    let config = resolve(&request(&[("whisper", json!("base"))])).unwrap();

    assert!(config.llm.is_none());
}

#[test]
fn given_unrecognized_keys_when_resolving_then_they_are_ignored() {
    let config = resolve(&request(&[
        ("someFutureOption", json!("value")),
        ("anotherOne", json!(42)),
    ]))
    .unwrap();

    assert!(config.llm.is_none());
    assert_eq!(config.transcription.provider, TranscriptionProvider::Whisper);
}

#[test]
fn given_no_transcription_key_when_resolving_then_whisper_base_is_the_default() {
    let config = resolve(&request(&[("chatgpt", json!(true))])).unwrap();

    assert_eq!(config.transcription.provider, TranscriptionProvider::Whisper);
    assert_eq!(config.transcription.model.as_deref(), Some("base"));
}

#[test]
fn given_whisper_key_with_model_when_resolving_then_model_overrides_base() {
    let config = resolve(&request(&[("whisper", json!("large-v3"))])).unwrap();

    assert_eq!(config.transcription.provider, TranscriptionProvider::Whisper);
    assert_eq!(config.transcription.model.as_deref(), Some("large-v3"));
}

#[test]
fn given_each_transcription_key_when_resolving_then_that_backend_is_selected() {
    let cases = [
        ("whisper", TranscriptionProvider::Whisper),
        ("whisperDocker", TranscriptionProvider::WhisperDocker),
        ("deepgram", TranscriptionProvider::Deepgram),
        ("assembly", TranscriptionProvider::Assembly),
    ];

    for (key, expected) in cases {
        let config = resolve(&request(&[(key, json!(true))])).unwrap();
        assert_eq!(config.transcription.provider, expected, "key: {}", key);
    }
}

#[test]
fn given_pass_through_flags_when_resolving_then_they_are_copied_verbatim() {
    let config = resolve(&request(&[
        ("speakerLabels", json!(true)),
        ("prompt", json!("custom instructions")),
        ("noCleanUp", json!(true)),
        ("order", json!("newest")),
        ("skip", json!(3)),
        ("info", json!(true)),
        ("item", json!("https://example.com/item.mp3")),
    ]))
    .unwrap();

    assert!(config.speaker_labels);
    assert_eq!(config.prompt.as_deref(), Some("custom instructions"));
    assert!(config.no_clean_up);
    assert_eq!(config.order.as_deref(), Some("newest"));
    assert_eq!(config.skip, Some(3));
    assert!(config.info);
    assert_eq!(config.item.as_deref(), Some("https://example.com/item.mp3"));
}

#[test]
fn given_absent_flags_when_resolving_then_defaults_apply() {
    let config = resolve(&request(&[("whisper", json!(true))])).unwrap();

    assert!(!config.speaker_labels);
    assert!(config.prompt.is_none());
    assert!(!config.no_clean_up);
    assert!(config.order.is_none());
    assert!(config.skip.is_none());
    assert!(!config.info);
    assert!(config.item.is_none());
}

#[test]
fn given_empty_request_when_resolving_then_it_is_rejected() {
    let result = resolve(&Map::new());

    assert_eq!(result.unwrap_err(), ConfigError::EmptyRequest);
}

#[test]
fn given_multiple_llm_keys_when_resolving_then_enumeration_order_wins() {
    let config = resolve(&request(&[
        ("gemini", json!(true)),
        ("chatgpt", json!(true)),
    ]))
    .unwrap();

    assert_eq!(config.llm.unwrap().provider, LlmProvider::ChatGpt);
}

#[test]
fn given_false_valued_llm_key_when_resolving_then_it_does_not_select() {
    let config = resolve(&request(&[
        ("chatgpt", json!(false)),
        ("claude", json!(true)),
    ]))
    .unwrap();

    assert_eq!(config.llm.unwrap().provider, LlmProvider::Claude);
}

#[test]
fn given_identical_requests_when_resolving_then_results_are_identical() {
    let input = request(&[
        ("deepgram", json!(true)),
        ("claude", json!("claude-3-5-haiku")),
        ("speakerLabels", json!(true)),
    ]);

    assert_eq!(resolve(&input).unwrap(), resolve(&input).unwrap());
}
