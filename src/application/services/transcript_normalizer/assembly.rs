use super::format_timestamp;
use crate::application::ports::AssemblyTranscript;
use crate::domain::CanonicalTranscript;

/// Soft limit on a line's word content before its timestamp prefix.
const LINE_WIDTH: usize = 80;

/// Three-tier fallback over the shapes an Assembly-family result can take:
/// utterances, then the flat word list, then the plain text field. The word
/// path never fails; an entirely empty result yields a placeholder line.
pub(super) fn normalize(
    transcript: &AssemblyTranscript,
    speaker_labels: bool,
) -> CanonicalTranscript {
    if let Some(utterances) = transcript
        .utterances
        .as_deref()
        .filter(|utterances| !utterances.is_empty())
    {
        let lines: Vec<String> = utterances
            .iter()
            .map(|utterance| {
                let speaker = if speaker_labels {
                    format!("Speaker {} ", utterance.speaker)
                } else {
                    String::new()
                };
                format!(
                    "{}({}): {}",
                    speaker,
                    format_timestamp(utterance.start),
                    utterance.text
                )
            })
            .collect();
        return CanonicalTranscript::new(lines.join("\n"));
    }

    if let Some(words) = transcript.words.as_deref().filter(|words| !words.is_empty()) {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut stamp = format_timestamp(words[0].start);
        for word in words {
            if current.len() + word.text.len() > LINE_WIDTH {
                lines.push(format!("[{}] {}", stamp, current.trim_end()));
                current.clear();
                stamp = format_timestamp(word.start);
            }
            current.push_str(&word.text);
            current.push(' ');
        }
        if !current.is_empty() {
            lines.push(format!("[{}] {}", stamp, current.trim_end()));
        }
        return CanonicalTranscript::new(lines.join("\n"));
    }

    match transcript.text.as_deref() {
        Some(text) if !text.is_empty() => CanonicalTranscript::new(text),
        _ => CanonicalTranscript::new("No transcription available."),
    }
}
