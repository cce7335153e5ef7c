use super::FormattingError;
use crate::application::ports::DeepgramWord;
use crate::domain::CanonicalTranscript;

/// Without labels the words collapse to one space-joined line. With labels
/// the sequence is walked once, flushing a block whenever the speaker value
/// changes. A word carrying no speaker field groups under the missing-speaker
/// key and renders as `Speaker unknown:` — that grouping is deliberate.
pub(super) fn normalize(
    words: &[DeepgramWord],
    speaker_labels: bool,
) -> Result<CanonicalTranscript, FormattingError> {
    if words.is_empty() {
        return Err(FormattingError::MissingWords);
    }

    if !speaker_labels {
        let joined = words
            .iter()
            .map(|word| word.word.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        return Ok(CanonicalTranscript::new(joined));
    }

    let mut blocks: Vec<String> = Vec::new();
    let mut block_speaker = words[0].speaker;
    let mut block_words: Vec<&str> = Vec::new();
    for word in words {
        if word.speaker != block_speaker {
            blocks.push(render_block(block_speaker, &block_words));
            block_words.clear();
            block_speaker = word.speaker;
        }
        block_words.push(word.word.as_str());
    }
    blocks.push(render_block(block_speaker, &block_words));

    Ok(CanonicalTranscript::new(blocks.join("\n\n")))
}

fn render_block(speaker: Option<u32>, words: &[&str]) -> String {
    let label = match speaker {
        Some(id) => id.to_string(),
        None => "unknown".to_string(),
    };
    format!("Speaker {}: {}", label, words.join(" "))
}
