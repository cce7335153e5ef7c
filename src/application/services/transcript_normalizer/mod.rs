mod assembly;
mod deepgram;
mod lyrics;

use crate::application::ports::RawTranscript;
use crate::domain::CanonicalTranscript;

/// Collapse a backend-tagged raw result into the canonical line-oriented
/// transcript. Fails only when the backend's expected substructure is
/// entirely absent.
pub fn normalize(
    raw: &RawTranscript,
    speaker_labels: bool,
) -> Result<CanonicalTranscript, FormattingError> {
    match raw {
        RawTranscript::Assembly(transcript) => Ok(assembly::normalize(transcript, speaker_labels)),
        RawTranscript::Deepgram(words) => deepgram::normalize(words, speaker_labels),
        RawTranscript::Lyrics(lrc) => lyrics::normalize(lrc),
    }
}

/// `mm:ss`, floored to whole seconds. Minutes are deliberately not wrapped at
/// 60; inputs above 99 minutes simply widen the field.
pub fn format_timestamp(milliseconds: u64) -> String {
    let total_seconds = milliseconds / 1000;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormattingError {
    #[error("deepgram result contained no words")]
    MissingWords,
    #[error("whisper produced an empty transcript")]
    EmptyLyrics,
}
