use super::JobId;

/// The fixed set of temp files a pipeline run may leave behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Raw audio extracted from the media source.
    Audio,
    /// Raw timestamped transcript as emitted by whisper.cpp.
    Lyrics,
    /// Normalized transcript.
    Transcript,
    /// Front matter written before generation.
    FrontMatter,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Audio,
        ArtifactKind::Lyrics,
        ArtifactKind::Transcript,
        ArtifactKind::FrontMatter,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Audio => ".wav",
            ArtifactKind::Lyrics => ".lrc",
            ArtifactKind::Transcript => ".txt",
            ArtifactKind::FrontMatter => ".md",
        }
    }

    pub fn file_name(&self, job_id: &JobId) -> String {
        format!("{}{}", job_id.as_str(), self.extension())
    }
}
