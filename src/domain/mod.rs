mod artifact;
mod episode;
mod front_matter;
mod job;
mod job_config;
mod show_note;
mod transcript;

pub use artifact::ArtifactKind;
pub use episode::EpisodeMetadata;
pub use front_matter::FrontMatter;
pub use job::JobId;
pub use job_config::{
    JobConfig, LlmProvider, LlmSelection, TranscriptionProvider, TranscriptionSelection,
};
pub use show_note::ShowNoteDocument;
pub use transcript::CanonicalTranscript;
