mod option_resolver;
mod prompt_builder;
mod show_note_service;
mod transcript_normalizer;

pub use option_resolver::{ConfigError, resolve};
pub use prompt_builder::{DEFAULT_PROMPT, assemble};
pub use show_note_service::{PipelineError, ShowNoteOutcome, ShowNoteService, sweep_artifacts};
pub use transcript_normalizer::{FormattingError, format_timestamp, normalize};
