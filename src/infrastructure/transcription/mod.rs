mod assembly_engine;
mod deepgram_engine;
mod engine_factory;
mod whisper_engine;

pub use assembly_engine::AssemblyEngine;
pub use deepgram_engine::DeepgramEngine;
pub use engine_factory::TranscriptionEngineFactory;
pub use whisper_engine::{WhisperEngine, WhisperMode};
