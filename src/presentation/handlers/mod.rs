mod health;
mod show_notes;

pub use health::health_handler;
pub use show_notes::show_notes_handler;
