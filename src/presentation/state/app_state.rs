use std::sync::Arc;

use crate::application::services::ShowNoteService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub show_note_service: Arc<ShowNoteService>,
    pub settings: Settings,
}
