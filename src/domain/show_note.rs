/// Terminal artifact of a pipeline run: front matter plus the generated body,
/// or the transcript itself when no LLM backend was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowNoteDocument {
    pub front_matter: String,
    pub body: String,
}

impl ShowNoteDocument {
    pub fn new(front_matter: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            front_matter: front_matter.into(),
            body: body.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("{}\n\n{}\n", self.front_matter.trim_end(), self.body.trim_end())
    }
}
