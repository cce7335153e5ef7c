use std::fmt;

/// Backend-agnostic transcript: newline-separated lines, each optionally
/// prefixed with a `mm:ss` timestamp and/or a speaker label. This is the only
/// transcript representation stages after normalization may consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTranscript(String);

impl CanonicalTranscript {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl fmt::Display for CanonicalTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
