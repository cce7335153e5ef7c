use std::fmt;

use uuid::Uuid;

use super::EpisodeMetadata;

/// Identifier for one pipeline run. Every temp artifact of the run is named
/// `<id><ext>`, so runs over distinct inputs never collide on the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    /// Derive a path-safe id from the episode's publish date and title.
    /// Falls back to a random id when the title yields an empty slug.
    pub fn for_episode(metadata: &EpisodeMetadata) -> Self {
        let slug = slugify(&metadata.title);
        let stem = if slug.is_empty() {
            Uuid::new_v4().to_string()
        } else if metadata.publish_date.is_empty() {
            slug
        } else {
            format!("{}-{}", metadata.publish_date, slug)
        };
        Self(stem)
    }

    pub fn from_raw(stem: impl Into<String>) -> Self {
        Self(stem.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
