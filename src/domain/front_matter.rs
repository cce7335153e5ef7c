use super::EpisodeMetadata;

/// Delimited metadata block prefixed to every generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub show_link: String,
    pub channel: String,
    pub channel_url: String,
    pub title: String,
    pub publish_date: String,
    pub cover_image: String,
}

impl FrontMatter {
    pub fn from_metadata(metadata: &EpisodeMetadata) -> Self {
        Self {
            show_link: metadata.show_link.clone(),
            channel: metadata.channel.clone(),
            channel_url: metadata.channel_url.clone(),
            title: metadata.title.clone(),
            publish_date: metadata.publish_date.clone(),
            cover_image: metadata.cover_image.clone(),
        }
    }

    /// Render the block between `---` fences. The description is left empty
    /// for the caller to fill in after generation.
    pub fn render(&self) -> String {
        format!(
            "---\n\
             showLink: \"{}\"\n\
             channel: \"{}\"\n\
             channelURL: \"{}\"\n\
             title: \"{}\"\n\
             description: \"\"\n\
             publishDate: \"{}\"\n\
             coverImage: \"{}\"\n\
             ---",
            self.show_link,
            self.channel,
            self.channel_url,
            self.title,
            self.publish_date,
            self.cover_image,
        )
    }
}
