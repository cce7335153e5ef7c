/// Metadata describing one episode, as reported by the media source probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeMetadata {
    pub show_link: String,
    pub channel: String,
    pub channel_url: String,
    pub title: String,
    pub publish_date: String,
    pub cover_image: String,
}
