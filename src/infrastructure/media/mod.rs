mod dependency_check;
mod ytdlp_source;

pub use dependency_check::{DependencyMissingError, verify_host_tools};
pub use ytdlp_source::YtDlpSource;
