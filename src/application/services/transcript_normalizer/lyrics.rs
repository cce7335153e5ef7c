use super::FormattingError;
use crate::domain::CanonicalTranscript;

/// Rework whisper.cpp LRC output: drop the generator header, reduce
/// `[mm:ss.xx]` tags to `[mm:ss]` prefixes, keep everything else verbatim.
pub(super) fn normalize(lrc: &str) -> Result<CanonicalTranscript, FormattingError> {
    let lines: Vec<String> = lrc
        .lines()
        .filter(|line| !line.starts_with("[by:"))
        .map(reduce_tag)
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(FormattingError::EmptyLyrics);
    }
    Ok(CanonicalTranscript::new(lines.join("\n")))
}

fn reduce_tag(line: &str) -> String {
    if !line.starts_with('[') {
        return line.to_string();
    }
    let Some(close) = line.find(']') else {
        return line.to_string();
    };
    let tag = &line[1..close];
    let Some((stamp, fraction)) = tag.split_once('.') else {
        return line.to_string();
    };
    let is_timestamp = stamp.split(':').count() == 2
        && stamp.chars().all(|c| c.is_ascii_digit() || c == ':')
        && fraction.chars().all(|c| c.is_ascii_digit());
    if !is_timestamp {
        return line.to_string();
    }
    format!("[{}] {}", stamp, line[close + 1..].trim_start())
}
