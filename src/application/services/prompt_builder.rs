/// Instructions sent to the LLM when the caller supplies no prompt of their
/// own. The transcript follows the template inside the same body.
pub const DEFAULT_PROMPT: &str = "This is a transcript with timestamps.

Write 3 potential titles for the episode.

Write a one-sentence description of the episode (maximum 180 characters).

Write a one-paragraph summary of the episode (600 to 1200 characters).

Create chapters based on the topics discussed. For each chapter, include the
starting timestamp, a short title, and one or two sentences describing what
is covered.

Format the response in markdown with the sections \"## Potential Titles\",
\"## Description\", \"## Summary\", and \"## Chapters\".";

/// Concatenate front matter, the prompt template, and the canonical
/// transcript into one LLM input body. Fixed order, newline separators,
/// nothing reordered or filtered.
pub fn assemble(front_matter: &str, template: &str, transcript: &str) -> String {
    [front_matter, template, transcript].join("\n")
}
