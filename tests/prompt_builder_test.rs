use showscribe::application::services::{DEFAULT_PROMPT, assemble};

#[test]
fn given_three_parts_when_assembling_then_order_is_front_matter_template_transcript() {
    let bundle = assemble("FRONT", "TEMPLATE", "TRANSCRIPT");

    assert_eq!(bundle, "FRONT\nTEMPLATE\nTRANSCRIPT");
}

#[test]
fn given_multi_line_parts_when_assembling_then_nothing_is_reordered_or_filtered() {
    let front = "---\ntitle: \"Episode\"\n---";
    let transcript = "(00:00): Hello\n(00:05): World";

    let bundle = assemble(front, DEFAULT_PROMPT, transcript);

    let front_at = bundle.find(front).unwrap();
    let template_at = bundle.find(DEFAULT_PROMPT).unwrap();
    let transcript_at = bundle.find(transcript).unwrap();
    assert!(front_at < template_at);
    assert!(template_at < transcript_at);
}

#[test]
fn given_default_template_when_assembling_then_it_requests_the_show_note_sections() {
    let bundle = assemble("", DEFAULT_PROMPT, "");

    assert!(bundle.contains("## Potential Titles"));
    assert!(bundle.contains("## Summary"));
    assert!(bundle.contains("## Chapters"));
}
