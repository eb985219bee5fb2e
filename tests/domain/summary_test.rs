use docsum::domain::Summary;

fn numbered_sentences(count: usize) -> String {
    (1..=count)
        .map(|i| format!("Sentence {i}"))
        .collect::<Vec<_>>()
        .join(". ")
}

#[test]
fn given_five_sentences_when_summarizing_then_medium_and_long_are_full_text() {
    let text = "One. Two. Three. Four. Five.";

    let summary = Summary::from_text(text);

    assert_eq!(summary.short, "One. Two.");
    assert_eq!(summary.medium, text);
    assert_eq!(summary.long, text);
}

#[test]
fn given_exactly_two_sentences_when_summarizing_then_short_gets_trailing_period() {
    let summary = Summary::from_text("First part. Second part");

    assert_eq!(summary.short, "First part. Second part.");
    assert_eq!(summary.medium, "First part. Second part");
}

#[test]
fn given_single_sentence_when_summarizing_then_no_period_is_added() {
    let summary = Summary::from_text("No delimiter here");

    assert_eq!(summary.short, "No delimiter here");
    assert_eq!(summary.medium, "No delimiter here");
    assert_eq!(summary.long, "No delimiter here");
}

#[test]
fn given_fifty_sentences_when_summarizing_then_each_tier_is_truncated() {
    let text = numbered_sentences(50);

    let summary = Summary::from_text(&text);

    assert_eq!(summary.short, "Sentence 1. Sentence 2.");
    assert_eq!(summary.medium, format!("{}.", numbered_sentences(10)));
    assert_eq!(summary.long, format!("{}.", numbered_sentences(40)));
}

#[test]
fn given_surrounding_whitespace_when_summarizing_then_tiers_are_trimmed() {
    let summary = Summary::from_text("  \n Lead in. Middle. Rest of it  \n");

    assert_eq!(summary.short, "Lead in. Middle.");
    assert_eq!(summary.medium, "Lead in. Middle. Rest of it");
}

#[test]
fn given_periods_without_space_when_summarizing_then_they_do_not_split() {
    let summary = Summary::from_text("Version 1.2.3 shipped.Then nothing. End");

    assert_eq!(summary.short, "Version 1.2.3 shipped.Then nothing. End.");
}

#[test]
fn given_summary_when_serializing_then_uses_tier_field_names() {
    let summary = Summary::from_text("A. B. C");

    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["short"], "A. B.");
    assert_eq!(json["medium"], "A. B. C");
    assert_eq!(json["long"], "A. B. C");
}
