use serde::Serialize;

const SENTENCE_DELIMITER: &str = ". ";

const SHORT_SENTENCES: usize = 2;
const MEDIUM_SENTENCES: usize = 10;
const LONG_SENTENCES: usize = 40;

/// Three positional truncations of a text, measured in `". "`-separated chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub short: String,
    pub medium: String,
    pub long: String,
}

impl Summary {
    pub fn from_text(text: &str) -> Self {
        let sentences: Vec<&str> = text.split(SENTENCE_DELIMITER).collect();

        Self {
            short: truncate(&sentences, SHORT_SENTENCES),
            medium: truncate(&sentences, MEDIUM_SENTENCES),
            long: truncate(&sentences, LONG_SENTENCES),
        }
    }
}

fn truncate(sentences: &[&str], limit: usize) -> String {
    let take = limit.min(sentences.len());
    let mut tier = sentences[..take].join(SENTENCE_DELIMITER).trim().to_string();

    if sentences.len() >= limit {
        tier.push('.');
    }

    tier
}
