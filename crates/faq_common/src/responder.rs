//! Responder: one utterance in, one answer out.
//!
//! Ordered-rule cascade, first match wins:
//! 1. lowercase the input (nothing else: no trim, no punctuation stripping)
//! 2. knowledge base scan, categories then entries in order; an entry
//!    matches when any of its question keywords is a substring of the input
//! 3. fallback intents (see [`crate::intent`])
//! 4. [`DEFAULT_RESPONSE`]
//!
//! There is no scoring. A single shared stopword such as "is" or "a" is
//! enough for an entry to win, and an earlier entry always beats a later
//! one. Known quirk; kept on purpose and pinned by tests.
//!
//! Total and deterministic: no error path, no randomness, no clock.

use crate::intent::{self, Intent, DEFAULT_RESPONSE};
use crate::knowledge::KnowledgeBase;
use serde::Serialize;
use tracing::{debug, warn};

/// Inputs beyond this are cut before matching
pub const MAX_INPUT_BYTES: usize = 64 * 1024;

/// Which rule produced the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerSource {
    /// Knowledge base entry
    Faq {
        category: String,
        index: usize,
        keyword: String,
    },
    /// Fallback intent rule
    Intent { intent: Intent },
    /// Nothing matched
    Default,
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Faq {
                category,
                index,
                keyword,
            } => write!(f, "faq {}#{} via '{}'", category, index + 1, keyword),
            Self::Intent { intent } => write!(f, "intent {}", intent),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Answer plus where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response<'kb> {
    pub text: &'kb str,
    pub source: AnswerSource,
}

/// Answer `input` against `kb`. Never fails, never returns an empty string.
pub fn answer(input: &str, kb: &KnowledgeBase) -> String {
    respond(input, kb).text.to_string()
}

/// Same cascade as [`answer`], keeping the matched rule
pub fn respond<'kb>(input: &str, kb: &'kb KnowledgeBase) -> Response<'kb> {
    let normalized = normalize(input);

    for found in kb.entries() {
        if let Some(keyword) = found.entry.first_trigger(&normalized) {
            let source = AnswerSource::Faq {
                category: found.category.to_string(),
                index: found.index,
                keyword: keyword.to_string(),
            };
            debug!(%source, "Answered from knowledge base");
            return Response {
                text: found.entry.answer(),
                source,
            };
        }
    }

    if let Some(intent) = intent::detect(&normalized) {
        debug!(%intent, "Answered from fallback intent");
        return Response {
            text: intent.response(),
            source: AnswerSource::Intent { intent },
        };
    }

    debug!("No rule matched, using default response");
    Response {
        text: DEFAULT_RESPONSE,
        source: AnswerSource::Default,
    }
}

/// Lowercase, capped at [`MAX_INPUT_BYTES`] on a char boundary
pub fn normalize(input: &str) -> String {
    let capped = if input.len() > MAX_INPUT_BYTES {
        let mut end = MAX_INPUT_BYTES;
        while !input.is_char_boundary(end) {
            end -= 1;
        }
        warn!(len = input.len(), kept = end, "Input too long, matching prefix only");
        &input[..end]
    } else {
        input
    };
    capped.to_lowercase()
}
