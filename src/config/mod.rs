//! Config parsing and normalization.
//!
//! A container's payload arrives as a JSON string, possibly HTML-entity
//! escaped because the host had to embed it in an attribute value. The
//! pipeline here is:
//!
//! ```text
//! raw attribute → unescape_attribute → parse_config → normalize
//! ```
//!
//! Two historical question encodings are accepted:
//! - object format: `{ "question": "...", "options": ["..."] }` per entry;
//! - legacy format: bare question strings plus one top-level `options`
//!   list shared positionally by all questions.
//!
//! Normalization is deliberately tolerant: unrecognized question entries
//! are skipped, and a questions/options length mismatch is passed through
//! rather than rejected (downstream renders what exists).

use std::borrow::Cow;

use serde::Deserialize;

use crate::types::{CanonicalQuiz, QuizStrings};

// =============================================================================
// Raw Config Model
// =============================================================================

/// The untrusted widget config as declared by the host page.
///
/// Every field defaults so a partially well-formed payload still parses;
/// unknown fields are ignored. Never mutated after parse.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Master switch; a disabled widget is skipped without error.
    pub enabled: bool,
    /// The quiz section.
    pub quiz: QuizSection,
    /// Where the continue-button sends the user after completion. Absent
    /// means the local thank-you fallback.
    pub destination: Option<String>,
    /// Accent color as `#RRGGBB`. Absent means the neutral default.
    pub color: Option<String>,
}

/// The `quiz` sub-object of a widget config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizSection {
    pub enabled: bool,
    pub questions: Vec<QuestionEntry>,
    /// Legacy top-level options list, shared by all questions positionally.
    pub options: Option<Vec<Vec<String>>>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub complete_label: Option<String>,
    pub completion_title: Option<String>,
    pub completion_message: Option<String>,
    pub continue_button: Option<String>,
}

/// One entry of the polymorphic `questions` list.
///
/// Variants are tried in order; anything that is neither a well-formed
/// object entry nor a bare string lands in `Other` and is skipped by
/// [`normalize`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuestionEntry {
    /// Object format: text and options travel together.
    Full {
        question: String,
        options: Vec<String>,
    },
    /// Legacy format: bare question text, options supplied elsewhere.
    Bare(String),
    /// Tolerated junk (skipped, never an error).
    Other(serde_json::Value),
}

// =============================================================================
// Attribute Unescaping
// =============================================================================

/// Reverse the minimal HTML-entity escaping a host may have applied to
/// embed the payload as an attribute value.
///
/// Handles exactly `&quot;`, `&apos;` and `&amp;`, with `&amp;` last so
/// it cannot manufacture new entities. Borrows when there is nothing to
/// do.
pub fn unescape_attribute(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(
        raw.replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&"),
    )
}

// =============================================================================
// Parsing and Normalization
// =============================================================================

/// Parse an unescaped payload into the raw config model.
pub fn parse_config(payload: &str) -> Result<WidgetConfig, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Normalize a parsed config into engine-ready quiz data.
///
/// Returns `None` when there is no quiz to run: the section is disabled
/// or the scan produced zero questions. That is "nothing to do", not an
/// error.
///
/// Object-format entries contribute their own options; bare strings defer
/// options. If the whole scan collected no per-question options and the
/// section carries a top-level `options` list, that list is backfilled
/// wholesale (legacy format). No length check between questions and
/// options is performed here; that tolerance is part of the contract.
pub fn normalize(config: &WidgetConfig) -> Option<(CanonicalQuiz, QuizStrings)> {
    let section = &config.quiz;
    if !section.enabled {
        return None;
    }

    let mut questions = Vec::new();
    let mut options: Vec<Vec<String>> = Vec::new();

    for entry in &section.questions {
        match entry {
            QuestionEntry::Full {
                question,
                options: opts,
            } => {
                questions.push(question.clone());
                options.push(opts.clone());
            }
            QuestionEntry::Bare(text) => questions.push(text.clone()),
            QuestionEntry::Other(_) => {}
        }
    }

    if questions.is_empty() {
        return None;
    }

    // Legacy format: no entry carried its own options, so the shared
    // top-level list applies to all questions positionally.
    if options.is_empty() {
        if let Some(shared) = &section.options {
            options = shared.clone();
        }
    }

    Some((CanonicalQuiz::new(questions, options), strings_for(section)))
}

/// Resolve display strings against their documented defaults.
fn strings_for(section: &QuizSection) -> QuizStrings {
    let defaults = QuizStrings::default();
    QuizStrings {
        title: section.title.clone().unwrap_or(defaults.title),
        subtitle: section.subtitle.clone().unwrap_or(defaults.subtitle),
        complete_label: section
            .complete_label
            .clone()
            .unwrap_or(defaults.complete_label),
        completion_title: section
            .completion_title
            .clone()
            .unwrap_or(defaults.completion_title),
        completion_message: section
            .completion_message
            .clone()
            .unwrap_or(defaults.completion_message),
        continue_button: section
            .continue_button
            .clone()
            .unwrap_or(defaults.continue_button),
    }
}
