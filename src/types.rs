//! Core types for quizkit.
//!
//! These types define the foundation that everything builds on.
//! They flow from config normalization into the engine and out through
//! the render contract.

use std::fmt;

// =============================================================================
// Instance Identity
// =============================================================================

/// Identifier of one quiz instance, as declared by its container.
///
/// Uniqueness across a page is enforced by the registry's seen-set, not
/// by this type. Cheap to clone, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    /// Create an instance id from the container's declared identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for InstanceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// Canonical Quiz
// =============================================================================

/// The normalized, engine-ready question/option data.
///
/// Immutable after construction. `count` always equals `questions.len()`.
/// `options` is positionally aligned with `questions` but is allowed to be
/// shorter (legacy backfill tolerance): consumers render what exists at an
/// index rather than assuming a 1:1 pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalQuiz {
    questions: Vec<String>,
    options: Vec<Vec<String>>,
    count: usize,
}

impl CanonicalQuiz {
    /// Build a canonical quiz from normalized questions and options.
    pub fn new(questions: Vec<String>, options: Vec<Vec<String>>) -> Self {
        let count = questions.len();
        Self {
            questions,
            options,
            count,
        }
    }

    /// Number of questions. Always `questions().len()`.
    pub fn count(&self) -> usize {
        self.count
    }

    /// All question texts, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// All per-question option lists, in order. May be shorter than
    /// `questions()` under the legacy format (see [`options_for`]).
    ///
    /// [`options_for`]: CanonicalQuiz::options_for
    pub fn options(&self) -> &[Vec<String>] {
        &self.options
    }

    /// Options for question `index`, or an empty slice when none were
    /// supplied for that index.
    pub fn options_for(&self, index: usize) -> &[String] {
        self.options.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when there is nothing to run.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// =============================================================================
// Display Strings
// =============================================================================

/// Default accent color when the config carries none.
pub const DEFAULT_ACCENT: &str = "#000000";

/// Label of the next-button on every question except the last.
pub const NEXT_LABEL: &str = "Next";

/// Label of the previous-button.
pub const PREVIOUS_LABEL: &str = "Previous";

/// Title of the local thank-you view shown when no destination is configured.
pub const THANK_YOU_TITLE: &str = "Thank You!";

/// Message of the local thank-you view.
pub const THANK_YOU_MESSAGE: &str = "Your responses have been recorded successfully.";

/// Display strings for one quiz instance, resolved with defaults at
/// normalization time so the engine never sees an absent field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizStrings {
    /// Heading above the quiz.
    pub title: String,
    /// Sub-heading under the title.
    pub subtitle: String,
    /// Next-button label on the final question.
    pub complete_label: String,
    /// Heading of the completion view.
    pub completion_title: String,
    /// Body of the completion view.
    pub completion_message: String,
    /// Label of the continue-button on the completion view.
    pub continue_button: String,
}

impl Default for QuizStrings {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            complete_label: "Complete".to_string(),
            completion_title: "All done!".to_string(),
            completion_message: "Thanks for taking the quiz.".to_string(),
            continue_button: "Continue".to_string(),
        }
    }
}
