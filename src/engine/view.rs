//! View model for the render contract.
//!
//! The engine never builds markup. Instead it hands a [`EngineView`] to
//! the render sink on every state change; the sink reflects it with its
//! native UI mechanism. The view carries everything the contract names:
//! active question, per-option selection, progress percent and label, nav
//! visibility/enablement/labels, and the completion/thank-you views.

use crate::types::{PREVIOUS_LABEL, THANK_YOU_MESSAGE, THANK_YOU_TITLE};

/// What the sink should show right now.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineView {
    /// The question/answer flow.
    Quiz(QuizView),
    /// The completion view with its continue-button.
    Completion(CompletionView),
    /// The local thank-you fallback, shown while the reload timer runs.
    ThankYou(ThankYouView),
}

/// The in-progress flow: every question is present, exactly one active.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub title: String,
    pub subtitle: String,
    pub questions: Vec<QuestionView>,
    pub active_index: usize,
    pub progress: ProgressView,
    pub nav: NavView,
}

/// One question with its selectable options.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub index: usize,
    pub text: String,
    /// Only the active question is visible.
    pub active: bool,
    pub options: Vec<OptionView>,
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub index: usize,
    pub label: String,
    /// At most one option per question is selected.
    pub selected: bool,
}

/// Progress bar data: percent for the fill, label for the text.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    /// `(active + 1) / count * 100`, display-only.
    pub percent: f32,
    /// `"Question {active+1} of {count}"`.
    pub label: String,
}

/// Navigation button states.
#[derive(Debug, Clone, PartialEq)]
pub struct NavView {
    /// Previous is hidden on the first question.
    pub prev_visible: bool,
    pub prev_label: String,
    /// Next is disabled until the active question has an answer.
    pub next_enabled: bool,
    /// The configured complete-label on the last question, "Next" before.
    pub next_label: String,
}

impl NavView {
    pub(crate) fn new(prev_visible: bool, next_enabled: bool, next_label: String) -> Self {
        Self {
            prev_visible,
            prev_label: PREVIOUS_LABEL.to_string(),
            next_enabled,
            next_label,
        }
    }
}

/// The completion view, shown after the last question.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionView {
    pub title: String,
    pub message: String,
    pub continue_label: String,
}

/// The fixed thank-you view, shown when no destination is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct ThankYouView {
    pub title: String,
    pub message: String,
}

impl Default for ThankYouView {
    fn default() -> Self {
        Self {
            title: THANK_YOU_TITLE.to_string(),
            message: THANK_YOU_MESSAGE.to_string(),
        }
    }
}

impl ProgressView {
    /// Progress for the active question out of `count` (count > 0).
    pub(crate) fn at(active: usize, count: usize) -> Self {
        Self {
            percent: (active + 1) as f32 / count as f32 * 100.0,
            label: format!("Question {} of {}", active + 1, count),
        }
    }
}

impl EngineView {
    /// The quiz view, if this is one.
    pub fn as_quiz(&self) -> Option<&QuizView> {
        match self {
            Self::Quiz(view) => Some(view),
            _ => None,
        }
    }

    /// The completion view, if this is one.
    pub fn as_completion(&self) -> Option<&CompletionView> {
        match self {
            Self::Completion(view) => Some(view),
            _ => None,
        }
    }
}

impl QuizView {
    /// The currently visible question.
    pub fn active_question(&self) -> &QuestionView {
        &self.questions[self.active_index]
    }
}
