//! The per-instance quiz state machine.
//!
//! One [`QuizEngine`] owns one container's state: the active question
//! index, the sparse answer map, and the completion phase. All host
//! interaction arrives as typed operations on the owning engine, so no
//! instance can ever mutate another's state.
//!
//! Phases and transitions:
//!
//! ```text
//! (construction) ──▶ InProgress ──next() on last──▶ Completed
//!                        │  ▲                           │
//!            select/next/previous            continue_from_completion()
//!                                                       │
//!                                      destination ──▶ (redirect, terminal)
//!                                      otherwise  ──▶ AwaitingReload
//! ```
//!
//! Every transition synchronously pushes the new view into the render
//! sink and fires lifecycle notifications into the optional notification
//! sink. Completion is monotonic: once `Completed`, the flow operations
//! become no-ops.

use std::collections::HashMap;

use crate::render::{NotificationSink, RenderSink, RenderUpdate};
use crate::theme::QuizTheme;
use crate::types::{CanonicalQuiz, InstanceId, NEXT_LABEL, QuizStrings};

pub mod reload;
pub mod view;

pub use reload::{RELOAD_DELAY, ReloadTimer};
pub use view::{
    CompletionView, EngineView, NavView, OptionView, ProgressView, QuestionView, QuizView,
    ThankYouView,
};

// =============================================================================
// Phase
// =============================================================================

/// Where one instance is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the question flow.
    InProgress,
    /// Showing the completion view; waiting for the continue-button.
    Completed,
    /// Showing the thank-you view; the reload timer is running.
    AwaitingReload,
}

/// What the host should do after the user continues from completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Navigate to the configured destination. Terminal for the instance.
    Redirect(String),
    /// No destination: the thank-you view is up, fire a reload when the
    /// timer is due.
    ReloadScheduled(ReloadTimer),
}

// =============================================================================
// Engine
// =============================================================================

/// One quiz instance's state machine.
pub struct QuizEngine {
    id: InstanceId,
    quiz: CanonicalQuiz,
    strings: QuizStrings,
    destination: Option<String>,
    theme: QuizTheme,

    phase: Phase,
    current: usize,
    answers: HashMap<usize, usize>,
    started_notified: bool,

    render: Box<dyn RenderSink>,
    notify: Option<Box<dyn NotificationSink>>,
}

impl QuizEngine {
    /// Start an instance over a non-empty canonical quiz.
    ///
    /// Construction is the Idle→InProgress transition: index 0, empty
    /// answers, not completed, initial view rendered in full. The
    /// registry only constructs engines from [`crate::config::normalize`]
    /// output, which guarantees at least one question.
    pub fn start(
        id: InstanceId,
        quiz: CanonicalQuiz,
        strings: QuizStrings,
        destination: Option<String>,
        theme: QuizTheme,
        render: Box<dyn RenderSink>,
        notify: Option<Box<dyn NotificationSink>>,
    ) -> Self {
        debug_assert!(!quiz.is_empty(), "engine started with zero questions");
        let mut engine = Self {
            id,
            quiz,
            strings,
            destination,
            theme,
            phase: Phase::InProgress,
            current: 0,
            answers: HashMap::new(),
            started_notified: false,
            render,
            notify,
        };
        engine.dispatch(RenderUpdate::ALL);
        engine
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// This instance's identifier.
    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the active question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The sparse question→option answer map.
    pub fn answers(&self) -> &HashMap<usize, usize> {
        &self.answers
    }

    /// True once the flow moved past the last question.
    pub fn is_completed(&self) -> bool {
        !matches!(self.phase, Phase::InProgress)
    }

    /// The derived theme this instance renders with.
    pub fn theme(&self) -> &QuizTheme {
        &self.theme
    }

    /// The normalized quiz data.
    pub fn quiz(&self) -> &CanonicalQuiz {
        &self.quiz
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Record (or overwrite) the answer for `question`.
    ///
    /// Fires the quiz-started notification the first time an answer lands
    /// on question 0. An option index beyond the actual options list is
    /// recorded but never shows as selected (render-what-exists
    /// tolerance). No-op once completed or for an out-of-range question.
    pub fn select_option(&mut self, question: usize, option: usize) {
        if self.phase != Phase::InProgress || question >= self.quiz.count() {
            return;
        }
        self.answers.insert(question, option);

        if question == 0 && !self.started_notified {
            self.started_notified = true;
            if let Some(notify) = self.notify.as_mut() {
                notify.quiz_started(&self.id);
            }
        }

        self.dispatch(RenderUpdate::OPTIONS | RenderUpdate::NAV);
    }

    /// Advance to the next question, or complete on the last one.
    ///
    /// Does not require an answer for the current question; the nav view
    /// disables the button instead, and hosts honoring it never call this
    /// unanswered. No-op once completed.
    pub fn next(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        if self.current + 1 < self.quiz.count() {
            self.current += 1;
            self.dispatch(RenderUpdate::QUESTIONS | RenderUpdate::PROGRESS | RenderUpdate::NAV);
        } else {
            self.complete();
        }
    }

    /// Go back one question. No-op on the first question or once
    /// completed.
    pub fn previous(&mut self) {
        if self.phase != Phase::InProgress || self.current == 0 {
            return;
        }
        self.current -= 1;
        self.dispatch(RenderUpdate::QUESTIONS | RenderUpdate::PROGRESS | RenderUpdate::NAV);
    }

    /// Handle the continue-button on the completion view.
    ///
    /// Fires the destination-reached notification, then either tells the
    /// host to redirect or switches to the thank-you view and schedules
    /// the page reload. Returns `None` outside the `Completed` phase.
    pub fn continue_from_completion(&mut self) -> Option<Completion> {
        if self.phase != Phase::Completed {
            return None;
        }
        if let Some(notify) = self.notify.as_mut() {
            notify.destination_reached(&self.id);
        }
        match &self.destination {
            Some(url) => Some(Completion::Redirect(url.clone())),
            None => {
                self.phase = Phase::AwaitingReload;
                self.dispatch(RenderUpdate::ALL);
                Some(Completion::ReloadScheduled(ReloadTimer::new()))
            }
        }
    }

    fn complete(&mut self) {
        self.phase = Phase::Completed;
        if let Some(notify) = self.notify.as_mut() {
            notify.quiz_completed(&self.id);
        }
        self.dispatch(RenderUpdate::ALL);
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Snapshot of what the sink should currently show.
    pub fn view(&self) -> EngineView {
        match self.phase {
            Phase::InProgress => EngineView::Quiz(self.quiz_view()),
            Phase::Completed => EngineView::Completion(CompletionView {
                title: self.strings.completion_title.clone(),
                message: self.strings.completion_message.clone(),
                continue_label: self.strings.continue_button.clone(),
            }),
            Phase::AwaitingReload => EngineView::ThankYou(ThankYouView::default()),
        }
    }

    fn quiz_view(&self) -> QuizView {
        let count = self.quiz.count();
        let questions = (0..count)
            .map(|i| {
                let selected = self.answers.get(&i).copied();
                QuestionView {
                    index: i,
                    text: self.quiz.questions()[i].clone(),
                    active: i == self.current,
                    options: self
                        .quiz
                        .options_for(i)
                        .iter()
                        .enumerate()
                        .map(|(j, label)| OptionView {
                            index: j,
                            label: label.clone(),
                            selected: selected == Some(j),
                        })
                        .collect(),
                }
            })
            .collect();

        let next_label = if self.current == count - 1 {
            self.strings.complete_label.clone()
        } else {
            NEXT_LABEL.to_string()
        };

        QuizView {
            title: self.strings.title.clone(),
            subtitle: self.strings.subtitle.clone(),
            questions,
            active_index: self.current,
            progress: ProgressView::at(self.current, count),
            nav: NavView::new(
                self.current > 0,
                self.answers.contains_key(&self.current),
                next_label,
            ),
        }
    }

    fn dispatch(&mut self, changed: RenderUpdate) {
        let view = self.view();
        self.render.apply(&view, changed);
    }
}
