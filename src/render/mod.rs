//! Render and notification contracts.
//!
//! The engine carries zero markup concerns: on every state change it
//! hands the current [`EngineView`] to a [`RenderSink`] together with
//! [`RenderUpdate`] flags describing which regions changed, and fires
//! lifecycle events into an optional [`NotificationSink`]. Hosts plug in
//! their UI technology behind these traits; the provided impls are the
//! do-nothing [`NullRender`]/[`NullSinks`] and a [`LogNotifier`] that
//! forwards lifecycle events to the `log` facade.

use bitflags::bitflags;
use log::info;

use crate::engine::EngineView;
use crate::theme::QuizTheme;
use crate::types::InstanceId;

// =============================================================================
// Render Update Flags
// =============================================================================

bitflags! {
    /// Which regions of the view a state change touched.
    ///
    /// Sinks that update targets individually can use these to skip
    /// untouched regions; sinks that redraw wholesale can ignore them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RenderUpdate: u8 {
        /// Question visibility changed (navigation).
        const QUESTIONS  = 1 << 0;
        /// Option selection changed.
        const OPTIONS    = 1 << 1;
        /// Progress percent/label changed.
        const PROGRESS   = 1 << 2;
        /// Nav button visibility/enablement/label changed.
        const NAV        = 1 << 3;
        /// The completion or thank-you view replaced the flow.
        const COMPLETION = 1 << 4;

        /// Everything.
        const ALL = Self::QUESTIONS.bits()
            | Self::OPTIONS.bits()
            | Self::PROGRESS.bits()
            | Self::NAV.bits()
            | Self::COMPLETION.bits();
    }
}

// =============================================================================
// Sink Traits
// =============================================================================

/// Reflects engine state into a visible UI.
///
/// Infallible by contract: a sink whose target for some region is missing
/// skips that update silently. Engine state advances regardless.
pub trait RenderSink {
    /// Apply the current view. `changed` narrows what needs touching.
    fn apply(&mut self, view: &EngineView, changed: RenderUpdate);
}

/// Optional observer of lifecycle transitions.
///
/// Best-effort and never required for engine correctness; every method
/// defaults to doing nothing.
pub trait NotificationSink {
    /// The first answer was recorded on the first question.
    fn quiz_started(&mut self, id: &InstanceId) {
        let _ = id;
    }

    /// The flow moved past the last question.
    fn quiz_completed(&mut self, id: &InstanceId) {
        let _ = id;
    }

    /// The user continued from the completion view.
    fn destination_reached(&mut self, id: &InstanceId) {
        let _ = id;
    }
}

/// Builds the per-instance sinks during discovery, and installs the
/// page-level stylesheet at most once (the registry guards the marker).
pub trait SinkFactory {
    /// Render sink for one instance, themed with its derived colors.
    fn render_sink(&mut self, id: &InstanceId, theme: &QuizTheme) -> Box<dyn RenderSink>;

    /// Notification sink for one instance, if the host wants one.
    fn notification_sink(&mut self, id: &InstanceId) -> Option<Box<dyn NotificationSink>> {
        let _ = id;
        None
    }

    /// Install page-wide styles. Called at most once per page.
    fn install_styles(&mut self, theme: &QuizTheme) {
        let _ = theme;
    }
}

// =============================================================================
// Provided Impls
// =============================================================================

/// A render sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn apply(&mut self, _view: &EngineView, _changed: RenderUpdate) {}
}

/// A sink factory producing [`NullRender`] and no notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSinks;

impl SinkFactory for NullSinks {
    fn render_sink(&mut self, _id: &InstanceId, _theme: &QuizTheme) -> Box<dyn RenderSink> {
        Box::new(NullRender)
    }
}

/// A notification sink that logs lifecycle events at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn quiz_started(&mut self, id: &InstanceId) {
        info!("quiz `{id}` started");
    }

    fn quiz_completed(&mut self, id: &InstanceId) {
        info!("quiz `{id}` completed");
    }

    fn destination_reached(&mut self, id: &InstanceId) {
        info!("quiz `{id}` reached its destination");
    }
}
