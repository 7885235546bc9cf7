//! # quizkit
//!
//! Embeddable multi-instance quiz widget engine.
//!
//! A host page declares one or more containers, each carrying an
//! identifier and a serialized quiz configuration. quizkit discovers the
//! containers, parses and validates each config independently, and runs
//! one isolated question/answer state machine per container. On
//! completion it either tells the host to redirect to a configured
//! destination or shows a local confirmation and schedules a page reload.
//!
//! ## Architecture
//!
//! The core carries zero markup concerns. Rendering and analytics are
//! traits the host implements:
//!
//! ```text
//! containers → InstanceRegistry → normalize → QuizEngine (one per container)
//!                                                 │
//!                                 RenderSink ◀────┼────▶ NotificationSink
//!                                 (view updates)        (lifecycle events)
//! ```
//!
//! Everything is single-threaded and synchronous: state transitions run
//! inside host callbacks, and no instance shares state with another.
//!
//! ## Modules
//!
//! - [`config`] - Payload unescaping, parsing, and normalization of the
//!   two historical question formats
//! - [`engine`] - The per-instance state machine and its view model
//! - [`registry`] - Container discovery, identity validation, page-wide
//!   init-once state
//! - [`render`] - `RenderSink` / `NotificationSink` contracts and change
//!   flags
//! - [`theme`] - Accent color derivation (`darken` / `lighten`)
//! - [`types`] - Core types shared across the crate
//!
//! ## Example
//!
//! ```rust
//! use quizkit::{Container, InstanceRegistry, NullSinks, Phase};
//!
//! let config = r#"{
//!     "enabled": true,
//!     "quiz": {
//!         "enabled": true,
//!         "questions": [{"question": "Ready?", "options": ["Yes", "No"]}]
//!     }
//! }"#;
//!
//! let mut registry = InstanceRegistry::new();
//! registry.discover_and_start(vec![Container::new("quiz-1", config)], &mut NullSinks);
//!
//! let engine = registry.engine_mut("quiz-1").unwrap();
//! engine.select_option(0, 0);
//! engine.next();
//! assert_eq!(engine.phase(), Phase::Completed);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod registry;
pub mod render;
pub mod theme;
pub mod types;

// Re-export the public surface.

pub use config::{QuestionEntry, QuizSection, WidgetConfig, normalize, parse_config, unescape_attribute};

pub use engine::{
    Completion, CompletionView, EngineView, NavView, OptionView, Phase, ProgressView, QuestionView,
    QuizEngine, QuizView, RELOAD_DELAY, ReloadTimer, ThankYouView,
};

pub use error::ContainerError;

pub use registry::{Container, InstanceRegistry, PageContext};

pub use render::{
    LogNotifier, NotificationSink, NullRender, NullSinks, RenderSink, RenderUpdate, SinkFactory,
};

pub use theme::{QuizTheme, darken, lighten};

pub use types::{CanonicalQuiz, InstanceId, QuizStrings};
