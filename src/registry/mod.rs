//! Container discovery and instance lifecycle.
//!
//! The registry walks the containers a host hands it, validates each one's
//! identity and config independently, and owns the resulting engines. A
//! broken container never prevents its siblings from starting: identity
//! and config failures are logged, recorded, and skipped.
//!
//! Page-wide mutable state (the seen-identifier set and the injected-styles
//! marker) lives in an explicit [`PageContext`] owned by the registry,
//! written during discovery and read-only afterwards. It is never ambient
//! global state.

use std::collections::HashSet;

use log::{debug, warn};

use crate::config::{normalize, parse_config, unescape_attribute};
use crate::engine::QuizEngine;
use crate::error::ContainerError;
use crate::render::SinkFactory;
use crate::theme::QuizTheme;
use crate::types::InstanceId;

// =============================================================================
// Container Input
// =============================================================================

/// One discovered container: an identifier and a raw serialized config,
/// either of which the host page may have failed to provide.
#[derive(Debug, Clone, Default)]
pub struct Container {
    /// The container's declared identifier.
    pub id: Option<String>,
    /// The serialized config payload (possibly attribute-escaped).
    pub config: Option<String>,
}

impl Container {
    /// A well-formed container with both attributes present.
    pub fn new(id: impl Into<String>, config: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            config: Some(config.into()),
        }
    }
}

// =============================================================================
// Page Context
// =============================================================================

/// Page-wide init-once state: claimed identifiers and the styles marker.
#[derive(Debug, Default)]
pub struct PageContext {
    seen: HashSet<String>,
    styles_injected: bool,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an identifier. False when it was already claimed.
    fn claim_id(&mut self, id: &str) -> bool {
        self.seen.insert(id.to_string())
    }

    /// True exactly once: the caller that sees true installs the styles.
    fn styles_once(&mut self) -> bool {
        !std::mem::replace(&mut self.styles_injected, true)
    }

    /// Whether page styles have been installed.
    pub fn styles_installed(&self) -> bool {
        self.styles_injected
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Discovers containers and owns one engine per started instance.
#[derive(Default)]
pub struct InstanceRegistry {
    page: PageContext,
    engines: Vec<QuizEngine>,
    errors: Vec<ContainerError>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an engine for every runnable container, isolating failures.
    ///
    /// Returns how many engines were started by this call. Rejected
    /// containers are logged and recorded in [`errors`]; disabled or
    /// quiz-less configs are quietly skipped.
    ///
    /// [`errors`]: InstanceRegistry::errors
    pub fn discover_and_start(
        &mut self,
        containers: Vec<Container>,
        factory: &mut dyn SinkFactory,
    ) -> usize {
        let mut started = 0;
        for container in containers {
            match self.start_container(container, factory) {
                Ok(true) => started += 1,
                Ok(false) => {}
                Err(error) => {
                    warn!("quiz container rejected: {error}");
                    self.errors.push(error);
                }
            }
        }
        started
    }

    /// Ok(true): engine started. Ok(false): nothing to run. Err: rejected.
    fn start_container(
        &mut self,
        container: Container,
        factory: &mut dyn SinkFactory,
    ) -> Result<bool, ContainerError> {
        let id = container
            .id
            .filter(|id| !id.is_empty())
            .ok_or(ContainerError::MissingId)?;

        // The id is claimed as soon as it validates, so a later container
        // reusing the id of a config-broken one is still a duplicate.
        if !self.page.claim_id(&id) {
            return Err(ContainerError::DuplicateId(id));
        }

        let raw = container
            .config
            .ok_or_else(|| ContainerError::MissingConfig(id.clone()))?;
        let payload = unescape_attribute(&raw);
        let config =
            parse_config(&payload).map_err(|e| ContainerError::InvalidConfig(id.clone(), e))?;

        if !config.enabled {
            debug!("quiz container `{id}` is disabled, skipping");
            return Ok(false);
        }
        let Some((quiz, strings)) = normalize(&config) else {
            debug!("quiz container `{id}` has no runnable quiz, skipping");
            return Ok(false);
        };

        let theme = QuizTheme::derive(config.color.as_deref());
        if self.page.styles_once() {
            factory.install_styles(&theme);
        }

        let instance = InstanceId::from(id);
        let render = factory.render_sink(&instance, &theme);
        let notify = factory.notification_sink(&instance);
        self.engines.push(QuizEngine::start(
            instance,
            quiz,
            strings,
            config.destination,
            theme,
            render,
            notify,
        ));
        Ok(true)
    }

    /// All started engines, in discovery order.
    pub fn engines(&self) -> &[QuizEngine] {
        &self.engines
    }

    /// Mutable access for hosts driving interaction over all instances.
    pub fn engines_mut(&mut self) -> &mut [QuizEngine] {
        &mut self.engines
    }

    /// Route interaction to the engine owning `id`.
    ///
    /// This is the instance-boundary check: a host dispatches a click to
    /// exactly one engine by identifier, so container A's interaction can
    /// never mutate container B.
    pub fn engine_mut(&mut self, id: &str) -> Option<&mut QuizEngine> {
        self.engines.iter_mut().find(|e| e.id().as_str() == id)
    }

    /// Rejections accumulated during discovery.
    pub fn errors(&self) -> &[ContainerError] {
        &self.errors
    }

    /// Page-wide init-once state.
    pub fn page(&self) -> &PageContext {
        &self.page
    }

    /// Number of started engines.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// True when no engine has started.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
