//! End-to-end flows through the public API: several containers on one
//! page, isolated failures, isolated state, and both completion paths.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use quizkit::{
    Completion, Container, EngineView, InstanceId, InstanceRegistry, NotificationSink, Phase,
    QuizTheme, RELOAD_DELAY, RenderSink, RenderUpdate, SinkFactory,
};

// =============================================================================
// Recording Host
// =============================================================================

/// What a pretend host page observed, shared across sinks.
#[derive(Default)]
struct PageLog {
    views: Vec<(String, EngineView)>,
    events: Vec<String>,
    styles_installed: usize,
    themes: Vec<QuizTheme>,
}

#[derive(Clone, Default)]
struct Host(Rc<RefCell<PageLog>>);

impl Host {
    fn last_view_for(&self, id: &str) -> EngineView {
        self.0
            .borrow()
            .views
            .iter()
            .rev()
            .find(|(owner, _)| owner == id)
            .map(|(_, view)| view.clone())
            .unwrap_or_else(|| panic!("no view rendered for `{id}`"))
    }

    fn events(&self) -> Vec<String> {
        self.0.borrow().events.clone()
    }
}

struct HostRender {
    id: String,
    log: Rc<RefCell<PageLog>>,
}

impl RenderSink for HostRender {
    fn apply(&mut self, view: &EngineView, _changed: RenderUpdate) {
        self.log
            .borrow_mut()
            .views
            .push((self.id.clone(), view.clone()));
    }
}

struct HostNotifier {
    log: Rc<RefCell<PageLog>>,
}

impl NotificationSink for HostNotifier {
    fn quiz_started(&mut self, id: &InstanceId) {
        self.log.borrow_mut().events.push(format!("started:{id}"));
    }

    fn quiz_completed(&mut self, id: &InstanceId) {
        self.log.borrow_mut().events.push(format!("completed:{id}"));
    }

    fn destination_reached(&mut self, id: &InstanceId) {
        self.log.borrow_mut().events.push(format!("reached:{id}"));
    }
}

impl SinkFactory for Host {
    fn render_sink(&mut self, id: &InstanceId, theme: &QuizTheme) -> Box<dyn RenderSink> {
        self.0.borrow_mut().themes.push(theme.clone());
        Box::new(HostRender {
            id: id.to_string(),
            log: self.0.clone(),
        })
    }

    fn notification_sink(&mut self, id: &InstanceId) -> Option<Box<dyn NotificationSink>> {
        let _ = id;
        Some(Box::new(HostNotifier { log: self.0.clone() }))
    }

    fn install_styles(&mut self, _theme: &QuizTheme) {
        self.0.borrow_mut().styles_installed += 1;
    }
}

// =============================================================================
// Fixtures
// =============================================================================

fn config_a() -> &'static str {
    // Wider raw-string delimiters: the hex color's `"#` would close r#"..."#.
    r##"{
        "enabled": true,
        "color": "#3a7bd5",
        "destination": "https://example.com/thanks",
        "quiz": {
            "enabled": true,
            "title": "Quiz A",
            "completeLabel": "Finish",
            "questions": [
                {"question": "A1?", "options": ["yes", "no"]},
                {"question": "A2?", "options": ["red", "blue", "green"]}
            ]
        }
    }"##
}

/// Legacy-format config, attribute-escaped the way a host page embeds it.
fn escaped_config_b() -> String {
    r#"{
        "enabled": true,
        "quiz": {
            "enabled": true,
            "questions": ["B1?", "B2?"],
            "options": [["a", "b"], ["c", "d"]]
        }
    }"#
    .replace('"', "&quot;")
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn two_instances_run_isolated_flows() {
    let mut host = Host::default();
    let mut registry = InstanceRegistry::new();
    let started = registry.discover_and_start(
        vec![
            Container::new("quiz-a", config_a()),
            Container::new("quiz-b", escaped_config_b()),
        ],
        &mut host,
    );
    assert_eq!(started, 2);
    assert_eq!(host.0.borrow().styles_installed, 1);

    // Interacting with A leaves B untouched.
    let a = registry.engine_mut("quiz-a").unwrap();
    a.select_option(0, 1);
    a.next();

    let b = registry.engine_mut("quiz-b").unwrap();
    assert!(b.answers().is_empty());
    assert_eq!(b.current_index(), 0);

    let b_view = host.last_view_for("quiz-b");
    let b_quiz = b_view.as_quiz().expect("B should still show its quiz");
    assert_eq!(b_quiz.active_index, 0);
    assert!(b_quiz.questions[0].options.iter().all(|o| !o.selected));

    let a_view = host.last_view_for("quiz-a");
    let a_quiz = a_view.as_quiz().unwrap();
    assert_eq!(a_quiz.active_index, 1);
    assert_eq!(a_quiz.nav.next_label, "Finish");
    assert_eq!(a_quiz.progress.label, "Question 2 of 2");
}

#[test]
fn duplicate_container_skipped_sibling_initializes() {
    let mut host = Host::default();
    let mut registry = InstanceRegistry::new();
    let started = registry.discover_and_start(
        vec![
            Container::new("quiz-a", config_a()),
            Container::new("quiz-a", config_a()),
            Container::new("quiz-b", escaped_config_b()),
        ],
        &mut host,
    );
    assert_eq!(started, 2);
    assert_eq!(registry.errors().len(), 1);

    // The duplicate produced no engine and no render.
    let renders_for_a = host
        .0
        .borrow()
        .views
        .iter()
        .filter(|(id, _)| id == "quiz-a")
        .count();
    assert_eq!(renders_for_a, 1, "only the first quiz-a rendered");
    assert!(registry.engine_mut("quiz-b").is_some());
}

#[test]
fn completion_with_destination_redirects() {
    let mut host = Host::default();
    let mut registry = InstanceRegistry::new();
    registry.discover_and_start(vec![Container::new("quiz-a", config_a())], &mut host);

    let engine = registry.engine_mut("quiz-a").unwrap();
    engine.select_option(0, 0);
    engine.next();
    engine.select_option(1, 2);
    engine.next();
    assert_eq!(engine.phase(), Phase::Completed);

    let outcome = engine.continue_from_completion();
    assert_eq!(
        outcome,
        Some(Completion::Redirect("https://example.com/thanks".into()))
    );

    assert_eq!(
        host.events(),
        vec!["started:quiz-a", "completed:quiz-a", "reached:quiz-a"]
    );
}

#[test]
fn completion_without_destination_reloads_after_delay() {
    let mut host = Host::default();
    let mut registry = InstanceRegistry::new();
    registry.discover_and_start(
        vec![Container::new("quiz-b", escaped_config_b())],
        &mut host,
    );

    let engine = registry.engine_mut("quiz-b").unwrap();
    engine.select_option(0, 0);
    engine.next();
    engine.select_option(1, 1);
    engine.next();

    let Some(Completion::ReloadScheduled(timer)) = engine.continue_from_completion() else {
        panic!("expected a scheduled reload");
    };
    assert_eq!(engine.phase(), Phase::AwaitingReload);
    assert!(matches!(
        host.last_view_for("quiz-b"),
        EngineView::ThankYou(_)
    ));

    // The thank-you view does not strand the user: simulated time makes
    // the reload due.
    let now = Instant::now();
    assert!(!timer.is_due(now));
    assert!(timer.is_due(now + RELOAD_DELAY));
    assert_eq!(timer.remaining(now + RELOAD_DELAY), std::time::Duration::ZERO);
}

#[test]
fn per_instance_themes_derive_from_config_color() {
    let mut host = Host::default();
    let mut registry = InstanceRegistry::new();
    registry.discover_and_start(
        vec![
            Container::new("quiz-a", config_a()),
            Container::new("quiz-b", escaped_config_b()),
        ],
        &mut host,
    );

    let themes = host.0.borrow().themes.clone();
    assert_eq!(themes.len(), 2);
    assert_eq!(themes[0].accent, "#3a7bd5");
    assert_eq!(themes[0].hover, quizkit::darken("#3a7bd5", 0.1));
    // B has no color configured, so it renders with the neutral default.
    assert_eq!(themes[1].accent, "#000000");
}
