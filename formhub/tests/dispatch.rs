use std::cell::Cell;
use std::rc::Rc;

use formdom::DomElement;
use formhub::handler::{
    Always, AttrEquals, ElementId, HasClass, Never, Recorder, action_fn, predicate_fn, selector_fn,
};
use formhub::{
    DispatchError, Dispatcher, DispatcherConfig, FailurePolicy, HandlerIndex, HandlerStage,
};

fn element(id: &str) -> DomElement {
    let mut element = DomElement::new("input");
    element.set_attr("id", id);
    element
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_new_dispatcher_is_inactive_and_empty() {
    let dispatcher: Dispatcher = Dispatcher::new();

    assert!(!dispatcher.is_active());
    assert!(dispatcher.is_empty());
    assert_eq!(dispatcher.config().on_failure, FailurePolicy::Isolate);
}

#[test]
fn test_config_can_start_active() {
    let dispatcher: Dispatcher = Dispatcher::with_config(DispatcherConfig::new().start_active());
    assert!(dispatcher.is_active());
}

#[test]
fn test_register_returns_positions() {
    let mut dispatcher: Dispatcher = Dispatcher::new();

    assert_eq!(dispatcher.register("a", Always, Recorder::new()), HandlerIndex(0));
    assert_eq!(dispatcher.register("b", Always, Recorder::new()), HandlerIndex(1));
    assert_eq!(dispatcher.len(), 2);
}

#[test]
fn test_clear_keeps_active_flag() {
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register("a", Always, Recorder::new());
    dispatcher.activate();

    dispatcher.clear();

    assert!(dispatcher.is_empty());
    assert!(dispatcher.is_active());
}

// ============================================================================
// Notification
// ============================================================================

#[test]
fn test_notify_matches_id_and_predicate() {
    let h1 = Recorder::new();
    let h2 = Recorder::new();
    let h3 = Recorder::new();

    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register("a", Always, h1.clone());
    dispatcher.register("b", Always, h2.clone());
    dispatcher.register("a", Never, h3.clone());
    dispatcher.activate();

    let report = dispatcher.notify(&element("a")).unwrap();

    assert_eq!(h1.count(), 1);
    assert_eq!(h2.count(), 0);
    assert_eq!(h3.count(), 0);
    assert_eq!(report.fired, [HandlerIndex(0)]);

    dispatcher.deactivate();
    let report = dispatcher.notify(&element("a")).unwrap();

    assert_eq!(h1.count(), 1);
    assert_eq!(h2.count(), 0);
    assert_eq!(h3.count(), 0);
    assert!(report.fired.is_empty());
}

#[test]
fn test_inactive_dispatcher_ignores_changes() {
    let recorder = Recorder::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register("a", Always, recorder.clone());

    dispatcher.notify(&element("a")).unwrap();

    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_all_matching_handlers_fire_in_order() {
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut dispatcher: Dispatcher = Dispatcher::new();
    for n in 0..3 {
        let order = order.clone();
        dispatcher.register(
            "a",
            Always,
            action_fn(move |_: &DomElement| {
                order.borrow_mut().push(n);
                Ok(())
            }),
        );
    }
    dispatcher.activate();

    let report = dispatcher.notify(&element("a")).unwrap();

    assert_eq!(*order.borrow(), [0, 1, 2]);
    assert_eq!(report.fired.len(), 3);
}

#[test]
fn test_element_without_id_matches_nothing() {
    let recorder = Recorder::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register("", Always, recorder.clone());
    dispatcher.activate();

    dispatcher.notify(&DomElement::new("input")).unwrap();

    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_selector_is_resolved_on_every_notify() {
    let flip = Rc::new(Cell::new(false));
    let recorder = Recorder::new();

    let mut dispatcher: Dispatcher = Dispatcher::new();
    let target = flip.clone();
    dispatcher.register(
        selector_fn(move || if target.get() { "b".into() } else { "a".into() }),
        Always,
        recorder.clone(),
    );
    dispatcher.activate();

    dispatcher.notify(&element("b")).unwrap();
    flip.set(true);
    dispatcher.notify(&element("b")).unwrap();

    assert_eq!(recorder.calls(), [Some("b".to_string())]);
}

#[test]
fn test_named_predicates() {
    let mut checkbox = element("id_flag");
    checkbox.set_attr("type", "checkbox");
    checkbox.set_attr("class", "pull-left form-control");

    let typed = Recorder::new();
    let classed = Recorder::new();
    let wrong = Recorder::new();

    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register(ElementId::new("id_flag"), AttrEquals::new("type", "checkbox"), typed.clone());
    dispatcher.register("id_flag".to_string(), HasClass("pull-left".into()), classed.clone());
    dispatcher.register("id_flag", AttrEquals::new("type", "text"), wrong.clone());
    dispatcher.activate();

    dispatcher.notify(&checkbox).unwrap();

    assert_eq!(typed.count(), 1);
    assert_eq!(classed.count(), 1);
    assert_eq!(wrong.count(), 0);
}

#[test]
fn test_predicate_sees_changed_element() {
    let recorder = Recorder::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register(
        "id_value",
        predicate_fn(|el: &DomElement| el.attr("value") == Some("true")),
        recorder.clone(),
    );
    dispatcher.activate();

    let mut input = element("id_value");
    input.set_attr("value", "false");
    dispatcher.notify(&input).unwrap();
    input.set_attr("value", "true");
    dispatcher.notify(&input).unwrap();

    assert_eq!(recorder.count(), 1);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_unregister_shifts_later_handlers() {
    let h1 = Recorder::new();
    let h2 = Recorder::new();
    let h3 = Recorder::new();

    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register("a", Always, h1.clone());
    dispatcher.register("a", Always, h2.clone());
    dispatcher.register("a", Always, h3.clone());
    dispatcher.activate();

    dispatcher.unregister(HandlerIndex(1)).unwrap();
    let report = dispatcher.notify(&element("a")).unwrap();

    assert_eq!(dispatcher.len(), 2);
    assert_eq!(report.fired, [HandlerIndex(0), HandlerIndex(1)]);
    assert_eq!(h1.count(), 1);
    assert_eq!(h2.count(), 0);
    assert_eq!(h3.count(), 1);
}

#[test]
fn test_unregister_out_of_range() {
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register("a", Always, Recorder::new());

    assert_eq!(
        dispatcher.unregister(HandlerIndex(3)),
        Err(DispatchError::NoSuchHandler { index: 3, len: 1 })
    );
    assert_eq!(dispatcher.len(), 1);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_failing_action_is_isolated_by_default() {
    let before = Recorder::new();
    let after = Recorder::new();

    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register("a", Always, before.clone());
    dispatcher.register(
        "a",
        Always,
        action_fn(|_: &DomElement| Err("value rejected".into())),
    );
    dispatcher.register("a", Always, after.clone());
    dispatcher.activate();

    let report = dispatcher.notify(&element("a")).unwrap();

    assert_eq!(before.count(), 1);
    assert_eq!(after.count(), 1);
    assert_eq!(report.fired, [HandlerIndex(0), HandlerIndex(2)]);
    assert!(!report.is_clean());
    assert_eq!(report.failures[0].index, HandlerIndex(1));
    assert_eq!(report.failures[0].stage, HandlerStage::Action);
    assert_eq!(report.failures[0].message, "value rejected");
}

#[test]
fn test_panicking_predicate_is_isolated() {
    let after = Recorder::new();

    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register(
        "a",
        predicate_fn(|_: &DomElement| -> bool { panic!("bad predicate") }),
        Recorder::new(),
    );
    dispatcher.register("a", Always, after.clone());
    dispatcher.activate();

    let report = dispatcher.notify(&element("a")).unwrap();

    assert_eq!(after.count(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].stage, HandlerStage::Predicate);
    assert_eq!(report.failures[0].message, "bad predicate");
}

#[test]
fn test_abort_policy_stops_the_pass() {
    let after = Recorder::new();

    let mut dispatcher: Dispatcher =
        Dispatcher::with_config(DispatcherConfig::new().on_failure(FailurePolicy::Abort));
    dispatcher.register(
        selector_fn(|| -> String { panic!("no target") }),
        Always,
        Recorder::new(),
    );
    dispatcher.register("a", Always, after.clone());
    dispatcher.activate();

    let err = dispatcher.notify(&element("a")).unwrap_err();

    assert_eq!(after.count(), 0);
    match err {
        DispatchError::HandlerFailed(failure) => {
            assert_eq!(failure.index, HandlerIndex(0));
            assert_eq!(failure.stage, HandlerStage::Selector);
            assert_eq!(failure.message, "no target");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_handler_failure_display() {
    let failure = formhub::HandlerFailure {
        index: HandlerIndex(2),
        stage: HandlerStage::Action,
        message: "oops".to_string(),
    };
    assert_eq!(failure.to_string(), "Handler #2 failed in action: oops");
}

#[test]
fn test_isolation_does_not_depend_on_panic_hook() {
    let after = Recorder::new();

    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register(
        "a",
        Always,
        action_fn(|_: &DomElement| -> Result<(), formhub::HandlerError> {
            panic!("quiet failure")
        }),
    );
    dispatcher.register("a", Always, after.clone());
    dispatcher.activate();

    std::panic::set_hook(Box::new(|_| {}));
    let report = dispatcher.notify(&element("a"));
    let _ = std::panic::take_hook();

    let report = report.unwrap();
    assert_eq!(after.count(), 1);
    assert_eq!(report.failures[0].stage, HandlerStage::Action);
    assert_eq!(report.failures[0].message, "quiet failure");
}
