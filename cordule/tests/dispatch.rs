//! Request dispatch and observer bookkeeping.

use cordule::{Registry, testing::CountingObserver};

mod common;
use common::{Inert, Params, ReplyModule, init_tracing};

type AppRegistry = Registry<Params, String>;

#[test]
fn test_unregistered_request() {
    init_tracing();
    let registry = AppRegistry::new();
    assert_eq!(registry.dispatch("unregistered-request", &Params::default()), None);
    assert_eq!(registry.dispatch_default("unregistered-request"), None);
}

#[test]
fn test_results_follow_registration_order() {
    let registry = AppRegistry::new();
    registry
        .register_module("a", ReplyModule::new("greet", "hi"))
        .unwrap();
    registry
        .register_module("b", ReplyModule::new("greet", "hello"))
        .unwrap();

    assert_eq!(
        registry.dispatch("greet", &Params::default()),
        Some(vec!["hi".to_string(), "hello".to_string()])
    );
}

#[test]
fn test_silent_observers_are_not_recorded() {
    let registry = AppRegistry::new();
    let a = registry.register_module("a", Inert).unwrap();
    let b = registry.register_module("b", Inert).unwrap();
    let c = registry.register_module("c", Inert).unwrap();
    let silent = CountingObserver::silent();
    registry.add_observer_with(a, "status", silent.clone());
    registry.add_observer(b, "status", |_cx, p: &Params| Some(p.text.clone()));
    registry.add_observer_with(c, "status", silent.clone());

    let results = registry.dispatch("status", &Params::new("ok")).unwrap();
    assert_eq!(results, vec!["ok".to_string()]);
    assert_eq!(silent.count(), 2);
    assert!(results.len() < registry.observer_count("status"));
}

#[test]
fn test_all_silent_yields_empty_results() {
    let registry = AppRegistry::new();
    let a = registry.register_module("a", Inert).unwrap();
    registry.add_observer(a, "status", |_cx, _p| None);
    assert_eq!(registry.dispatch_default("status"), Some(Vec::new()));
}

#[test]
fn test_params_reach_every_observer() {
    let registry = AppRegistry::new();
    let a = registry.register_module("a", Inert).unwrap();
    let b = registry.register_module("b", Inert).unwrap();
    registry.add_observer(a, "shout", |_cx, p: &Params| Some(p.text.to_uppercase()));
    registry.add_observer(b, "shout", |_cx, p: &Params| Some(format!("{}!", p.text)));

    assert_eq!(
        registry.dispatch("shout", &Params::new("hey")),
        Some(vec!["HEY".to_string(), "hey!".to_string()])
    );
}

#[test]
fn test_second_observer_from_same_module_is_rejected() {
    let registry = AppRegistry::new();
    let a = registry.register_module("a", Inert).unwrap();
    assert!(registry.add_observer(a, "greet", |_cx, _p| Some("first".to_string())));
    assert!(!registry.add_observer(a, "greet", |_cx, _p| Some("second".to_string())));

    assert_eq!(
        registry.dispatch_default("greet"),
        Some(vec!["first".to_string()])
    );
}

#[test]
fn test_same_module_may_observe_many_requests() {
    let registry = AppRegistry::new();
    let a = registry.register_module("a", Inert).unwrap();
    assert!(registry.add_observer(a, "greet", |_cx, _p| Some("hi".to_string())));
    assert!(registry.add_observer(a, "farewell", |_cx, _p| Some("bye".to_string())));
    assert_eq!(registry.requests(), vec!["farewell", "greet"]);
}

#[test]
fn test_removing_last_observer_means_unhandled() {
    let registry = AppRegistry::new();
    let a = registry.register_module("a", Inert).unwrap();
    let b = registry.register_module("b", Inert).unwrap();
    registry.add_observer(a, "greet", |_cx, _p| Some("hi".to_string()));
    registry.add_observer(b, "greet", |_cx, _p| Some("hello".to_string()));

    assert!(registry.remove_observer(a, "greet"));
    assert_eq!(
        registry.dispatch_default("greet"),
        Some(vec!["hello".to_string()])
    );
    assert!(registry.remove_observer(b, "greet"));
    assert_eq!(registry.dispatch_default("greet"), None);
    assert!(!registry.remove_observer(b, "greet"));
}

#[test]
fn test_readding_after_removal_goes_to_the_back() {
    let registry = AppRegistry::new();
    let a = registry.register_module("a", Inert).unwrap();
    let b = registry.register_module("b", Inert).unwrap();
    registry.add_observer(a, "greet", |_cx, _p| Some("a".to_string()));
    registry.add_observer(b, "greet", |_cx, _p| Some("b".to_string()));

    registry.remove_observer(a, "greet");
    registry.add_observer(a, "greet", |_cx, _p| Some("a".to_string()));
    assert_eq!(
        registry.dispatch_default("greet"),
        Some(vec!["b".to_string(), "a".to_string()])
    );
}
