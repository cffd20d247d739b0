//! Adapter tests against the stub plugin.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;

use super::{BridgeAdapter, DemoAction};
use crate::config::BridgeConfig;
use crate::fixtures;
use crate::log_view::{EntryLevel, LogView};
use crate::plugin::{EventCategory, PluginCall, StubOutcome, StubPlugin, UserpilotPlugin};

const SINGLE_SHOT: [DemoAction; 8] = [
    DemoAction::Setup,
    DemoAction::Identify,
    DemoAction::Anonymous,
    DemoAction::Screen,
    DemoAction::Track,
    DemoAction::TriggerExperience,
    DemoAction::EndExperience,
    DemoAction::Logout,
];

fn method_for(action: DemoAction) -> &'static str {
    match action {
        DemoAction::Setup => "setup",
        DemoAction::Identify => "identify",
        DemoAction::Anonymous => "anonymous",
        DemoAction::RegisterCallbacks => "registerCallbacks",
        DemoAction::Screen => "screen",
        DemoAction::Track => "track",
        DemoAction::TriggerExperience => "triggerExperience",
        DemoAction::EndExperience => "endExperience",
        DemoAction::Logout => "logout",
    }
}

fn config() -> BridgeConfig {
    BridgeConfig {
        seed: Some(1234),
        ..BridgeConfig::default()
    }
}

fn adapter_with(stub: Arc<StubPlugin>) -> BridgeAdapter {
    let plugin: Arc<dyn UserpilotPlugin> = stub;
    BridgeAdapter::new(
        Some(plugin),
        LogView::new("output"),
        LogView::new("callbacks"),
        &config(),
    )
}

fn adapter_without_plugin() -> BridgeAdapter {
    BridgeAdapter::new(
        None,
        LogView::new("output"),
        LogView::new("callbacks"),
        &config(),
    )
}

fn count(view: &LogView, level: EntryLevel) -> usize {
    view.entries().iter().filter(|e| e.level == level).count()
}

#[test]
fn test_missing_plugin_logs_one_diagnostic_per_action() {
    for action in DemoAction::ALL {
        let mut adapter = adapter_without_plugin();
        adapter.perform(action);

        let output = adapter.output();
        assert_eq!(count(output, EntryLevel::Diagnostic), 1, "{:?}", action);
        assert_eq!(count(output, EntryLevel::Success), 0);
        assert_eq!(count(output, EntryLevel::Error), 0);
        assert_eq!(
            output.latest().unwrap().message,
            "Userpilot plugin not found. Make sure the plugin is installed."
        );
        assert!(adapter.callbacks().is_empty());
        assert!(adapter.subscriptions().is_empty());
    }
}

#[test]
fn test_each_action_calls_its_method_once() {
    for action in SINGLE_SHOT {
        let stub = Arc::new(StubPlugin::succeeding());
        let mut adapter = adapter_with(Arc::clone(&stub));
        adapter.perform(action);

        let calls = stub.calls();
        assert_eq!(calls.len(), 1, "{:?}", action);
        assert_eq!(calls[0].method_name(), method_for(action));

        let output = adapter.output();
        assert_eq!(count(output, EntryLevel::Success), 1);
        assert_eq!(count(output, EntryLevel::Error), 0);
        assert_eq!(count(output, EntryLevel::Diagnostic), 0);
    }
}

#[test]
fn test_success_entry_carries_serialized_result() {
    let stub = Arc::new(StubPlugin::new(StubOutcome::Succeed(json!({ "user": "user123" }))));
    let mut adapter = adapter_with(stub);
    adapter.call_identify();

    let latest = adapter.output().latest().unwrap();
    assert_eq!(latest.level, EntryLevel::Success);
    assert_eq!(latest.message, r#"Identify success: {"user":"user123"}"#);
}

#[test]
fn test_error_entry_carries_serialized_error() {
    let stub = Arc::new(StubPlugin::failing(json!({ "code": "E1", "message": "boom" })));
    let mut adapter = adapter_with(stub);
    adapter.call_trigger_experience();

    let output = adapter.output();
    assert_eq!(count(output, EntryLevel::Error), 1);
    assert_eq!(count(output, EntryLevel::Success), 0);
    assert_eq!(
        output.latest().unwrap().message,
        r#"triggerExperience error: {"code":"E1","message":"boom"}"#
    );
}

#[test]
fn test_silent_plugin_logs_no_outcome() {
    let stub = Arc::new(StubPlugin::new(StubOutcome::Silent));
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.call_logout();

    assert_eq!(stub.call_count("logout"), 1);
    let output = adapter.output();
    assert_eq!(output.len(), 1);
    assert_eq!(output.latest().unwrap().message, "Calling logout method...");
}

#[test]
fn test_setup_arguments() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.call_setup();

    assert_eq!(
        stub.calls(),
        vec![PluginCall::Setup {
            token: "APP_TOKEN".into(),
            options: fixtures::setup_options(),
        }]
    );

    let messages: Vec<_> = adapter.output().entries().into_iter().map(|e| e.message).collect();
    assert_eq!(
        messages[0],
        r#"Setup options: {"logging":true,"useInAppBrowser":false,"disableRequestPushNotificationsPermission":true}"#
    );
    assert_eq!(messages[1], "Calling setup method...");
    assert!(messages[2].starts_with("Setup success: "));
}

#[test]
fn test_configured_token_is_sent() {
    let stub = Arc::new(StubPlugin::succeeding());
    let plugin: Arc<dyn UserpilotPlugin> = stub.clone();
    let config = BridgeConfig {
        app_token: "live-token".into(),
        ..config()
    };
    let mut adapter = BridgeAdapter::new(
        Some(plugin),
        LogView::new("output"),
        LogView::new("callbacks"),
        &config,
    );
    adapter.call_setup();

    match &stub.calls()[0] {
        PluginCall::Setup { token, .. } => assert_eq!(token, "live-token"),
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn test_identify_arguments() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.call_identify();

    assert_eq!(
        stub.calls(),
        vec![PluginCall::Identify {
            user_id: "user123".into(),
            properties: fixtures::user_properties(),
            company: fixtures::company(),
        }]
    );
}

#[test]
fn test_trigger_experience_arguments() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.call_trigger_experience();

    assert_eq!(
        stub.calls(),
        vec![PluginCall::TriggerExperience {
            experience_id: "experience_123".into(),
        }]
    );
    let output = adapter.output().entries();
    assert_eq!(output[0].message, "Triggering experience: experience_123");
    assert_eq!(output[1].message, "Calling triggerExperience method...");
}

#[test]
fn test_screen_preamble_names_the_sent_screen() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.call_screen();

    let Some(PluginCall::Screen { name }) = stub.calls().into_iter().next() else {
        panic!("expected a screen call");
    };
    assert_eq!(
        adapter.output().entries()[0].message,
        format!("Selected screen: {}", name)
    );
}

#[test]
fn test_screen_selection_is_in_set_and_complete() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    for _ in 0..100 {
        adapter.call_screen();
    }

    let mut seen = HashSet::new();
    for call in stub.calls() {
        match call {
            PluginCall::Screen { name } => {
                assert!(fixtures::SCREEN_NAMES.contains(&name.as_str()));
                seen.insert(name);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }
    assert_eq!(seen.len(), fixtures::SCREEN_NAMES.len());
}

#[test]
fn test_track_selection_is_in_set_and_complete() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    for _ in 0..100 {
        adapter.call_track();
    }

    let mut seen = HashSet::new();
    for call in stub.calls() {
        match call {
            PluginCall::Track { event } => {
                assert!(fixtures::TRACK_EVENT_NAMES.contains(&event.name.as_str()));
                seen.insert(event.name);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }
    assert_eq!(seen.len(), fixtures::TRACK_EVENT_NAMES.len());
}

#[test]
fn test_register_callbacks_installs_one_listener_per_category() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.register_callbacks();

    for category in EventCategory::ALL {
        assert_eq!(stub.listener_count(category), 1);
    }
    assert_eq!(adapter.subscriptions().len(), 3);
    assert_eq!(stub.call_count("registerCallbacks"), 1);
    assert_eq!(
        adapter.output().latest().unwrap().message,
        "Callbacks registered successfully"
    );
}

#[test]
fn test_events_go_to_callbacks_view_only() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.register_callbacks();
    let output_before = adapter.output().len();

    stub.emit(EventCategory::Navigation, json!({ "url": "app://home" }));
    stub.emit(EventCategory::Analytics, json!({ "analytic": "Screen" }));
    stub.emit(EventCategory::Experience, json!({ "state": "Started" }));
    stub.emit(EventCategory::Analytics, json!({ "analytic": "Event" }));

    assert_eq!(adapter.output().len(), output_before);

    let entries = adapter.callbacks().entries();
    let categories: Vec<_> = entries.iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        vec![
            Some(EventCategory::Navigation),
            Some(EventCategory::Analytics),
            Some(EventCategory::Experience),
            Some(EventCategory::Analytics),
        ]
    );
    assert!(entries.iter().all(|e| e.level == EntryLevel::Event));
    assert_eq!(adapter.callbacks().scroll_anchor(), Some(3));
}

#[test]
fn test_registration_error_is_logged() {
    let stub = Arc::new(
        StubPlugin::succeeding()
            .with_outcome("registerCallbacks", StubOutcome::Fail(json!("bridge offline"))),
    );
    let mut adapter = adapter_with(stub);
    adapter.register_callbacks();

    let latest = adapter.output().latest().unwrap();
    assert_eq!(latest.level, EntryLevel::Error);
    assert_eq!(latest.message, r#"Callbacks registration error: "bridge offline""#);
}

#[test]
fn test_registering_twice_installs_second_set() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.register_callbacks();
    adapter.register_callbacks();

    assert_eq!(stub.listener_count(EventCategory::Experience), 2);
    stub.emit(EventCategory::Experience, json!({}));
    assert_eq!(adapter.callbacks().len(), 2);
}

#[test]
fn test_repeated_handler_is_independent() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.call_anonymous();
    adapter.call_anonymous();

    assert_eq!(stub.call_count("anonymous"), 2);
    let successes: Vec<_> = adapter
        .output()
        .entries()
        .into_iter()
        .filter(|e| e.level == EntryLevel::Success)
        .map(|e| e.message)
        .collect();
    assert_eq!(successes.len(), 2);
    assert_eq!(successes[0], successes[1]);
}

#[test]
fn test_output_only_grows() {
    let stub = Arc::new(StubPlugin::succeeding());
    let mut adapter = adapter_with(stub);

    let mut previous = Vec::new();
    for action in DemoAction::ALL {
        adapter.perform(action);
        let current = adapter.output().entries();
        assert!(current.len() > previous.len());
        assert_eq!(&current[..previous.len()], &previous[..]);
        assert_eq!(adapter.output().scroll_anchor(), Some(current.len() - 1));
        previous = current;
    }
}

#[test]
fn test_per_method_override() {
    let stub = Arc::new(
        StubPlugin::succeeding()
            .with_outcome("endExperience", StubOutcome::Fail(json!({ "code": "none" }))),
    );
    let mut adapter = adapter_with(Arc::clone(&stub));
    adapter.call_end_experience();
    adapter.call_logout();

    let levels: Vec<_> = adapter
        .output()
        .entries()
        .into_iter()
        .map(|e| e.level)
        .filter(|l| matches!(l, EntryLevel::Success | EntryLevel::Error))
        .collect();
    assert_eq!(levels, vec![EntryLevel::Error, EntryLevel::Success]);
}
