//! Stub plugin for tests.
//!
//! Answers every call synchronously with a configured outcome and records the
//! calls it received.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::{Map, Value};

use super::events::{EventHandler, EventHub, Subscription};
use super::types::{Company, EventCategory, SetupOptions, TrackEvent, UserProperties};
use super::{Completion, PluginCall, UserpilotPlugin};

/// How the stub answers a call
#[derive(Debug, Clone, PartialEq)]
pub enum StubOutcome {
    /// Fire the success callback with this payload
    Succeed(Value),
    /// Fire the error callback with this payload
    Fail(Value),
    /// Never call back
    Silent,
}

#[derive(Default)]
struct StubState {
    calls: Vec<PluginCall>,
    overrides: HashMap<&'static str, StubOutcome>,
}

/// Recording plugin double
pub struct StubPlugin {
    default_outcome: StubOutcome,
    state: Mutex<StubState>,
    hub: EventHub,
}

impl StubPlugin {
    /// Stub that answers every call with `outcome`
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            default_outcome: outcome,
            state: Mutex::new(StubState::default()),
            hub: EventHub::new(),
        }
    }

    /// Stub that succeeds with `{"ok": true}`
    pub fn succeeding() -> Self {
        Self::new(StubOutcome::Succeed(serde_json::json!({ "ok": true })))
    }

    /// Stub that fails with `error`
    pub fn failing(error: Value) -> Self {
        Self::new(StubOutcome::Fail(error))
    }

    /// Override the outcome for one method (SDK method name, e.g. `triggerExperience`)
    pub fn with_outcome(self, method: &'static str, outcome: StubOutcome) -> Self {
        self.lock().overrides.insert(method, outcome);
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<PluginCall> {
        self.lock().calls.clone()
    }

    /// Number of calls received for one method
    pub fn call_count(&self, method: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.method_name() == method)
            .count()
    }

    /// Number of installed listeners for a category
    pub fn listener_count(&self, category: EventCategory) -> usize {
        self.hub.listener_count(category)
    }

    /// Simulate the native side pushing an event
    pub fn emit(&self, category: EventCategory, data: Value) -> usize {
        self.hub.emit(category, data)
    }

    fn lock(&self) -> MutexGuard<'_, StubState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn answer(&self, call: PluginCall, done: Completion) {
        let outcome = {
            let mut state = self.lock();
            let outcome = state
                .overrides
                .get(call.method_name())
                .cloned()
                .unwrap_or_else(|| self.default_outcome.clone());
            state.calls.push(call);
            outcome
        };

        match outcome {
            StubOutcome::Succeed(value) => done(Ok(value)),
            StubOutcome::Fail(value) => done(Err(value)),
            StubOutcome::Silent => {}
        }
    }
}

impl UserpilotPlugin for StubPlugin {
    fn setup(&self, token: &str, options: &SetupOptions, done: Completion) {
        self.answer(
            PluginCall::Setup {
                token: token.to_string(),
                options: *options,
            },
            done,
        );
    }

    fn identify(
        &self,
        user_id: &str,
        properties: &UserProperties,
        company: &Company,
        done: Completion,
    ) {
        self.answer(
            PluginCall::Identify {
                user_id: user_id.to_string(),
                properties: properties.clone(),
                company: company.clone(),
            },
            done,
        );
    }

    fn anonymous(&self, done: Completion) {
        self.answer(PluginCall::Anonymous, done);
    }

    fn logout(&self, done: Completion) {
        self.answer(PluginCall::Logout, done);
    }

    fn screen(&self, name: &str, done: Completion) {
        self.answer(
            PluginCall::Screen {
                name: name.to_string(),
            },
            done,
        );
    }

    fn track(&self, name: &str, properties: &Map<String, Value>, done: Completion) {
        self.answer(
            PluginCall::Track {
                event: TrackEvent {
                    name: name.to_string(),
                    properties: properties.clone(),
                },
            },
            done,
        );
    }

    fn trigger_experience(&self, experience_id: &str, done: Completion) {
        self.answer(
            PluginCall::TriggerExperience {
                experience_id: experience_id.to_string(),
            },
            done,
        );
    }

    fn end_experience(&self, done: Completion) {
        self.answer(PluginCall::EndExperience, done);
    }

    fn register_callbacks(&self, done: Completion) {
        self.answer(PluginCall::RegisterCallbacks, done);
    }

    fn subscribe(&self, category: EventCategory, handler: EventHandler) -> Subscription {
        self.hub.subscribe(category, handler)
    }
}
