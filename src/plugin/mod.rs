//! Plugin module - the Userpilot SDK capability surface.
//!
//! The SDK itself lives outside this crate. Everything the demo needs from it
//! is expressed by the [`UserpilotPlugin`] trait: single-shot calls that report
//! through a [`Completion`], and repeating events delivered to subscribers.

pub mod events;
pub mod simulated;
pub mod stub;
pub mod types;

use serde_json::{Map, Value};

pub use events::{EventHandler, EventHub, Subscription};
pub use simulated::{SimulatedConfig, SimulatedPlugin};
pub use stub::{StubOutcome, StubPlugin};
pub use types::{Company, EventCategory, PluginError, SetupOptions, TrackEvent, UserProperties};

/// Outcome of a plugin call: success payload or error payload
pub type PluginResult = Result<Value, Value>;

/// Single-shot completion handed to every plugin call.
///
/// Being `FnOnce`, it can fire at most once. It may run on any thread.
pub type Completion = Box<dyn FnOnce(PluginResult) + Send>;

/// Capability object exposing the SDK to the demo
pub trait UserpilotPlugin: Send + Sync {
    /// Initialize the SDK with an app token
    fn setup(&self, token: &str, options: &SetupOptions, done: Completion);

    /// Identify a user and their company
    fn identify(
        &self,
        user_id: &str,
        properties: &UserProperties,
        company: &Company,
        done: Completion,
    );

    /// Switch to an anonymous user
    fn anonymous(&self, done: Completion);

    /// Log out the current user
    fn logout(&self, done: Completion);

    /// Report a screen view
    fn screen(&self, name: &str, done: Completion);

    /// Report a custom event
    fn track(&self, name: &str, properties: &Map<String, Value>, done: Completion);

    /// Show an experience by id
    fn trigger_experience(&self, experience_id: &str, done: Completion);

    /// Dismiss the active experience
    fn end_experience(&self, done: Completion);

    /// Turn on native-side forwarding of SDK events to subscribers
    fn register_callbacks(&self, done: Completion);

    /// Install a listener for one event category
    fn subscribe(&self, category: EventCategory, handler: EventHandler) -> Subscription;

    fn on_navigation_event(&self, handler: EventHandler) -> Subscription {
        self.subscribe(EventCategory::Navigation, handler)
    }

    fn on_analytics_event(&self, handler: EventHandler) -> Subscription {
        self.subscribe(EventCategory::Analytics, handler)
    }

    fn on_experience_event(&self, handler: EventHandler) -> Subscription {
        self.subscribe(EventCategory::Experience, handler)
    }
}

/// One single-shot plugin invocation with its positional arguments
#[derive(Debug, Clone, PartialEq)]
pub enum PluginCall {
    Setup { token: String, options: SetupOptions },
    Identify {
        user_id: String,
        properties: UserProperties,
        company: Company,
    },
    Anonymous,
    Logout,
    Screen { name: String },
    Track { event: TrackEvent },
    TriggerExperience { experience_id: String },
    EndExperience,
    RegisterCallbacks,
}

impl PluginCall {
    /// Method name as exposed by the SDK bridge
    pub fn method_name(&self) -> &'static str {
        match self {
            PluginCall::Setup { .. } => "setup",
            PluginCall::Identify { .. } => "identify",
            PluginCall::Anonymous => "anonymous",
            PluginCall::Logout => "logout",
            PluginCall::Screen { .. } => "screen",
            PluginCall::Track { .. } => "track",
            PluginCall::TriggerExperience { .. } => "triggerExperience",
            PluginCall::EndExperience => "endExperience",
            PluginCall::RegisterCallbacks => "registerCallbacks",
        }
    }

    /// Invoke the matching trait method on `plugin`
    pub fn dispatch(&self, plugin: &dyn UserpilotPlugin, done: Completion) {
        match self {
            PluginCall::Setup { token, options } => plugin.setup(token, options, done),
            PluginCall::Identify {
                user_id,
                properties,
                company,
            } => plugin.identify(user_id, properties, company, done),
            PluginCall::Anonymous => plugin.anonymous(done),
            PluginCall::Logout => plugin.logout(done),
            PluginCall::Screen { name } => plugin.screen(name, done),
            PluginCall::Track { event } => plugin.track(&event.name, &event.properties, done),
            PluginCall::TriggerExperience { experience_id } => {
                plugin.trigger_experience(experience_id, done)
            }
            PluginCall::EndExperience => plugin.end_experience(done),
            PluginCall::RegisterCallbacks => plugin.register_callbacks(done),
        }
    }
}
