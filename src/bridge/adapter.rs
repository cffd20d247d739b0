//! Bridge adapter - one handler per demo action.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::config::BridgeConfig;
use crate::fixtures;
use crate::log_view::{EntryLevel, LogView};
use crate::plugin::{
    Completion, EventCategory, EventHandler, PluginCall, PluginResult, Subscription,
    UserpilotPlugin,
};

use super::{BridgeError, DemoAction};

/// Adapter between the demo UI and the plugin capability
pub struct BridgeAdapter {
    /// Injected capability; `None` when the plugin is not installed
    plugin: Option<Arc<dyn UserpilotPlugin>>,

    /// Call progress and outcomes
    output: LogView,

    /// SDK events
    callbacks: LogView,

    /// Token sent with `setup`
    app_token: String,

    /// Picks screen names and track events
    rng: StdRng,

    /// Listeners installed by `register_callbacks`
    subscriptions: Vec<Subscription>,
}

impl BridgeAdapter {
    pub fn new(
        plugin: Option<Arc<dyn UserpilotPlugin>>,
        output: LogView,
        callbacks: LogView,
        config: &BridgeConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            plugin,
            output,
            callbacks,
            app_token: config.app_token.clone(),
            rng,
            subscriptions: Vec::new(),
        }
    }

    pub fn output(&self) -> &LogView {
        &self.output
    }

    pub fn callbacks(&self) -> &LogView {
        &self.callbacks
    }

    pub fn has_plugin(&self) -> bool {
        self.plugin.is_some()
    }

    /// Listener handles installed so far
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// Run the handler for `action`
    pub fn perform(&mut self, action: DemoAction) {
        log::debug!("Action: {:?}", action);
        match action {
            DemoAction::Setup => self.call_setup(),
            DemoAction::Identify => self.call_identify(),
            DemoAction::Anonymous => self.call_anonymous(),
            DemoAction::RegisterCallbacks => self.register_callbacks(),
            DemoAction::Screen => self.call_screen(),
            DemoAction::Track => self.call_track(),
            DemoAction::TriggerExperience => self.call_trigger_experience(),
            DemoAction::EndExperience => self.call_end_experience(),
            DemoAction::Logout => self.call_logout(),
        }
    }

    pub fn call_setup(&mut self) {
        let options = fixtures::setup_options();
        let rendered = serde_json::to_string(&options).unwrap_or_default();
        self.output
            .append(EntryLevel::Info, format!("Setup options: {}", rendered));

        self.execute(
            PluginCall::Setup {
                token: self.app_token.clone(),
                options,
            },
            "Setup success",
        );
    }

    pub fn call_identify(&mut self) {
        self.execute(
            PluginCall::Identify {
                user_id: fixtures::DEMO_USER_ID.to_string(),
                properties: fixtures::user_properties(),
                company: fixtures::company(),
            },
            "Identify success",
        );
    }

    pub fn call_anonymous(&mut self) {
        self.execute(PluginCall::Anonymous, "Anonymous success");
    }

    pub fn call_logout(&mut self) {
        self.execute(PluginCall::Logout, "Logout success");
    }

    pub fn call_screen(&mut self) {
        let name = fixtures::random_screen_name(&mut self.rng);
        self.output
            .append(EntryLevel::Info, format!("Selected screen: {}", name));
        self.execute(
            PluginCall::Screen {
                name: name.to_string(),
            },
            "Screen success",
        );
    }

    pub fn call_track(&mut self) {
        let event = fixtures::random_track_event(&mut self.rng);
        self.output
            .append(EntryLevel::Info, format!("Selected event: {}", event.name));
        self.execute(PluginCall::Track { event }, "Track success");
    }

    pub fn call_trigger_experience(&mut self) {
        let experience_id = fixtures::DEMO_EXPERIENCE_ID;
        self.output.append(
            EntryLevel::Info,
            format!("Triggering experience: {}", experience_id),
        );
        self.execute(
            PluginCall::TriggerExperience {
                experience_id: experience_id.to_string(),
            },
            "Trigger Experience success",
        );
    }

    pub fn call_end_experience(&mut self) {
        self.execute(PluginCall::EndExperience, "End Experience success");
    }

    /// Install the three event listeners, then ask the plugin to start forwarding.
    ///
    /// Events land in the callbacks view; the registration outcome lands in the
    /// output view. Every invocation installs a fresh set of listeners.
    pub fn register_callbacks(&mut self) {
        self.output
            .append(EntryLevel::Info, "Registering SDK callbacks...");

        let plugin = match self.plugin() {
            Ok(plugin) => plugin,
            Err(e) => {
                self.output.append(EntryLevel::Diagnostic, e.to_string());
                return;
            }
        };

        for category in EventCategory::ALL {
            let view = self.callbacks.clone();
            let handler: EventHandler =
                Box::new(move |data: Value| view.append_event(category, &data));
            let subscription = match category {
                EventCategory::Navigation => plugin.on_navigation_event(handler),
                EventCategory::Analytics => plugin.on_analytics_event(handler),
                EventCategory::Experience => plugin.on_experience_event(handler),
            };
            self.subscriptions.push(subscription);
        }

        let output = self.output.clone();
        let done: Completion = Box::new(move |result: PluginResult| match result {
            Ok(_) => output.append(EntryLevel::Success, "Callbacks registered successfully"),
            Err(error) => output.append(
                EntryLevel::Error,
                format!("Callbacks registration error: {}", error),
            ),
        });
        plugin.register_callbacks(done);
    }

    /// Resolve the injected capability
    fn plugin(&self) -> Result<Arc<dyn UserpilotPlugin>, BridgeError> {
        self.plugin.clone().ok_or(BridgeError::PluginUnavailable)
    }

    /// Log the call, make it, and log whichever callback fires
    fn execute(&self, call: PluginCall, success_message: &str) {
        let method = call.method_name();
        self.output
            .append(EntryLevel::Info, format!("Calling {} method...", method));

        let plugin = match self.plugin() {
            Ok(plugin) => plugin,
            Err(e) => {
                self.output.append(EntryLevel::Diagnostic, e.to_string());
                return;
            }
        };

        let output = self.output.clone();
        let success_message = success_message.to_string();
        let done: Completion = Box::new(move |result: PluginResult| match result {
            Ok(value) => output.append(
                EntryLevel::Success,
                format!("{}: {}", success_message, value),
            ),
            Err(error) => output.append(EntryLevel::Error, format!("{} error: {}", method, error)),
        });

        call.dispatch(plugin.as_ref(), done);
    }
}
