//! Simulated plugin - an in-process stand-in for the native SDK.
//!
//! Calls return immediately. Each one is queued to a worker thread which
//! waits out the configured latency, decides the outcome against a small SDK
//! state model, fires the completion, then emits any events the call caused
//! (only after `register_callbacks` turned forwarding on).

use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

use super::events::{EventHandler, EventHub, Subscription};
use super::types::{Company, EventCategory, PluginError, SetupOptions, TrackEvent, UserProperties};
use super::{Completion, PluginCall, PluginResult, UserpilotPlugin};

type Job = Box<dyn FnOnce() + Send>;

/// Tuning knobs for the simulated SDK
#[derive(Debug, Clone)]
pub struct SimulatedConfig {
    /// Delay before each completion fires
    pub latency: Duration,
    /// Probability in [0, 1] that a call fails with `simulated_failure`
    pub failure_rate: f64,
    /// Seed for failure injection and anonymous ids
    pub seed: Option<u64>,
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(250),
            failure_rate: 0.0,
            seed: None,
        }
    }
}

/// SDK-side state the simulation tracks
struct SdkState {
    configured: bool,
    forwarding: bool,
    user_id: Option<String>,
    active_experience: Option<String>,
    failure_rate: f64,
    rng: StdRng,
}

type Emitted = Vec<(EventCategory, Value)>;

impl SdkState {
    fn new(config: &SimulatedConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            configured: false,
            forwarding: false,
            user_id: None,
            active_experience: None,
            failure_rate: config.failure_rate.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Decide the outcome of a call and the events it produces
    fn apply(&mut self, call: &PluginCall) -> (PluginResult, Emitted) {
        if self.failure_rate > 0.0 && self.rng.gen_bool(self.failure_rate) {
            let err = PluginError::new(
                "simulated_failure",
                format!("{} failed (injected)", call.method_name()),
            );
            return (Err(err.into_value()), Vec::new());
        }

        match call {
            PluginCall::Setup { token, options } => {
                if token.trim().is_empty() {
                    let err = PluginError::new("invalid_token", "App token must not be empty");
                    return (Err(err.into_value()), Vec::new());
                }
                self.configured = true;
                let result = json!({ "status": "configured", "token": token, "options": options });
                (Ok(result), Vec::new())
            }
            PluginCall::RegisterCallbacks => {
                self.forwarding = true;
                (Ok(json!({ "status": "registered" })), Vec::new())
            }
            _ if !self.configured => {
                let err = PluginError::new(
                    "not_configured",
                    "Userpilot SDK is not set up. Call setup first.",
                );
                (Err(err.into_value()), Vec::new())
            }
            PluginCall::Identify {
                user_id,
                properties,
                company,
            } => {
                self.user_id = Some(user_id.clone());
                let result = json!({
                    "userId": user_id,
                    "properties": properties,
                    "company": company,
                });
                (Ok(result), Vec::new())
            }
            PluginCall::Anonymous => {
                let id = format!("anon-{:08x}", self.rng.gen::<u32>());
                self.user_id = Some(id.clone());
                (Ok(json!({ "userId": id, "anonymous": true })), Vec::new())
            }
            PluginCall::Logout => {
                let previous = self.user_id.take();
                self.active_experience = None;
                (
                    Ok(json!({ "status": "logged_out", "userId": previous })),
                    Vec::new(),
                )
            }
            PluginCall::Screen { name } => {
                let event = json!({ "analytic": "Screen", "value": name, "properties": {} });
                (
                    Ok(json!({ "screen": name })),
                    vec![(EventCategory::Analytics, event)],
                )
            }
            PluginCall::Track { event } => {
                let emitted = json!({
                    "analytic": "Event",
                    "value": event.name,
                    "properties": event.properties,
                });
                (
                    Ok(json!({ "event": event.name })),
                    vec![(EventCategory::Analytics, emitted)],
                )
            }
            PluginCall::TriggerExperience { experience_id } => {
                self.active_experience = Some(experience_id.clone());
                let events = vec![
                    (
                        EventCategory::Experience,
                        json!({ "type": "Experience", "id": experience_id, "state": "Started" }),
                    ),
                    (
                        EventCategory::Navigation,
                        json!({ "url": format!("userpilot://experience/{}", experience_id) }),
                    ),
                ];
                (
                    Ok(json!({ "experienceId": experience_id, "status": "triggered" })),
                    events,
                )
            }
            PluginCall::EndExperience => match self.active_experience.take() {
                Some(id) => {
                    let event = json!({ "type": "Experience", "id": id, "state": "Dismissed" });
                    (
                        Ok(json!({ "experienceId": id, "status": "ended" })),
                        vec![(EventCategory::Experience, event)],
                    )
                }
                None => {
                    let err = PluginError::new("no_active_experience", "No experience is showing");
                    (Err(err.into_value()), Vec::new())
                }
            },
        }
    }
}

/// Asynchronous SDK stand-in backed by a worker thread
pub struct SimulatedPlugin {
    jobs: Mutex<Sender<Job>>,
    state: Arc<Mutex<SdkState>>,
    hub: EventHub,
}

impl SimulatedPlugin {
    /// Start the worker thread and return the plugin
    pub fn start(config: SimulatedConfig) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel::<Job>();
        let latency = config.latency;

        thread::Builder::new()
            .name("userpilot-sim".into())
            .spawn(move || {
                // Ends when the plugin (and with it the sender) is dropped
                while let Ok(job) = rx.recv() {
                    if !latency.is_zero() {
                        thread::sleep(latency);
                    }
                    job();
                }
                log::debug!("Simulated plugin worker stopped");
            })?;

        log::info!(
            "Simulated Userpilot plugin started (latency {:?}, failure rate {})",
            config.latency,
            config.failure_rate
        );

        Ok(Self {
            jobs: Mutex::new(tx),
            state: Arc::new(Mutex::new(SdkState::new(&config))),
            hub: EventHub::new(),
        })
    }

    /// Push a native event to subscribers, as the device would
    pub fn emit(&self, category: EventCategory, data: Value) -> usize {
        self.hub.emit(category, data)
    }

    /// Whether `setup` has succeeded
    pub fn is_configured(&self) -> bool {
        lock_state(&self.state).configured
    }

    /// Whether `register_callbacks` has turned event forwarding on
    pub fn is_forwarding(&self) -> bool {
        lock_state(&self.state).forwarding
    }

    /// Currently identified user, if any
    pub fn current_user(&self) -> Option<String> {
        lock_state(&self.state).user_id.clone()
    }

    fn enqueue(&self, call: PluginCall, done: Completion) {
        let state = Arc::clone(&self.state);
        let hub = self.hub.clone();
        let method = call.method_name();

        let job: Job = Box::new(move || {
            let (result, events) = lock_state(&state).apply(&call);
            let forwarding = lock_state(&state).forwarding;
            log::debug!("Simulated {} -> {}", method, if result.is_ok() { "ok" } else { "error" });

            done(result);

            if forwarding {
                for (category, data) in events {
                    hub.emit(category, data);
                }
            }
        });

        let tx = self.jobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(mpsc::SendError(job)) = tx.send(job) {
            log::warn!("Simulated plugin worker is gone, completing {} inline", method);
            job();
        }
    }
}

fn lock_state(state: &Mutex<SdkState>) -> MutexGuard<'_, SdkState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl UserpilotPlugin for SimulatedPlugin {
    fn setup(&self, token: &str, options: &SetupOptions, done: Completion) {
        self.enqueue(
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
        self.enqueue(
            PluginCall::Identify {
                user_id: user_id.to_string(),
                properties: properties.clone(),
                company: company.clone(),
            },
            done,
        );
    }

    fn anonymous(&self, done: Completion) {
        self.enqueue(PluginCall::Anonymous, done);
    }

    fn logout(&self, done: Completion) {
        self.enqueue(PluginCall::Logout, done);
    }

    fn screen(&self, name: &str, done: Completion) {
        self.enqueue(
            PluginCall::Screen {
                name: name.to_string(),
            },
            done,
        );
    }

    fn track(&self, name: &str, properties: &Map<String, Value>, done: Completion) {
        self.enqueue(
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
        self.enqueue(
            PluginCall::TriggerExperience {
                experience_id: experience_id.to_string(),
            },
            done,
        );
    }

    fn end_experience(&self, done: Completion) {
        self.enqueue(PluginCall::EndExperience, done);
    }

    fn register_callbacks(&self, done: Completion) {
        self.enqueue(PluginCall::RegisterCallbacks, done);
    }

    fn subscribe(&self, category: EventCategory, handler: EventHandler) -> Subscription {
        self.hub.subscribe(category, handler)
    }
}
