//! Literal payloads the demo sends.
//!
//! No user input reaches the plugin: every argument comes from here.

use chrono::{SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Map, Value};

use crate::plugin::{Company, SetupOptions, TrackEvent, UserProperties};

/// Placeholder app token used unless one is configured
pub const APP_TOKEN_PLACEHOLDER: &str = "APP_TOKEN";

pub const DEMO_USER_ID: &str = "user123";

pub const DEMO_EXPERIENCE_ID: &str = "experience_123";

/// Screen names `screen` picks from
pub const SCREEN_NAMES: [&str; 5] = ["main", "screen one", "screen two", "events", "identify"];

/// Event names `track` picks from
pub const TRACK_EVENT_NAMES: [&str; 3] = ["button_clicked", "page_viewed", "feature_used"];

pub fn setup_options() -> SetupOptions {
    SetupOptions {
        logging: true,
        use_in_app_browser: false,
        disable_request_push_notifications_permission: true,
    }
}

pub fn user_properties() -> UserProperties {
    UserProperties {
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        plan: "premium".into(),
    }
}

pub fn company() -> Company {
    Company {
        id: "company123".into(),
        name: "Sample Company".into(),
    }
}

/// Pick one screen name uniformly
pub fn random_screen_name<R: Rng>(rng: &mut R) -> &'static str {
    SCREEN_NAMES.choose(rng).copied().unwrap_or(SCREEN_NAMES[0])
}

/// Build the three candidate events (stamped now) and pick one uniformly
pub fn random_track_event<R: Rng>(rng: &mut R) -> TrackEvent {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let duration: u32 = rng.gen_range(30..150);

    let mut events = vec![
        track_event(
            "button_clicked",
            json!({
                "button_name": "track_button",
                "timestamp": timestamp,
                "user_action": "manual_trigger",
            }),
        ),
        track_event(
            "page_viewed",
            json!({
                "page_name": "dashboard",
                "timestamp": timestamp,
                "duration": duration,
            }),
        ),
        track_event(
            "feature_used",
            json!({
                "feature_name": "export_data",
                "timestamp": timestamp,
                "success": true,
                "file_type": "csv",
            }),
        ),
    ];

    let index = rng.gen_range(0..events.len());
    events.swap_remove(index)
}

fn track_event(name: &str, properties: Value) -> TrackEvent {
    let properties = match properties {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    TrackEvent {
        name: name.to_string(),
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_screen_selection_covers_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let name = random_screen_name(&mut rng);
            assert!(SCREEN_NAMES.contains(&name), "out of set: {}", name);
            seen.insert(name);
        }
        assert_eq!(seen.len(), SCREEN_NAMES.len());
    }

    #[test]
    fn test_track_selection_covers_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let event = random_track_event(&mut rng);
            assert!(TRACK_EVENT_NAMES.contains(&event.name.as_str()));
            assert!(event.properties.contains_key("timestamp"));
            seen.insert(event.name);
        }
        assert_eq!(seen.len(), TRACK_EVENT_NAMES.len());
    }

    #[test]
    fn test_page_viewed_duration_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut checked = 0;
        for _ in 0..200 {
            let event = random_track_event(&mut rng);
            if event.name == "page_viewed" {
                let duration = event.properties["duration"].as_u64().unwrap();
                assert!((30..150).contains(&duration));
                checked += 1;
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_identity_literals() {
        assert_eq!(user_properties().email, "john.doe@example.com");
        assert_eq!(company().id, "company123");
        assert!(setup_options().disable_request_push_notifications_permission);
    }
}
