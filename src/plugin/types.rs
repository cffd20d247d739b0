//! Argument records and event categories for the plugin surface.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Options passed to `setup`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupOptions {
    /// Enable/disable SDK logging
    pub logging: bool,
    /// Open links in the in-app browser (Android only)
    pub use_in_app_browser: bool,
    /// Stop the SDK from requesting the push notification permission
    pub disable_request_push_notifications_permission: bool,
}

/// Properties attached to an identified user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProperties {
    pub name: String,
    pub email: String,
    pub plan: String,
}

/// Company the identified user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: String,
    pub name: String,
}

/// A named analytics event with free-form properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackEvent {
    pub name: String,
    pub properties: Map<String, Value>,
}

/// Categories of events the SDK emits after `registerCallbacks`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventCategory {
    Navigation,
    Analytics,
    Experience,
}

impl EventCategory {
    pub const ALL: [EventCategory; 3] = [
        EventCategory::Navigation,
        EventCategory::Analytics,
        EventCategory::Experience,
    ];

    /// Name the SDK uses for this event stream
    pub fn event_name(self) -> &'static str {
        match self {
            EventCategory::Navigation => "UserpilotNavigationEvent",
            EventCategory::Analytics => "UserpilotAnalyticsEvent",
            EventCategory::Experience => "UserpilotExperienceEvent",
        }
    }

    /// Parse a short category name (`navigation`, `analytics`, `experience`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "navigation" | "nav" => Some(EventCategory::Navigation),
            "analytics" | "analytic" => Some(EventCategory::Analytics),
            "experience" | "exp" => Some(EventCategory::Experience),
            _ => None,
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// Error payload reported by a plugin through its error callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginError {
    pub code: String,
    pub message: String,
}

impl PluginError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Convert into the JSON value handed to an error callback
    pub fn into_value(self) -> Value {
        serde_json::json!({ "code": self.code, "message": self.message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_options_serialize_camel_case() {
        let options = SetupOptions {
            logging: true,
            use_in_app_browser: false,
            disable_request_push_notifications_permission: true,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            json,
            r#"{"logging":true,"useInAppBrowser":false,"disableRequestPushNotificationsPermission":true}"#
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(EventCategory::parse("Navigation"), Some(EventCategory::Navigation));
        assert_eq!(EventCategory::parse("exp"), Some(EventCategory::Experience));
        assert_eq!(EventCategory::parse("screen"), None);
        assert_eq!(
            EventCategory::Analytics.to_string(),
            "UserpilotAnalyticsEvent"
        );
    }
}
