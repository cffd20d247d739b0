//! Append-only log views.
//!
//! A view is a shared handle: completions arriving on plugin threads append to
//! the same list the UI renders. Entries are stamped with the local time at
//! append, are never removed or edited, and the view always points its scroll
//! anchor at the newest one.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Local;
use serde_json::Value;

use crate::plugin::EventCategory;

/// Kind of a log entry, used for coloring and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLevel {
    /// Progress notes written before a call
    Info,
    /// A success callback fired
    Success,
    /// An error callback fired
    Error,
    /// The plugin capability is missing
    Diagnostic,
    /// An SDK event arrived
    Event,
}

impl EntryLevel {
    /// Console prefix for this level
    pub fn prefix(self) -> &'static str {
        match self {
            EntryLevel::Info => "[*]",
            EntryLevel::Success => "[✓]",
            EntryLevel::Error => "[✗]",
            EntryLevel::Diagnostic => "[!]",
            EntryLevel::Event => "[>]",
        }
    }
}

/// A single rendered line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Local time of the append, `HH:MM:SS`
    pub timestamp: String,
    pub level: EntryLevel,
    /// Set on callback-view entries
    pub category: Option<EventCategory>,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Some(category) => write!(f, "[{}] {}: {}", self.timestamp, category, self.message),
            None => write!(f, "[{}] {}", self.timestamp, self.message),
        }
    }
}

/// Shared, append-only list of entries
#[derive(Clone)]
pub struct LogView {
    name: &'static str,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl LogView {
    /// Create an empty view. `name` is the log target suffix for the console mirror.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a plain message
    pub fn append(&self, level: EntryLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            EntryLevel::Error | EntryLevel::Diagnostic => {
                log::warn!(target: "pilotbridge::view", "{} {}", self.name, message)
            }
            _ => log::info!(target: "pilotbridge::view", "{} {}", self.name, message),
        }

        self.push(LogEntry {
            timestamp: now(),
            level,
            category: None,
            message,
        });
    }

    /// Append an SDK event, rendering its data as pretty JSON
    pub fn append_event(&self, category: EventCategory, data: &Value) {
        let message = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        log::info!(target: "pilotbridge::view", "{} [{} Callback] {}", self.name, category, data);

        self.push(LogEntry {
            timestamp: now(),
            level: EntryLevel::Event,
            category: Some(category),
            message,
        });
    }

    /// Snapshot of all entries in insertion order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Entries appended at or after `cursor`
    pub fn entries_since(&self, cursor: usize) -> Vec<LogEntry> {
        self.lock().iter().skip(cursor).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Newest entry, if any
    pub fn latest(&self) -> Option<LogEntry> {
        self.lock().last().cloned()
    }

    /// Index the view should be scrolled to: always the newest entry
    pub fn scroll_anchor(&self) -> Option<usize> {
        self.lock().len().checked_sub(1)
    }

    /// Whole view as text, one entry per line
    pub fn to_text(&self) -> String {
        self.lock()
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&self, entry: LogEntry) {
        self.lock().push(entry);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        // Appending must never take the UI down, so recover from a poisoned lock
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn now() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread;

    #[test]
    fn test_append_keeps_order() {
        let view = LogView::new("output");
        view.append(EntryLevel::Info, "one");
        view.append(EntryLevel::Success, "two");
        view.append(EntryLevel::Error, "three");

        let messages: Vec<_> = view.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["one", "two", "three"]);
        assert_eq!(view.scroll_anchor(), Some(2));
        assert_eq!(view.latest().unwrap().level, EntryLevel::Error);
    }

    #[test]
    fn test_empty_view_has_no_anchor() {
        let view = LogView::new("output");
        assert!(view.is_empty());
        assert_eq!(view.scroll_anchor(), None);
    }

    #[test]
    fn test_earlier_entries_untouched() {
        let view = LogView::new("output");
        view.append(EntryLevel::Info, "first");
        let before = view.entries();

        for i in 0..10 {
            view.append(EntryLevel::Info, format!("more {}", i));
        }

        let after = view.entries();
        assert_eq!(after.len(), 11);
        assert_eq!(after[0], before[0]);
        assert_eq!(view.entries_since(9).len(), 2);
    }

    #[test]
    fn test_event_entry_rendering() {
        let view = LogView::new("callbacks");
        view.append_event(EventCategory::Navigation, &json!({ "url": "app://home" }));

        let entry = view.latest().unwrap();
        assert_eq!(entry.level, EntryLevel::Event);
        assert_eq!(entry.category, Some(EventCategory::Navigation));
        assert!(entry.message.contains("\"url\": \"app://home\""));
        assert!(entry.to_string().contains("UserpilotNavigationEvent:"));
        assert_eq!(entry.timestamp.len(), 8);
    }

    #[test]
    fn test_concurrent_appends_all_land() {
        let view = LogView::new("output");
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let view = view.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        view.append(EntryLevel::Info, format!("{}-{}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(view.len(), 100);
    }
}
