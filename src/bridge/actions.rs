//! The nine demo actions.

/// A user-triggered action, one per button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoAction {
    Setup,
    Identify,
    Anonymous,
    RegisterCallbacks,
    Screen,
    Track,
    TriggerExperience,
    EndExperience,
    Logout,
}

impl DemoAction {
    /// Button order
    pub const ALL: [DemoAction; 9] = [
        DemoAction::Setup,
        DemoAction::Identify,
        DemoAction::Anonymous,
        DemoAction::RegisterCallbacks,
        DemoAction::Screen,
        DemoAction::Track,
        DemoAction::TriggerExperience,
        DemoAction::EndExperience,
        DemoAction::Logout,
    ];

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            DemoAction::Setup => "Setup",
            DemoAction::Identify => "Identify",
            DemoAction::Anonymous => "Anonymous",
            DemoAction::RegisterCallbacks => "Register Callbacks",
            DemoAction::Screen => "Screen",
            DemoAction::Track => "Track",
            DemoAction::TriggerExperience => "Trigger Experience",
            DemoAction::EndExperience => "End Experience",
            DemoAction::Logout => "Logout",
        }
    }

    /// REPL command name
    pub fn command(self) -> &'static str {
        match self {
            DemoAction::Setup => "setup",
            DemoAction::Identify => "identify",
            DemoAction::Anonymous => "anonymous",
            DemoAction::RegisterCallbacks => "callbacks",
            DemoAction::Screen => "screen",
            DemoAction::Track => "track",
            DemoAction::TriggerExperience => "trigger",
            DemoAction::EndExperience => "end",
            DemoAction::Logout => "logout",
        }
    }

    /// Parse a REPL command (name or short alias)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "setup" => Some(DemoAction::Setup),
            "identify" | "id" => Some(DemoAction::Identify),
            "anonymous" | "anon" => Some(DemoAction::Anonymous),
            "callbacks" | "cb" => Some(DemoAction::RegisterCallbacks),
            "screen" => Some(DemoAction::Screen),
            "track" => Some(DemoAction::Track),
            "trigger" | "trigger-experience" => Some(DemoAction::TriggerExperience),
            "end" | "end-experience" => Some(DemoAction::EndExperience),
            "logout" => Some(DemoAction::Logout),
            _ => None,
        }
    }
}
