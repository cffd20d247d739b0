//! CLI - reedline-based REPL interface
//!
//! Drives the bridge adapter without a window. New entries from both log
//! views are printed before every prompt.

use std::borrow::Cow;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use reedline::{Prompt, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal};
use serde_json::Value;

use crate::bridge::{BridgeAdapter, DemoAction};
use crate::log_view::{EntryLevel, LogEntry, LogView};
use crate::plugin::{EventCategory, SimulatedPlugin};

/// Prompt showing plugin availability
pub struct BridgePrompt {
    plugin_available: bool,
}

impl BridgePrompt {
    pub fn new(plugin_available: bool) -> Self {
        Self { plugin_available }
    }
}

impl Prompt for BridgePrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        let status = if self.plugin_available { "sdk" } else { "---" };
        Cow::Owned(format!("[{}]", status))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: reedline::PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "(failed) ",
        };
        Cow::Owned(format!("(search: {}{}) ", prefix, history_search.term))
    }
}

/// Command parsing result
#[derive(Debug, PartialEq)]
pub enum ParsedCommand {
    /// One of the nine demo actions
    Action(DemoAction),
    /// Simulate a native event: emit <category> [json]
    Emit(EventCategory, Value),
    /// Print the whole output view
    ShowOutput,
    /// Print the whole callbacks view
    ShowEvents,
    /// Help: ? or help
    Help,
    /// Quit: q or exit
    Quit,
    /// Unknown or malformed command
    Unknown(String),
}

/// Parse a command string into a structured command
pub fn parse_command(input: &str) -> ParsedCommand {
    let input = input.trim();
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts.first().copied().unwrap_or("");
    let arg = parts.get(1).map(|s| s.trim());

    if let Some(action) = DemoAction::parse(cmd) {
        return ParsedCommand::Action(action);
    }

    match cmd {
        "emit" => {
            let Some(arg) = arg else {
                return ParsedCommand::Unknown(input.to_string());
            };
            let mut pieces = arg.splitn(2, ' ');
            let category = pieces.next().and_then(EventCategory::parse);
            let data = match pieces.next() {
                Some(raw) => serde_json::from_str(raw.trim()).ok(),
                None => Some(Value::Object(Default::default())),
            };
            match (category, data) {
                (Some(category), Some(data)) => ParsedCommand::Emit(category, data),
                _ => ParsedCommand::Unknown(input.to_string()),
            }
        }
        "log" | "output" => ParsedCommand::ShowOutput,
        "events" => ParsedCommand::ShowEvents,
        "?" | "help" => ParsedCommand::Help,
        "q" | "quit" | "exit" => ParsedCommand::Quit,
        _ => ParsedCommand::Unknown(input.to_string()),
    }
}

/// Print the help message
fn print_help() {
    println!("{}", "Pilotbridge CLI Commands".bold().cyan());
    println!("{}", "═".repeat(50).cyan());

    println!("\n{}", "SDK calls:".bold().yellow());
    for action in DemoAction::ALL {
        println!("  {:<22} {}", action.command().green(), action.label());
    }

    println!("\n{}", "Events:".bold().yellow());
    println!(
        "  {}  Simulate a native event",
        "emit <category> [json]".green()
    );
    println!("    categories: navigation, analytics, experience");

    println!("\n{}", "Views:".bold().yellow());
    println!("  {}                    Show the output view", "log".green());
    println!("  {}                 Show the SDK callbacks view", "events".green());

    println!("\n{}", "Other:".bold().yellow());
    println!("  {}                      Show this help", "?".green());
    println!("  {}                      Quit", "q".green());
}

fn print_entry(entry: &LogEntry) {
    let line = entry.to_string();
    let colored = match entry.level {
        EntryLevel::Success => line.green(),
        EntryLevel::Error => line.red(),
        EntryLevel::Diagnostic => line.yellow(),
        EntryLevel::Event => line.magenta(),
        EntryLevel::Info => line.normal(),
    };
    println!("{} {}", entry.level.prefix(), colored);
}

/// Prints entries a view gained since the last call
struct Tail {
    view: LogView,
    cursor: usize,
}

impl Tail {
    fn new(view: LogView) -> Self {
        Self { view, cursor: 0 }
    }

    fn flush(&mut self) {
        let fresh = self.view.entries_since(self.cursor);
        self.cursor += fresh.len();
        for entry in &fresh {
            print_entry(entry);
        }
    }
}

/// Execute a parsed command. Returns false when the REPL should stop.
fn execute_command(
    adapter: &mut BridgeAdapter,
    simulator: Option<&Arc<SimulatedPlugin>>,
    cmd: ParsedCommand,
) -> bool {
    match cmd {
        ParsedCommand::Action(action) => adapter.perform(action),
        ParsedCommand::Emit(category, data) => match simulator {
            Some(sim) => {
                let reached = sim.emit(category, data);
                println!("[*] {} delivered to {} listener(s)", category, reached);
            }
            None => println!("{} No simulated plugin to emit from", "[!]".red()),
        },
        ParsedCommand::ShowOutput => {
            for entry in adapter.output().entries() {
                print_entry(&entry);
            }
        }
        ParsedCommand::ShowEvents => {
            for entry in adapter.callbacks().entries() {
                print_entry(&entry);
            }
        }
        ParsedCommand::Help => print_help(),
        ParsedCommand::Quit => {
            println!("[*] Shutting down...");
            return false;
        }
        ParsedCommand::Unknown(input) => {
            println!("{} Unknown command: '{}'", "[!]".red(), input);
            println!("    Type '?' for help");
        }
    }
    true
}

/// Run the CLI REPL
pub fn run_cli(mut adapter: BridgeAdapter, simulator: Option<Arc<SimulatedPlugin>>) -> Result<()> {
    let mut line_editor = Reedline::create();
    let prompt = BridgePrompt::new(adapter.has_plugin());
    let mut output_tail = Tail::new(adapter.output().clone());
    let mut events_tail = Tail::new(adapter.callbacks().clone());

    println!(
        "{}",
        "╔══════════════════════════════════════════════════════════════╗".cyan()
    );
    println!(
        "{}",
        "║  Pilotbridge CLI - Type '?' for help, 'q' to quit            ║".cyan()
    );
    println!(
        "{}",
        "╚══════════════════════════════════════════════════════════════╝".cyan()
    );

    loop {
        output_tail.flush();
        events_tail.flush();

        let sig = line_editor.read_line(&prompt)?;
        match sig {
            Signal::Success(buffer) => {
                let input = buffer.trim();
                if input.is_empty() {
                    continue;
                }

                let cmd = parse_command(input);
                if !execute_command(&mut adapter, simulator.as_ref(), cmd) {
                    break;
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\n[*] Interrupted");
                break;
            }
        }
    }

    Ok(())
}
