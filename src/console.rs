//! Developer console model.
//!
//! Holds the scrollback of one session's console window: submitted
//! commands, their results, captured `console.log` output, and script
//! errors. Rendering (colors, fonts, scrolling) is the UI glue's job; the
//! hook that captures `console.log` inside the page is the engine's job.
//! This module only formats and stores lines.

use crate::engine::PageHost;
use std::fmt;

/// One line of console scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    /// Echo of a submitted command.
    Command(String),
    /// Formatted result of an evaluation.
    Return(String),
    /// Captured `console.log` output from the page.
    Log(String),
    /// Script error reported by the engine.
    Error(String),
}

impl fmt::Display for ConsoleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleLine::Command(cmd) => write!(f, "> {cmd}"),
            ConsoleLine::Return(text) => write!(f, "[return] {text}"),
            ConsoleLine::Log(text) => write!(f, "[log] {text}"),
            ConsoleLine::Error(text) => write!(f, "[error] {text}"),
        }
    }
}

/// Console scrollback for one session.
#[derive(Debug, Default)]
pub struct DevConsole {
    lines: Vec<ConsoleLine>,
}

impl DevConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a command for evaluation in the page.
    ///
    /// Empty (after trimming) input is ignored. The command is echoed, then
    /// evaluated; a `null` result prints nothing, objects and arrays are
    /// pretty-printed, scalars print bare. Script errors land in the
    /// scrollback instead of propagating — they never affect registry state.
    pub fn submit(&mut self, host: &mut dyn PageHost, input: &str) {
        let command = input.trim();
        if command.is_empty() {
            return;
        }
        self.lines.push(ConsoleLine::Command(command.to_string()));

        match host.evaluate(command) {
            Ok(value) => self.push_result(value),
            Err(e) => self.lines.push(ConsoleLine::Error(e.to_string())),
        }
    }

    /// Append a script result (sync return or a late `ScriptResult` event).
    pub fn push_result(&mut self, value: serde_json::Value) {
        if let Some(text) = format_result(&value) {
            self.lines.push(ConsoleLine::Return(text));
        }
    }

    /// Append a captured `console.log` line.
    pub fn push_log(&mut self, message: impl Into<String>) {
        self.lines.push(ConsoleLine::Log(message.into()));
    }

    /// Append a script error.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.lines.push(ConsoleLine::Error(message.into()));
    }

    /// The scrollback, oldest first.
    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Format an evaluation result for display. `None` means print nothing.
fn format_result(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
            // Pretty-print structured results over two-space indents.
            Some(serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()))
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineError, ScriptError};
    use serde_json::json;

    /// Minimal host that answers every evaluation with a canned result.
    struct CannedHost {
        result: Result<serde_json::Value, String>,
        evaluated: Vec<String>,
    }

    impl CannedHost {
        fn returning(value: serde_json::Value) -> Self {
            Self { result: Ok(value), evaluated: Vec::new() }
        }

        fn failing(message: &str) -> Self {
            Self { result: Err(message.to_string()), evaluated: Vec::new() }
        }
    }

    impl PageHost for CannedHost {
        fn load_url(&mut self, _url: &str) -> Result<(), EngineError> {
            Ok(())
        }
        fn load_html(&mut self, _html: &str) -> Result<(), EngineError> {
            Ok(())
        }
        fn evaluate(&mut self, script: &str) -> Result<serde_json::Value, ScriptError> {
            self.evaluated.push(script.to_string());
            self.result
                .clone()
                .map_err(ScriptError::Evaluation)
        }
        fn set_inner_size(&mut self, _width: u32, _height: u32) {}
        fn set_fullscreen(&mut self, _fullscreen: bool) {}
        fn is_fullscreen(&self) -> bool {
            false
        }
        fn set_title(&mut self, _title: &str) {}
        fn remove_chrome(&mut self) {}
        fn close(&mut self) {}
    }

    #[test]
    fn submit_echoes_and_formats_scalar() {
        let mut console = DevConsole::new();
        let mut host = CannedHost::returning(json!(42));
        console.submit(&mut host, "  6 * 7  ");

        assert_eq!(host.evaluated, vec!["6 * 7"]);
        assert_eq!(
            console.lines(),
            &[
                ConsoleLine::Command("6 * 7".to_string()),
                ConsoleLine::Return("42".to_string()),
            ]
        );
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut console = DevConsole::new();
        let mut host = CannedHost::returning(json!(1));
        console.submit(&mut host, "   ");
        assert!(console.lines().is_empty());
    }

    #[test]
    fn null_result_prints_nothing() {
        let mut console = DevConsole::new();
        let mut host = CannedHost::returning(serde_json::Value::Null);
        console.submit(&mut host, "void 0");
        assert_eq!(
            console.lines(),
            &[ConsoleLine::Command("void 0".to_string())]
        );
    }

    #[test]
    fn object_result_is_pretty_printed() {
        let mut console = DevConsole::new();
        let mut host = CannedHost::returning(json!({"a": 1}));
        console.submit(&mut host, "window.obj");
        match console.lines().last().unwrap() {
            ConsoleLine::Return(text) => {
                assert!(text.contains("\"a\": 1"));
                assert!(text.contains('\n'));
            }
            other => panic!("unexpected line {other:?}"),
        }
    }

    #[test]
    fn string_result_prints_bare() {
        let mut console = DevConsole::new();
        let mut host = CannedHost::returning(json!("hello"));
        console.submit(&mut host, "greeting");
        assert_eq!(
            console.lines().last(),
            Some(&ConsoleLine::Return("hello".to_string()))
        );
    }

    #[test]
    fn script_errors_land_in_scrollback() {
        let mut console = DevConsole::new();
        let mut host = CannedHost::failing("ReferenceError: w97 is not defined");
        console.submit(&mut host, "w97.boot()");
        match console.lines().last().unwrap() {
            ConsoleLine::Error(text) => assert!(text.contains("ReferenceError")),
            other => panic!("unexpected line {other:?}"),
        }
    }

    #[test]
    fn log_lines_render_with_prefix() {
        let mut console = DevConsole::new();
        console.push_log("booted");
        assert_eq!(console.lines()[0].to_string(), "[log] booted");
    }
}
