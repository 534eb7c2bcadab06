//! Engine seam: the embedded web-rendering collaborator.
//!
//! The launcher never assumes a specific browser engine. Everything it
//! needs from one is captured by two traits: [`WebEngine`] opens pages
//! bound to a profile's storage directory, and [`PageHost`] is the handle
//! for one open page — navigate, evaluate scripts, adjust the window.
//! Events flow the other way as [`PageEvent`]s, pumped by the UI glue into
//! [`crate::launcher::Launcher::handle_page_event`] on the single thread
//! that owns registry state.

use std::path::PathBuf;
use thiserror::Error;

/// Script evaluation failure inside a page.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The page reported an error while evaluating the script.
    #[error("script evaluation failed: {0}")]
    Evaluation(String),

    /// The page no longer exists (window closed under us).
    #[error("page is gone")]
    HostGone,
}

/// Failure opening a page or driving its window.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not create a page/window.
    #[error("failed to open page: {0}")]
    Spawn(String),

    /// Navigation or content loading failed.
    #[error("failed to load content: {0}")]
    Load(String),
}

/// Initial content for a newly opened page.
#[derive(Debug, Clone)]
pub enum PageContent {
    /// Navigate to a remote URL.
    Url(String),
    /// Render inline HTML (used for the quota-exceeded notice).
    Html(String),
}

/// Request to open one page window bound to a profile's storage.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Window title.
    pub title: String,
    /// Per-profile storage directory (cookies, local storage). The engine
    /// owns the internal layout; the launcher only ever measures its size.
    pub storage_dir: PathBuf,
    /// What to show first.
    pub content: PageContent,
}

/// Events a page host delivers back to the launcher.
///
/// Delivery is single-threaded: the UI glue receives these from the engine
/// and forwards them on the registry-owning thread.
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// A page navigation finished loading. Triggers the quota re-check
    /// while the session's quota watch is active.
    LoadFinished,
    /// A `console.log` line captured from the page.
    ConsoleMessage(String),
    /// A script evaluation completed with this result. Engines whose
    /// evaluation API is callback-based deliver results here instead of
    /// returning them from [`PageHost::evaluate`].
    ScriptResult(serde_json::Value),
    /// Any key was pressed in the page. Blocked sessions close on this.
    KeyPressed,
    /// The user asked to close the window.
    CloseRequested,
}

/// Handle for one open page window.
pub trait PageHost {
    /// Navigate to a URL.
    fn load_url(&mut self, url: &str) -> Result<(), EngineError>;

    /// Replace the page content with inline HTML.
    fn load_html(&mut self, html: &str) -> Result<(), EngineError>;

    /// Evaluate a script in the page context.
    ///
    /// Returns the JSON-serializable result. Engines that can only deliver
    /// results asynchronously return `Ok(Value::Null)` here and emit a
    /// [`PageEvent::ScriptResult`] later; `Null` results are never shown.
    fn evaluate(&mut self, script: &str) -> Result<serde_json::Value, ScriptError>;

    /// Evaluate a script, discarding any result.
    fn run_script(&mut self, script: &str) -> Result<(), ScriptError> {
        self.evaluate(script).map(|_| ())
    }

    /// Resize the window to an exact size (resolution presets).
    fn set_inner_size(&mut self, width: u32, height: u32);

    /// Enter or leave fullscreen.
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Whether the window is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Update the window title.
    fn set_title(&mut self, title: &str);

    /// Strip interactive chrome (toolbar/menu entries) from the window.
    /// Called once when a session transitions to Blocked.
    fn remove_chrome(&mut self);

    /// Close the window. Idempotent.
    fn close(&mut self);
}

/// Factory for page windows.
pub trait WebEngine {
    /// Open a new page window.
    fn open_page(&mut self, request: PageRequest) -> Result<Box<dyn PageHost>, EngineError>;
}
