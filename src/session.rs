//! Per-session state machine.
//!
//! One `Session` wraps one open page window. Sessions are Active (showing
//! the profile's target page) or Blocked (showing the quota notice). The
//! quota watch is a per-session subscription: active sessions re-check the
//! gate after every completed navigation, and transitioning to Blocked
//! deactivates the watch so the check never runs against the notice page
//! itself.

use crate::console::DevConsole;
use crate::engine::{EngineError, PageHost, ScriptError};
use crate::scripts;

/// Identifier for one open session, unique within a launcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Rendering the profile's target page; quota watch active.
    Active,
    /// Showing the quota notice; closes on the next key press.
    Blocked,
}

/// One open page window bound to a profile.
pub struct Session {
    id: SessionId,
    profile: String,
    host: Box<dyn PageHost>,
    state: SessionState,
    /// Whether the post-navigation quota check is subscribed.
    quota_watch: bool,
    /// Target URL for "go home" / restart. Absent for sessions born Blocked.
    home_url: Option<String>,
    /// Per-session CORS-unblock toggle.
    cors_enabled: bool,
    console: DevConsole,
}

impl Session {
    /// Create an Active session pointed at its target URL.
    pub fn active(
        id: SessionId,
        profile: impl Into<String>,
        host: Box<dyn PageHost>,
        home_url: impl Into<String>,
        cors_enabled: bool,
    ) -> Self {
        Self {
            id,
            profile: profile.into(),
            host,
            state: SessionState::Active,
            quota_watch: true,
            home_url: Some(home_url.into()),
            cors_enabled,
            console: DevConsole::new(),
        }
    }

    /// Create a session that starts out Blocked (quota already exceeded at
    /// launch time). The host is expected to already show the notice page;
    /// its interactive chrome is stripped here, matching the mid-session
    /// [`Session::block`] transition.
    pub fn blocked(id: SessionId, profile: impl Into<String>, mut host: Box<dyn PageHost>) -> Self {
        host.remove_chrome();
        Self {
            id,
            profile: profile.into(),
            host,
            state: SessionState::Blocked,
            quota_watch: false,
            home_url: None,
            cors_enabled: false,
            console: DevConsole::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the post-navigation quota check should run for this session.
    pub fn quota_watch_active(&self) -> bool {
        self.quota_watch
    }

    pub fn console(&self) -> &DevConsole {
        &self.console
    }

    /// Transition to Blocked: deactivate the quota watch, strip interactive
    /// chrome, and replace the page with the static notice.
    ///
    /// Idempotent — a session already Blocked stays as it is.
    pub fn block(&mut self) -> Result<(), EngineError> {
        if self.state == SessionState::Blocked {
            return Ok(());
        }
        log::info!(
            "Session {:?} for profile '{}' exceeded its storage quota, blocking",
            self.id,
            self.profile
        );
        self.state = SessionState::Blocked;
        self.quota_watch = false;
        self.host.remove_chrome();
        self.host.set_title(&format!("Storage Full - {}", self.profile));
        self.host.load_html(scripts::BLOCKED_NOTICE_HTML)
    }

    /// React to a key press. Blocked sessions close on any key; returns
    /// true when the session closed itself.
    pub fn on_key_pressed(&mut self) -> bool {
        if self.state == SessionState::Blocked {
            self.host.close();
            return true;
        }
        false
    }

    /// React to a completed navigation: re-inject the CORS patch when the
    /// toggle is on. The quota re-check itself is driven by the launcher,
    /// which owns the registry.
    pub fn on_load_finished(&mut self) {
        if self.state == SessionState::Active && self.cors_enabled {
            // Patch is idempotent in-page, safe to send every navigation.
            if let Err(e) = self.host.run_script(scripts::CORS_UNBLOCK_JS) {
                log::warn!("CORS patch injection failed: {e}");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Chrome actions (forwarded from toolbar/menu glue)
    // -----------------------------------------------------------------------

    /// Reload the current page ("Restart" toolbar action).
    pub fn reload(&mut self) -> Result<(), ScriptError> {
        self.host.run_script("location.reload();")
    }

    /// Navigate back to the profile's target URL.
    pub fn go_home(&mut self) -> Result<(), EngineError> {
        match &self.home_url {
            Some(url) => {
                let url = url.clone();
                self.host.load_url(&url)
            }
            None => Ok(()),
        }
    }

    /// Apply a fixed resolution preset.
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.host.set_inner_size(width, height);
    }

    /// Toggle fullscreen.
    pub fn toggle_fullscreen(&mut self) {
        let fullscreen = self.host.is_fullscreen();
        self.host.set_fullscreen(!fullscreen);
    }

    /// Flip the CORS-unblock toggle. When turning it on with a page already
    /// loaded, the patch is injected immediately; turning it off reloads so
    /// the page returns to unpatched fetch behavior.
    pub fn set_cors_enabled(&mut self, enabled: bool) -> Result<(), ScriptError> {
        self.cors_enabled = enabled;
        if enabled {
            self.host.run_script(scripts::CORS_UNBLOCK_JS)
        } else {
            self.reload()
        }
    }

    pub fn cors_enabled(&self) -> bool {
        self.cors_enabled
    }

    /// Run an opaque script in the page (tools/system menu actions).
    pub fn run_script(&mut self, script: &str) -> Result<(), ScriptError> {
        self.host.run_script(script)
    }

    /// Submit a command from the developer console.
    pub fn submit_console_command(&mut self, input: &str) {
        self.console.submit(self.host.as_mut(), input);
    }

    /// Record a captured `console.log` line.
    pub fn push_console_log(&mut self, message: impl Into<String>) {
        self.console.push_log(message);
    }

    /// Record a late script result delivered by the engine.
    pub fn push_script_result(&mut self, value: serde_json::Value) {
        self.console.push_result(value);
    }

    /// Close the window. The launcher drops the session afterwards.
    pub fn close(&mut self) {
        self.host.close();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("profile", &self.profile)
            .field("state", &self.state)
            .field("quota_watch", &self.quota_watch)
            .finish_non_exhaustive()
    }
}
