//! Application controller: registry + settings + the owned session list.
//!
//! All user actions funnel through here, on the one thread that owns the
//! registry. The launcher implements the launch state machine (Resolve →
//! Prepare → Gate → Admit/Blocked) and routes page events back into the
//! per-session state machines. Sessions live in an explicit owned
//! collection; closing one never affects another.

use crate::engine::{EngineError, PageContent, PageEvent, PageRequest, WebEngine};
use crate::session::{Session, SessionId, SessionState};
use crate::settings::{self, LauncherSettings};
use crate::{registry as reg, scripts};
use reg::{ProfileRegistry, RegistryError};
use thiserror::Error;

/// Failures of a single launch attempt. All are terminal for that attempt
/// and surface to the invoking user action.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No profile with this name. Should not occur from a consistent list
    /// UI, but handled defensively.
    #[error("no profile named '{0}'")]
    NotFound(String),

    /// The record's version label has no URL in the target table.
    #[error("profile '{name}' references unknown version '{version}'")]
    UnknownVersion {
        name: String,
        version: String,
    },

    /// The storage directory could not be created.
    #[error("failed to prepare storage directory: {0}")]
    Prepare(#[from] std::io::Error),

    /// The engine failed to open a page window.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Recording the launch timestamp failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Summary shown by the profile-info action.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInfo {
    pub name: String,
    pub version: String,
    pub created: String,
    /// `None` renders as "Never".
    pub last_launched: Option<String>,
    /// On-disk size in MB, rounded to two decimals (display only).
    pub size_mb: f64,
    pub limit_enabled: bool,
    pub max_size_mb: Option<u64>,
    /// Raw-byte quota comparison, not the rounded figure.
    pub over_limit: bool,
}

impl ProfileInfo {
    /// Multi-line info text in the launcher's notice format.
    pub fn to_text(&self) -> String {
        let mut text = format!(
            "Name: {}\nVersion: {}\nCreated: {}\nLast Launched: {}\nSize: {} MB",
            self.name,
            self.version,
            self.created,
            self.last_launched.as_deref().unwrap_or("Never"),
            self.size_mb,
        );
        text.push_str(&format!(
            "\nLimit Enabled: {}",
            if self.limit_enabled { "Yes" } else { "No" }
        ));
        if self.limit_enabled
            && let Some(max) = self.max_size_mb
        {
            text.push_str(&format!("\nMax Allowed Size: {max} MB"));
            if self.over_limit {
                text.push_str("\n⚠️ Warning: Exceeds limit!");
            }
        }
        text
    }
}

/// Top-level application controller.
pub struct Launcher {
    registry: ProfileRegistry,
    settings: LauncherSettings,
    engine: Box<dyn WebEngine>,
    /// Open sessions, in launch order.
    sessions: Vec<Session>,
    next_session: u64,
}

impl Launcher {
    pub fn new(
        registry: ProfileRegistry,
        settings: LauncherSettings,
        engine: Box<dyn WebEngine>,
    ) -> Self {
        Self {
            registry,
            settings,
            engine,
            sessions: Vec::new(),
            next_session: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Registry passthroughs
    // -----------------------------------------------------------------------

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Create a profile (see [`ProfileRegistry::create`]).
    pub fn create_profile(
        &mut self,
        name: &str,
        version: &str,
        limit_enabled: bool,
        max_size_raw: Option<&str>,
    ) -> Result<(), RegistryError> {
        self.registry
            .create(name, version, limit_enabled, max_size_raw)
            .map(|_| ())
    }

    /// Rename a profile. Open sessions keep their original title.
    pub fn rename_profile(&mut self, old_name: &str, new_name: &str) -> Result<(), RegistryError> {
        self.registry.rename(old_name, new_name)
    }

    /// Delete a profile and its storage directory (best effort).
    pub fn delete_profile(&mut self, name: &str) -> Result<reg::DirCleanup, RegistryError> {
        self.registry.delete(name)
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    pub fn settings(&self) -> &LauncherSettings {
        &self.settings
    }

    /// Replace and persist the launcher settings.
    pub fn update_settings(&mut self, settings: LauncherSettings) -> anyhow::Result<()> {
        self.settings = settings;
        settings::save_settings(self.registry.data_root(), &self.settings)
    }

    // -----------------------------------------------------------------------
    // Launch state machine
    // -----------------------------------------------------------------------

    /// Launch a profile: Resolve → Prepare → Gate → Admit.
    ///
    /// Over-quota profiles get a Blocked session showing the disk-error
    /// notice; admitted profiles get an Active session pointed at the
    /// version's URL, with the launch timestamp recorded before returning.
    pub fn launch(&mut self, name: &str) -> Result<SessionId, LaunchError> {
        // Resolve
        let record = self
            .registry
            .get(name)
            .ok_or_else(|| LaunchError::NotFound(name.to_string()))?
            .clone();
        let storage_dir = self
            .registry
            .storage_dir(name)
            .ok_or_else(|| LaunchError::NotFound(name.to_string()))?;

        // Prepare — directory creation is idempotent.
        std::fs::create_dir_all(&storage_dir)?;
        let size_bytes = reg::directory_size_bytes(&storage_dir);

        // Gate
        if reg::is_over_quota(&record, size_bytes) {
            log::warn!(
                "Profile '{name}' is over quota ({size_bytes} bytes > {:?} MB), blocking launch",
                record.max_size_mb
            );
            let host = self.engine.open_page(PageRequest {
                title: format!("Storage Full - {name}"),
                storage_dir,
                content: PageContent::Html(scripts::BLOCKED_NOTICE_HTML.to_string()),
            })?;
            let id = self.next_id();
            self.sessions.push(Session::blocked(id, name, host));
            return Ok(id);
        }

        // Admit
        let url = reg::url_for(&record.version).ok_or_else(|| LaunchError::UnknownVersion {
            name: name.to_string(),
            version: record.version.clone(),
        })?;
        let host = self.engine.open_page(PageRequest {
            title: format!("{} ({name})", record.version),
            storage_dir,
            content: PageContent::Url(url.to_string()),
        })?;
        self.registry.record_launch(name)?;

        let id = self.next_id();
        self.sessions.push(Session::active(
            id,
            name,
            host,
            url,
            self.settings.enable_cors,
        ));
        log::info!("Launched profile '{name}' ({})", record.version);
        Ok(id)
    }

    fn next_id(&mut self) -> SessionId {
        let id = SessionId(self.next_session);
        self.next_session += 1;
        id
    }

    // -----------------------------------------------------------------------
    // Event routing
    // -----------------------------------------------------------------------

    /// Forward one engine event to its session. Events for sessions that
    /// already closed are dropped with a debug log.
    pub fn handle_page_event(&mut self, id: SessionId, event: PageEvent) {
        let Some(index) = self.sessions.iter().position(|s| s.id() == id) else {
            log::debug!("Dropping {event:?} for closed session {id:?}");
            return;
        };

        match event {
            PageEvent::LoadFinished => {
                self.sessions[index].on_load_finished();
                self.recheck_quota(index);
            }
            PageEvent::ConsoleMessage(message) => {
                self.sessions[index].push_console_log(message);
            }
            PageEvent::ScriptResult(value) => {
                self.sessions[index].push_script_result(value);
            }
            PageEvent::KeyPressed => {
                if self.sessions[index].on_key_pressed() {
                    self.sessions.remove(index);
                }
            }
            PageEvent::CloseRequested => {
                self.sessions[index].close();
                self.sessions.remove(index);
            }
        }
    }

    /// Re-evaluate the quota gate for a live session. Storage can grow
    /// while a page runs, so this fires after every completed navigation
    /// for sessions whose quota watch is still active.
    fn recheck_quota(&mut self, index: usize) {
        let session = &self.sessions[index];
        if !session.quota_watch_active() {
            return;
        }
        let name = session.profile().to_string();
        let Some(record) = self.registry.get(&name) else {
            // Profile deleted while its session was open; nothing to gate.
            return;
        };
        let Some(dir) = self.registry.storage_dir(&name) else {
            return;
        };
        let size_bytes = reg::directory_size_bytes(&dir);
        if reg::is_over_quota(record, size_bytes)
            && let Err(e) = self.sessions[index].block()
        {
            log::error!("Failed to show quota notice for '{name}': {e}");
        }
    }

    // -----------------------------------------------------------------------
    // Session access
    // -----------------------------------------------------------------------

    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn session_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id() == id)
    }

    /// Open sessions in launch order.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    pub fn open_session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Close a session and drop it from the collection.
    pub fn close_session(&mut self, id: SessionId) {
        if let Some(index) = self.sessions.iter().position(|s| s.id() == id) {
            self.sessions[index].close();
            self.sessions.remove(index);
        }
    }

    /// Whether any open session for this profile is Blocked.
    pub fn has_blocked_session(&self, name: &str) -> bool {
        self.sessions
            .iter()
            .any(|s| s.profile() == name && s.state() == SessionState::Blocked)
    }

    // -----------------------------------------------------------------------
    // Info
    // -----------------------------------------------------------------------

    /// Build the info summary for a profile.
    pub fn profile_info(&self, name: &str) -> Option<ProfileInfo> {
        let record = self.registry.get(name)?;
        let size_bytes = self
            .registry
            .storage_dir(name)
            .map(|dir| reg::directory_size_bytes(&dir))
            .unwrap_or(0);
        Some(ProfileInfo {
            name: name.to_string(),
            version: record.version.clone(),
            created: record.created.clone(),
            last_launched: record.last_launched.clone(),
            size_mb: reg::size_mb(size_bytes),
            limit_enabled: record.limit_enabled,
            max_size_mb: record.max_size_mb,
            over_limit: reg::is_over_quota(record, size_bytes),
        })
    }
}
