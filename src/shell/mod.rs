//! Windowed shell: tao event loop + wry webviews.
//!
//! Only compiled with the `webview` feature. The core launcher talks to an
//! abstract engine, but tao can create windows only on the event-loop
//! thread, so the engine handed to the launcher is a command queue: host
//! handles record what they want done, and the event loop applies the
//! queued commands to real windows after every launcher call. Page events
//! travel the other way as user events on the loop's proxy.

mod menus;
mod ui;

use crate::engine::{EngineError, PageContent, PageEvent, PageHost, PageRequest, ScriptError, WebEngine};
use crate::launcher::Launcher;
use crate::registry::{self, ProfileRegistry};
use crate::session::SessionId;
use crate::settings::LauncherSettings;
use crate::{chrome, scripts};
use anyhow::{Context, Result};
use menus::{MenuAction, SessionMenu};
use muda::MenuEvent;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy, EventLoopWindowTarget};
use tao::window::{Fullscreen, Window, WindowBuilder, WindowId};
use wry::http::Request;
use wry::{PageLoadEvent, WebContext, WebView, WebViewBuilder};

/// Identifier for one queued page window, assigned by the engine.
type HostId = u64;

/// User events delivered to the tao loop.
#[derive(Debug)]
enum ShellEvent {
    /// The launcher window finished loading its document.
    LauncherReady,
    /// IPC message from the launcher window.
    LauncherIpc(ui::IpcMessage),
    /// IPC message from a session page.
    PageIpc(HostId, ui::IpcMessage),
    /// IPC message from a developer-console window.
    ConsoleIpc(SessionId, ui::IpcMessage),
    /// A session page finished a navigation.
    PageLoaded(HostId),
    /// Result of a queued script evaluation.
    ScriptResult(HostId, serde_json::Value),
}

// ---------------------------------------------------------------------------
// Command-queue engine
// ---------------------------------------------------------------------------

/// Deferred window operation recorded by a host handle.
enum ShellCommand {
    LoadUrl { host: HostId, url: String },
    LoadHtml { host: HostId, html: String },
    Evaluate { host: HostId, script: String },
    SetSize { host: HostId, width: u32, height: u32 },
    SetFullscreen { host: HostId, fullscreen: bool },
    SetTitle { host: HostId, title: String },
    RemoveChrome { host: HostId },
    Close { host: HostId },
}

#[derive(Default)]
struct EngineShared {
    /// Window-open requests not yet realized.
    opens: Vec<(HostId, PageRequest)>,
    /// Operations on already-requested windows, in order.
    commands: VecDeque<ShellCommand>,
    next_host: HostId,
}

type Shared = Rc<RefCell<EngineShared>>;

/// Engine given to the launcher: records open requests for the loop.
struct ShellEngine {
    shared: Shared,
}

impl WebEngine for ShellEngine {
    fn open_page(&mut self, request: PageRequest) -> Result<Box<dyn PageHost>, EngineError> {
        let mut shared = self.shared.borrow_mut();
        let host = shared.next_host;
        shared.next_host += 1;
        shared.opens.push((host, request));
        Ok(Box::new(ShellHost {
            host,
            shared: self.shared.clone(),
            fullscreen: false,
        }))
    }
}

/// Host handle held by a session: every operation is queued.
struct ShellHost {
    host: HostId,
    shared: Shared,
    /// Requested fullscreen state, tracked locally so toggling works
    /// without a round trip to the window.
    fullscreen: bool,
}

impl ShellHost {
    fn push(&self, command: ShellCommand) {
        self.shared.borrow_mut().commands.push_back(command);
    }
}

impl PageHost for ShellHost {
    fn load_url(&mut self, url: &str) -> Result<(), EngineError> {
        self.push(ShellCommand::LoadUrl {
            host: self.host,
            url: url.to_string(),
        });
        Ok(())
    }

    fn load_html(&mut self, html: &str) -> Result<(), EngineError> {
        self.push(ShellCommand::LoadHtml {
            host: self.host,
            html: html.to_string(),
        });
        Ok(())
    }

    fn evaluate(&mut self, script: &str) -> Result<serde_json::Value, ScriptError> {
        // Results arrive later as PageEvent::ScriptResult; Null is the
        // "nothing yet" placeholder the console never renders.
        self.push(ShellCommand::Evaluate {
            host: self.host,
            script: script.to_string(),
        });
        Ok(serde_json::Value::Null)
    }

    fn set_inner_size(&mut self, width: u32, height: u32) {
        self.push(ShellCommand::SetSize {
            host: self.host,
            width,
            height,
        });
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
        self.push(ShellCommand::SetFullscreen {
            host: self.host,
            fullscreen,
        });
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_title(&mut self, title: &str) {
        self.push(ShellCommand::SetTitle {
            host: self.host,
            title: title.to_string(),
        });
    }

    fn remove_chrome(&mut self) {
        self.push(ShellCommand::RemoveChrome { host: self.host });
    }

    fn close(&mut self) {
        self.push(ShellCommand::Close { host: self.host });
    }
}

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

/// One realized session window.
struct PageWindow {
    window: Window,
    webview: WebView,
    menu: Option<SessionMenu>,
    /// Keeps the per-profile browsing context (cookies, local storage)
    /// alive for the lifetime of the window.
    _web_context: WebContext,
}

/// One developer-console window, child of a session.
struct ConsoleWindow {
    window: Window,
    webview: WebView,
}

/// What a given tao window is, for event routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowRole {
    Launcher,
    Page(HostId),
    Console(SessionId),
}

struct Shell {
    launcher: Launcher,
    shared: Shared,
    proxy: EventLoopProxy<ShellEvent>,
    /// Kept alive for the whole run; closing it exits the loop.
    _launcher_window: Window,
    launcher_webview: WebView,
    windows: HashMap<HostId, PageWindow>,
    consoles: HashMap<SessionId, ConsoleWindow>,
    roles: HashMap<WindowId, WindowRole>,
    host_sessions: HashMap<HostId, SessionId>,
}

/// Run the windowed launcher until its main window closes.
pub fn run(profiles: ProfileRegistry, settings: LauncherSettings) -> Result<()> {
    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let shared: Shared = Rc::new(RefCell::new(EngineShared::default()));
    let launcher = Launcher::new(
        profiles,
        settings,
        Box::new(ShellEngine {
            shared: shared.clone(),
        }),
    );

    let launcher_window = WindowBuilder::new()
        .with_title("Windows 96 - Local Storage Launcher")
        .with_inner_size(LogicalSize::new(520.0, 680.0))
        .build(&event_loop)
        .context("failed to create launcher window")?;

    let ipc_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let builder = WebViewBuilder::new()
        .with_html(ui::LAUNCHER_HTML)
        .with_ipc_handler(move |request: Request<String>| {
            match serde_json::from_str::<ui::IpcMessage>(request.body()) {
                Ok(message) => {
                    let _ = ipc_proxy.send_event(ShellEvent::LauncherIpc(message));
                }
                Err(e) => log::warn!("Bad launcher IPC message: {e}"),
            }
        })
        .with_on_page_load_handler(move |event, _url| {
            if matches!(event, PageLoadEvent::Finished) {
                let _ = load_proxy.send_event(ShellEvent::LauncherReady);
            }
        });
    let launcher_webview =
        build_webview(builder, &launcher_window).context("failed to create launcher webview")?;

    let mut roles = HashMap::new();
    roles.insert(launcher_window.id(), WindowRole::Launcher);

    let mut shell = Shell {
        launcher,
        shared,
        proxy,
        _launcher_window: launcher_window,
        launcher_webview,
        windows: HashMap::new(),
        consoles: HashMap::new(),
        roles,
        host_sessions: HashMap::new(),
    };

    log::info!("Shell started");
    event_loop.run(move |event, target, control_flow| {
        // Menu clicks arrive on a side channel with no loop wakeup, so tick
        // instead of blocking indefinitely.
        *control_flow = ControlFlow::WaitUntil(Instant::now() + Duration::from_millis(100));

        match event {
            Event::WindowEvent {
                window_id,
                event: WindowEvent::CloseRequested,
                ..
            } => {
                shell.on_close_requested(window_id, control_flow);
                shell.pump(target);
            }
            Event::UserEvent(shell_event) => {
                shell.on_shell_event(shell_event);
                shell.pump(target);
            }
            Event::MainEventsCleared => {
                shell.poll_menu_events(target);
                shell.pump(target);
            }
            _ => {}
        }
    });
}

impl Shell {
    // -------------------------------------------------------------------
    // Command pump
    // -------------------------------------------------------------------

    /// Realize queued window opens, then apply queued commands.
    fn pump(&mut self, target: &EventLoopWindowTarget<ShellEvent>) {
        loop {
            let open = self.shared.borrow_mut().opens.pop();
            let Some((host, request)) = open else { break };
            match self.create_page_window(host, request, target) {
                Ok(page) => {
                    self.roles.insert(page.window.id(), WindowRole::Page(host));
                    self.windows.insert(host, page);
                }
                Err(e) => log::error!("Failed to create session window: {e}"),
            }
        }

        loop {
            let command = self.shared.borrow_mut().commands.pop_front();
            let Some(command) = command else { break };
            self.apply(command);
        }
    }

    fn apply(&mut self, command: ShellCommand) {
        match command {
            ShellCommand::LoadUrl { host, url } => {
                if let Some(page) = self.windows.get(&host)
                    && let Err(e) = page.webview.load_url(&url)
                {
                    log::error!("Navigation failed: {e}");
                }
            }
            ShellCommand::LoadHtml { host, html } => {
                if let Some(page) = self.windows.get(&host)
                    && let Err(e) = page.webview.load_html(&html)
                {
                    log::error!("Failed to load inline page: {e}");
                }
            }
            ShellCommand::Evaluate { host, script } => {
                let Some(page) = self.windows.get(&host) else {
                    return;
                };
                let proxy = self.proxy.clone();
                let result = page.webview.evaluate_script_with_callback(&script, move |raw| {
                    // Undefined results come back as an empty string.
                    let value = if raw.is_empty() {
                        serde_json::Value::Null
                    } else {
                        serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null)
                    };
                    let _ = proxy.send_event(ShellEvent::ScriptResult(host, value));
                });
                if let Err(e) = result {
                    log::error!("Script evaluation failed: {e}");
                }
            }
            ShellCommand::SetSize {
                host,
                width,
                height,
            } => {
                if let Some(page) = self.windows.get(&host) {
                    page.window
                        .set_inner_size(LogicalSize::new(width as f64, height as f64));
                }
            }
            ShellCommand::SetFullscreen { host, fullscreen } => {
                if let Some(page) = self.windows.get(&host) {
                    let mode = fullscreen.then(|| Fullscreen::Borderless(None));
                    page.window.set_fullscreen(mode);
                }
            }
            ShellCommand::SetTitle { host, title } => {
                if let Some(page) = self.windows.get(&host) {
                    page.window.set_title(&title);
                }
            }
            ShellCommand::RemoveChrome { host } => {
                if let Some(page) = self.windows.get_mut(&host) {
                    if let Some(menu) = page.menu.take() {
                        menu.disable();
                    }
                }
            }
            ShellCommand::Close { host } => {
                if let Some(page) = self.windows.remove(&host) {
                    self.roles.remove(&page.window.id());
                }
                if let Some(id) = self.host_sessions.remove(&host)
                    && let Some(console) = self.consoles.remove(&id)
                {
                    self.roles.remove(&console.window.id());
                }
            }
        }
    }

    fn create_page_window(
        &mut self,
        host: HostId,
        request: PageRequest,
        target: &EventLoopWindowTarget<ShellEvent>,
    ) -> Result<PageWindow> {
        let window = WindowBuilder::new()
            .with_title(&request.title)
            .with_inner_size(LogicalSize::new(1280.0, 720.0))
            .build(target)?;

        let cors_checked = self.launcher.settings().enable_cors;
        let menu = SessionMenu::new(cors_checked)?;
        if let Err(e) = menu.init_for_window(&window) {
            log::warn!("Failed to attach session menu: {e}");
        }

        let mut web_context = WebContext::new(Some(request.storage_dir.clone()));
        let ipc_proxy = self.proxy.clone();
        let load_proxy = self.proxy.clone();
        let mut builder = WebViewBuilder::new_with_web_context(&mut web_context)
            .with_initialization_script(ui::SESSION_BRIDGE_JS)
            .with_ipc_handler(move |ipc: Request<String>| {
                match serde_json::from_str::<ui::IpcMessage>(ipc.body()) {
                    Ok(message) => {
                        let _ = ipc_proxy.send_event(ShellEvent::PageIpc(host, message));
                    }
                    Err(e) => log::warn!("Bad page IPC message: {e}"),
                }
            })
            .with_on_page_load_handler(move |event, _url| {
                if matches!(event, PageLoadEvent::Finished) {
                    let _ = load_proxy.send_event(ShellEvent::PageLoaded(host));
                }
            });
        builder = match &request.content {
            PageContent::Url(url) => builder.with_url(url.as_str()),
            PageContent::Html(html) => builder.with_html(html.as_str()),
        };
        let webview = build_webview(builder, &window)?;

        Ok(PageWindow {
            window,
            webview,
            menu: Some(menu),
            _web_context: web_context,
        })
    }

    // -------------------------------------------------------------------
    // Event routing
    // -------------------------------------------------------------------

    fn on_close_requested(&mut self, window_id: WindowId, control_flow: &mut ControlFlow) {
        match self.roles.get(&window_id).copied() {
            Some(WindowRole::Launcher) => {
                log::info!("Launcher window closed, exiting");
                *control_flow = ControlFlow::Exit;
            }
            Some(WindowRole::Page(host)) => {
                if let Some(id) = self.host_sessions.get(&host).copied() {
                    self.launcher.handle_page_event(id, PageEvent::CloseRequested);
                } else {
                    // Window without a session: drop it directly.
                    if let Some(page) = self.windows.remove(&host) {
                        self.roles.remove(&page.window.id());
                    }
                }
            }
            Some(WindowRole::Console(id)) => {
                if let Some(console) = self.consoles.remove(&id) {
                    drop(console);
                }
                self.roles.remove(&window_id);
            }
            None => {}
        }
    }

    fn on_shell_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::LauncherReady => {
                self.sync_versions();
                self.sync_profiles();
                self.sync_settings();
            }
            ShellEvent::LauncherIpc(message) => self.on_launcher_ipc(message),
            ShellEvent::PageIpc(host, message) => {
                let Some(id) = self.host_sessions.get(&host).copied() else {
                    return;
                };
                match message {
                    ui::IpcMessage::Console { message } => {
                        self.launcher
                            .handle_page_event(id, PageEvent::ConsoleMessage(message));
                        self.refresh_console(id);
                    }
                    ui::IpcMessage::Key => {
                        self.launcher.handle_page_event(id, PageEvent::KeyPressed);
                    }
                    ui::IpcMessage::FsRename { path, name } => {
                        self.run_session_script(id, &scripts::fs_rename(&path, &name));
                    }
                    ui::IpcMessage::FsRemove { path, rmdir } => {
                        self.run_session_script(id, &scripts::fs_remove(&path, rmdir));
                    }
                    ui::IpcMessage::Bsod { message } => {
                        self.run_session_script(id, &scripts::render_bsod(&message));
                    }
                    other => log::debug!("Unexpected page IPC message: {other:?}"),
                }
            }
            ShellEvent::ConsoleIpc(id, message) => {
                match message {
                    ui::IpcMessage::Submit { text } => {
                        if let Some(session) = self.launcher.session_mut(id) {
                            session.submit_console_command(&text);
                        }
                        self.refresh_console(id);
                    }
                    other => log::debug!("Unexpected console IPC message: {other:?}"),
                }
            }
            ShellEvent::PageLoaded(host) => {
                if let Some(id) = self.host_sessions.get(&host).copied() {
                    self.launcher.handle_page_event(id, PageEvent::LoadFinished);
                }
            }
            ShellEvent::ScriptResult(host, value) => {
                if let Some(id) = self.host_sessions.get(&host).copied() {
                    self.launcher
                        .handle_page_event(id, PageEvent::ScriptResult(value));
                    self.refresh_console(id);
                }
            }
        }
    }

    fn on_launcher_ipc(&mut self, message: ui::IpcMessage) {
        match message {
            ui::IpcMessage::Create {
                name,
                version,
                limit_enabled,
                max_size,
            } => {
                let max_size_raw = limit_enabled.then_some(max_size.as_str());
                match self
                    .launcher
                    .create_profile(&name, &version, limit_enabled, max_size_raw)
                {
                    Ok(()) => self.sync_profiles(),
                    Err(e) => self.alert(&e.to_string()),
                }
            }
            ui::IpcMessage::Launch { name } => match self.launcher.launch(&name) {
                Ok(id) => self.map_new_hosts(id),
                Err(e) => self.alert(&e.to_string()),
            },
            ui::IpcMessage::Rename { old, new } => {
                match self.launcher.rename_profile(&old, &new) {
                    Ok(()) => self.sync_profiles(),
                    Err(e) => self.alert(&e.to_string()),
                }
            }
            ui::IpcMessage::Delete { name } => match self.launcher.delete_profile(&name) {
                Ok(cleanup) => {
                    if let registry::DirCleanup::Failed { path, source } = cleanup {
                        log::warn!("Could not remove {path:?}: {source}");
                    }
                    self.sync_profiles();
                }
                Err(e) => self.alert(&e.to_string()),
            },
            ui::IpcMessage::Info { name } => {
                if let Some(info) = self.launcher.profile_info(&name) {
                    self.alert(&info.to_text());
                }
            }
            ui::IpcMessage::Settings {
                enable_cors,
                allow_drag_programs,
            } => {
                let next = LauncherSettings {
                    enable_cors,
                    allow_drag_programs,
                };
                if let Err(e) = self.launcher.update_settings(next) {
                    self.alert(&format!("Could not save settings: {e}"));
                }
            }
            other => log::debug!("Unexpected launcher IPC message: {other:?}"),
        }
    }

    /// Inject a built script into the session's page.
    fn run_session_script(&mut self, id: SessionId, script: &str) {
        let Some(session) = self.launcher.session_mut(id) else {
            return;
        };
        if let Err(e) = session.run_script(script) {
            log::error!("Page script injection failed: {e}");
        }
    }

    /// Bind window hosts opened by the last launcher call to its session.
    fn map_new_hosts(&mut self, id: SessionId) {
        let hosts: Vec<HostId> = self
            .shared
            .borrow()
            .opens
            .iter()
            .map(|(host, _)| *host)
            .filter(|host| !self.host_sessions.contains_key(host))
            .collect();
        for host in hosts {
            self.host_sessions.insert(host, id);
        }
    }

    // -------------------------------------------------------------------
    // Menus
    // -------------------------------------------------------------------

    fn poll_menu_events(&mut self, target: &EventLoopWindowTarget<ShellEvent>) {
        while let Ok(event) = MenuEvent::receiver().try_recv() {
            let matched = self.windows.iter().find_map(|(host, page)| {
                let menu = page.menu.as_ref()?;
                menu.match_event(&event)
                    .map(|action| (*host, action, menu.cors_checked()))
            });
            let Some((host, action, cors_checked)) = matched else {
                continue;
            };
            self.run_menu_action(host, action, cors_checked, target);
        }
    }

    fn run_menu_action(
        &mut self,
        host: HostId,
        action: MenuAction,
        cors_checked: bool,
        target: &EventLoopWindowTarget<ShellEvent>,
    ) {
        let Some(id) = self.host_sessions.get(&host).copied() else {
            return;
        };
        if action == MenuAction::DevConsole {
            if let Err(e) = self.open_console_window(id, target) {
                log::error!("Failed to open developer console: {e}");
            }
            return;
        }
        let Some(session) = self.launcher.session_mut(id) else {
            return;
        };
        let result: Result<(), ScriptError> = match action {
            MenuAction::Restart => session.reload(),
            MenuAction::GoHome => {
                if let Err(e) = session.go_home() {
                    log::error!("Failed to navigate home: {e}");
                }
                Ok(())
            }
            MenuAction::ToggleFullscreen => {
                session.toggle_fullscreen();
                Ok(())
            }
            MenuAction::Tool(index) => {
                session.run_script(&scripts::exec_cmd(chrome::TOOL_COMMANDS[index].command))
            }
            MenuAction::Resolution(index) => {
                let preset = chrome::RESOLUTION_PRESETS[index];
                session.set_resolution(preset.width, preset.height);
                Ok(())
            }
            MenuAction::ToggleCors => session.set_cors_enabled(cors_checked),
            MenuAction::SystemRename => session.run_script(ui::SYSTEM_RENAME_JS),
            MenuAction::SystemRemove => session.run_script(ui::SYSTEM_REMOVE_JS),
            MenuAction::SystemBsod => session.run_script(ui::SYSTEM_BSOD_JS),
            MenuAction::DevConsole => Ok(()),
        };
        if let Err(e) = result {
            log::error!("Menu action {action:?} failed: {e}");
        }
    }

    // -------------------------------------------------------------------
    // Developer console
    // -------------------------------------------------------------------

    fn open_console_window(
        &mut self,
        id: SessionId,
        target: &EventLoopWindowTarget<ShellEvent>,
    ) -> Result<()> {
        if self.consoles.contains_key(&id) {
            return Ok(());
        }
        let Some(session) = self.launcher.session(id) else {
            return Ok(());
        };

        let window = WindowBuilder::new()
            .with_title(&format!("Developer Console - {}", session.profile()))
            .with_inner_size(LogicalSize::new(700.0, 400.0))
            .build(target)?;

        let proxy = self.proxy.clone();
        let builder = WebViewBuilder::new()
            .with_html(ui::CONSOLE_HTML)
            .with_ipc_handler(move |ipc: Request<String>| {
                match serde_json::from_str::<ui::IpcMessage>(ipc.body()) {
                    Ok(message) => {
                        let _ = proxy.send_event(ShellEvent::ConsoleIpc(id, message));
                    }
                    Err(e) => log::warn!("Bad console IPC message: {e}"),
                }
            });
        let webview = build_webview(builder, &window)?;

        self.roles.insert(window.id(), WindowRole::Console(id));
        self.consoles.insert(
            id,
            ConsoleWindow { window, webview },
        );
        self.refresh_console(id);
        Ok(())
    }

    /// Push the session's console scrollback into its window, if open.
    fn refresh_console(&mut self, id: SessionId) {
        let Some(console) = self.consoles.get(&id) else {
            return;
        };
        let Some(session) = self.launcher.session(id) else {
            return;
        };
        let text = session
            .console()
            .lines()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        let script = format!("window.__setLines({});", scripts::js_quote(&text));
        if let Err(e) = console.webview.evaluate_script(&script) {
            log::error!("Failed to refresh console window: {e}");
        }
    }

    // -------------------------------------------------------------------
    // Launcher window glue
    // -------------------------------------------------------------------

    /// Push the profile list into the launcher document.
    fn sync_profiles(&mut self) {
        let profiles: Vec<serde_json::Value> = self
            .launcher
            .registry()
            .iter()
            .map(|(name, record)| {
                serde_json::json!({ "name": name, "version": record.version })
            })
            .collect();
        let payload = serde_json::Value::Array(profiles);
        let script = format!("window.__setProfiles({payload});");
        if let Err(e) = self.launcher_webview.evaluate_script(&script) {
            log::error!("Failed to refresh profile list: {e}");
        }
    }

    /// Populate the version dropdown.
    fn sync_versions(&mut self) {
        let labels: Vec<&str> = registry::labels().collect();
        match serde_json::to_string(&labels) {
            Ok(payload) => {
                let script = format!("window.__setVersions({payload});");
                if let Err(e) = self.launcher_webview.evaluate_script(&script) {
                    log::error!("Failed to populate version list: {e}");
                }
            }
            Err(e) => log::error!("Failed to encode version list: {e}"),
        }
    }

    /// Seed the settings checkboxes from the persisted state.
    fn sync_settings(&mut self) {
        match serde_json::to_string(self.launcher.settings()) {
            Ok(payload) => {
                let script = format!("window.__setSettings({payload});");
                if let Err(e) = self.launcher_webview.evaluate_script(&script) {
                    log::error!("Failed to seed settings: {e}");
                }
            }
            Err(e) => log::error!("Failed to encode settings: {e}"),
        }
    }

    /// Show a modal message in the launcher window.
    fn alert(&mut self, message: &str) {
        let script = format!("alert({});", scripts::js_quote(message));
        if let Err(e) = self.launcher_webview.evaluate_script(&script) {
            log::error!("Failed to show alert: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Platform glue
// ---------------------------------------------------------------------------

/// Build a webview for a tao window. On Linux wry attaches to the GTK
/// container instead of the raw window handle.
fn build_webview(builder: WebViewBuilder<'_>, window: &Window) -> Result<WebView> {
    #[cfg(not(target_os = "linux"))]
    {
        Ok(builder.build(window)?)
    }

    #[cfg(target_os = "linux")]
    {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .context("window has no GTK container")?;
        Ok(builder.build_gtk(vbox)?)
    }
}
