//! Native menu bar for session windows.
//!
//! Built with muda and attached per window. Menu clicks arrive on the muda
//! event channel; [`SessionMenu::match_event`] resolves them back to a
//! [`MenuAction`] through an id map built at construction time.

use crate::chrome::{RESOLUTION_PRESETS, TOOL_COMMANDS};
use anyhow::Result;
use muda::{CheckMenuItem, Menu, MenuEvent, MenuId, MenuItem, Submenu};
use std::collections::HashMap;
use tao::window::Window;

/// Menu actions for a session window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Reload the current page.
    Restart,
    /// Navigate back to the profile's target URL.
    GoHome,
    /// Open the developer console window.
    DevConsole,
    /// Toggle fullscreen.
    ToggleFullscreen,
    /// Run a tools-menu shell command (index into [`TOOL_COMMANDS`]).
    Tool(usize),
    /// Apply a resolution preset (index into [`RESOLUTION_PRESETS`]).
    Resolution(usize),
    /// Flip the per-session CORS-unblock toggle.
    ToggleCors,
    /// System menu: rename a filesystem object in the page.
    SystemRename,
    /// System menu: remove a filesystem object in the page.
    SystemRemove,
    /// System menu: render a BSOD in the page.
    SystemBsod,
}

/// Menu bar attached to one session window.
pub struct SessionMenu {
    menu: Menu,
    action_map: HashMap<MenuId, MenuAction>,
    /// Submenus disabled when the session becomes Blocked.
    interactive: Vec<Submenu>,
    cors_item: CheckMenuItem,
}

impl SessionMenu {
    /// Build the menu bar. `cors_checked` seeds the CORS toggle state from
    /// the launcher settings.
    pub fn new(cors_checked: bool) -> Result<Self> {
        let menu = Menu::new();
        let mut action_map = HashMap::new();
        let mut interactive = Vec::new();

        let session_menu = Submenu::new("Session", true);
        let restart = MenuItem::new("Restart", true, None);
        action_map.insert(restart.id().clone(), MenuAction::Restart);
        let home = MenuItem::new("Go Home", true, None);
        action_map.insert(home.id().clone(), MenuAction::GoHome);
        let console = MenuItem::new("Developer Console", true, None);
        action_map.insert(console.id().clone(), MenuAction::DevConsole);
        session_menu.append_items(&[&restart, &home, &console])?;
        menu.append(&session_menu)?;
        interactive.push(session_menu);

        let tools_menu = Submenu::new("Open Apps", true);
        for (index, tool) in TOOL_COMMANDS.iter().enumerate() {
            let item = MenuItem::new(tool.label, true, None);
            action_map.insert(item.id().clone(), MenuAction::Tool(index));
            tools_menu.append(&item)?;
        }
        menu.append(&tools_menu)?;
        interactive.push(tools_menu);

        let view_menu = Submenu::new("View", true);
        let fullscreen = MenuItem::new("Toggle Fullscreen", true, None);
        action_map.insert(fullscreen.id().clone(), MenuAction::ToggleFullscreen);
        view_menu.append(&fullscreen)?;
        let resolution_menu = Submenu::new("Resolution", true);
        for (index, preset) in RESOLUTION_PRESETS.iter().enumerate() {
            let item = MenuItem::new(preset.label, true, None);
            action_map.insert(item.id().clone(), MenuAction::Resolution(index));
            resolution_menu.append(&item)?;
        }
        view_menu.append(&resolution_menu)?;
        let cors_item = CheckMenuItem::new("CORS Unblock", true, cors_checked, None);
        action_map.insert(cors_item.id().clone(), MenuAction::ToggleCors);
        view_menu.append(&cors_item)?;
        menu.append(&view_menu)?;
        interactive.push(view_menu);

        let system_menu = Submenu::new("System", true);
        let rename = MenuItem::new("Rename Object", true, None);
        action_map.insert(rename.id().clone(), MenuAction::SystemRename);
        let remove = MenuItem::new("Remove Object", true, None);
        action_map.insert(remove.id().clone(), MenuAction::SystemRemove);
        let bsod = MenuItem::new("Execute BSOD", true, None);
        action_map.insert(bsod.id().clone(), MenuAction::SystemBsod);
        system_menu.append_items(&[&rename, &remove, &bsod])?;
        menu.append(&system_menu)?;
        interactive.push(system_menu);

        Ok(Self {
            menu,
            action_map,
            interactive,
            cors_item,
        })
    }

    /// Attach the menu bar to a window. Platform-specific.
    pub fn init_for_window(&self, window: &Window) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            let _ = window;
            self.menu.init_for_nsapp();
        }

        #[cfg(target_os = "windows")]
        {
            use tao::platform::windows::WindowExtWindows;
            unsafe {
                self.menu.init_for_hwnd(window.hwnd() as _)?;
            }
        }

        #[cfg(target_os = "linux")]
        {
            use tao::platform::unix::WindowExtUnix;
            self.menu
                .init_for_gtk_window(window.gtk_window(), window.default_vbox())?;
        }

        Ok(())
    }

    /// Resolve one muda event to an action, if it belongs to this menu.
    pub fn match_event(&self, event: &MenuEvent) -> Option<MenuAction> {
        self.action_map.get(event.id()).copied()
    }

    /// Current checked state of the CORS toggle.
    pub fn cors_checked(&self) -> bool {
        self.cors_item.is_checked()
    }

    /// Disable every interactive submenu. Used when a session becomes
    /// Blocked so the notice page cannot be acted on.
    pub fn disable(&self) {
        for submenu in &self.interactive {
            submenu.set_enabled(false);
        }
    }
}
