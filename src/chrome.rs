//! Window-chrome tables: resolution presets and the scripted menus.
//!
//! Static configuration consumed by the UI glue. The actions themselves go
//! through [`crate::launcher::Launcher`]; nothing here touches a window.

/// A fixed window size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionPreset {
    /// Menu label, e.g. `1024x600`.
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Resolution presets offered in the session window menu.
pub const RESOLUTION_PRESETS: [ResolutionPreset; 12] = [
    ResolutionPreset { label: "320x240", width: 320, height: 240 },
    ResolutionPreset { label: "640x480", width: 640, height: 480 },
    ResolutionPreset { label: "800x600", width: 800, height: 600 },
    ResolutionPreset { label: "1024x600", width: 1024, height: 600 },
    ResolutionPreset { label: "1280x720", width: 1280, height: 720 },
    ResolutionPreset { label: "1280x800", width: 1280, height: 800 },
    ResolutionPreset { label: "1366x768", width: 1366, height: 768 },
    ResolutionPreset { label: "1440x900", width: 1440, height: 900 },
    ResolutionPreset { label: "1600x900", width: 1600, height: 900 },
    ResolutionPreset { label: "1920x1080", width: 1920, height: 1080 },
    ResolutionPreset { label: "2560x1440", width: 2560, height: 1440 },
    ResolutionPreset { label: "3840x2160", width: 3840, height: 2160 },
];

/// One entry in the "Open Apps" tools menu: a label plus the Windows 96
/// shell command injected through the script bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCommand {
    pub label: &'static str,
    pub command: &'static str,
}

/// Tools-menu entries (each runs `w96.sys.execCmd(command)` in the page).
pub const TOOL_COMMANDS: [ToolCommand; 5] = [
    ToolCommand { label: "Open Terminal", command: "terminal" },
    ToolCommand { label: "Open Task Manager", command: "taskmgr" },
    ToolCommand { label: "Open Explorer", command: "explorer" },
    ToolCommand { label: "Open Settings", command: "ctrl" },
    ToolCommand { label: "Open Run", command: "run" },
];
