//! Static HTML/JS surfaces and the IPC message protocol for the shell.
//!
//! Each webview posts one-line JSON objects through `window.ipc`; the
//! event loop parses them into [`IpcMessage`] and forwards them as user
//! events. Rust pushes data the other way by evaluating small `window.__*`
//! setter functions defined by these documents.

use serde::Deserialize;

/// Messages posted from any webview to the shell.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IpcMessage {
    /// Captured `console.log` line from a session page.
    Console { message: String },
    /// Any key pressed in a session page.
    Key,
    /// System menu: rename a filesystem object (inputs collected in-page).
    FsRename { path: String, name: String },
    /// System menu: remove a filesystem object.
    FsRemove { path: String, rmdir: bool },
    /// System menu: render a BSOD with the given message.
    Bsod { message: String },
    /// Developer-console command submission.
    Submit { text: String },
    /// Launcher UI: create a profile.
    Create {
        name: String,
        version: String,
        limit_enabled: bool,
        #[serde(default)]
        max_size: String,
    },
    /// Launcher UI: launch the selected profile.
    Launch { name: String },
    /// Launcher UI: rename a profile.
    Rename { old: String, new: String },
    /// Launcher UI: delete a profile.
    Delete { name: String },
    /// Launcher UI: show the info summary for a profile.
    Info { name: String },
    /// Launcher UI: persist edited settings.
    Settings {
        enable_cors: bool,
        allow_drag_programs: bool,
    },
}

/// Injected into every session page before it loads: forwards
/// `console.log` output and key presses to the shell.
pub const SESSION_BRIDGE_JS: &str = r#"(function() {
    function post(obj) {
        try { window.ipc.postMessage(JSON.stringify(obj)); } catch (e) {}
    }
    const originalLog = console.log;
    console.log = function(...args) {
        try {
            const message = args.map(a =>
                typeof a === 'object' ? JSON.stringify(a) : String(a)
            ).join(' ');
            post({ kind: 'console', message: message });
        } catch (e) {}
        originalLog.apply(console, args);
    };
    document.addEventListener('keydown', function() {
        post({ kind: 'key' });
    });
})();"#;

// System-menu actions collect their inputs with in-page prompts, standing in
// for the native dialogs the launcher window does not have. The collected
// values come back over IPC and the shell injects the actual `w96.*` call
// through the script builders, so user input is always quoted on the Rust
// side.

/// "Rename Object": prompt for a path and new name.
pub const SYSTEM_RENAME_JS: &str = r#"(function() {
    const path = prompt('Enter object path');
    if (path === null) return;
    const name = prompt('Enter new name');
    if (name === null) return;
    window.ipc.postMessage(JSON.stringify({ kind: 'fs_rename', path: path, name: name }));
})();"#;

/// "Remove Object": prompt for a path, confirm rmdir.
pub const SYSTEM_REMOVE_JS: &str = r#"(function() {
    const path = prompt('Enter object path');
    if (path === null) return;
    const rmdir = confirm('Use rmdir (remove directory)?');
    window.ipc.postMessage(JSON.stringify({ kind: 'fs_remove', path: path, rmdir: rmdir }));
})();"#;

/// "Execute BSOD": prompt for a message.
pub const SYSTEM_BSOD_JS: &str = r#"(function() {
    const message = prompt('Enter BSOD message');
    if (message === null) return;
    window.ipc.postMessage(JSON.stringify({ kind: 'bsod', message: message }));
})();"#;

/// Launcher window document: profile list, create form, launch button.
pub const LAUNCHER_HTML: &str = r#"<html>
<head><style>
    body {
        background-color: #1e1e1e;
        color: white;
        font-family: "Segoe UI", sans-serif;
        margin: 0;
        padding: 20px;
    }
    h3 { margin-top: 0; }
    #list {
        border: 1px solid #444;
        min-height: 180px;
        max-height: 260px;
        overflow-y: auto;
        margin-bottom: 12px;
    }
    .row { padding: 6px 10px; cursor: pointer; display: flex; }
    .row.selected { background-color: #0078d7; }
    .row .meta { margin-left: auto; color: #aaa; font-size: 12px; }
    button {
        background-color: #0078d7;
        color: white;
        border: none;
        border-radius: 5px;
        padding: 10px;
        font-size: 14px;
        margin: 2px;
        cursor: pointer;
    }
    button:hover { background-color: #005ea6; }
    input, select { padding: 6px; margin: 2px; background: #2a2a2a; color: white; border: 1px solid #444; }
    #create, #settings { border: 1px solid #444; padding: 10px; margin-top: 12px; }
</style></head>
<body>
    <h3>Local Storage Instances</h3>
    <div id="list"></div>
    <button onclick="launchSelected()">Launch</button>
    <button onclick="infoSelected()">Info</button>
    <button onclick="renameSelected()">Rename</button>
    <button onclick="deleteSelected()">Delete</button>

    <div id="create">
        <h3>Create New Storage</h3>
        <input id="name" placeholder="Storage Name">
        <select id="version"></select><br>
        <label><input type="checkbox" id="limit" onchange="toggleSize()"> Enable Max Size Limit</label>
        <input id="size" placeholder="e.g., 500 (MB)" style="display:none">
        <br><button onclick="createStorage()">Create</button>
    </div>

    <div id="settings">
        <h3>Settings</h3>
        <label><input type="checkbox" id="cors" onchange="saveSettings()"> Enable CORS Unblock by default</label><br>
        <label><input type="checkbox" id="drag" onchange="saveSettings()"> Allow dragging programs</label>
    </div>

    <script>
        let profiles = [];
        let selected = null;

        function post(obj) { window.ipc.postMessage(JSON.stringify(obj)); }

        function render() {
            const list = document.getElementById('list');
            list.innerHTML = '';
            for (const p of profiles) {
                const row = document.createElement('div');
                row.className = 'row' + (p.name === selected ? ' selected' : '');
                row.onclick = () => { selected = p.name; render(); };
                const name = document.createElement('span');
                name.textContent = p.name;
                const meta = document.createElement('span');
                meta.className = 'meta';
                meta.textContent = p.version;
                row.appendChild(name);
                row.appendChild(meta);
                list.appendChild(row);
            }
        }

        window.__setProfiles = function(next) {
            profiles = next;
            if (!profiles.some(p => p.name === selected)) selected = null;
            render();
        };

        window.__setVersions = function(labels) {
            const select = document.getElementById('version');
            select.innerHTML = '';
            for (const label of labels) {
                const option = document.createElement('option');
                option.value = label;
                option.textContent = label;
                select.appendChild(option);
            }
        };

        window.__setSettings = function(settings) {
            document.getElementById('cors').checked = settings.enable_cors;
            document.getElementById('drag').checked = settings.allow_drag_programs;
        };

        function saveSettings() {
            post({
                kind: 'settings',
                enable_cors: document.getElementById('cors').checked,
                allow_drag_programs: document.getElementById('drag').checked
            });
        }

        function toggleSize() {
            const on = document.getElementById('limit').checked;
            document.getElementById('size').style.display = on ? '' : 'none';
        }

        function createStorage() {
            post({
                kind: 'create',
                name: document.getElementById('name').value,
                version: document.getElementById('version').value,
                limit_enabled: document.getElementById('limit').checked,
                max_size: document.getElementById('size').value
            });
        }

        function launchSelected() { if (selected) post({ kind: 'launch', name: selected }); }
        function infoSelected() { if (selected) post({ kind: 'info', name: selected }); }
        function deleteSelected() {
            if (selected && confirm('Are you sure you wanna delete this storage?')) {
                post({ kind: 'delete', name: selected });
            }
        }
        function renameSelected() {
            if (!selected) return;
            const next = prompt('Enter new name:', selected);
            if (next !== null) post({ kind: 'rename', old: selected, new: next });
        }
    </script>
</body>
</html>
"#;

/// Developer console document: scrollback plus a command line.
pub const CONSOLE_HTML: &str = r#"<html>
<head><style>
    body {
        background-color: black;
        color: lime;
        font-family: Consolas, monospace;
        font-size: 13px;
        margin: 0;
        display: flex;
        flex-direction: column;
        height: 100vh;
    }
    #output { flex: 1; overflow-y: auto; padding: 8px; white-space: pre-wrap; }
    #input {
        background-color: black;
        color: white;
        font-family: Consolas, monospace;
        border: none;
        border-top: 1px solid lime;
        padding: 8px;
        outline: none;
    }
</style></head>
<body>
    <div id="output"></div>
    <input id="input" placeholder="Type JavaScript command and press Enter...">
    <script>
        const output = document.getElementById('output');
        const input = document.getElementById('input');

        window.__setLines = function(text) {
            output.textContent = text;
            output.scrollTop = output.scrollHeight;
        };

        input.addEventListener('keydown', function(e) {
            if (e.key === 'Enter' && input.value.trim() !== '') {
                window.ipc.postMessage(JSON.stringify({ kind: 'submit', text: input.value }));
                input.value = '';
            }
        });
    </script>
</body>
</html>
"#;
