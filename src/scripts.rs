//! Injected JavaScript and static notice pages.
//!
//! The launcher never parses or executes page content itself; these are
//! opaque strings handed to the engine's evaluator. User-supplied values
//! are quoted with [`js_quote`] before interpolation.

/// Static notice shown when a profile's storage exceeds its quota.
///
/// Rendered in place of the target page; the session closes on the next
/// key press (delivered as an engine key event).
pub const BLOCKED_NOTICE_HTML: &str = r#"<html>
<head><style>
    body {
        background-color: black;
        color: lime;
        font-family: "Lucida Console", monospace;
        padding: 40px;
        font-size: 16px;
    }
    .border {
        border: 2px solid lime;
        padding: 20px;
        max-width: 600px;
        margin: auto;
    }
    h1 {
        color: red;
        font-size: 20px;
    }
</style></head>
<body>
    <div class="border">
        <h1>*** DISK ERROR ***</h1>
        <p>LOCAL STORAGE HAS EXCEEDED ITS MAXIMUM ALLOWED SIZE.</p>
        <p>Please free up space or increase the size limit.</p>
        <p>Press any key to close this window.</p>
    </div>
</body>
</html>
"#;

/// Fetch patch simulating a CORS unblock.
///
/// Idempotent per page via the `window._cors_patched` flag, so re-injection
/// after navigation is safe.
pub const CORS_UNBLOCK_JS: &str = r#"(function() {
    if (!window._cors_patched) {
        const originalFetch = window.fetch;
        window.fetch = function() {
            const args = arguments;
            const modifiedArgs = [...args];
            if (modifiedArgs[1]) {
                modifiedArgs[1].mode = 'no-cors';
            } else {
                modifiedArgs[1] = { mode: 'no-cors' };
            }
            return originalFetch.apply(this, modifiedArgs);
        };
        window._cors_patched = true;
        console.log('CORS Unblock simulated');
    }
})();"#;

/// Quote a string as a JavaScript double-quoted literal.
pub fn js_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// `w96.sys.execCmd(...)` — run a Windows 96 shell command (tools menu).
pub fn exec_cmd(command: &str) -> String {
    format!("w96.sys.execCmd({})", js_quote(command))
}

/// `w96.FS.rename(...)` — rename an object in the page's virtual FS.
pub fn fs_rename(path: &str, new_name: &str) -> String {
    format!("w96.FS.rename({}, {})", js_quote(path), js_quote(new_name))
}

/// `w96.FS.rm(...)` / `w96.FS.rmdir(...)` — remove an object.
pub fn fs_remove(path: &str, use_rmdir: bool) -> String {
    if use_rmdir {
        format!("w96.FS.rmdir({})", js_quote(path))
    } else {
        format!("w96.FS.rm({})", js_quote(path))
    }
}

/// `w96.sys.renderBSOD(...)` — render a blue screen with the given message.
pub fn render_bsod(message: &str) -> String {
    format!("w96.sys.renderBSOD({})", js_quote(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_plain_strings() {
        assert_eq!(js_quote("terminal"), "\"terminal\"");
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(js_quote(r#"C:\dir"x"#), r#""C:\\dir\"x""#);
        assert_eq!(js_quote("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn builds_w96_calls() {
        assert_eq!(exec_cmd("taskmgr"), "w96.sys.execCmd(\"taskmgr\")");
        assert_eq!(
            fs_rename("A:/docs", "archive"),
            "w96.FS.rename(\"A:/docs\", \"archive\")"
        );
        assert_eq!(fs_remove("A:/tmp", false), "w96.FS.rm(\"A:/tmp\")");
        assert_eq!(fs_remove("A:/tmp", true), "w96.FS.rmdir(\"A:/tmp\")");
        assert_eq!(render_bsod("oops"), "w96.sys.renderBSOD(\"oops\")");
    }

    #[test]
    fn cors_patch_is_guarded() {
        assert!(CORS_UNBLOCK_JS.contains("window._cors_patched"));
    }
}
