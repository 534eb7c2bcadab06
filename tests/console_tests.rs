//! Developer-console flow through the launcher event loop.

mod common;

use common::test_launcher;
use serde_json::json;
use w96box::engine::PageEvent;

#[test]
fn submitted_commands_echo_and_reach_the_page() {
    let (mut launcher, pages, _tmp) = test_launcher();
    launcher
        .create_profile("Test", "Version 1.0", false, None)
        .unwrap();
    let id = launcher.launch("Test").unwrap();

    launcher
        .session_mut(id)
        .unwrap()
        .submit_console_command("w96.sys.version");

    let session = launcher.session(id).unwrap();
    let lines: Vec<String> = session.console().lines().iter().map(ToString::to_string).collect();
    assert_eq!(lines, ["> w96.sys.version"]);

    let page = pages.page(0);
    assert_eq!(page.borrow().scripts, ["w96.sys.version"]);
}

#[test]
fn late_script_results_append_to_the_scrollback() {
    let (mut launcher, _pages, _tmp) = test_launcher();
    launcher
        .create_profile("Test", "Version 1.0", false, None)
        .unwrap();
    let id = launcher.launch("Test").unwrap();

    launcher
        .session_mut(id)
        .unwrap()
        .submit_console_command("2 + 2");
    launcher.handle_page_event(id, PageEvent::ScriptResult(json!(4)));

    let session = launcher.session(id).unwrap();
    let lines: Vec<String> = session.console().lines().iter().map(ToString::to_string).collect();
    assert_eq!(lines, ["> 2 + 2", "[return] 4"]);
}

#[test]
fn captured_console_logs_append_to_the_scrollback() {
    let (mut launcher, _pages, _tmp) = test_launcher();
    launcher
        .create_profile("Test", "Version 1.0", false, None)
        .unwrap();
    let id = launcher.launch("Test").unwrap();

    launcher.handle_page_event(id, PageEvent::ConsoleMessage("boot complete".to_string()));

    let session = launcher.session(id).unwrap();
    let lines: Vec<String> = session.console().lines().iter().map(ToString::to_string).collect();
    assert_eq!(lines, ["[log] boot complete"]);
}

#[test]
fn events_for_closed_sessions_are_dropped() {
    let (mut launcher, _pages, _tmp) = test_launcher();
    launcher
        .create_profile("Test", "Version 1.0", false, None)
        .unwrap();
    let id = launcher.launch("Test").unwrap();
    launcher.handle_page_event(id, PageEvent::CloseRequested);

    // Must not panic or resurrect the session.
    launcher.handle_page_event(id, PageEvent::ConsoleMessage("late".to_string()));
    assert_eq!(launcher.open_session_count(), 0);
}
