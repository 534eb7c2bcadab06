//! Shared integration test helpers for w96box.
//!
//! Provides a scriptable mock web engine plus factory functions for a
//! launcher backed by a temporary data root.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{test_launcher, fill_storage};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;
use w96box::engine::{EngineError, PageContent, PageHost, PageRequest, ScriptError, WebEngine};
use w96box::launcher::Launcher;
use w96box::registry::ProfileRegistry;
use w96box::settings::LauncherSettings;

/// Observable state of one mock page window.
#[derive(Debug, Default)]
pub struct PageState {
    pub title: String,
    pub storage_dir: PathBuf,
    /// Last content loaded into the page.
    pub content: Option<PageContent>,
    /// Every script evaluated, in order.
    pub scripts: Vec<String>,
    pub size: Option<(u32, u32)>,
    pub fullscreen: bool,
    pub chrome_removed: bool,
    pub closed: bool,
}

impl PageState {
    /// The current URL, if the page shows one.
    pub fn url(&self) -> Option<&str> {
        match &self.content {
            Some(PageContent::Url(url)) => Some(url),
            _ => None,
        }
    }

    /// The current inline HTML, if the page shows some.
    pub fn html(&self) -> Option<&str> {
        match &self.content {
            Some(PageContent::Html(html)) => Some(html),
            _ => None,
        }
    }
}

pub type SharedPage = Rc<RefCell<PageState>>;

struct MockHost {
    state: SharedPage,
}

impl PageHost for MockHost {
    fn load_url(&mut self, url: &str) -> Result<(), EngineError> {
        self.state.borrow_mut().content = Some(PageContent::Url(url.to_string()));
        Ok(())
    }

    fn load_html(&mut self, html: &str) -> Result<(), EngineError> {
        self.state.borrow_mut().content = Some(PageContent::Html(html.to_string()));
        Ok(())
    }

    fn evaluate(&mut self, script: &str) -> Result<serde_json::Value, ScriptError> {
        self.state.borrow_mut().scripts.push(script.to_string());
        Ok(serde_json::Value::Null)
    }

    fn set_inner_size(&mut self, width: u32, height: u32) {
        self.state.borrow_mut().size = Some((width, height));
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.state.borrow_mut().fullscreen = fullscreen;
    }

    fn is_fullscreen(&self) -> bool {
        self.state.borrow().fullscreen
    }

    fn set_title(&mut self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }

    fn remove_chrome(&mut self) {
        self.state.borrow_mut().chrome_removed = true;
    }

    fn close(&mut self) {
        self.state.borrow_mut().closed = true;
    }
}

/// Mock engine: records every opened page for later inspection.
pub struct MockEngine {
    pages: Rc<RefCell<Vec<SharedPage>>>,
}

impl WebEngine for MockEngine {
    fn open_page(&mut self, request: PageRequest) -> Result<Box<dyn PageHost>, EngineError> {
        let state = Rc::new(RefCell::new(PageState {
            title: request.title,
            storage_dir: request.storage_dir,
            content: Some(request.content),
            ..PageState::default()
        }));
        self.pages.borrow_mut().push(state.clone());
        Ok(Box::new(MockHost { state }))
    }
}

/// Handle for inspecting the pages a [`MockEngine`] opened.
#[derive(Clone)]
pub struct PageLog {
    pages: Rc<RefCell<Vec<SharedPage>>>,
}

impl PageLog {
    pub fn len(&self) -> usize {
        self.pages.borrow().len()
    }

    /// The n-th opened page, panicking when none was opened.
    pub fn page(&self, index: usize) -> SharedPage {
        self.pages.borrow()[index].clone()
    }
}

/// Launcher with default settings over a fresh temporary data root.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn test_launcher() -> (Launcher, PageLog, TempDir) {
    test_launcher_with_settings(LauncherSettings::default())
}

/// Launcher with explicit settings over a fresh temporary data root.
pub fn test_launcher_with_settings(
    settings: LauncherSettings,
) -> (Launcher, PageLog, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let registry = ProfileRegistry::open(temp_dir.path()).expect("Failed to open registry");
    let pages = Rc::new(RefCell::new(Vec::new()));
    let log = PageLog {
        pages: pages.clone(),
    };
    let launcher = Launcher::new(registry, settings, Box::new(MockEngine { pages }));
    (launcher, log, temp_dir)
}

/// Write `bytes` of filler into a profile storage directory.
pub fn fill_storage(dir: &Path, bytes: usize) {
    std::fs::create_dir_all(dir).expect("Failed to create storage dir");
    std::fs::write(dir.join("filler.bin"), vec![0u8; bytes]).expect("Failed to write filler");
}
