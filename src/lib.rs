// Library exports for testing and potential library use.
//
// The crate is strictly single-threaded at its core: every registry
// mutation, directory-size scan, and session state transition runs on the
// thread that owns the UI event loop. The embedded web engine renders and
// loads pages on its own externally managed threads, but its only contract
// with this crate is the `engine::PageHost` / `engine::WebEngine` seam plus
// the `engine::PageEvent` stream the UI glue pumps back in.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod chrome;
pub mod cli;
pub mod console;
pub mod debug;
pub mod engine;
pub mod launcher;
pub mod scripts;
pub mod session;
pub mod settings;

#[cfg(feature = "webview")]
pub mod shell;

// Re-export the registry crate so consumers get one coherent API surface.
pub use w96box_registry as registry;
