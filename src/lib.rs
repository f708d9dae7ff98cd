// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds terminal setup and the event loop.
pub mod app;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod penalty;
pub mod runtime;
pub mod solve;
pub mod timer;
pub mod ui;
