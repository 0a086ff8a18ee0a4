//! Single-page kanban task board.
//!
//! ARCHITECTURE
//! ============
//! - `state`: the Board State store (tasks, columns, order) and transient UI state.
//! - `util`: storage, persistence, theme class, clock, and the pure render model.
//! - `interaction`: delegated DOM events resolved to intents and applied to state.
//! - `components` / `pages`: Leptos views rendered from the render model.
//!
//! Everything outside `interaction::dom` and the `csr` entry point builds and
//! tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod interaction;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("taskboard starting");
    leptos::mount::mount_to_body(app::App);
}
