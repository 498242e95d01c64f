//! Portfolio Site - Main Entry Point
//!
//! Client-side only: the whole page is static content plus two chrome
//! variants, so there is no server feature and no router.

use portfolio_site::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Portfolio Site initialized!".into());
    dioxus::launch(App);
}

// Native fallback (desktop webview via `dx serve --platform desktop`)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    dioxus::launch(App);
}
