//! Browser client for Glow Pong
//!
//! Binds a canvas 2D context as the drawing surface, turns mouse movement
//! into simulation commands and drives frames with `requestAnimationFrame`.
//! Note: the browser bindings are only compiled for the wasm32 target

/// Log a formatted line to the browser console
#[allow(unused_macros)]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

mod color;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod input;

#[cfg(target_arch = "wasm32")]
pub use app::{start, GameHandle};
