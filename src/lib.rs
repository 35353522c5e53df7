//! Atrium: a small client-side dashboard shell.
//!
//! Chat is the base view; jobs, products, and settings open as modal panels
//! over it. A light/dark theme and the conversation history persist in a
//! scoped local store. UI behavior lives in signal-free state objects
//! ([`session::Dashboard`], [`theme::ThemeStore`]) so it can be tested
//! without a running renderer.

pub mod dialog;
pub mod session;
pub mod storage;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
