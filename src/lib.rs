//! Presentation controller for a full-screen, section-based portfolio page.
//!
//! Everything in this crate root is target independent: DOM effects go through
//! [`renderer::Renderer`], timers through [`scheduler::Scheduler`] and theme
//! persistence through [`theme::KeyValueStore`]. The browser bindings live in
//! the binary's `frontend` module.

pub mod config;
pub mod contact;
pub mod effects;
pub mod input;
pub mod navigator;
pub mod pagination;
pub mod renderer;
pub mod scheduler;
pub mod site;
pub mod theme;
pub mod typewriter;

#[cfg(test)]
mod testing;

pub use config::SiteConfig;
pub use site::Site;
