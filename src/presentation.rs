//! Presentation layer
//!
//! This module contains UI components and their configuration:
//! - Stateless components rendering `AppState`
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
