//! # codrush - a terminal code editor with a remote judge
//!
//! Type code, pick a language, run it on a Judge0-compatible backend and
//! read the output without leaving the terminal. Built on Ratatui with an
//! Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (judge requests, rendering)
//! - **View** (`presentation::components`): rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use codrush::core::{
//!     cmd::Cmd,
//!     msg::{execution::ExecutionMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let (state, commands) = update(
//!     Msg::Execution(ExecutionMsg::RunRequested {
//!         source: "print(42)".into(),
//!         language_id: 71,
//!     }),
//!     AppState::default(),
//! );
//!
//! assert!(state.execution.processing);
//! assert!(matches!(commands.as_slice(), [Cmd::RunCode { epoch: 1, .. }]));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - state, messages, update, commands
//! - [`domain`] - language/theme registries, execution types, output model
//! - [`infrastructure`] - judge client and service, config, CLI, terminal
//! - [`integration`] - runtime and event loop
//! - [`presentation`] - components, keybindings, styles

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
