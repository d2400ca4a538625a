//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - `Runtime`: message queues around `update`
//! - `Renderer`: component tree onto a TUI
//! - `AppRunner`: the event loop tying TUI, runtime and judge service together

pub mod app_runner;
pub mod renderer;
pub mod runtime;
