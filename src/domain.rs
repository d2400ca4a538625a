//! Domain logic
//!
//! This module contains domain-specific types and pure logic:
//! - Language and theme registries
//! - Execution types shared with the judge client
//! - Output display model
//! - UI primitives (cursor, pickers, notifications)

pub mod execution;
pub mod language;
pub mod output;
pub mod theme;
pub mod ui;
