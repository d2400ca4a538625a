//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Judge HTTP client and the background service that drives it

pub mod cli;
pub mod config;
pub mod judge;
pub mod judge_service;
pub mod tui;
