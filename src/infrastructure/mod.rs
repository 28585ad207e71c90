//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Launch-time overrides from the environment
//! - Storage: YAML config persistence
//! - Adapters: Console prompter and the Discord launcher

pub mod config;
pub mod storage;
pub mod adapters;
