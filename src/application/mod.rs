//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Menu navigation, command editing, the run console
//! - Errors: Wizard-specific errors

pub mod errors;
pub mod services;
