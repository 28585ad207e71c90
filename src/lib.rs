//! Interactive wizard that configures and launches a Discord bot

pub mod application;
pub mod domain;
pub mod infrastructure;
