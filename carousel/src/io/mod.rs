//! I/O helpers for carousel commands.

pub mod atomic;
pub mod config;
pub mod export;
pub mod paths;
pub mod store;
