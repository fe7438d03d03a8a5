//! Request handlers, one module per route group.

pub mod browse;
pub mod drive;
pub mod file;
pub mod folder;
pub mod health;
