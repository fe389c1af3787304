//! API Module
//!
//! Command surface over the core, shaped for an IPC/desktop frontend:
//! every command returns `Result<T, String>` with serialisable payloads.
//!
//! Structure:
//! - commands.rs: command implementations
//! - engine_status.rs: status DTOs

pub mod commands;
pub mod engine_status;

pub use commands::*;
