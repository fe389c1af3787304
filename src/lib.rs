//! Disaster Risk Core
//!
//! Rule-based and classifier-based hazard assessment, reconciled into one
//! risk level, with threshold early warnings and an append-only prediction log.

pub mod api;
pub mod constants;
pub mod logic;
