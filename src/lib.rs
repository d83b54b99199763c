//! Macro Tracker Library
//!
//! Daily calorie estimates, food log totals and macro gram targets.

pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod session;
pub mod tools;
