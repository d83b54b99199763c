//! Macro Tracker Tools module
//!
//! MCP tool implementations over the shared session.

pub mod food_log;
pub mod macros;
pub mod profile;
pub mod status;
