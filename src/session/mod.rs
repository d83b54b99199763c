//! Session module
//!
//! Caller-owned tracker state shared by the MCP tools.

pub mod handle;
pub mod state;

pub use handle::{Session, SessionError, SessionResult};
pub use state::SessionState;
