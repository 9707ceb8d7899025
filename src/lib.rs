//! Intentionally vulnerable access-control training backend.
//!
//! Every data operation checks that the caller holds a well-formed, unexpired
//! token and then acts on whatever target id the caller supplied. No
//! operation compares the caller's identity or role against the target; the
//! token's signature segment is never verified. Those gaps are the subject of
//! the training exercises, not bugs to fix.
//!
//! Do not deploy this anywhere reachable.

pub mod auth;
pub mod client;
pub mod config;
pub mod debug;
pub mod error;
pub mod session;
pub mod state;
pub mod system;
pub mod users;
