//! Install request lifecycle management.
//!
//! Owns the create / get_status / decide operations over install requests
//! and the authorization gate in front of decisions.

mod engine;
mod types;

pub use engine::LifecycleEngine;
pub use types::LifecycleError;
