//! session-core - Core types and translation logic for session lists
//!
//! This crate turns session records from the sessions API into the
//! key/label/timestamp records a display list needs, along with payload
//! parsing, ordering and pagination. It has no CLI dependencies.

pub mod config;
pub mod errors;
pub mod listing;
pub mod parser;
pub mod timestamp;
pub mod translator;
pub mod types;

pub use config::*;
pub use errors::*;
pub use listing::*;
pub use parser::*;
pub use timestamp::*;
pub use translator::*;
pub use types::*;
