//! Models Module - Data Structures & Errors
//!
//! Single source of truth for the SDK's wire types and error taxonomy.

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
