//! Version ordering and extraction
//!
//! # Modules
//!
//! - [`ordering`]: dotted-numeric comparison with lenient zero-default parsing
//! - [`extract`]: ordered pattern matching over page text with acceptance
//!   filtering

pub mod extract;
pub mod ordering;
