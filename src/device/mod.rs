//! Installed-version lookup
//!
//! # Modules
//!
//! - [`provider`]: lookup seam and fixed-version implementation
//! - [`adb`]: adb-backed device query

pub mod adb;
pub mod provider;
