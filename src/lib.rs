//! Core library for pgsharp-checker
//!
//! Determines whether the installed Pokemon Go version differs from the
//! version advertised as supported on pgsharp.com.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐     ┌─────────────┐     ┌──────────────┐
//! │   watch   │────▶│    check    │────▶│     web      │
//! │ (cycles)  │     │ (pipeline)  │     │ (fetch,text) │
//! └───────────┘     └─────────────┘     └──────────────┘
//!    │      │              │
//!    ▼      ▼              ▼
//! ┌────────┐ ┌────────┐ ┌─────────────┐
//! │ device │ │ notify │ │   version   │
//! │ (adb)  │ │        │ │ (cmp, find) │
//! └────────┘ └────────┘ └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`check`]: the fetch → extract → fallback → compare pipeline
//! - [`config`]: constants, config file, data-dir paths
//! - [`device`]: installed-version lookup via adb
//! - [`notify`]: update alert delivery
//! - [`prefs`]: persisted auto-check preference
//! - [`version`]: version comparison and token extraction
//! - [`watch`]: check cycle wiring and periodic scheduling
//! - [`web`]: page fetching and visible-text reduction

pub mod check;
pub mod config;
pub mod device;
pub mod notify;
pub mod prefs;
pub mod version;
pub mod watch;
pub mod web;
