#![forbid(unsafe_code)]

//! Core domain model and generation logic for the WOD generator.
//!
//! This crate provides:
//! - Domain types (exercises, muscle groups, intensity, patterns, WODs)
//! - Exercise catalogs
//! - Pattern generators (EMOM, AMRAP, TABATA)
//! - The WOD assembly engine
//! - Request parsing with default fallback
//! - Configuration and logging

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod patterns;
pub mod request;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use config::Config;
pub use engine::{create_wod, WodGenerator};
