//! Render settings
//!
//! This module provides access to vellum-conf.

// Re-export all vellum-conf functionality
pub use vellum_conf::*;
