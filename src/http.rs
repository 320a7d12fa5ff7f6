//! Render entry point and plugin pipeline
//!
//! This module provides access to vellum-http: [`Renderer`], the
//! [`Plugin`] trait and the built-in plugins.

// Re-export all vellum-http functionality
pub use vellum_http::*;
