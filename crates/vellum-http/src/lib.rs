//! Vellum HTTP - rendering full HTML responses
//!
//! This crate runs the render pipeline: the body is serialized, plugins
//! mutate a shared [`RenderingContext`] one after another, and the final
//! context is assembled into a document and returned as a
//! [`ResponsePayload`].
//!
//! ## Architecture
//!
//! - [`plugin`]: the [`Plugin`] trait, closure plugins and the [`PluginRegistry`]
//! - [`pipeline`]: sequential plugin execution
//! - [`render`]: [`Renderer`] and [`RenderOptions`]
//! - [`plugins`]: built-in plugins such as [`ColorScheme`]
//!
//! ## Example
//!
//! ```
//! use vellum_http::{RenderOptions, render};
//! use vellum_pages::{DocumentOptions, Element};
//!
//! # tokio_test::block_on(async {
//! let body = Element::new("h1").child("Hello");
//! let options = RenderOptions::new(body).document(DocumentOptions::new().title("Greeting"));
//!
//! let response = render(options).await.unwrap();
//! assert_eq!(response.status, http::StatusCode::OK);
//! assert!(response.body.starts_with("<!DOCTYPE html><html lang=\"en\">"));
//! # });
//! ```

pub mod context;
pub mod error;
pub mod pipeline;
pub mod plugin;
pub mod plugins;
pub mod render;
pub mod response;

pub use context::RenderingContext;
pub use error::{Error, PluginError, Result};
pub use pipeline::run_pipeline;
pub use plugin::{FnPlugin, Plugin, PluginRegistry, plugin_fn};
pub use plugins::ColorScheme;
pub use render::{Body, RenderOptions, Renderer, render};
pub use response::ResponsePayload;
