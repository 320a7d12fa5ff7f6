//! # Vellum
//!
//! Server-side rendering of lightweight virtual node trees into HTML
//! documents.
//!
//! A render turns a [`Node`](pages::Node) tree into markup, lets an ordered
//! list of async plugins adjust the document (title, metadata, styles,
//! scripts, status, headers), and returns the finished document with its
//! status and headers.
//!
//! ## Feature Flags
//!
//! - `minimal` - node tree, serializer and document assembler only
//! - `full` (default) - adds the render entry point, plugins and settings
//! - `http` - render entry point and plugin pipeline
//! - `conf` - TOML render settings
//!
//! ## Quick Example
//!
//! ```rust
//! use vellum::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let mut renderer = Renderer::new();
//! renderer.register(ColorScheme::Dark.plugin());
//!
//! let page = Element::new("main").child(Element::new("h1").child("Hello"));
//! let options = RenderOptions::new(page).document(DocumentOptions::new().title("Home"));
//!
//! let response = renderer.render(options).await.unwrap();
//! assert!(response.body.starts_with("<!DOCTYPE html><html lang=\"en\" class=\"dark\">"));
//! # });
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "http")]
pub mod http;
pub mod pages;

// Re-export the rendering core
pub use vellum_pages::{
	Component, ComponentProps, DocumentOptions, Element, IntoNode, Node, PropValue, Props,
	RenderError, fragment, h, memo, raw, render_to_string,
};

// Re-export the render entry point
#[cfg(feature = "http")]
pub use vellum_http::{
	ColorScheme, Error, Plugin, PluginError, PluginRegistry, RenderOptions, Renderer,
	RenderingContext, ResponsePayload, plugin_fn, render,
};

#[cfg(feature = "conf")]
pub use vellum_conf::{RenderSettings, SettingsError};

/// Commonly used types.
pub mod prelude {
	pub use crate::{
		Component, ComponentProps, DocumentOptions, Element, IntoNode, Node, PropValue, Props,
		fragment, h, memo, raw, render_to_string,
	};
	pub use vellum_pages::{LinkTag, ScriptTag, StyleTag};

	#[cfg(feature = "http")]
	pub use crate::{
		ColorScheme, Plugin, PluginError, PluginRegistry, RenderOptions, Renderer,
		RenderingContext, plugin_fn, render,
	};

	#[cfg(feature = "conf")]
	pub use crate::RenderSettings;

	// External
	pub use async_trait::async_trait;
}
