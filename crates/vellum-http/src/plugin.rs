//! Plugin trait and registry.
//!
//! ## Plugin
//!
//! A plugin receives the [`RenderingContext`] after the body is serialized
//! and before the document is assembled:
//!
//! ```rust
//! use async_trait::async_trait;
//! use vellum_http::{Plugin, PluginError, RenderingContext};
//! use vellum_pages::ScriptTag;
//!
//! struct Analytics;
//!
//! #[async_trait]
//! impl Plugin for Analytics {
//! 	fn name(&self) -> &str {
//! 		"analytics"
//! 	}
//!
//! 	async fn apply(&self, ctx: &mut RenderingContext) -> Result<(), PluginError> {
//! 		ctx.document
//! 			.scripts
//! 			.push(Some(ScriptTag::external("/analytics.js").defer()));
//! 		Ok(())
//! 	}
//! }
//! ```
//!
//! ## Registry
//!
//! [`PluginRegistry`] holds the plugins that run on every render. It is
//! built at startup and then handed to a [`Renderer`](crate::Renderer),
//! which only reads it.

use crate::context::RenderingContext;
use crate::error::PluginError;
use async_trait::async_trait;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A step of the render pipeline.
///
/// Each invocation is awaited to completion before the next plugin starts,
/// so a plugin always observes every earlier plugin's changes.
#[async_trait]
pub trait Plugin: Send + Sync {
	/// Name used in logs and errors.
	fn name(&self) -> &str {
		std::any::type_name::<Self>()
	}

	/// Mutates the context.
	///
	/// # Errors
	///
	/// Any error aborts the render; later plugins do not run.
	async fn apply(&self, ctx: &mut RenderingContext) -> Result<(), PluginError>;
}

impl fmt::Debug for dyn Plugin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Plugin").field(&self.name()).finish()
	}
}

/// Adapts a synchronous closure into a [`Plugin`].
pub struct FnPlugin<F> {
	name: Cow<'static, str>,
	f: F,
}

impl<F> FnPlugin<F>
where
	F: Fn(&mut RenderingContext) -> Result<(), PluginError> + Send + Sync,
{
	/// Creates a named closure plugin.
	pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
		Self {
			name: name.into(),
			f,
		}
	}
}

#[async_trait]
impl<F> Plugin for FnPlugin<F>
where
	F: Fn(&mut RenderingContext) -> Result<(), PluginError> + Send + Sync,
{
	fn name(&self) -> &str {
		&self.name
	}

	async fn apply(&self, ctx: &mut RenderingContext) -> Result<(), PluginError> {
		(self.f)(ctx)
	}
}

/// Wraps a closure as a shareable plugin.
///
/// # Example
///
/// ```
/// use vellum_http::plugin_fn;
///
/// let plugin = plugin_fn("title", |ctx| {
/// 	ctx.document.title = Some("Home".into());
/// 	Ok(())
/// });
/// assert_eq!(plugin.name(), "title");
/// ```
pub fn plugin_fn<F>(name: impl Into<Cow<'static, str>>, f: F) -> Arc<dyn Plugin>
where
	F: Fn(&mut RenderingContext) -> Result<(), PluginError> + Send + Sync + 'static,
{
	Arc::new(FnPlugin::new(name, f))
}

/// Returns whether two plugin handles point at the same allocation.
pub(crate) fn same_plugin(a: &Arc<dyn Plugin>, b: &Arc<dyn Plugin>) -> bool {
	std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Plugins that run on every render, in registration order.
///
/// Registering the same plugin twice runs it twice.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
	plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a plugin.
	pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> &mut Self {
		tracing::debug!(plugin = plugin.name(), "registered plugin");
		self.plugins.push(plugin);
		self
	}

	/// Appends several plugins, keeping their order.
	pub fn register_all(&mut self, plugins: impl IntoIterator<Item = Arc<dyn Plugin>>) -> &mut Self {
		for plugin in plugins {
			self.register(plugin);
		}
		self
	}

	/// Appends a plugin using builder pattern.
	pub fn with_plugin(mut self, plugin: Arc<dyn Plugin>) -> Self {
		self.register(plugin);
		self
	}

	/// Returns whether this exact plugin instance is registered.
	pub fn contains(&self, plugin: &Arc<dyn Plugin>) -> bool {
		self.plugins.iter().any(|p| same_plugin(p, plugin))
	}

	/// Iterates over plugins in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Plugin>> {
		self.plugins.iter()
	}

	/// Returns the number of registered plugins.
	pub fn len(&self) -> usize {
		self.plugins.len()
	}

	/// Returns `true` if no plugin is registered.
	pub fn is_empty(&self) -> bool {
		self.plugins.is_empty()
	}
}

impl FromIterator<Arc<dyn Plugin>> for PluginRegistry {
	fn from_iter<I: IntoIterator<Item = Arc<dyn Plugin>>>(iter: I) -> Self {
		let mut registry = Self::new();
		registry.register_all(iter);
		registry
	}
}
