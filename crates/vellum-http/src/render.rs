//! The render entry point.

use crate::context::{RenderingContext, parse_header, parse_status};
use crate::error::{Error, Result};
use crate::pipeline::run_pipeline;
use crate::plugin::{Plugin, PluginRegistry};
use crate::response::ResponsePayload;
use http::HeaderMap;
use http::header::{CONTENT_TYPE, HeaderValue};
use std::sync::Arc;
use vellum_conf::RenderSettings;
use vellum_pages::{
	DOCTYPE, DocumentOptions, Element, IntoNode, Node, assemble_document, render_to_string,
	write_node,
};

/// The content of `<body>`.
#[derive(Debug, Clone)]
pub enum Body {
	/// A node tree, serialized once before any plugin runs.
	Node(Node),
	/// Markup inserted verbatim.
	Html(String),
}

impl Default for Body {
	fn default() -> Self {
		Body::Html(String::new())
	}
}

impl From<Node> for Body {
	fn from(node: Node) -> Self {
		Body::Node(node)
	}
}

impl From<Element> for Body {
	fn from(element: Element) -> Self {
		Body::Node(element.into_node())
	}
}

impl From<&str> for Body {
	fn from(html: &str) -> Self {
		Body::Html(html.to_string())
	}
}

impl From<String> for Body {
	fn from(html: String) -> Self {
		Body::Html(html)
	}
}

/// Everything one render call needs.
///
/// A bare [`Node`], [`Element`] or string converts into options holding
/// just that body.
///
/// # Example
///
/// ```
/// use vellum_http::RenderOptions;
/// use vellum_pages::DocumentOptions;
///
/// let options = RenderOptions::new("<h1>Gone</h1>")
/// 	.document(DocumentOptions::new().title("Not found"))
/// 	.status(404)
/// 	.header("Cache-Control", "no-store");
/// assert_eq!(options.status, 404);
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions {
	/// Document-level fields.
	pub document: DocumentOptions,
	/// Body content.
	pub body: Body,
	/// Initial status.
	pub status: u16,
	/// Initial headers, in order. `Content-Type` is appended after them.
	pub headers: Vec<(String, String)>,
	/// Plugins for this call only, run after the registered ones.
	pub plugins: Vec<Arc<dyn Plugin>>,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			document: DocumentOptions::default(),
			body: Body::default(),
			status: 200,
			headers: Vec::new(),
			plugins: Vec::new(),
		}
	}
}

impl RenderOptions {
	/// Creates options with the given body.
	pub fn new(body: impl Into<Body>) -> Self {
		Self {
			body: body.into(),
			..Self::default()
		}
	}

	/// Sets the document fields.
	pub fn document(mut self, document: DocumentOptions) -> Self {
		self.document = document;
		self
	}

	/// Sets the initial status.
	pub fn status(mut self, status: u16) -> Self {
		self.status = status;
		self
	}

	/// Adds an initial header.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	/// Adds a call-scoped plugin.
	pub fn plugin(mut self, plugin: Arc<dyn Plugin>) -> Self {
		self.plugins.push(plugin);
		self
	}
}

impl From<Body> for RenderOptions {
	fn from(body: Body) -> Self {
		RenderOptions::new(body)
	}
}

impl From<Node> for RenderOptions {
	fn from(node: Node) -> Self {
		RenderOptions::new(node)
	}
}

impl From<Element> for RenderOptions {
	fn from(element: Element) -> Self {
		RenderOptions::new(element)
	}
}

impl From<&str> for RenderOptions {
	fn from(html: &str) -> Self {
		RenderOptions::new(html)
	}
}

impl From<String> for RenderOptions {
	fn from(html: String) -> Self {
		RenderOptions::new(html)
	}
}

/// Renders full HTML documents through a plugin pipeline.
///
/// Build one at startup, register plugins, then share it (for example in
/// an `Arc`) across requests. Rendering only reads the renderer.
///
/// # Example
///
/// ```
/// use vellum_http::{Renderer, plugin_fn};
///
/// # tokio_test::block_on(async {
/// let mut renderer = Renderer::new();
/// renderer.register(plugin_fn("title", |ctx| {
/// 	ctx.document.title = Some("Home".into());
/// 	Ok(())
/// }));
///
/// let response = renderer.render("<h1>Hello</h1>").await.unwrap();
/// assert!(response.body.contains("<title>Home</title>"));
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	registry: PluginRegistry,
	settings: RenderSettings,
}

impl Renderer {
	/// Creates a renderer with default settings and no plugins.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the plugin registry.
	pub fn with_registry(mut self, registry: PluginRegistry) -> Self {
		self.registry = registry;
		self
	}

	/// Replaces the settings.
	pub fn with_settings(mut self, settings: RenderSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Registers a plugin that runs on every render.
	pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> &mut Self {
		self.registry.register(plugin);
		self
	}

	/// Returns the plugin registry.
	pub fn registry(&self) -> &PluginRegistry {
		&self.registry
	}

	/// Returns the settings.
	pub fn settings(&self) -> &RenderSettings {
		&self.settings
	}

	/// Renders a full document.
	///
	/// The body is serialized first, then headers are built (caller headers,
	/// then `Content-Type`), then plugins run, then the document is assembled
	/// and serialized after the doctype.
	///
	/// # Errors
	///
	/// Fails on an invalid status or header, a conflicting element in the
	/// body, or the first failing plugin.
	pub async fn render(&self, input: impl Into<RenderOptions>) -> Result<ResponsePayload> {
		let RenderOptions {
			mut document,
			body,
			status,
			headers,
			plugins,
		} = input.into();

		let body = match body {
			Body::Node(node) => render_to_string(&node)?,
			Body::Html(html) => html,
		};
		let status = parse_status(status)?;
		let headers = self.build_headers(&headers)?;

		if document.lang.is_none() {
			document.lang = Some(self.settings.lang.clone());
		}
		if document.viewport.is_none() {
			document.viewport = self.settings.viewport.clone();
		}

		let mut ctx = RenderingContext {
			document,
			body,
			status,
			headers,
		};
		run_pipeline(&self.registry, &plugins, &mut ctx).await?;

		let root = assemble_document(&ctx.document, &ctx.body);
		let mut html = String::with_capacity(DOCTYPE.len() + ctx.body.len() + 256);
		html.push_str(DOCTYPE);
		write_node(&root, &mut html)?;

		tracing::debug!(status = ctx.status.as_u16(), bytes = html.len(), "rendered document");
		Ok(ResponsePayload {
			status: ctx.status,
			headers: ctx.headers,
			body: html,
		})
	}

	fn build_headers(&self, initial: &[(String, String)]) -> Result<HeaderMap> {
		let mut headers = HeaderMap::with_capacity(initial.len() + 1);
		for (name, value) in initial {
			let (name, value) = parse_header(name, value)?;
			headers.append(name, value);
		}
		let content_type = HeaderValue::from_str(&self.settings.content_type).map_err(|e| {
			Error::InvalidHeader {
				name: CONTENT_TYPE.to_string(),
				reason: e.to_string(),
			}
		})?;
		headers.append(CONTENT_TYPE, content_type);
		Ok(headers)
	}
}

/// Renders with a default [`Renderer`]: no registered plugins, default
/// settings.
pub async fn render(input: impl Into<RenderOptions>) -> Result<ResponsePayload> {
	Renderer::default().render(input).await
}
