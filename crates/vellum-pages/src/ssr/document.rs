//! Full HTML document assembly.

use crate::component::{Element, IntoNode, Node, PropValue, Props};
use indexmap::IndexMap;

/// Doctype prefixed to every rendered document.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Language used when none is configured.
pub const DEFAULT_LANG: &str = "en";

/// Class lists for the root and body elements.
///
/// `None` and empty entries are dropped when rendering, so an entry can be
/// switched off in place: `classes.html.push(dark.then(|| "dark".into()))`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classes {
	/// Classes on `<html>`.
	pub html: Vec<Option<String>>,
	/// Classes on `<body>`.
	pub body: Vec<Option<String>>,
}

/// A `<link>` tag in the document head.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkTag {
	/// The `rel` attribute.
	pub rel: String,
	/// The `href` attribute.
	pub href: String,
	/// Additional attributes, rendered after `rel` and `href`.
	pub attrs: Props,
}

impl LinkTag {
	/// Creates a new link tag.
	pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			rel: rel.into(),
			href: href.into(),
			attrs: Props::new(),
		}
	}

	/// Adds an extra attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.attrs.insert(name, value);
		self
	}

	fn to_element(&self) -> Element {
		Element::new("link")
			.attr("rel", self.rel.as_str())
			.attr("href", self.href.as_str())
			.props(self.attrs.clone())
	}
}

/// Where a stylesheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSource {
	/// Inline CSS, emitted verbatim inside `<style>`.
	Inline(String),
	/// An external stylesheet URL, emitted as `<link rel="stylesheet">`.
	External(String),
}

/// A stylesheet in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTag {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Inline text or external href.
	pub source: StyleSource,
}

impl StyleTag {
	/// Creates an inline `<style>` tag.
	pub fn inline(css: impl Into<String>) -> Self {
		Self {
			id: None,
			source: StyleSource::Inline(css.into()),
		}
	}

	/// Creates an external stylesheet link.
	pub fn external(href: impl Into<String>) -> Self {
		Self {
			id: None,
			source: StyleSource::External(href.into()),
		}
	}

	/// Sets the `id` attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	fn to_element(&self) -> Element {
		match &self.source {
			StyleSource::Inline(css) => Element::new("style")
				.attr("id", self.id.as_deref())
				.inner_html(css.as_str()),
			StyleSource::External(href) => Element::new("link")
				.attr("id", self.id.as_deref())
				.attr("rel", "stylesheet")
				.attr("href", href.as_str()),
		}
	}
}

impl From<&str> for StyleTag {
	fn from(css: &str) -> Self {
		StyleTag::inline(css)
	}
}

impl From<String> for StyleTag {
	fn from(css: String) -> Self {
		StyleTag::inline(css)
	}
}

/// Where a script comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
	/// Inline JavaScript, emitted verbatim.
	Inline(String),
	/// An external script URL.
	External(String),
}

/// A `<script>` tag in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
	/// Optional `id` attribute.
	pub id: Option<String>,
	/// Optional `type` attribute.
	pub script_type: Option<String>,
	/// Whether to set `async`.
	pub is_async: bool,
	/// Whether to set `defer`.
	pub defer: bool,
	/// Inline text or external src.
	pub source: ScriptSource,
}

impl ScriptTag {
	/// Creates an inline script.
	pub fn inline(js: impl Into<String>) -> Self {
		Self::with_source(ScriptSource::Inline(js.into()))
	}

	/// Creates an external script.
	pub fn external(src: impl Into<String>) -> Self {
		Self::with_source(ScriptSource::External(src.into()))
	}

	fn with_source(source: ScriptSource) -> Self {
		Self {
			id: None,
			script_type: None,
			is_async: false,
			defer: false,
			source,
		}
	}

	/// Sets the `id` attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the `type` attribute (e.g. `module`).
	pub fn script_type(mut self, script_type: impl Into<String>) -> Self {
		self.script_type = Some(script_type.into());
		self
	}

	/// Sets `async`.
	pub fn async_(mut self) -> Self {
		self.is_async = true;
		self
	}

	/// Sets `defer`.
	pub fn defer(mut self) -> Self {
		self.defer = true;
		self
	}

	fn to_element(&self) -> Element {
		let src = match &self.source {
			ScriptSource::External(src) => Some(src.as_str()),
			ScriptSource::Inline(_) => None,
		};
		let el = Element::new("script")
			.attr("id", self.id.as_deref())
			.attr("type", self.script_type.as_deref())
			.attr("src", src)
			.attr("async", self.is_async)
			.attr("defer", self.defer);
		match &self.source {
			ScriptSource::Inline(js) => el.inner_html(js.as_str()),
			ScriptSource::External(_) => el,
		}
	}
}

impl From<&str> for ScriptTag {
	fn from(js: &str) -> Self {
		ScriptTag::inline(js)
	}
}

impl From<String> for ScriptTag {
	fn from(js: String) -> Self {
		ScriptTag::inline(js)
	}
}

/// Document-level fields of a render.
///
/// List fields hold `Option`s so an entry can be suppressed without
/// restructuring the list; `None` entries are skipped.
///
/// # Example
///
/// ```
/// use vellum_pages::{DocumentOptions, ScriptTag, StyleTag};
///
/// let options = DocumentOptions::new()
/// 	.title("Home")
/// 	.meta("description", "Landing page")
/// 	.style(StyleTag::external("/main.css"))
/// 	.script(ScriptTag::external("/app.js").defer());
/// assert_eq!(options.title.as_deref(), Some("Home"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentOptions {
	/// `lang` attribute of `<html>`; `en` when unset.
	pub lang: Option<String>,
	/// Content of the viewport meta tag; omitted when unset.
	pub viewport: Option<String>,
	/// Root and body class lists.
	pub classes: Classes,
	/// Document title.
	pub title: Option<String>,
	/// Metadata, `name -> content`. Entries with an empty name or no content
	/// are dropped; `og:` names render as `property`.
	pub meta: IndexMap<String, Option<String>>,
	/// Link tags.
	pub links: Vec<Option<LinkTag>>,
	/// Stylesheets.
	pub styles: Vec<Option<StyleTag>>,
	/// Scripts.
	pub scripts: Vec<Option<ScriptTag>>,
}

impl DocumentOptions {
	/// Creates empty options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = Some(lang.into());
		self
	}

	/// Sets the viewport meta content.
	pub fn viewport(mut self, viewport: impl Into<String>) -> Self {
		self.viewport = Some(viewport.into());
		self
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Adds a metadata entry.
	pub fn meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
		self.meta.insert(name.into(), Some(content.into()));
		self
	}

	/// Adds a class to `<html>`.
	pub fn html_class(mut self, class: impl Into<String>) -> Self {
		self.classes.html.push(Some(class.into()));
		self
	}

	/// Adds a class to `<body>`.
	pub fn body_class(mut self, class: impl Into<String>) -> Self {
		self.classes.body.push(Some(class.into()));
		self
	}

	/// Adds a link tag.
	pub fn link(mut self, link: LinkTag) -> Self {
		self.links.push(Some(link));
		self
	}

	/// Adds a stylesheet.
	pub fn style(mut self, style: impl Into<StyleTag>) -> Self {
		self.styles.push(Some(style.into()));
		self
	}

	/// Adds a script.
	pub fn script(mut self, script: impl Into<ScriptTag>) -> Self {
		self.scripts.push(Some(script.into()));
		self
	}
}

/// Builds the document node for `options` around a pre-rendered `body`.
///
/// The result serializes to `<html>` with a `<head>` holding the charset
/// meta, optional viewport, title, metadata, links, styles and scripts (in
/// that order), and a `<body>` whose inner HTML is `body` verbatim. The
/// caller prefixes [`DOCTYPE`].
pub fn assemble_document(options: &DocumentOptions, body: &str) -> Node {
	let head = Element::new("head")
		.child(Element::new("meta").attr("charSet", "utf-8"))
		.child(options.viewport.as_deref().map(|content| {
			Element::new("meta")
				.attr("name", "viewport")
				.attr("content", content)
		}))
		.child(
			options
				.title
				.as_deref()
				.filter(|title| !title.is_empty())
				.map(|title| Element::new("title").child(title)),
		)
		.children(meta_tags(&options.meta))
		.children(options.links.iter().flatten().map(LinkTag::to_element))
		.children(options.styles.iter().flatten().map(StyleTag::to_element))
		.children(options.scripts.iter().flatten().map(ScriptTag::to_element));

	let body = Element::new("body")
		.attr("class", join_classes(&options.classes.body))
		.inner_html(body);

	Element::new("html")
		.attr("lang", options.lang.as_deref().unwrap_or(DEFAULT_LANG))
		.attr("class", join_classes(&options.classes.html))
		.child(head)
		.child(body)
		.into_node()
}

fn meta_tags(meta: &IndexMap<String, Option<String>>) -> Vec<Element> {
	meta.iter()
		.filter_map(|(name, content)| {
			let content = content.as_deref().filter(|c| !c.is_empty())?;
			if name.is_empty() {
				return None;
			}
			let key = if name.starts_with("og:") {
				"property"
			} else {
				"name"
			};
			Some(
				Element::new("meta")
					.attr(key, name.as_str())
					.attr("content", content),
			)
		})
		.collect()
}

fn join_classes(classes: &[Option<String>]) -> Option<String> {
	let joined = classes
		.iter()
		.flatten()
		.filter(|class| !class.is_empty())
		.map(String::as_str)
		.collect::<Vec<_>>()
		.join(" ");
	(!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ssr::render_to_string;
	use rstest::{fixture, rstest};

	fn render(options: &DocumentOptions, body: &str) -> String {
		render_to_string(&assemble_document(options, body)).unwrap()
	}

	#[fixture]
	fn options() -> DocumentOptions {
		DocumentOptions::new()
	}

	#[rstest]
	fn test_minimal_document(options: DocumentOptions) {
		assert_eq!(
			render(&options, "<h1>Hello</h1>"),
			"<html lang=\"en\"><head><meta charSet=\"utf-8\"></head><body><h1>Hello</h1></body></html>"
		);
	}

	#[rstest]
	fn test_lang_and_viewport(options: DocumentOptions) {
		let html = render(
			&options
				.lang("ja")
				.viewport("width=device-width, initial-scale=1"),
			"",
		);
		assert!(html.starts_with("<html lang=\"ja\"><head><meta charSet=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"));
	}

	#[rstest]
	fn test_title_is_escaped(options: DocumentOptions) {
		let html = render(&options.title("Tom & Jerry"), "");
		assert!(html.contains("<title>Tom &amp; Jerry</title>"));
	}

	#[rstest]
	fn test_empty_title_omitted(options: DocumentOptions) {
		let html = render(&options.title(""), "");
		assert!(!html.contains("<title>"));
	}

	#[rstest]
	fn test_classes_drop_falsy_entries(mut options: DocumentOptions) {
		options.classes.html = vec![Some("h".into()), Some("dark".into()), None];
		options.classes.body = vec![None, Some(String::new())];
		let html = render(&options, "");
		assert!(html.starts_with("<html lang=\"en\" class=\"h dark\">"));
		assert!(html.contains("<body></body>"));
	}

	#[rstest]
	fn test_body_class(options: DocumentOptions) {
		let html = render(&options.body_class("a").body_class("b"), "x");
		assert!(html.contains("<body class=\"a b\">x</body>"));
	}

	#[rstest]
	fn test_meta_filtering_and_open_graph(mut options: DocumentOptions) {
		options.meta.insert("description".into(), Some("About".into()));
		options.meta.insert("og:title".into(), Some("OG".into()));
		options.meta.insert("empty".into(), Some(String::new()));
		options.meta.insert("missing".into(), None);
		options.meta.insert(String::new(), Some("nameless".into()));
		let html = render(&options, "");
		assert!(html.contains("<meta name=\"description\" content=\"About\">"));
		assert!(html.contains("<meta property=\"og:title\" content=\"OG\">"));
		assert!(!html.contains("empty"));
		assert!(!html.contains("missing"));
		assert!(!html.contains("nameless"));
	}

	#[rstest]
	fn test_links(mut options: DocumentOptions) {
		options
			.links
			.push(Some(LinkTag::new("icon", "/favicon.ico").attr("sizes", "any")));
		options.links.push(None);
		let html = render(&options, "");
		assert!(html.contains("<link rel=\"icon\" href=\"/favicon.ico\" sizes=\"any\">"));
		assert_eq!(html.matches("<link").count(), 1);
	}

	#[rstest]
	fn test_styles(options: DocumentOptions) {
		let html = render(
			&options
				.style("body{color:red}")
				.style(StyleTag::inline("p>a{}").id("critical"))
				.style(StyleTag::external("/main.css").id("main")),
			"",
		);
		assert!(html.contains("<style>body{color:red}</style>"));
		assert!(html.contains("<style id=\"critical\">p>a{}</style>"));
		assert!(html.contains("<link id=\"main\" rel=\"stylesheet\" href=\"/main.css\">"));
	}

	#[rstest]
	fn test_scripts(options: DocumentOptions) {
		let html = render(
			&options
				.script("console.log(\"<hi>\")")
				.script(
					ScriptTag::external("/app.js")
						.id("app")
						.script_type("module")
						.async_()
						.defer(),
				),
			"",
		);
		assert!(html.contains("<script>console.log(\"<hi>\")</script>"));
		assert!(html.contains(
			"<script id=\"app\" type=\"module\" src=\"/app.js\" async=\"\" defer=\"\"></script>"
		));
	}

	#[rstest]
	fn test_suppressed_entries_skipped(mut options: DocumentOptions) {
		options.styles.push(None);
		options.scripts.push(None);
		assert_eq!(
			render(&options, ""),
			"<html lang=\"en\"><head><meta charSet=\"utf-8\"></head><body></body></html>"
		);
	}

	#[rstest]
	fn test_head_order(options: DocumentOptions) {
		let html = render(
			&options
				.script("s")
				.style("c")
				.link(LinkTag::new("icon", "/i"))
				.meta("k", "v")
				.title("t"),
			"",
		);
		let positions: Vec<_> = ["<title>", "<meta name=\"k\"", "<link", "<style>", "<script>"]
			.iter()
			.map(|needle| html.find(needle).unwrap())
			.collect();
		assert!(positions.windows(2).all(|w| w[0] < w[1]));
	}
}
