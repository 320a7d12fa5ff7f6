//! Node tree to HTML serialization.

use crate::component::{Element, Node, PropValue, Props, TextLeaf};
use crate::error::{RenderError, RenderResult};
use crate::escape::escape_to_buffer;

/// Tags that never have children or a closing tag.
pub const VOID_ELEMENTS: [&str; 15] = [
	"area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
	"source", "track", "wbr",
];

/// Attributes whose presence alone carries meaning.
pub const BOOLEAN_ATTRIBUTES: [&str; 25] = [
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
];

/// Returns whether `tag` is a void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Returns whether `name` is a boolean attribute.
pub fn is_boolean_attribute(name: &str) -> bool {
	BOOLEAN_ATTRIBUTES.contains(&name)
}

/// Renders a node tree to an HTML string.
///
/// # Errors
///
/// Returns [`RenderError::ConflictingContent`] when an element has both
/// children and raw inner HTML. No partial output is returned.
pub fn render_to_string(node: &Node) -> RenderResult<String> {
	let mut output = String::new();
	write_node(node, &mut output)?;
	Ok(output)
}

/// Appends the HTML for `node` to `output`.
///
/// On error `output` may hold a partial rendering and should be discarded.
pub fn write_node(node: &Node, output: &mut String) -> RenderResult<()> {
	match node {
		Node::Element(el) => write_element(el, output),
		Node::Component(occurrence) => {
			let rendered = occurrence.render();
			write_node(&rendered, output)
		}
		Node::Fragment(children) => write_children(children, output),
		Node::Text(leaf) => {
			write_text(leaf, output);
			Ok(())
		}
		Node::Empty => Ok(()),
	}
}

fn write_children(children: &[Node], output: &mut String) -> RenderResult<()> {
	for child in children {
		write_node(child, output)?;
	}
	Ok(())
}

fn write_text(leaf: &TextLeaf, output: &mut String) {
	match leaf {
		TextLeaf::Plain(text) => escape_to_buffer(text, output),
		TextLeaf::Raw(html) => output.push_str(html),
		TextLeaf::Number(n) => output.push_str(&n.to_string()),
	}
}

fn write_element(el: &Element, output: &mut String) -> RenderResult<()> {
	let inner_html = el.attrs().inner_html();
	if inner_html.is_some() && !el.child_nodes().is_empty() {
		return Err(RenderError::ConflictingContent {
			tag: el.tag_name().to_string(),
		});
	}

	output.push('<');
	output.push_str(el.tag_name());
	for (name, value) in el.attrs().iter() {
		write_attribute(name, value, output);
	}
	output.push('>');

	if el.is_void() {
		return Ok(());
	}

	match inner_html {
		Some(html) => output.push_str(html),
		None => write_children(el.child_nodes(), output)?,
	}

	output.push_str("</");
	output.push_str(el.tag_name());
	output.push('>');
	Ok(())
}

fn write_attribute(name: &str, value: &PropValue, output: &mut String) {
	match value {
		PropValue::Null | PropValue::RawHtml(_) => {}
		PropValue::Bool(flag) if is_boolean_attribute(name) => {
			if *flag {
				output.push(' ');
				output.push_str(name);
				output.push_str("=\"\"");
			}
		}
		PropValue::Bool(flag) => push_quoted(name, if *flag { "true" } else { "false" }, output),
		PropValue::Str(s) => push_quoted(name, s, output),
		PropValue::Number(n) => push_quoted(name, &n.to_string(), output),
		PropValue::Map(map) => push_quoted(name, &declarations(map), output),
	}
}

fn push_quoted(name: &str, value: &str, output: &mut String) {
	output.push(' ');
	output.push_str(name);
	output.push_str("=\"");
	escape_to_buffer(value, output);
	output.push('"');
}

/// Encodes a nested mapping as `key:value;key:value`.
///
/// Only scalar entries are kept; the caller escapes the result.
fn declarations(map: &Props) -> String {
	let mut parts = Vec::with_capacity(map.len());
	for (key, value) in map.iter() {
		let value = match value {
			PropValue::Str(s) => s.clone(),
			PropValue::Number(n) => n.to_string(),
			PropValue::Bool(b) => b.to_string(),
			PropValue::RawHtml(_) | PropValue::Map(_) | PropValue::Null => continue,
		};
		parts.push(format!("{key}:{value}"));
	}
	parts.join(";")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::{Component, ComponentProps, IntoNode, Props, fragment, h, raw};
	use rstest::rstest;

	#[rstest]
	fn test_render_simple_element() {
		let node = Element::new("div").into_node();
		assert_eq!(render_to_string(&node).unwrap(), "<div></div>");
	}

	#[rstest]
	fn test_render_attributes_in_insertion_order() {
		let node = Element::new("div")
			.attr("id", "main")
			.attr("class", "container")
			.attr("tabindex", 1)
			.into_node();
		assert_eq!(
			render_to_string(&node).unwrap(),
			"<div id=\"main\" class=\"container\" tabindex=\"1\"></div>"
		);
	}

	#[rstest]
	fn test_render_escapes_attribute_values() {
		let node = Element::new("a").attr("title", "\"quoted\" & <b>").into_node();
		assert_eq!(
			render_to_string(&node).unwrap(),
			"<a title=\"&quot;quoted&quot; &amp; &lt;b&gt;\"></a>"
		);
	}

	#[rstest]
	fn test_render_null_attribute_omitted() {
		let node = Element::new("p").attr("id", None::<&str>).into_node();
		assert_eq!(render_to_string(&node).unwrap(), "<p></p>");
	}

	#[rstest]
	#[case("br")]
	#[case("img")]
	#[case("meta")]
	#[case("wbr")]
	fn test_render_void_element_drops_children(#[case] tag: &'static str) {
		let node = Element::new(tag).attr("id", "v").child("ignored").into_node();
		assert_eq!(render_to_string(&node).unwrap(), format!("<{tag} id=\"v\">"));
	}

	#[rstest]
	fn test_render_boolean_attributes() {
		let node = Element::new("input")
			.attr("checked", true)
			.attr("disabled", false)
			.attr("required", None::<bool>)
			.into_node();
		assert_eq!(render_to_string(&node).unwrap(), "<input checked=\"\">");
	}

	#[rstest]
	fn test_render_non_boolean_attribute_stringifies_bool() {
		let node = Element::new("div")
			.attr("data-open", true)
			.attr("aria-hidden", false)
			.into_node();
		assert_eq!(
			render_to_string(&node).unwrap(),
			"<div data-open=\"true\" aria-hidden=\"false\"></div>"
		);
	}

	#[rstest]
	fn test_render_nested_mapping_as_declarations() {
		let style = Props::new()
			.with("color", "red")
			.with("margin", 0)
			.with("skip", None::<&str>);
		let node = Element::new("p").attr("style", style).into_node();
		assert_eq!(
			render_to_string(&node).unwrap(),
			"<p style=\"color:red;margin:0\"></p>"
		);
	}

	#[rstest]
	fn test_render_inner_html_verbatim() {
		let node = Element::new("div").inner_html("<b>bold</b>").into_node();
		assert_eq!(render_to_string(&node).unwrap(), "<div><b>bold</b></div>");
	}

	#[rstest]
	fn test_render_inner_html_with_children_conflicts() {
		let node = Element::new("div")
			.inner_html("<b>bold</b>")
			.child("text")
			.into_node();
		assert_eq!(
			render_to_string(&node),
			Err(RenderError::ConflictingContent {
				tag: "div".to_string()
			})
		);
	}

	#[rstest]
	fn test_render_nested_conflict_aborts_whole_render() {
		let node = Element::new("section")
			.child("before")
			.child(Element::new("p").inner_html("x").child("y"))
			.into_node();
		assert!(render_to_string(&node).is_err());
	}

	#[rstest]
	fn test_render_text_leaves() {
		let node = fragment(vec![
			Node::text("<plain>"),
			raw("<raw>"),
			Node::number(42),
			Node::number(0.5),
			Node::Empty,
			true.into_node(),
		]);
		assert_eq!(
			render_to_string(&node).unwrap(),
			"&lt;plain&gt;<raw>420.5"
		);
	}

	#[rstest]
	fn test_render_fragment_has_no_wrapper() {
		let node = Node::fragment(["One", "Two", "Three"]);
		assert_eq!(render_to_string(&node).unwrap(), "OneTwoThree");
	}

	#[rstest]
	fn test_render_component_receives_props_and_children() {
		let card = Component::new(|props: &ComponentProps| {
			Element::new("div")
				.attr("class", props.get("variant").cloned().unwrap_or(PropValue::Null))
				.child(props.children.clone())
				.into_node()
		});
		let node = h(
			card,
			Props::new().with("variant", "wide"),
			vec!["a".into_node(), Element::new("b").child("c").into_node()],
		);
		assert_eq!(
			render_to_string(&node).unwrap(),
			"<div class=\"wide\">a<b>c</b></div>"
		);
	}

	#[rstest]
	fn test_render_component_number_and_raw_output() {
		let number = Component::new(|_| Node::number(7));
		let markup = Component::new(|_| raw("<i>x</i>"));
		let node = fragment(vec![
			h(number, Props::new(), vec![]),
			h(markup, Props::new(), vec![]),
		]);
		assert_eq!(render_to_string(&node).unwrap(), "7<i>x</i>");
	}

	#[rstest]
	fn test_render_component_called_once_per_occurrence() {
		use std::sync::Arc;
		use std::sync::atomic::{AtomicUsize, Ordering};

		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let item = Component::new(move |_| {
			counter.fetch_add(1, Ordering::SeqCst);
			Node::text("i")
		});
		let node = Element::new("ul")
			.child(h(item.clone(), Props::new(), vec![]))
			.child(h(item, Props::new(), vec![]))
			.into_node();

		assert_eq!(render_to_string(&node).unwrap(), "<ul>ii</ul>");
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[rstest]
	fn test_nested_elements() {
		let node = Element::new("html")
			.child(Element::new("head").child(Element::new("title").child("Test Page")))
			.child(
				Element::new("body")
					.child(Element::new("h1").child("Hello"))
					.child(Element::new("p").child("World")),
			)
			.into_node();

		let html = render_to_string(&node).unwrap();
		assert!(html.starts_with("<html>"));
		assert!(html.contains("<title>Test Page</title>"));
		assert!(html.contains("<h1>Hello</h1>"));
		assert!(html.ends_with("</html>"));
	}
}
