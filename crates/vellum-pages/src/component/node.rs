//! The virtual node tree.

use super::into_node::IntoNode;
use super::props::{Number, PropValue, Props};
use crate::error::RenderResult;
use crate::ssr::{is_void_element, render_to_string};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Conventional key under which [`Element::inner_html`] stores raw content.
pub const INNER_HTML: &str = "dangerouslySetInnerHTML";

/// A text leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum TextLeaf {
	/// Plain text, escaped on output.
	Plain(String),
	/// Pre-escaped markup, emitted verbatim.
	Raw(String),
	/// A number, emitted verbatim.
	Number(Number),
}

/// An immutable node in the render tree.
///
/// Composite variants are reference counted, so cloning a node is cheap and
/// equality on them is identity: two separately built but identical
/// elements are not equal, a clone of the same element is. Leaves compare
/// by value.
#[derive(Debug, Clone, Default)]
pub enum Node {
	/// An HTML element.
	Element(Arc<Element>),
	/// A function component invocation.
	Component(Arc<ComponentNode>),
	/// Siblings without a wrapping element.
	Fragment(Arc<[Node]>),
	/// A text leaf.
	Text(TextLeaf),
	/// Renders nothing (null, undefined and boolean children).
	#[default]
	Empty,
}

impl PartialEq for Node {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Node::Element(a), Node::Element(b)) => Arc::ptr_eq(a, b),
			(Node::Component(a), Node::Component(b)) => Arc::ptr_eq(a, b),
			(Node::Fragment(a), Node::Fragment(b)) => Arc::ptr_eq(a, b),
			(Node::Text(a), Node::Text(b)) => a == b,
			(Node::Empty, Node::Empty) => true,
			_ => false,
		}
	}
}

impl Node {
	/// Creates a plain text node.
	pub fn text(content: impl Into<String>) -> Self {
		Node::Text(TextLeaf::Plain(content.into()))
	}

	/// Creates a pre-escaped text node.
	pub fn raw(html: impl Into<String>) -> Self {
		Node::Text(TextLeaf::Raw(html.into()))
	}

	/// Creates a numeric text node.
	pub fn number(n: impl Into<Number>) -> Self {
		Node::Text(TextLeaf::Number(n.into()))
	}

	/// Creates a fragment node.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Node::Fragment(children.into_iter().map(IntoNode::into_node).collect())
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Node::Empty
	}

	/// Returns `true` for [`Node::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Node::Empty)
	}

	/// Renders the node to an HTML string.
	///
	/// # Errors
	///
	/// Returns [`RenderError::ConflictingContent`](crate::RenderError::ConflictingContent)
	/// if any element in the tree has both children and raw inner HTML.
	pub fn render_to_string(&self) -> RenderResult<String> {
		render_to_string(self)
	}
}

/// An HTML element, built with a chaining API and frozen once turned into
/// a [`Node`].
#[derive(Debug, Clone)]
pub struct Element {
	tag: Cow<'static, str>,
	props: Props,
	children: Vec<Node>,
}

impl Element {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			props: Props::new(),
			children: Vec::new(),
		}
	}

	/// Adds a property.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.props.insert(name, value);
		self
	}

	/// Merges a property mapping into the element.
	pub fn props(mut self, props: Props) -> Self {
		self.props.extend(
			props
				.iter()
				.map(|(key, value)| (key.to_string(), value.clone())),
		);
		self
	}

	/// Sets raw inner HTML, emitted without escaping.
	///
	/// An element with inner HTML must not also have children.
	pub fn inner_html(self, html: impl Into<String>) -> Self {
		self.attr(INNER_HTML, PropValue::RawHtml(html.into()))
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoNode::into_node));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the properties.
	pub fn attrs(&self) -> &Props {
		&self.props
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		is_void_element(&self.tag)
	}
}

/// What a component receives: its props plus the collapsed children.
#[derive(Debug, Clone, Default)]
pub struct ComponentProps {
	/// The component's properties.
	pub props: Props,
	/// Children, collapsed to a single node: [`Node::Empty`] for none, the
	/// child itself for one, a [`Node::Fragment`] for several.
	pub children: Node,
}

impl ComponentProps {
	/// Creates component props with no children.
	pub fn new(props: Props) -> Self {
		Self {
			props,
			children: Node::Empty,
		}
	}

	/// Returns the property `key`.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.props.get(key)
	}

	/// Returns the property `key` if it holds a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.props.get(key).and_then(PropValue::as_str)
	}
}

type RenderFn = dyn Fn(&ComponentProps) -> Node + Send + Sync;

/// A function component.
///
/// Components are compared by identity: clones of one `Component` are the
/// same component, two components built from identical closures are not.
///
/// # Example
///
/// ```
/// use vellum_pages::{Component, ComponentProps, Element, IntoNode, Props, h};
///
/// let greeting = Component::new(|props: &ComponentProps| {
/// 	Element::new("p")
/// 		.child(format!("Hello, {}!", props.get_str("name").unwrap_or("stranger")))
/// 		.into_node()
/// });
///
/// let node = h(greeting, Props::new().with("name", "Ferris"), vec![]);
/// assert_eq!(node.render_to_string().unwrap(), "<p>Hello, Ferris!</p>");
/// ```
#[derive(Clone)]
pub struct Component {
	name: Cow<'static, str>,
	render: Arc<RenderFn>,
}

impl Component {
	/// Wraps a render function.
	pub fn new<F>(render: F) -> Self
	where
		F: Fn(&ComponentProps) -> Node + Send + Sync + 'static,
	{
		Self {
			name: Cow::Borrowed("anonymous"),
			render: Arc::new(render),
		}
	}

	/// Sets a name used in debug output.
	pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
		self.name = name.into();
		self
	}

	/// Returns the component's name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Invokes the render function.
	pub fn call(&self, props: &ComponentProps) -> Node {
		(self.render)(props)
	}
}

impl PartialEq for Component {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.render, &other.render)
	}
}

impl fmt::Debug for Component {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Component")
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}

/// A component occurrence in the tree.
///
/// The component is invoked once per occurrence at serialization time.
#[derive(Debug, Clone)]
pub struct ComponentNode {
	component: Component,
	props: ComponentProps,
}

impl ComponentNode {
	/// Creates a component occurrence.
	pub fn new(component: Component, props: ComponentProps) -> Self {
		Self { component, props }
	}

	/// Returns the component.
	pub fn component(&self) -> &Component {
		&self.component
	}

	/// Returns the props the component is invoked with.
	pub fn props(&self) -> &ComponentProps {
		&self.props
	}

	/// Invokes the component.
	pub fn render(&self) -> Node {
		self.component.call(&self.props)
	}
}

/// The first argument of [`h`]: a tag name or a component.
#[derive(Debug, Clone)]
pub enum Tag {
	/// An HTML tag name.
	Name(Cow<'static, str>),
	/// A function component.
	Component(Component),
}

impl From<&'static str> for Tag {
	fn from(tag: &'static str) -> Self {
		Tag::Name(Cow::Borrowed(tag))
	}
}

impl From<String> for Tag {
	fn from(tag: String) -> Self {
		Tag::Name(Cow::Owned(tag))
	}
}

impl From<Component> for Tag {
	fn from(component: Component) -> Self {
		Tag::Component(component)
	}
}

/// Builds a node from a tag or component, props and children.
///
/// For a component the children are collapsed: none becomes
/// [`Node::Empty`], exactly one is passed through, several become a
/// fragment.
///
/// # Example
///
/// ```
/// use vellum_pages::{IntoNode, Props, h};
///
/// let node = h("a", Props::new().with("href", "/"), vec!["Home".into_node()]);
/// assert_eq!(node.render_to_string().unwrap(), "<a href=\"/\">Home</a>");
/// ```
pub fn h(tag: impl Into<Tag>, props: Props, children: Vec<Node>) -> Node {
	match tag.into() {
		Tag::Name(name) => Node::Element(Arc::new(Element {
			tag: name,
			props,
			children,
		})),
		Tag::Component(component) => {
			let children = collapse(children);
			Node::Component(Arc::new(ComponentNode::new(
				component,
				ComponentProps { props, children },
			)))
		}
	}
}

/// Groups siblings without wrapping markup.
pub fn fragment(children: Vec<Node>) -> Node {
	Node::Fragment(children.into())
}

/// Creates a pre-escaped text node.
pub fn raw(html: impl Into<String>) -> Node {
	Node::raw(html)
}

fn collapse(mut children: Vec<Node>) -> Node {
	match children.len() {
		0 => Node::Empty,
		1 => children.pop().unwrap_or_default(),
		_ => Node::Fragment(children.into()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_element_creation() {
		let el = Element::new("div");
		assert_eq!(el.tag_name(), "div");
		assert!(!el.is_void());
		assert!(el.attrs().is_empty());
		assert!(el.child_nodes().is_empty());
	}

	#[rstest]
	fn test_element_with_children() {
		let el = Element::new("div").child("Hello").child("World");
		assert_eq!(el.child_nodes().len(), 2);
	}

	#[rstest]
	fn test_inner_html_uses_conventional_key() {
		let el = Element::new("div").inner_html("<b>x</b>");
		assert_eq!(
			el.attrs().get(INNER_HTML),
			Some(&PropValue::RawHtml("<b>x</b>".into()))
		);
	}

	#[rstest]
	fn test_h_with_tag_builds_element() {
		let node = h("span", Props::new().with("id", "a"), vec!["x".into_node()]);
		let Node::Element(el) = node else {
			panic!("expected element");
		};
		assert_eq!(el.tag_name(), "span");
		assert_eq!(el.child_nodes().len(), 1);
	}

	#[rstest]
	#[case(0)]
	#[case(1)]
	#[case(3)]
	fn test_h_collapses_component_children(#[case] count: usize) {
		let component = Component::new(|props| props.children.clone());
		let children: Vec<Node> = (0..count).map(|i| Node::text(i.to_string())).collect();
		let node = h(component.clone(), Props::new(), children);
		let Node::Component(occurrence) = node else {
			panic!("expected component");
		};
		assert_eq!(occurrence.component(), &component);
		match count {
			0 => assert!(occurrence.props().children.is_empty()),
			1 => assert_eq!(occurrence.props().children, Node::text("0")),
			_ => assert!(matches!(occurrence.props().children, Node::Fragment(ref c) if c.len() == count)),
		}
	}

	#[rstest]
	fn test_node_equality_is_identity_for_composites() {
		let a = Element::new("p").into_node();
		let b = Element::new("p").into_node();
		assert_eq!(a, a.clone());
		assert_ne!(a, b);
		assert_eq!(Node::text("x"), Node::text("x"));
		assert_ne!(Node::text("x"), Node::raw("x"));
		assert_eq!(Node::empty(), Node::default());
		assert!(Node::empty().is_empty());
	}

	#[rstest]
	fn test_component_identity() {
		let a = Component::new(|_| Node::Empty);
		let b = Component::new(|_| Node::Empty);
		assert_eq!(a, a.clone());
		assert_ne!(a, b);
	}
}
