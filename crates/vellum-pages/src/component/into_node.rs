//! Conversions into [`Node`].

use super::node::{ComponentNode, Element, Node, TextLeaf};
use super::props::Number;
use std::sync::Arc;

/// Trait for types that can be converted into a Node.
///
/// Strings become escaped text, numbers are emitted verbatim, `bool`,
/// `()` and `None` render nothing, and sequences become fragments.
pub trait IntoNode {
	/// Converts self into a Node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(Arc::new(self))
	}
}

impl IntoNode for ComponentNode {
	fn into_node(self) -> Node {
		Node::Component(Arc::new(self))
	}
}

impl IntoNode for TextLeaf {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(TextLeaf::Plain(self))
	}
}

impl IntoNode for &str {
	fn into_node(self) -> Node {
		Node::Text(TextLeaf::Plain(self.to_string()))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Text(TextLeaf::Plain(self.clone()))
	}
}

impl IntoNode for bool {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

impl IntoNode for Number {
	fn into_node(self) -> Node {
		Node::Text(TextLeaf::Number(self))
	}
}

macro_rules! into_node_number {
	($($ty:ty),*) => {
		$(
			impl IntoNode for $ty {
				fn into_node(self) -> Node {
					Node::Text(TextLeaf::Number(Number::from(self)))
				}
			}
		)*
	};
}

into_node_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Empty,
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::Fragment(self.into_iter().map(IntoNode::into_node).collect())
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

impl<A: IntoNode, B: IntoNode> IntoNode for (A, B) {
	fn into_node(self) -> Node {
		Node::Fragment(Arc::from([self.0.into_node(), self.1.into_node()]))
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode> IntoNode for (A, B, C) {
	fn into_node(self) -> Node {
		Node::Fragment(Arc::from([
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
		]))
	}
}
