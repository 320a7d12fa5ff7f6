//! Node model and component system.
//!
//! A render produces an immutable tree of [`Node`] values. Elements are
//! built with [`Element`] (or the [`h`] construction function), plain
//! functions become components through [`Component`], and [`memo`] wraps a
//! component so it only re-renders when its props change.

mod into_node;
mod memo;
mod node;
mod props;

pub use into_node::IntoNode;
pub use memo::{memo, memo_with, shallow_equal};
pub use node::{
	Component, ComponentNode, ComponentProps, Element, INNER_HTML, Node, Tag, TextLeaf, fragment,
	h, raw,
};
pub use props::{Number, PropValue, Props};
