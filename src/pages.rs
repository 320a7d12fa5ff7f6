//! Virtual node tree and HTML serialization
//!
//! This module provides access to vellum-pages: the node model, the
//! escaping serializer, memoized components and the document assembler.
//!
//! ## Example
//!
//! ```rust
//! use vellum::pages::{Component, ComponentProps, Element, IntoNode, Props, h};
//!
//! let badge = Component::new(|props: &ComponentProps| {
//! 	Element::new("span")
//! 		.attr("class", "badge")
//! 		.child(props.children.clone())
//! 		.into_node()
//! });
//!
//! let node = h(badge, Props::new(), vec!["new".into_node()]);
//! assert_eq!(
//! 	node.render_to_string().unwrap(),
//! 	"<span class=\"badge\">new</span>"
//! );
//! ```

// Re-export all vellum-pages functionality
pub use vellum_pages::*;
