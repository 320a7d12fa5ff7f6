//! Vellum Pages - virtual nodes rendered to HTML on the server
//!
//! This crate holds the part of Vellum that turns a tree of lightweight
//! virtual nodes into an HTML string.
//!
//! ## Architecture
//!
//! - [`escape`]: HTML-entity escaping for text and attribute values
//! - [`component`]: the [`Node`] tree, [`Props`], construction helpers and [`memo`]
//! - [`ssr`]: the recursive serializer and the full-document assembler
//!
//! ## Example
//!
//! ```
//! use vellum_pages::{Element, IntoNode};
//!
//! let node = Element::new("p")
//! 	.attr("class", "greeting")
//! 	.child("Fish & Chips")
//! 	.into_node();
//!
//! assert_eq!(
//! 	node.render_to_string().unwrap(),
//! 	"<p class=\"greeting\">Fish &amp; Chips</p>"
//! );
//! ```

pub mod component;
pub mod error;
pub mod escape;
pub mod ssr;

pub use component::{
	Component, ComponentNode, ComponentProps, Element, INNER_HTML, IntoNode, Node, Number,
	PropValue, Props, Tag, TextLeaf, fragment, h, memo, memo_with, raw, shallow_equal,
};
pub use error::{RenderError, RenderResult};
pub use escape::{escape, escape_to_buffer};
pub use ssr::{
	Classes, DEFAULT_LANG, DOCTYPE, DocumentOptions, LinkTag, ScriptSource, ScriptTag,
	StyleSource, StyleTag, assemble_document, render_to_string, write_node,
};
