//! Server-side rendering.
//!
//! [`render_to_string`] walks a [`Node`](crate::Node) tree into one growing
//! buffer. [`assemble_document`] builds the fixed `<html>` skeleton around a
//! pre-rendered body from a [`DocumentOptions`] record.

mod document;
mod serializer;

pub use document::{
	Classes, DEFAULT_LANG, DOCTYPE, DocumentOptions, LinkTag, ScriptSource, ScriptTag,
	StyleSource, StyleTag, assemble_document,
};
pub use serializer::{
	BOOLEAN_ATTRIBUTES, VOID_ELEMENTS, is_boolean_attribute, is_void_element, render_to_string,
	write_node,
};
