//! Per-render mutable state shared by plugins.

use crate::error::{Error, Result};
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use vellum_pages::DocumentOptions;

/// State of one render call, handed to each plugin in turn.
///
/// A plugin may rewrite any field; the next plugin and the document
/// assembler observe the result.
#[derive(Debug, Clone)]
pub struct RenderingContext {
	/// Document-level fields read by the assembler.
	pub document: DocumentOptions,
	/// Serialized body markup, inserted verbatim into `<body>`.
	pub body: String,
	/// Response status.
	pub status: StatusCode,
	/// Response headers. Already holds the `Content-Type` header.
	pub headers: HeaderMap,
}

impl RenderingContext {
	/// Creates a context with status 200 and no headers.
	pub fn new(document: DocumentOptions, body: impl Into<String>) -> Self {
		Self {
			document,
			body: body.into(),
			status: StatusCode::OK,
			headers: HeaderMap::new(),
		}
	}

	/// Sets the status from a numeric code.
	pub fn set_status(&mut self, status: u16) -> Result<()> {
		self.status = parse_status(status)?;
		Ok(())
	}

	/// Appends a header, keeping any existing values for the same name.
	pub fn append_header(&mut self, name: &str, value: &str) -> Result<()> {
		let (name, value) = parse_header(name, value)?;
		self.headers.append(name, value);
		Ok(())
	}

	/// Replaces all values of a header.
	pub fn insert_header(&mut self, name: &str, value: &str) -> Result<()> {
		let (name, value) = parse_header(name, value)?;
		self.headers.insert(name, value);
		Ok(())
	}
}

pub(crate) fn parse_status(status: u16) -> Result<StatusCode> {
	StatusCode::from_u16(status).map_err(|_| Error::InvalidStatus(status))
}

pub(crate) fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
	let invalid = |reason: String| Error::InvalidHeader {
		name: name.to_string(),
		reason,
	};
	let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
	let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
	Ok((header_name, header_value))
}
