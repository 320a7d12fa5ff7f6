//! The finished response payload.

use http::header::CONTENT_TYPE;
use http::{HeaderMap, StatusCode};

/// Result of a render: the full document plus status and headers.
#[derive(Debug, Clone)]
pub struct ResponsePayload {
	/// Final status as left by the plugins.
	pub status: StatusCode,
	/// Final headers as left by the plugins.
	pub headers: HeaderMap,
	/// `<!DOCTYPE html>` followed by the document markup.
	pub body: String,
}

impl ResponsePayload {
	/// Returns the first `Content-Type` value, if it is valid UTF-8.
	pub fn content_type(&self) -> Option<&str> {
		self.headers
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
	}

	/// Returns the headers as `(name, value)` pairs.
	///
	/// Values are grouped by name: all values of a name come together, in the
	/// order they were added, and names follow their first insertion. Values
	/// that are not valid UTF-8 are skipped.
	pub fn header_pairs(&self) -> Vec<(&str, &str)> {
		self.headers
			.iter()
			.filter_map(|(name, value)| Some((name.as_str(), value.to_str().ok()?)))
			.collect()
	}
}

impl From<ResponsePayload> for http::Response<String> {
	fn from(payload: ResponsePayload) -> Self {
		let mut response = http::Response::new(payload.body);
		*response.status_mut() = payload.status;
		*response.headers_mut() = payload.headers;
		response
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::HeaderValue;
	use rstest::rstest;

	fn payload() -> ResponsePayload {
		let mut headers = HeaderMap::new();
		headers.append("x-trace", HeaderValue::from_static("1"));
		headers.append(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
		ResponsePayload {
			status: StatusCode::CREATED,
			headers,
			body: "<!DOCTYPE html><html></html>".to_string(),
		}
	}

	#[rstest]
	fn test_content_type() {
		assert_eq!(payload().content_type(), Some("text/html; charset=utf-8"));
	}

	#[rstest]
	fn test_header_pairs() {
		let payload = payload();
		assert_eq!(
			payload.header_pairs(),
			vec![
				("x-trace", "1"),
				("content-type", "text/html; charset=utf-8")
			]
		);
	}

	#[rstest]
	fn test_header_pairs_grouped_by_name() {
		let mut payload = payload();
		payload.headers.clear();
		payload.headers.append("a", HeaderValue::from_static("1"));
		payload.headers.append("b", HeaderValue::from_static("2"));
		payload.headers.append("a", HeaderValue::from_static("3"));

		assert_eq!(
			payload.header_pairs(),
			vec![("a", "1"), ("a", "3"), ("b", "2")]
		);
	}

	#[rstest]
	fn test_into_http_response() {
		let response: http::Response<String> = payload().into();
		assert_eq!(response.status(), StatusCode::CREATED);
		assert_eq!(response.headers()["x-trace"], "1");
		assert_eq!(response.body(), "<!DOCTYPE html><html></html>");
	}
}
