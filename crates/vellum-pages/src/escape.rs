//! HTML escaping for text content and attribute values.
//!
//! Only the four characters that can change the meaning of markup inside
//! text or a double-quoted attribute are replaced: `&`, `<`, `>` and `"`.
//! Everything else, including non-ASCII text, passes through untouched.

use std::borrow::Cow;

const ESCAPABLE: [char; 4] = ['&', '<', '>', '"'];

/// Appends the escaped form of `s` to `buffer`.
///
/// A single forward scan finds the first escapable character; when there is
/// none the input is appended as-is without any per-character work.
///
/// # Example
///
/// ```
/// use vellum_pages::escape_to_buffer;
///
/// let mut buffer = String::from("<p>");
/// escape_to_buffer("1 < 2", &mut buffer);
/// assert_eq!(buffer, "<p>1 &lt; 2");
/// ```
pub fn escape_to_buffer(s: &str, buffer: &mut String) {
	let Some(first) = s.find(ESCAPABLE) else {
		buffer.push_str(s);
		return;
	};

	buffer.reserve(s.len() + 8);

	// The escapable characters are all ASCII, so every match index is a
	// char boundary and byte-wise slicing is safe.
	let mut last = 0;
	for (index, byte) in s.bytes().enumerate().skip(first) {
		let entity = match byte {
			b'"' => "&quot;",
			b'&' => "&amp;",
			b'<' => "&lt;",
			b'>' => "&gt;",
			_ => continue,
		};
		buffer.push_str(&s[last..index]);
		buffer.push_str(entity);
		last = index + 1;
	}
	buffer.push_str(&s[last..]);
}

/// Returns the escaped form of `s`, borrowing when nothing needs replacing.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use vellum_pages::escape;
///
/// assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
/// assert_eq!(escape("\"a\" & b"), "&quot;a&quot; &amp; b");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
	if s.contains(ESCAPABLE) {
		let mut escaped = String::with_capacity(s.len() + 8);
		escape_to_buffer(s, &mut escaped);
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
