//! Property values attached to elements and components.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A numeric leaf or property value.
///
/// Numbers are emitted verbatim. Floats without a fractional part print
/// like integers (`3.0` renders as `3`), matching what browsers expect
/// in attribute values. Magnitudes from `1e21` up and below `1e-6` use
/// exponent form (`1e+21`, `1.5e-7`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// A signed integer.
	Int(i64),
	/// A floating point value.
	Float(f64),
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Number::Int(n) => write!(f, "{n}"),
			Number::Float(n) if n.is_nan() => f.write_str("NaN"),
			Number::Float(n) if n.is_infinite() => {
				f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
			}
			Number::Float(n) if n == 0.0 => f.write_str("0"),
			Number::Float(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => {
				let formatted = format!("{n:e}");
				match formatted.split_once('e') {
					Some((mantissa, exponent)) if !exponent.starts_with('-') => {
						write!(f, "{mantissa}e+{exponent}")
					}
					_ => f.write_str(&formatted),
				}
			}
			Number::Float(n) => write!(f, "{n}"),
		}
	}
}

macro_rules! number_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Number {
				fn from(n: $ty) -> Self {
					Number::Int(i64::from(n))
				}
			}
		)*
	};
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
	fn from(n: u64) -> Self {
		i64::try_from(n).map_or(Number::Float(n as f64), Number::Int)
	}
}

impl From<usize> for Number {
	fn from(n: usize) -> Self {
		i64::try_from(n).map_or(Number::Float(n as f64), Number::Int)
	}
}

impl From<f32> for Number {
	fn from(n: f32) -> Self {
		Number::Float(f64::from(n))
	}
}

impl From<f64> for Number {
	fn from(n: f64) -> Self {
		Number::Float(n)
	}
}

/// The closed set of values a property can hold.
///
/// Serialization rules per variant:
///
/// - `Str` and `Number` become quoted attributes (strings are escaped)
/// - `Bool` is only meaningful for boolean attributes (`checked`, `async`, ...);
///   elsewhere it is stringified
/// - `RawHtml` is never an attribute; it supplies the element's inner content
/// - `Map` is encoded as a `key:value;` declaration list (the `style` case)
/// - `Null` is omitted
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
	/// A string value.
	Str(String),
	/// A numeric value.
	Number(Number),
	/// A boolean value.
	Bool(bool),
	/// Pre-escaped inner HTML for the element.
	RawHtml(String),
	/// A nested mapping.
	Map(Arc<Props>),
	/// An absent value.
	Null,
}

impl PropValue {
	/// Creates a raw inner HTML value.
	pub fn raw_html(html: impl Into<String>) -> Self {
		PropValue::RawHtml(html.into())
	}

	/// Returns `true` for [`PropValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, PropValue::Null)
	}

	/// Returns the string payload of a [`PropValue::Str`].
	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropValue::Str(s) => Some(s),
			_ => None,
		}
	}
}

impl From<&str> for PropValue {
	fn from(s: &str) -> Self {
		PropValue::Str(s.to_string())
	}
}

impl From<String> for PropValue {
	fn from(s: String) -> Self {
		PropValue::Str(s)
	}
}

impl From<&String> for PropValue {
	fn from(s: &String) -> Self {
		PropValue::Str(s.clone())
	}
}

impl From<bool> for PropValue {
	fn from(b: bool) -> Self {
		PropValue::Bool(b)
	}
}

impl From<Number> for PropValue {
	fn from(n: Number) -> Self {
		PropValue::Number(n)
	}
}

macro_rules! prop_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PropValue {
				fn from(n: $ty) -> Self {
					PropValue::Number(Number::from(n))
				}
			}
		)*
	};
}

prop_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<Props> for PropValue {
	fn from(props: Props) -> Self {
		PropValue::Map(Arc::new(props))
	}
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(PropValue::Null, Into::into)
	}
}

/// An insertion-ordered property mapping.
///
/// Attributes serialize in insertion order. Inserting an existing key
/// replaces its value without moving it.
///
/// # Example
///
/// ```
/// use vellum_pages::{PropValue, Props};
///
/// let props = Props::new().with("id", "main").with("tabindex", 0);
/// assert_eq!(props.get("id"), Some(&PropValue::from("main")));
/// assert_eq!(props.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(IndexMap<String, PropValue>);

impl Props {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a property using builder pattern.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts a property, returning the previous value for the key.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<PropValue>,
	) -> Option<PropValue> {
		self.0.insert(key.into(), value.into())
	}

	/// Removes a property, keeping the order of the remaining ones.
	pub fn remove(&mut self, key: &str) -> Option<PropValue> {
		self.0.shift_remove(key)
	}

	/// Returns the value for `key`.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.0.get(key)
	}

	/// Returns `true` if `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Returns the number of properties.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if there are no properties.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over properties in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Iterates over property names in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Returns the raw inner HTML carried by this mapping, if any.
	///
	/// When several keys hold [`PropValue::RawHtml`], the last one wins.
	pub fn inner_html(&self) -> Option<&str> {
		self.0.values().rev().find_map(|value| match value {
			PropValue::RawHtml(html) => Some(html.as_str()),
			_ => None,
		})
	}
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

impl<K: Into<String>, V: Into<PropValue>> Extend<(K, V)> for Props {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}
