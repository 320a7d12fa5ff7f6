//! Vellum Conf - render settings
//!
//! Defaults applied to every render: the document language, an optional
//! viewport meta tag and the `Content-Type` of the response. Settings come
//! from [`RenderSettings::default`] or a TOML file; missing keys fall back to
//! their defaults.
//!
//! ```toml
//! lang = "fr"
//! viewport = "width=device-width, initial-scale=1"
//! content_type = "text/html; charset=utf-8"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default `Content-Type` of rendered documents.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Error type for loading settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("failed to read settings from {}: {source}", .path.display())]
	Io {
		/// Path that was read.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The settings are not valid TOML or have the wrong shape.
	#[error("TOML error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Per-renderer defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Language used when a render does not set one.
	pub lang: String,
	/// Viewport meta content used when a render does not set one.
	pub viewport: Option<String>,
	/// Value of the `Content-Type` header appended to every response.
	pub content_type: String,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			viewport: None,
			content_type: DEFAULT_CONTENT_TYPE.to_string(),
		}
	}
}

impl RenderSettings {
	/// Creates default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the default language.
	pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Sets the default viewport.
	pub fn with_viewport(mut self, viewport: impl Into<String>) -> Self {
		self.viewport = Some(viewport.into());
		self
	}

	/// Sets the `Content-Type` header value.
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = content_type.into();
		self
	}

	/// Parses settings from a TOML document.
	///
	/// # Example
	///
	/// ```
	/// use vellum_conf::RenderSettings;
	///
	/// let settings = RenderSettings::from_toml_str("lang = \"de\"").unwrap();
	/// assert_eq!(settings.lang, "de");
	/// assert_eq!(settings.content_type, "text/html; charset=utf-8");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(content)?)
	}

	/// Loads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), lang = %settings.lang, "loaded render settings");
		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = RenderSettings::default();
		assert_eq!(settings.lang, "en");
		assert_eq!(settings.viewport, None);
		assert_eq!(settings.content_type, DEFAULT_CONTENT_TYPE);
	}

	#[rstest]
	#[case("", RenderSettings::default())]
	#[case("lang = \"ja\"", RenderSettings::default().with_lang("ja"))]
	#[case(
		"viewport = \"width=device-width\"",
		RenderSettings::default().with_viewport("width=device-width")
	)]
	#[case(
		"content_type = \"text/html\"",
		RenderSettings::default().with_content_type("text/html")
	)]
	fn test_from_toml_str(#[case] content: &str, #[case] expected: RenderSettings) {
		assert_eq!(RenderSettings::from_toml_str(content).unwrap(), expected);
	}

	#[rstest]
	fn test_invalid_toml() {
		let result = RenderSettings::from_toml_str("lang = ");
		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}

	#[rstest]
	fn test_wrong_type() {
		let result = RenderSettings::from_toml_str("lang = 3");
		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}
}
