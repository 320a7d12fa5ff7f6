//! Error types for rendering responses.

use vellum_pages::RenderError;

/// What a plugin returns when it fails.
pub type PluginError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a render call.
///
/// Every failure aborts the whole render; no partial document is returned.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The body or the assembled document could not be serialized.
	#[error(transparent)]
	Render(#[from] RenderError),

	/// A plugin failed. Plugins after it did not run.
	#[error("plugin '{plugin}' failed: {source}")]
	Plugin {
		/// Name of the failing plugin.
		plugin: String,
		/// The plugin's error.
		#[source]
		source: PluginError,
	},

	/// The requested status is not a valid HTTP status code.
	#[error("invalid status code: {0}")]
	InvalidStatus(u16),

	/// A header name or value is not valid HTTP.
	#[error("invalid header '{name}': {reason}")]
	InvalidHeader {
		/// Header name as supplied.
		name: String,
		/// Why it was rejected.
		reason: String,
	},
}
