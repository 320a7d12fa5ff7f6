//! Dark mode support.

use crate::context::RenderingContext;
use crate::error::PluginError;
use crate::plugin::Plugin;
use async_trait::async_trait;
use std::sync::Arc;
use vellum_pages::{ScriptTag, StyleTag};

const DARK_STYLES: &str = ".dark{color-scheme:dark}.dark ::-moz-selection{background:#444}.dark ::selection{background:#444}";

// Applies the stored preference (or the system one) before first paint and
// exposes `window.setColorScheme("dark" | "light" | "auto")`.
const AUTO_SCRIPT: &str = r#"(()=>{let v=localStorage.getItem("color-scheme"),a=window.matchMedia("(prefers-color-scheme: dark)").matches,cl=document.documentElement.classList,setColorScheme=v=>(!v||v==="auto"?a:v==="dark")?cl.add("dark"):cl.remove("dark");setColorScheme(v);window.setColorScheme=v=>{setColorScheme(v);localStorage.setItem("color-scheme",v)};})();"#;

/// Adds a `dark` class to `<html>` and the styles that go with it.
///
/// `Dark` always renders dark. `Auto` adds a script that picks the scheme
/// on the client from `localStorage` or `prefers-color-scheme`.
///
/// # Example
///
/// ```
/// use vellum_http::{ColorScheme, Renderer};
///
/// # tokio_test::block_on(async {
/// let mut renderer = Renderer::new();
/// renderer.register(ColorScheme::Dark.plugin());
///
/// let response = renderer.render("").await.unwrap();
/// assert!(response.body.contains("<html lang=\"en\" class=\"dark\">"));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
	/// Always dark.
	Dark,
	/// Follow the visitor's stored or system preference.
	Auto,
}

impl ColorScheme {
	/// Returns this scheme as a shareable plugin.
	pub fn plugin(self) -> Arc<dyn Plugin> {
		Arc::new(self)
	}
}

#[async_trait]
impl Plugin for ColorScheme {
	fn name(&self) -> &str {
		match self {
			ColorScheme::Dark => "color-scheme(dark)",
			ColorScheme::Auto => "color-scheme(auto)",
		}
	}

	async fn apply(&self, ctx: &mut RenderingContext) -> Result<(), PluginError> {
		if *self == ColorScheme::Dark {
			ctx.document.classes.html.push(Some("dark".to_string()));
		}
		ctx.document.styles.push(Some(StyleTag::inline(DARK_STYLES)));
		if *self == ColorScheme::Auto {
			ctx.document.scripts.push(Some(ScriptTag::inline(AUTO_SCRIPT)));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use vellum_pages::DocumentOptions;

	#[rstest]
	#[case(ColorScheme::Dark, true, false)]
	#[case(ColorScheme::Auto, false, true)]
	#[tokio::test]
	async fn test_color_scheme(
		#[case] scheme: ColorScheme,
		#[case] dark_class: bool,
		#[case] script: bool,
	) {
		let mut ctx = RenderingContext::new(DocumentOptions::new(), "");
		scheme.apply(&mut ctx).await.unwrap();

		assert_eq!(
			ctx.document.classes.html.contains(&Some("dark".to_string())),
			dark_class
		);
		assert_eq!(ctx.document.styles, vec![Some(StyleTag::inline(DARK_STYLES))]);
		assert_eq!(ctx.document.scripts.len(), usize::from(script));
	}
}
