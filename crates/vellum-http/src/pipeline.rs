//! Sequential plugin execution.

use crate::context::RenderingContext;
use crate::error::{Error, Result};
use crate::plugin::{Plugin, PluginRegistry};
use std::sync::Arc;

/// Runs the registered plugins, then the call-scoped ones, against `ctx`.
///
/// Registered plugins run in registration order. Call-scoped plugins run in
/// the order given, skipping any that are the same instance as a registered
/// plugin. Each plugin is awaited before the next starts; the first failure
/// stops the pipeline.
pub async fn run_pipeline(
	registry: &PluginRegistry,
	call_scoped: &[Arc<dyn Plugin>],
	ctx: &mut RenderingContext,
) -> Result<()> {
	for (index, plugin) in registry.iter().enumerate() {
		apply_plugin(plugin.as_ref(), index, "registered", ctx).await?;
	}

	for (index, plugin) in call_scoped.iter().enumerate() {
		if registry.contains(plugin) {
			tracing::trace!(plugin = plugin.name(), index, "skipping already registered plugin");
			continue;
		}
		apply_plugin(plugin.as_ref(), index, "call", ctx).await?;
	}

	Ok(())
}

async fn apply_plugin(
	plugin: &dyn Plugin,
	index: usize,
	scope: &'static str,
	ctx: &mut RenderingContext,
) -> Result<()> {
	let name = plugin.name();
	tracing::debug!(plugin = name, index, scope, "running plugin");

	plugin.apply(ctx).await.map_err(|source| {
		tracing::warn!(plugin = name, index, scope, error = %source, "plugin failed");
		Error::Plugin {
			plugin: name.to_string(),
			source,
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::plugin::plugin_fn;
	use rstest::{fixture, rstest};
	use std::sync::Mutex;
	use vellum_pages::DocumentOptions;

	type Log = Arc<Mutex<Vec<&'static str>>>;

	fn recording(name: &'static str, log: &Log) -> Arc<dyn Plugin> {
		let log = Arc::clone(log);
		plugin_fn(name, move |_| {
			log.lock().unwrap().push(name);
			Ok(())
		})
	}

	#[fixture]
	fn ctx() -> RenderingContext {
		RenderingContext::new(DocumentOptions::new(), "")
	}

	#[rstest]
	#[tokio::test]
	async fn test_registered_then_call_scoped(mut ctx: RenderingContext) {
		let log = Log::default();
		let registry = PluginRegistry::new()
			.with_plugin(recording("a", &log))
			.with_plugin(recording("b", &log));
		let call_scoped = vec![recording("c", &log)];

		run_pipeline(&registry, &call_scoped, &mut ctx).await.unwrap();

		assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_call_scoped_duplicate_of_registered_is_skipped(mut ctx: RenderingContext) {
		let log = Log::default();
		let shared = recording("shared", &log);
		let registry = PluginRegistry::new().with_plugin(shared.clone());
		let call_scoped = vec![shared, recording("twin", &log)];

		run_pipeline(&registry, &call_scoped, &mut ctx).await.unwrap();

		assert_eq!(*log.lock().unwrap(), vec!["shared", "twin"]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_failure_stops_pipeline(mut ctx: RenderingContext) {
		let log = Log::default();
		let registry = PluginRegistry::new()
			.with_plugin(recording("before", &log))
			.with_plugin(plugin_fn("broken", |_| Err("boom".into())))
			.with_plugin(recording("after", &log));

		let err = run_pipeline(&registry, &[], &mut ctx).await.unwrap_err();

		assert!(matches!(err, Error::Plugin { ref plugin, .. } if plugin == "broken"));
		assert_eq!(err.to_string(), "plugin 'broken' failed: boom");
		assert_eq!(*log.lock().unwrap(), vec!["before"]);
	}
}
