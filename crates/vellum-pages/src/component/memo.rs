//! Single-entry memoization for function components.

use super::node::{Component, ComponentProps, Node};
use super::props::PropValue;
use parking_lot::Mutex;
use std::sync::Arc;

/// Wraps a component so it re-renders only when its props change.
///
/// Props are compared with [`shallow_equal`]. Only the most recent
/// `(props, output)` pair is kept.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use vellum_pages::{Component, ComponentProps, Node, Props, memo};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let component = memo(Component::new(move |_: &ComponentProps| {
/// 	counter.fetch_add(1, Ordering::SeqCst);
/// 	Node::text("expensive")
/// }));
///
/// let props = ComponentProps::new(Props::new().with("id", 1));
/// component.call(&props);
/// component.call(&props.clone());
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub fn memo(component: Component) -> Component {
	memo_with(component, shallow_equal)
}

/// Like [`memo`] with a custom props comparison.
pub fn memo_with<F>(component: Component, props_are_equal: F) -> Component
where
	F: Fn(&ComponentProps, &ComponentProps) -> bool + Send + Sync + 'static,
{
	let name = component.name().to_string();
	let memo_name = format!("memo({name})");
	let cache: Arc<Mutex<Option<(ComponentProps, Node)>>> = Arc::new(Mutex::new(None));

	Component::new(move |props: &ComponentProps| {
		if let Some((previous, output)) = cache.lock().as_mut()
			&& props_are_equal(previous, props)
		{
			// The next call is compared with these props, not the ones that
			// produced the cached output.
			*previous = props.clone();
			tracing::trace!(component = %name, "memo hit");
			return output.clone();
		}

		// The lock is released while rendering so a component may render
		// itself recursively.
		let output = component.call(props);
		*cache.lock() = Some((props.clone(), output.clone()));
		output
	})
	.named(memo_name)
}

/// Shallow equality of component props.
///
/// True when both sides have the same key set, every value is equal, and
/// the children are the same node. Nested mappings and composite nodes are
/// compared by identity, never recursively.
pub fn shallow_equal(a: &ComponentProps, b: &ComponentProps) -> bool {
	if std::ptr::eq(a, b) {
		return true;
	}
	if a.children != b.children || a.props.len() != b.props.len() {
		return false;
	}

	a.props.iter().all(|(key, value)| {
		b.props
			.get(key)
			.is_some_and(|other| shallow_value_eq(value, other))
	})
}

fn shallow_value_eq(a: &PropValue, b: &PropValue) -> bool {
	match (a, b) {
		(PropValue::Map(a), PropValue::Map(b)) => Arc::ptr_eq(a, b),
		_ => a == b,
	}
}
