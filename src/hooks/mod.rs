use leptos::*;
use leptos_use::{use_debounce_fn_with_arg, use_resize_observer};
use std::time::Duration;

pub const DEFAULT_BODY_SIZE_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct BodySize {
	pub height: f64,
	pub width: f64,
}

#[derive(Clone, Debug, bon::Builder)]
pub struct BodySizeOptions {
	/// How long the body must stop resizing before a new size is published.
	#[builder(default = DEFAULT_BODY_SIZE_DEBOUNCE)]
	pub debounce: Duration,
}

impl Default for BodySizeOptions {
	fn default() -> Self {
		Self::builder().build()
	}
}

fn window_size() -> Option<BodySize> {
	let window = web_sys::window()?;
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some(BodySize { height, width })
}

/// See `use_body_size_with_options`.
pub fn use_body_size() -> Signal<BodySize> {
	use_body_size_with_options(BodySizeOptions::default())
}

/// Tracks the content box of `document.body`.
///
/// Starts at the window's inner size. Observed sizes are debounced so that a continuous resize
/// publishes a single update once it settles. Observation stops when the owning scope is cleaned
/// up.
pub fn use_body_size_with_options(options: BodySizeOptions) -> Signal<BodySize> {
	let initial = window_size().unwrap_or_else(|| {
		tracing::warn!("no window, assuming an empty body");
		BodySize::default()
	});
	let (size, set_size) = create_signal(initial);

	let publish = use_debounce_fn_with_arg(
		move |observed: BodySize| {
			tracing::debug!(?observed, "body resized");
			set_size.set(observed);
		},
		options.debounce.as_secs_f64() * 1000.0,
	);

	let body = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.body());
	if body.is_none() {
		tracing::warn!("no document body to observe");
	}

	use_resize_observer(body, move |entries, _| {
		let Some(entry) = entries.last() else {
			return;
		};
		let rect = entry.content_rect();
		publish(BodySize {
			height: rect.height(),
			width: rect.width(),
		});
	});

	size.into()
}
