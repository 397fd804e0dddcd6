use crate::components::*;
use crate::engine::{self, *};
use crate::geom::surface_width;
use crate::hooks::use_body_size;
use crate::util::*;
use leptos::*;
use thaw::Button;
use wasm_bindgen::JsCast;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_PADDING: u32 = 40;

/// Configures a `DrawCanvas`. The defaults are a fixed 600x300 mouse-only surface.
#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct DrawCanvasOptions {
	/// Accept touch input in addition to the mouse.
	#[builder(default)]
	pub touch: bool,
	/// Shrink to fit the body when it is narrower than `width + padding`. `padding` is the room the
	/// page keeps around the surface inside the body's content box.
	#[builder(default)]
	pub responsive: bool,
	#[builder(default = DEFAULT_WIDTH)]
	pub width: u32,
	#[builder(default = DEFAULT_HEIGHT)]
	pub height: u32,
	#[builder(default = DEFAULT_PADDING)]
	pub padding: u32,
	#[builder(default)]
	pub pen_color: PenColor,
	#[builder(default = DEFAULT_LINE_WIDTH)]
	pub line_width: f32,
}

impl Default for DrawCanvasOptions {
	fn default() -> Self {
		Self::builder().build()
	}
}

/// Hands the canvas contents to the browser as a file download.
fn download(surface: &CanvasSurface, file_name: ExportFileName) -> engine::Result<()> {
	let href = surface.to_data_url()?;
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or(engine::Error::MissingGlobal("document"))?;
	let link = document
		.create_element("a")
		.map_err(JsError::from)?
		.dyn_into::<web_sys::HtmlAnchorElement>()
		.map_err(|element| JsError::from(wasm_bindgen::JsValue::from(element)))?;
	link.set_href(&href);
	link.set_download(&file_name.to_string());
	link.click();
	link.remove();
	Ok(())
}

fn alert(message: &str) -> engine::Result<()> {
	let window = web_sys::window().ok_or(engine::Error::MissingGlobal("window"))?;
	Ok(window.alert_with_message(message).map_err(JsError::from)?)
}

#[component]
pub fn DrawCanvas(#[prop(optional)] options: DrawCanvasOptions) -> impl IntoView {
	let DrawCanvasOptions {
		touch,
		responsive,
		width,
		height,
		padding,
		pen_color,
		line_width,
	} = options;

	let node_ref = create_node_ref::<html::Canvas>();
	let state = store_value(DrawingState::new(pen_color, line_width));
	let (has_drawn, set_has_drawn) = create_signal(false);
	let (color, set_color) = create_signal(pen_color);

	// A memo, since assigning a canvas' width erases it even when the value is unchanged.
	let width: Signal<u32> = if responsive {
		let body = use_body_size();
		create_memo(move |_| surface_width(body.get().width as u32, width, padding)).into()
	} else {
		Signal::derive(move || width)
	};

	let surface = move || -> Option<CanvasSurface> {
		let canvas = node_ref.get_untracked()?;
		CanvasSurface::new((*canvas).clone()).ok_or_log()
	};

	let local_position = move |event: &dyn PagePosition| -> Option<glam::Vec2> {
		let canvas = node_ref.get_untracked()?;
		event.position_within(&canvas)
	};

	let press = move |position: Option<glam::Vec2>| {
		if let Some(position) = position {
			state.update_value(|state| state.press(position));
		}
	};

	let draw = move |position: Option<glam::Vec2>| {
		let Some(position) = position else {
			return;
		};
		let Some(segment) = state.try_update_value(|state| state.move_to(position)).flatten() else {
			return;
		};
		if let Some(mut surface) = surface() {
			surface.stroke_segment(&segment);
		}
		if !has_drawn.get_untracked() {
			set_has_drawn.set(true);
		}
	};

	let release = move || state.update_value(|state| state.release());

	let set_pen_color = move |color: PenColor| {
		state.update_value(|state| state.set_pen_color(color));
		set_color.set(color);
	};

	let clear = move |_: ev::MouseEvent| {
		if let Some(mut surface) = surface() {
			surface.clear();
		}
		state.update_value(|state| state.clear());
		set_has_drawn.set(false);
		tracing::info!("cleared drawing");
	};

	let save = move |_: ev::MouseEvent| {
		let Some(outcome) = state.try_with_value(|state| state.save(epoch_millis())) else {
			return;
		};
		match outcome {
			SaveOutcome::Warn => {
				tracing::warn!("refusing to save an empty drawing");
				alert("Please draw!").ok_or_log_while("alerting");
			}
			SaveOutcome::Export { file_name } => {
				tracing::info!(%file_name, "saving drawing");
				if let Some(surface) = surface() {
					download(&surface, file_name).ok_or_log_while("downloading");
				}
			}
		}
	};

	let touchstart = move |e: ev::TouchEvent| {
		if touch {
			e.prevent_default();
			press(local_position(&e));
		}
	};

	let touchmove = move |e: ev::TouchEvent| {
		if touch {
			e.prevent_default();
			draw(local_position(&e));
		}
	};

	let touchend = move |_: ev::TouchEvent| {
		if touch {
			release();
		}
	};

	view! {
		<div class="DrawCanvas">
			<canvas
				class="DrawCanvas-surface"
				node_ref=node_ref
				width=move || width.get()
				height=height
				on:mousedown=move |e: ev::MouseEvent| press(local_position(&e))
				on:mousemove=move |e: ev::MouseEvent| draw(local_position(&e))
				on:mouseup=move |_| release()
				on:mouseleave=move |_| release()
				on:touchstart=touchstart
				on:touchmove=touchmove
				on:touchend=touchend
			></canvas>
			<div class="DrawCanvas-controls">
				<Button disabled=Signal::derive(move || !has_drawn.get()) on_click=save>
					"Save"
				</Button>
				<ColorPicker color=color on_change=set_pen_color/>
				<Button on_click=clear>
					"Clear"
				</Button>
			</div>
		</div>
	}
}
