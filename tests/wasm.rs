#![cfg(target_arch = "wasm32")]

use glam::vec2;
use scribble::engine::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

fn create_canvas(width: u32, height: u32) -> web_sys::HtmlCanvasElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let canvas = document
		.create_element("canvas")
		.unwrap()
		.dyn_into::<web_sys::HtmlCanvasElement>()
		.unwrap();
	canvas.set_width(width);
	canvas.set_height(height);
	canvas
}

fn pixel(surface: &CanvasSurface, x: f64, y: f64) -> Vec<u8> {
	let context = surface
		.canvas()
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::CanvasRenderingContext2d>()
		.unwrap();
	context.get_image_data(x, y, 1.0, 1.0).unwrap().data().0
}

#[wasm_bindgen_test]
fn strokes_and_clears_a_canvas() {
	let mut surface = CanvasSurface::new(create_canvas(64, 32)).unwrap();
	assert_eq!((surface.width(), surface.height()), (64, 32));

	let mut state = DrawingState::default();
	state.press(vec2(8.0, 16.0));
	let segment = state.move_to(vec2(56.0, 16.0)).unwrap();
	surface.stroke_segment(&segment);
	assert_eq!(pixel(&surface, 32.0, 16.0), vec![0x1e, 0x90, 0xff, 0xff]);
	assert_eq!(pixel(&surface, 32.0, 2.0), vec![0, 0, 0, 0]);

	surface.clear();
	assert_eq!(pixel(&surface, 32.0, 16.0), vec![0, 0, 0, 0]);
}

#[wasm_bindgen_test]
fn exports_a_png_data_url() {
	let surface = CanvasSurface::new(create_canvas(16, 16)).unwrap();
	let url = surface.to_data_url().unwrap();
	assert!(url.starts_with("data:image/png;base64,"));
}

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Appends a fresh container to the body and mounts `f` into it.
fn mount<F, N>(f: F) -> web_sys::HtmlElement
where
	F: FnOnce() -> N + 'static,
	N: leptos::IntoView,
{
	let document = document();
	let container = document
		.create_element("div")
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap();
	document.body().unwrap().append_child(&container).unwrap();
	leptos::mount_to(container.clone(), f);
	container
}

fn find(container: &web_sys::HtmlElement, selector: &str) -> web_sys::HtmlElement {
	container
		.query_selector(selector)
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap()
}

/// Dispatches a bubbling mouse event at `(x, y)` relative to the element's top left corner.
fn dispatch_mouse(element: &web_sys::Element, kind: &str, x: f64, y: f64) {
	let rect = element.get_bounding_client_rect();
	let init = web_sys::MouseEventInit::new();
	init.set_bubbles(true);
	init.set_client_x((rect.left() + x).round() as i32);
	init.set_client_y((rect.top() + y).round() as i32);
	let event = web_sys::MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
	element.dispatch_event(&event).unwrap();
}

fn canvas_pixel(canvas: &web_sys::HtmlElement, x: f64, y: f64) -> Vec<u8> {
	let canvas = canvas.clone().dyn_into::<web_sys::HtmlCanvasElement>().unwrap();
	pixel(&CanvasSurface::new(canvas).unwrap(), x, y)
}

async fn sleep(millis: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
			.unwrap();
	});
	wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

/// Lays the page out like `index.html`, with a permanent scrollbar so that growing the page
/// vertically does not change the body's width.
fn strip_body_padding() {
	let document = document();
	let style = document.body().unwrap().style();
	style.set_property("margin", "0").unwrap();
	style.set_property("padding", "0").unwrap();
	document
		.document_element()
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap()
		.style()
		.set_property("overflow-y", "scroll")
		.unwrap();
}

const STROKE: [u8; 4] = [0x1e, 0x90, 0xff, 0xff];
const BLANK: [u8; 4] = [0, 0, 0, 0];

#[wasm_bindgen_test(async)]
async fn mouse_drags_draw_and_enable_saving() {
	use scribble::components::DrawCanvas;

	let container = mount(|| leptos::view! { <DrawCanvas/> });
	let canvas = find(&container, "canvas");
	let save = find(&container, "button:first-of-type");
	let clear = find(&container, "button:last-of-type");
	assert!(save.has_attribute("disabled"));

	dispatch_mouse(&canvas, "mousedown", 10.0, 20.0);
	dispatch_mouse(&canvas, "mousemove", 50.0, 20.0);
	dispatch_mouse(&canvas, "mouseup", 50.0, 20.0);
	sleep(0).await;
	assert_eq!(canvas_pixel(&canvas, 30.0, 20.0), STROKE);
	assert_eq!(canvas_pixel(&canvas, 30.0, 60.0), BLANK);
	assert!(!save.has_attribute("disabled"));

	// Moving with the button up leaves the surface alone.
	dispatch_mouse(&canvas, "mousemove", 50.0, 80.0);
	assert_eq!(canvas_pixel(&canvas, 50.0, 80.0), BLANK);

	clear.click();
	sleep(0).await;
	assert_eq!(canvas_pixel(&canvas, 30.0, 20.0), BLANK);
	assert!(save.has_attribute("disabled"));
}

#[wasm_bindgen_test]
fn body_size_starts_at_the_window_size() {
	use leptos::SignalGetUntracked;
	use scribble::hooks::{use_body_size, BodySize};
	use std::{cell::Cell, rc::Rc};

	let observed = Rc::new(Cell::new(None));
	mount({
		let observed = observed.clone();
		move || {
			observed.set(Some(use_body_size().get_untracked()));
			leptos::view! { <span/> }
		}
	});

	let window = web_sys::window().unwrap();
	let expected = BodySize {
		height: window.inner_height().unwrap().as_f64().unwrap(),
		width: window.inner_width().unwrap().as_f64().unwrap(),
	};
	assert_eq!(observed.get(), Some(expected));
}

#[wasm_bindgen_test(async)]
async fn body_size_settles_on_the_observed_body() {
	use leptos::SignalGetUntracked;
	use scribble::hooks::{use_body_size, BodySize};
	use std::{cell::Cell, rc::Rc};

	strip_body_padding();
	let size = Rc::new(Cell::new(None));
	mount({
		let size = size.clone();
		move || {
			size.set(Some(use_body_size()));
			leptos::view! { <span/> }
		}
	});
	let size = size.get().unwrap();

	sleep(400).await;
	let rect = document().body().unwrap().get_bounding_client_rect();
	let BodySize { width, .. } = size.get_untracked();
	approx::assert_abs_diff_eq!(width, rect.width(), epsilon = 1.0);
}

#[wasm_bindgen_test(async)]
async fn responsive_surface_fits_the_body_and_keeps_its_drawing() {
	use scribble::components::{DrawCanvas, DrawCanvasOptions};
	use scribble::geom::surface_width;

	strip_body_padding();
	let options = DrawCanvasOptions::builder().responsive(true).build();
	let container = mount(move || leptos::view! { <DrawCanvas options=options/> });
	let canvas = find(&container, "canvas");
	sleep(400).await;

	let body_width = document().body().unwrap().get_bounding_client_rect().width() as u32;
	let expected = surface_width(body_width, 600, 40);
	let actual = canvas.dyn_ref::<web_sys::HtmlCanvasElement>().unwrap().width();
	assert!(actual.abs_diff(expected) <= 1, "{actual} != {expected}");

	dispatch_mouse(&canvas, "mousedown", 10.0, 20.0);
	dispatch_mouse(&canvas, "mousemove", 50.0, 20.0);
	dispatch_mouse(&canvas, "mouseup", 50.0, 20.0);
	assert_eq!(canvas_pixel(&canvas, 30.0, 20.0), STROKE);

	// Growing the body vertically republishes its size, which must not reassign the width.
	container
		.style()
		.set_property("padding-bottom", "200px")
		.unwrap();
	sleep(400).await;
	assert_eq!(canvas_pixel(&canvas, 30.0, 20.0), STROKE);
}
