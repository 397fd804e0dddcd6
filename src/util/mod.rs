mod result_ext;
pub use result_ext::*;

use glam::Vec2;

#[derive(thiserror::Error, Clone, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

/// Milliseconds since the Unix epoch, according to the browser.
pub fn epoch_millis() -> u64 {
	js_sys::Date::now() as u64
}

/// The element's offset from its offset parent, which is the document for a surface placed in
/// normal flow.
pub fn element_offset(element: &web_sys::HtmlElement) -> Vec2 {
	Vec2::new(element.offset_left() as f32, element.offset_top() as f32)
}

/// Converts a page position into coordinates local to an element at `offset`.
pub fn page_to_local(page: Vec2, offset: Vec2) -> Vec2 {
	page - offset
}

/// Page position of an input event, in CSS pixels.
///
/// Leptos delegates bubbling events to the window, so `current_target` is not the element the
/// handler was bound to. Callers convert with the offset of an element they hold.
pub trait PagePosition {
	fn page_position(&self) -> Option<Vec2>;

	fn position_within(&self, element: &web_sys::HtmlElement) -> Option<Vec2> {
		Some(page_to_local(self.page_position()?, element_offset(element)))
	}
}

impl PagePosition for web_sys::MouseEvent {
	fn page_position(&self) -> Option<Vec2> {
		Some(Vec2::new(self.page_x() as f32, self.page_y() as f32))
	}
}

impl PagePosition for web_sys::TouchEvent {
	/// Uses the first active touch point. `touchend` has none.
	fn page_position(&self) -> Option<Vec2> {
		let touch = self.touches().get(0)?;
		Some(Vec2::new(touch.page_x() as f32, touch.page_y() as f32))
	}
}
