use super::{Error, Result, Segment, Surface};
use crate::util::JsError;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A `Surface` backed by an HTML canvas' 2d context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	context: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
		let context = canvas
			.get_context("2d")
			.map_err(JsError::from)?
			.ok_or(Error::MissingContext)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| Error::MissingContext)?;
		Ok(Self { canvas, context })
	}

	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}

	/// Encodes the current contents as a `data:image/png` URL.
	pub fn to_data_url(&self) -> Result<String> {
		Ok(self.canvas.to_data_url().map_err(JsError::from)?)
	}
}

impl Surface for CanvasSurface {
	fn width(&self) -> u32 {
		self.canvas.width()
	}

	fn height(&self) -> u32 {
		self.canvas.height()
	}

	fn stroke_segment(&mut self, segment: &Segment) {
		let context = &self.context;
		context.set_line_width(segment.width as f64);
		context.set_line_cap("round");
		context.begin_path();
		#[allow(deprecated)]
		context.set_stroke_style(&segment.color.to_hex().into());
		context.move_to(segment.from.x as f64, segment.from.y as f64);
		context.line_to(segment.to.x as f64, segment.to.y as f64);
		context.stroke();
	}

	fn clear(&mut self) {
		self
			.context
			.clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
	}
}
