use super::{PenColor, Segment, DEFAULT_LINE_WIDTH};
use glam::Vec2;

/// Saving is refused unless the last sample is at least this far from the origin on both axes.
pub const MIN_SAVE_DISTANCE: f32 = 3.0;

/// The name of an exported drawing, `draw-<epoch millis>.png`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
#[display("draw-{_0}.png")]
pub struct ExportFileName(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
	/// Nothing meaningful was drawn; the user should be told instead of exporting.
	Warn,
	Export { file_name: ExportFileName },
}

/// Pen state for a single drawing surface.
///
/// Only the last sampled position is kept. Segments are handed to the caller as they are produced
/// and never stored.
#[derive(Clone, Debug)]
pub struct DrawingState {
	pen_color: PenColor,
	line_width: f32,
	pressed: bool,
	has_drawn: bool,
	last_position: Vec2,
}

impl Default for DrawingState {
	fn default() -> Self {
		Self::new(PenColor::DEFAULT, DEFAULT_LINE_WIDTH)
	}
}

impl DrawingState {
	pub fn new(pen_color: PenColor, line_width: f32) -> Self {
		Self {
			pen_color,
			line_width,
			pressed: false,
			has_drawn: false,
			last_position: Vec2::ZERO,
		}
	}

	pub fn pen_color(&self) -> PenColor {
		self.pen_color
	}

	/// Only affects segments produced after the change.
	pub fn set_pen_color(&mut self, color: PenColor) {
		self.pen_color = color;
	}

	pub fn is_pressed(&self) -> bool {
		self.pressed
	}

	pub fn has_drawn(&self) -> bool {
		self.has_drawn
	}

	pub fn last_position(&self) -> Vec2 {
		self.last_position
	}

	pub fn press(&mut self, position: Vec2) {
		tracing::trace!(?position, "pen down");
		self.pressed = true;
		self.last_position = position;
	}

	/// Returns the segment to stroke, if the pen is down.
	pub fn move_to(&mut self, position: Vec2) -> Option<Segment> {
		if !self.pressed {
			return None;
		}
		let segment = Segment {
			from: self.last_position,
			to: position,
			color: self.pen_color,
			width: self.line_width,
		};
		self.has_drawn = true;
		self.last_position = position;
		Some(segment)
	}

	/// Handles both releasing the pen and the pointer leaving the surface.
	pub fn release(&mut self) {
		if self.pressed {
			tracing::trace!(position = ?self.last_position, "pen up");
		}
		self.pressed = false;
	}

	pub fn clear(&mut self) {
		self.has_drawn = false;
		self.last_position = Vec2::ZERO;
	}

	pub fn save(&self, epoch_millis: u64) -> SaveOutcome {
		let Vec2 { x, y } = self.last_position;
		if x < MIN_SAVE_DISTANCE || y < MIN_SAVE_DISTANCE {
			SaveOutcome::Warn
		} else {
			SaveOutcome::Export {
				file_name: ExportFileName(epoch_millis),
			}
		}
	}
}
