use super::PenColor;
use glam::Vec2;

pub const DEFAULT_LINE_WIDTH: f32 = 4.0;

/// A single straight line between two consecutive samples, drawn with round caps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
	pub from: Vec2,
	pub to: Vec2,
	pub color: PenColor,
	pub width: f32,
}

/// A raster area that segments can be stroked onto.
pub trait Surface {
	fn width(&self) -> u32;
	fn height(&self) -> u32;

	fn stroke_segment(&mut self, segment: &Segment);

	/// Erases the entire surface.
	fn clear(&mut self);
}
