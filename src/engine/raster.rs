use super::{Error, Result, Segment, Surface};
use glam::{vec2, Vec2};
use itertools::iproduct;
use zune_core::colorspace::ColorSpace;
use zune_image::codecs::ImageFormat;
use zune_image::image::Image;

const CHANNELS: usize = 4;

fn floor_as_i64(x: f32) -> i64 {
	x.floor() as i64
}

/// Distance from `p` to the closed segment `a..b`.
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
	let d = b - a;
	let length_squared = d.length_squared();
	if length_squared == 0.0 {
		return p.distance(a);
	}
	let t = ((p - a).dot(d) / length_squared).clamp(0.0, 1.0);
	p.distance(a + t * d)
}

/// An in-memory RGBA8 surface. Pixels are either fully covered by a stroke or left untouched, no
/// antialiasing is applied.
///
/// The widget renders through `CanvasSurface`. This is a software reference for what a segment
/// covers, so that stroke semantics can be checked without a browser.
#[derive(Clone, Debug)]
pub struct RasterSurface {
	width: u32,
	height: u32,
	data: Vec<u8>,
}

impl RasterSurface {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			data: vec![0; width as usize * height as usize * CHANNELS],
		}
	}

	fn offset(&self, x: u32, y: u32) -> usize {
		(y as usize * self.width as usize + x as usize) * CHANNELS
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let offset = self.offset(x, y);
		let mut pixel = [0; 4];
		pixel.copy_from_slice(&self.data[offset..offset + CHANNELS]);
		Some(pixel)
	}

	pub fn data(&self) -> &[u8] {
		&self.data
	}

	pub fn is_blank(&self) -> bool {
		self.data.iter().all(|&c| c == 0)
	}

	pub fn encode_png(&self) -> Result<Vec<u8>> {
		let image = Image::from_u8(
			&self.data,
			self.width as usize,
			self.height as usize,
			ColorSpace::RGBA,
		);
		image
			.write_to_vec(ImageFormat::PNG)
			.map_err(|err| Error::EncodePng(format!("{err:?}")))
	}

	pub fn to_data_url(&self) -> Result<String> {
		use base64::engine::*;
		let data = general_purpose::STANDARD.encode(self.encode_png()?);
		Ok(format!("data:image/png;base64,{data}"))
	}
}

impl Surface for RasterSurface {
	fn width(&self) -> u32 {
		self.width
	}

	fn height(&self) -> u32 {
		self.height
	}

	#[tracing::instrument(level = "trace", skip(self))]
	fn stroke_segment(&mut self, segment: &Segment) {
		if self.width == 0 || self.height == 0 {
			return;
		}
		let radius = segment.width / 2.0;
		let min = segment.from.min(segment.to) - radius;
		let max = segment.from.max(segment.to) + radius;
		let x0 = floor_as_i64(min.x).max(0) as u32;
		let y0 = floor_as_i64(min.y).max(0) as u32;
		let x1 = floor_as_i64(max.x).min(self.width as i64 - 1);
		let y1 = floor_as_i64(max.y).min(self.height as i64 - 1);
		if x1 < x0 as i64 || y1 < y0 as i64 {
			return;
		}
		let rgba = segment.color.rgba();
		for (y, x) in iproduct!(y0..=y1 as u32, x0..=x1 as u32) {
			let center = vec2(x as f32 + 0.5, y as f32 + 0.5);
			if distance_to_segment(center, segment.from, segment.to) <= radius {
				let offset = self.offset(x, y);
				self.data[offset..offset + CHANNELS].copy_from_slice(&rgba);
			}
		}
	}

	fn clear(&mut self) {
		self.data.fill(0);
	}
}
