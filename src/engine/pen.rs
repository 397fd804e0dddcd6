use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("invalid pen color `{input}`")]
pub struct PenColorError {
	input: String,
}

/// An opaque pen color, stored as 8-bit sRGB and rendered as `#rrggbb`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PenColor([u8; 3]);

impl PenColor {
	pub const DEFAULT: Self = Self([0x1e, 0x90, 0xff]);

	pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
		Self([r, g, b])
	}

	pub fn rgba(&self) -> [u8; 4] {
		let [r, g, b] = self.0;
		[r, g, b, 0xff]
	}

	pub fn to_hex(&self) -> String {
		self.to_string()
	}
}

impl Default for PenColor {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl fmt::Display for PenColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [r, g, b] = self.0;
		write!(f, "#{r:02x}{g:02x}{b:02x}")
	}
}

impl FromStr for PenColor {
	type Err = PenColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let error = || PenColorError {
			input: s.to_owned(),
		};
		let color = csscolorparser::parse(s.trim()).map_err(|_| error())?;
		// The color input only ever yields opaque colors.
		if color.a < 1.0 {
			return Err(error());
		}
		let [r, g, b, _] = color.to_rgba8();
		Ok(Self([r, g, b]))
	}
}
