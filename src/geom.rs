/// Width of a responsive surface on a viewport `viewport_width` wide.
///
/// The preferred `width` is used whenever it fits along with `padding`; otherwise the surface
/// shrinks to whatever the padding leaves.
pub fn surface_width(viewport_width: u32, width: u32, padding: u32) -> u32 {
	if viewport_width < width + padding {
		viewport_width.saturating_sub(padding)
	} else {
		width
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn uses_preferred_width_when_it_fits() {
		assert_eq!(surface_width(640, 600, 40), 600);
		assert_eq!(surface_width(1920, 600, 40), 600);
	}

	#[test]
	fn shrinks_below_preferred_width() {
		assert_eq!(surface_width(639, 600, 40), 599);
		assert_eq!(surface_width(375, 600, 40), 335);
	}

	#[test]
	fn never_underflows() {
		assert_eq!(surface_width(20, 600, 40), 0);
		assert_eq!(surface_width(0, 600, 40), 0);
	}
}
