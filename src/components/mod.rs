mod draw_canvas;
pub use draw_canvas::*;

mod color_picker;
pub use color_picker::*;
