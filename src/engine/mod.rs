mod pen;
pub use pen::*;

mod surface;
pub use surface::*;

mod state;
pub use state::*;

pub mod raster;

mod canvas;
pub use canvas::*;

#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
	#[error("canvas has no 2d context")]
	MissingContext,

	#[error("missing `{0}`")]
	MissingGlobal(&'static str),

	#[error(transparent)]
	Js(#[from] crate::util::JsError),

	#[error("failed to encode png: {0}")]
	EncodePng(String),
}

static_assertions::assert_impl_all!(Error: std::error::Error, Send, Sync);

pub type Result<T> = std::result::Result<T, Error>;
