pub mod api;
pub mod batch;
pub mod bitstream;
pub mod common;
pub mod deflate;
pub mod error;
pub mod inflate;
pub mod options;
pub mod width;

pub use api::{bit_unpack_deflate, bit_unpack_inflate, deflate_to_vec, inflate_to_vec};
pub use bitstream::Status;
pub use deflate::Deflater;
pub use error::{ConfigError, DeflateError, Error};
pub use inflate::Inflater;
pub use options::{TransformOptions, UnpackHeader};
pub use width::Width;
