//! yuv2img — raw YUV frame to JPEG/PNG converter
//!
//! Converts a single raw camera frame (NV21 and friends) into a compressed
//! image by reading the frame's companion metadata file and delegating the
//! pixel work to ffmpeg.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use yuv2img::ConvertRequest;
//!
//! fn main() -> yuv2img::Result<()> {
//!     let request = ConvertRequest {
//!         input: PathBuf::from("img_0001.nv21"),
//!         meta: PathBuf::from("nv21_metadata_0001.txt"),
//!         output: PathBuf::from("out.jpg"),
//!         overwrite: false,
//!         ffmpeg: PathBuf::from("ffmpeg"),
//!     };
//!     request.run()
//! }
//! ```

pub mod convert;
pub mod error;
pub mod ffmpeg;
pub mod meta;
pub mod types;

// Re-exports for convenience
pub use convert::ConvertRequest;
pub use error::{Error, Result};
pub use ffmpeg::FfmpegCommand;
pub use meta::{parse_meta, FrameMeta};
pub use types::{OutputFormat, PixelFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
