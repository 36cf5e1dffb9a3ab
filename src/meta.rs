//! Frame metadata file parsing
//!
//! Capture apps dump each raw frame next to a small text file describing it:
//!
//! ```text
//! width 640
//! height 480
//! pixel_format NV21
//! ```
//!
//! Line position decides the field; labels are free-form. The value is the
//! second single-space-separated token of the line.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Frame geometry and pixel layout read from a metadata file.
///
/// Values stay strings: ffmpeg consumes them as text, and the command
/// should carry the tokens exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMeta {
    pub width: String,
    pub height: String,
    pub pixel_format: String,
}

impl FrameMeta {
    /// The `-s` size argument, `<width>x<height>`.
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Parse a metadata file: line 1 width, line 2 height, line 3 pixel format.
pub fn parse_meta(path: &Path) -> Result<FrameMeta> {
    let text = fs::read_to_string(path).map_err(|source| Error::MetadataAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = text.lines();
    let mut field = |line: usize| -> Result<String> {
        lines
            .next()
            .and_then(|l| l.trim().split(' ').nth(1))
            .map(str::to_owned)
            .ok_or_else(|| Error::MetadataFormat {
                path: path.to_path_buf(),
                line,
            })
    };

    let meta = FrameMeta {
        width: field(1)?,
        height: field(2)?,
        pixel_format: field(3)?,
    };

    tracing::debug!(
        "parsed metadata: {} {} from {}",
        meta.size(),
        meta.pixel_format,
        path.display()
    );

    Ok(meta)
}
