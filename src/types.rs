//! Common types used throughout yuv2img

use std::fmt;
use std::path::Path;

/// Compressed output image format
///
/// ffmpeg selects the encoder from the output file's extension, so the
/// suffix match is exact and case-sensitive: `out.JPG` is not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// JPEG (lossy)
    Jpeg,
    /// PNG (lossless)
    Png,
}

impl OutputFormat {
    /// Detect the format from a path suffix.
    ///
    /// Returns `None` unless the path ends in a literal `.jpg` or `.png`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_str()?;
        if name.ends_with(".jpg") {
            Some(OutputFormat::Jpeg)
        } else if name.ends_with(".png") {
            Some(OutputFormat::Png)
        } else {
            None
        }
    }

    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Jpeg => write!(f, "JPEG"),
            OutputFormat::Png => write!(f, "PNG"),
        }
    }
}

/// Raw pixel format token as ffmpeg expects it
///
/// Camera metadata reports layouts like `NV21`; ffmpeg's `-pix_fmt` names
/// are lowercase, so the token is normalized on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFormat(String);

impl PixelFormat {
    pub fn new(token: &str) -> Self {
        Self(token.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out.jpg")),
            Some(OutputFormat::Jpeg)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.png")),
            Some(OutputFormat::Png)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("frames/img_0001.jpg")),
            Some(OutputFormat::Jpeg)
        );
    }

    #[test]
    fn test_format_rejects_other_suffixes() {
        assert_eq!(OutputFormat::from_path(Path::new("out.gif")), None);
        assert_eq!(OutputFormat::from_path(Path::new("out.bmp")), None);
        assert_eq!(OutputFormat::from_path(Path::new("out")), None);
        // Suffix match is case-sensitive.
        assert_eq!(OutputFormat::from_path(Path::new("out.JPG")), None);
        assert_eq!(OutputFormat::from_path(Path::new("out.Png")), None);
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Png.extension(), "png");
    }

    #[test]
    fn test_pixel_format_lowercased() {
        assert_eq!(PixelFormat::new("NV21").as_str(), "nv21");
        assert_eq!(PixelFormat::new("yuv420p").as_str(), "yuv420p");
    }
}
