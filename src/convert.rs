//! Single-frame conversion orchestration

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::ffmpeg::FfmpegCommand;
use crate::meta::parse_meta;
use crate::types::OutputFormat;

/// One raw-frame conversion: resolved arguments, not yet validated.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Raw frame bytes
    pub input: PathBuf,
    /// Companion metadata text file
    pub meta: PathBuf,
    /// Destination image, `.jpg` or `.png`
    pub output: PathBuf,
    /// Force-overwrite an existing output file
    pub overwrite: bool,
    /// ffmpeg binary to invoke
    pub ffmpeg: PathBuf,
}

impl ConvertRequest {
    /// Validate the request, read the metadata, and hand the frame to ffmpeg.
    ///
    /// The output suffix is checked before anything touches the filesystem,
    /// so an unsupported destination fails identically whether or not the
    /// metadata file exists.
    pub fn run(&self) -> Result<()> {
        let format = OutputFormat::from_path(&self.output)
            .ok_or_else(|| Error::UnsupportedOutput(self.output.clone()))?;

        // Surface a missing input here rather than as an ffmpeg failure.
        fs::metadata(&self.input).map_err(|source| Error::InputAccess {
            path: self.input.clone(),
            source,
        })?;

        let meta = parse_meta(&self.meta)?;
        check_dimension("width", &meta.width)?;
        check_dimension("height", &meta.height)?;

        tracing::info!(
            "converting {} ({} {}) to {} {}",
            self.input.display(),
            meta.size(),
            meta.pixel_format,
            format,
            self.output.display()
        );

        FfmpegCommand::new(&self.ffmpeg, &meta, &self.input, &self.output, self.overwrite).run()
    }
}

/// Width and height must be positive integers.
///
/// The original string tokens still flow into the command; this only fails
/// earlier and with a clearer message than ffmpeg would.
fn check_dimension(field: &'static str, value: &str) -> Result<()> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(Error::InvalidDimension {
            field,
            value: value.to_owned(),
        }),
    }
}
