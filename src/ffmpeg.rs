//! ffmpeg command construction and invocation
//!
//! ffmpeg does the actual pixel-format decode and image encode; this module
//! only assembles its argument list and waits for it to finish.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::meta::FrameMeta;
use crate::types::PixelFormat;

/// A fully assembled ffmpeg invocation for a single raw frame.
///
/// Argument order is fixed: ffmpeg applies input options to the `-i` that
/// follows them, so the overwrite flag and the raw-input description must
/// precede the input path.
#[derive(Debug)]
pub struct FfmpegCommand {
    binary: PathBuf,
    args: Vec<OsString>,
}

impl FfmpegCommand {
    pub fn new(
        binary: &Path,
        meta: &FrameMeta,
        input: &Path,
        output: &Path,
        overwrite: bool,
    ) -> Self {
        let pix_fmt = PixelFormat::new(&meta.pixel_format);
        let overwrite_flag = if overwrite { "-y" } else { "-n" };

        let mut args: Vec<OsString> = vec![overwrite_flag.into()];
        // Headerless input: image2 container, rawvideo codec, then the
        // geometry ffmpeg cannot probe on its own.
        for arg in ["-f", "image2", "-vcodec", "rawvideo", "-pix_fmt"] {
            args.push(arg.into());
        }
        args.push(pix_fmt.as_str().into());
        args.push("-s".into());
        args.push(meta.size().into());
        args.push("-i".into());
        args.push(input.into());
        args.push(output.into());

        Self {
            binary: binary.to_path_buf(),
            args,
        }
    }

    /// The argument list handed to the binary.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Run the command, blocking until the child exits.
    ///
    /// stdio is inherited so ffmpeg's own progress and error output reaches
    /// the terminal. A non-zero exit becomes [`Error::Ffmpeg`] carrying the
    /// child's status.
    pub fn run(&self) -> Result<()> {
        tracing::info!("running {}", self);

        let status = Command::new(&self.binary)
            .args(&self.args)
            .status()
            .map_err(|source| Error::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::Ffmpeg { status });
        }

        Ok(())
    }
}

impl fmt::Display for FfmpegCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
