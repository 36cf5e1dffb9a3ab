//! Error types for yuv2img

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for yuv2img operations
pub type Result<T> = std::result::Result<T, Error>;

/// yuv2img error type
#[derive(Error, Debug)]
pub enum Error {
    // Metadata errors
    #[error("cannot read metadata file {}: {}", .path.display(), .source)]
    MetadataAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed metadata file {}: line {} is missing its value", .path.display(), .line)]
    MetadataFormat { path: PathBuf, line: usize },

    #[error("invalid {field} {value:?}: must be a positive integer")]
    InvalidDimension { field: &'static str, value: String },

    // Request errors
    #[error("output must end in .jpg or .png: {}", .0.display())]
    UnsupportedOutput(PathBuf),

    #[error("cannot read input file {}: {}", .path.display(), .source)]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Converter errors
    #[error("failed to run {}: {}", .binary.display(), .source)]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ffmpeg exited with {status}")]
    Ffmpeg { status: ExitStatus },
}

impl Error {
    /// Process exit code for this error kind.
    ///
    /// Bad usage (wrong output suffix) exits 2 like other argument errors.
    /// An ffmpeg failure propagates the child's own exit code, falling back
    /// to 1 when the child was killed by a signal and has none.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnsupportedOutput(_) => 2,
            Error::Ffmpeg { status } => status.code().unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_exits_2() {
        let err = Error::UnsupportedOutput(PathBuf::from("out.bmp"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn metadata_errors_exit_1() {
        let err = Error::MetadataFormat {
            path: PathBuf::from("meta.txt"),
            line: 3,
        };
        assert_eq!(err.exit_code(), 1);

        let err = Error::InvalidDimension {
            field: "width",
            value: "abc".into(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn ffmpeg_error_propagates_child_code() {
        use std::os::unix::process::ExitStatusExt;

        let err = Error::Ffmpeg {
            status: ExitStatus::from_raw(3 << 8),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn ffmpeg_killed_by_signal_exits_1() {
        use std::os::unix::process::ExitStatusExt;

        // Wait status 9 = terminated by SIGKILL, no exit code.
        let err = Error::Ffmpeg {
            status: ExitStatus::from_raw(9),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
