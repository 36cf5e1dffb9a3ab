//! yuv2img CLI
//!
//! Command-line front end for the converter.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use yuv2img::ConvertRequest;

#[derive(Parser)]
#[command(name = "yuv2img")]
#[command(about = "Convert a raw YUV frame to JPEG or PNG via ffmpeg")]
#[command(version)]
struct Cli {
    /// Raw frame file (e.g. img_0001.nv21)
    input: PathBuf,

    /// Metadata text file: width, height and pixel format, one per line
    meta: PathBuf,

    /// Output image path, ending in .jpg or .png
    output: PathBuf,

    /// Overwrite the output file if it already exists
    #[arg(short = 'y', long = "overwrite")]
    overwrite: bool,

    /// ffmpeg binary to invoke
    #[arg(long, value_name = "PATH", default_value = "ffmpeg")]
    ffmpeg: PathBuf,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yuv2img=info")),
        )
        .init();

    let cli = Cli::parse();

    let request = ConvertRequest {
        input: cli.input,
        meta: cli.meta,
        output: cli.output,
        overwrite: cli.overwrite,
        ffmpeg: cli.ffmpeg,
    };

    if let Err(err) = request.run() {
        error!("{err}");
        process::exit(err.exit_code());
    }

    info!("wrote {}", request.output.display());
}
