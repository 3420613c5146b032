use exifmeta::{DecodeOptions, Directory};
use tracing_subscriber::prelude::*;

/// Prefix of Exif data in JPEG APP1 segments
const EXIF_PREFIX: &[u8] = b"Exif\0\0";

fn main() {
    let path = std::env::args().nth(1).unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(path).unwrap();
    let tiff = data.strip_prefix(EXIF_PREFIX).unwrap_or(&data);

    let directory = Directory::decode(tiff, &DecodeOptions::default()).unwrap();

    println!("{}", directory.debug_dump());
}
