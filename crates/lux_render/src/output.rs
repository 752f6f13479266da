//! Image file output: plain-text PPM and PNG via the image crate.

use crate::renderer::{color_to_rgba, ImageBuffer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Failure writing a rendered frame to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write image file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Write the frame as a P3 PPM: gamma-corrected `r g b` triples in row-major
/// order, top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, out: &mut W) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    writeln!(out, "255")?;

    for color in &image.pixels {
        let [r, g, b, _] = color_to_rgba(*color);
        writeln!(out, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save the frame as a PPM file.
pub fn save_ppm(image: &ImageBuffer, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save the frame as an 8-bit RGBA PNG.
pub fn save_png(image: &ImageBuffer, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let rgba = image.to_rgba();
    image::save_buffer(
        path,
        &rgba,
        image.width,
        image.height,
        image::ColorType::Rgba8,
    )?;
    Ok(())
}
