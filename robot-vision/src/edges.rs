use std::path::Path;
use std::time::Instant;

use image::GrayImage;
use tracing::info;

use crate::VisionError;
use crate::grayscale::to_gray;

pub const LOW_THRESHOLD: f32 = 85.0;
pub const HIGH_THRESHOLD: f32 = 255.0;

/// Canny edge map: 255 on edges, 0 elsewhere.
pub fn canny(gray: &GrayImage, low: f32, high: f32) -> Result<GrayImage, VisionError> {
    if !(low >= 0.0 && low <= high) {
        return Err(VisionError::InvalidParameter(format!(
            "canny thresholds must satisfy 0 <= low <= high, got {} and {}",
            low, high
        )));
    }
    Ok(imageproc::edges::canny(gray, low, high))
}

pub fn run(input: &Path, output: &Path, low: f32, high: f32) -> Result<GrayImage, VisionError> {
    let before = Instant::now();

    let gray = to_gray(&crate::load(input)?);
    let edges = canny(&gray, low, high)?;
    crate::save(&edges, output)?;

    let edge_pixels = edges.pixels().filter(|p| p.0[0] > 0).count();
    info!(
        "Edge map with {} edge pixels written to {} in {:.2?}",
        edge_pixels,
        output.display(),
        before.elapsed()
    );
    Ok(edges)
}
