use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, GrayImage, Luma};
use tracing::info;

use crate::VisionError;

/// ITU-R BT.601 luma weights for R, G and B.
const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Convert to 8-bit luma with BT.601 weights, dropping any alpha channel.
pub fn to_gray(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = LUMA_WEIGHTS[0] * r as f32 + LUMA_WEIGHTS[1] * g as f32 + LUMA_WEIGHTS[2] * b as f32;
        Luma([luma.round().min(255.0) as u8])
    })
}

pub fn run(input: &Path, output: &Path) -> Result<GrayImage, VisionError> {
    let before = Instant::now();

    let img = crate::load(input)?;
    let gray = to_gray(&img);
    crate::save(&gray, output)?;

    info!("Grayscale image written to {} in {:.2?}", output.display(), before.elapsed());
    Ok(gray)
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;
    use crate::test_images;

    #[test]
    fn primaries_use_bt601_weights() {
        let mut img = RgbImage::new(4, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(2, 0, Rgb([0, 0, 255]));
        img.put_pixel(3, 0, Rgb([255, 255, 255]));

        let gray = to_gray(&DynamicImage::ImageRgb8(img));
        let values: Vec<u8> = gray.pixels().map(|p| p.0[0]).collect();
        assert_eq!(values, vec![76, 150, 29, 255]);
    }

    #[test]
    fn alpha_is_ignored() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 0]));
        let gray = to_gray(&DynamicImage::ImageRgba8(img));
        assert!(gray.pixels().all(|p| p.0[0] == 150));
    }

    #[test]
    fn run_writes_output_file() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("sample.png");
        let output = tmp.path().join("grayscaled.png");
        test_images::rgb_square(32, 8, 24).save(&input).unwrap();

        let gray = run(&input, &output).unwrap();

        assert!(output.is_file());
        let written = image::open(&output).unwrap().to_luma8();
        assert_eq!(written.dimensions(), (32, 32));
        assert_eq!(written, gray);
    }
}
