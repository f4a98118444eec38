use std::path::Path;
use std::time::Instant;

use image::{GrayImage, Luma, imageops};
use imageproc::contours::{Contour, find_contours};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::info;

use crate::VisionError;

pub const THICKNESS: u32 = 3;

const WHITE: Luma<u8> = Luma([255]);

/// Every border in a binary image, outer and hole alike, with all of its
/// points. Any non-zero pixel counts as foreground.
pub fn extract(edges: &GrayImage) -> Vec<Contour<i32>> {
    // Border following only starts next to a background pixel, so shapes
    // touching the first column would be missed without a zero frame.
    let mut padded = GrayImage::new(edges.width() + 2, edges.height() + 2);
    imageops::replace(&mut padded, edges, 1, 1);

    let mut contours: Vec<Contour<i32>> = find_contours(&padded);
    for contour in &mut contours {
        for p in &mut contour.points {
            p.x -= 1;
            p.y -= 1;
        }
    }
    contours
}

/// Draw contours in white on a black canvas of `width` x `height`.
pub fn draw(
    contours: &[Contour<i32>],
    width: u32,
    height: u32,
    thickness: u32,
) -> Result<GrayImage, VisionError> {
    if thickness == 0 {
        return Err(VisionError::InvalidParameter(
            "contour thickness must be at least 1".to_owned(),
        ));
    }

    let mut canvas = GrayImage::new(width, height);
    let half = (thickness / 2) as i32;
    for contour in contours {
        for p in &contour.points {
            let brush = Rect::at(p.x - half, p.y - half).of_size(thickness, thickness);
            draw_filled_rect_mut(&mut canvas, brush, WHITE);
        }
    }
    Ok(canvas)
}

pub fn run(input: &Path, output: &Path, thickness: u32) -> Result<usize, VisionError> {
    let before = Instant::now();

    let edges = crate::load(input)?.to_luma8();
    let contours = extract(&edges);
    let canvas = draw(&contours, edges.width(), edges.height(), thickness)?;
    crate::save(&canvas, output)?;

    info!(
        "{} contours drawn to {} in {:.2?}",
        contours.len(),
        output.display(),
        before.elapsed()
    );
    Ok(contours.len())
}
