pub mod contours;
pub mod edges;
pub mod grayscale;
pub mod settings;

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("failed to read image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to write image {}: {source}", path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub fn load(path: &Path) -> Result<DynamicImage, VisionError> {
    let img = image::open(path).map_err(|source| VisionError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

pub fn save(img: &GrayImage, path: &Path) -> Result<(), VisionError> {
    img.save(path).map_err(|source| VisionError::Save {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod test_images {
    use image::{GrayImage, Luma, Rgb, RgbImage};

    /// Black canvas with a filled white square spanning `from..to` on both axes.
    pub fn square(size: u32, from: u32, to: u32) -> GrayImage {
        GrayImage::from_fn(size, size, |x, y| {
            if (from..to).contains(&x) && (from..to).contains(&y) {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }

    pub fn rgb_square(size: u32, from: u32, to: u32) -> RgbImage {
        RgbImage::from_fn(size, size, |x, y| {
            if (from..to).contains(&x) && (from..to).contains(&y) {
                Rgb([250, 240, 230])
            } else {
                Rgb([10, 20, 30])
            }
        })
    }
}
