//! Binary pixel grids built from decoded raster images.
//!
//! Image decoding itself is the `image` crate's job; this module only fixes
//! the ON/OFF convention: dark pixels (ink) are ON, light pixels are OFF.

use image::DynamicImage;

use crate::types::{Pixel, RefPos};

/// Luma values below this threshold classify as ON.
pub const ON_LUMA_THRESHOLD: u8 = 128;

/// A rectangular grid of binary pixels, row index 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rows: Vec<Vec<Pixel>>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Binarize a decoded image by luma thresholding.
    pub fn from_image(image: &DynamicImage) -> Self {
        let luma = image.to_luma8();
        let (width, height) = luma.dimensions();
        let rows = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| Pixel::from(luma.get_pixel(x, y)[0] < ON_LUMA_THRESHOLD))
                    .collect()
            })
            .collect();
        Self {
            rows,
            width: width as usize,
            height: height as usize,
        }
    }

    /// Build a grid from ASCII art, one line per row, `B` = ON. Handy for
    /// tests and diagnostics.
    pub fn from_ascii(art: &str) -> Self {
        let rows: Vec<Vec<Pixel>> = art
            .lines()
            .map(|line| line.chars().map(Pixel::from).collect())
            .collect();
        let width = rows.iter().map(|row: &Vec<Pixel>| row.len()).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Pixel::Off);
                row
            })
            .collect::<Vec<_>>();
        let height = rows.len();
        Self { rows, width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    /// The height this grid would have if rescaled to `new_width` columns
    /// while keeping its aspect ratio.
    pub fn scaled_height(&self, new_width: RefPos) -> u64 {
        if self.width == 0 || new_width == 0 {
            return 0;
        }
        let ratio = self.width as f64 / new_width as f64;
        (self.height as f64 / ratio) as u64
    }
}
