//! Linear mapping from pixel-column space into reference coordinate space.

use crate::types::{GenerateError, GenerateResult, Interval, RefPos, Region};

/// Scales pixel columns into reference coordinates by
/// `floor(column * reference_length / image_width)`.
///
/// Both interval endpoints are truncated identically, so the mapped region
/// length can drift slightly from the proportional ideal on long rows. The
/// drift is intentional and load-bearing for the visual reconstruction; do
/// not compensate for it.
#[derive(Debug, Clone, Copy)]
pub struct ColumnScaler {
    scale: f64,
}

impl ColumnScaler {
    pub fn new(reference_length: RefPos, image_width: usize) -> GenerateResult<Self> {
        if reference_length == 0 {
            return Err(GenerateError::EmptyReference);
        }
        if image_width == 0 {
            return Err(GenerateError::EmptyImage);
        }
        Ok(Self {
            scale: reference_length as f64 / image_width as f64,
        })
    }

    pub fn map_column(&self, column: usize) -> RefPos {
        (column as f64 * self.scale) as RefPos
    }

    /// Map both endpoints of a pixel interval. The result can be empty when
    /// the image is wider than the reference and the interval is narrow.
    pub fn map_interval(&self, interval: Interval) -> Region {
        Region {
            start: self.map_column(interval.start),
            end: self.map_column(interval.end),
        }
    }
}
