use core::str::FromStr;

use crate::{FormatVersion, IconError};

/// A decoded SimpleIcon.
///
/// Only produced by a successful decode, so `pixels` always holds exactly
/// `width * height` entries in row-major order. Icons are immutable; decode
/// again to get a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: String,
    version: FormatVersion,
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Icon {
    pub(crate) fn new(
        name: String,
        version: FormatVersion,
        width: usize,
        height: usize,
        pixels: Vec<bool>,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            name,
            version,
            width,
            height,
            pixels,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> FormatVersion {
        self.version
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order, `true` where set.
    ///
    /// Pixel `(x, y)` lives at index `y * width + x`.
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Returns the pixel at column `x`, row `y`, or `None` outside the icon.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Returns row `y`, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        self.rows().nth(y)
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.pixels.chunks_exact(self.width)
    }

    /// Number of set pixels.
    pub fn set_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|&&set| set).count()
    }
}

impl FromStr for Icon {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::icon_decode(s)
    }
}
