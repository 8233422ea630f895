//! Floor-plan image decoding into a channel raster

use crate::io::configuration::CHANNEL_MAX;
use crate::io::error::{ConversionError, Result};
use ndarray::Array3;
use std::path::Path;

/// Decoded image pixels as a `(length, width, 4)` channel array
///
/// All formats are normalized to RGBA storage; `has_alpha` records whether
/// the source actually carried an alpha channel, since transparency handling
/// only applies when it did.
#[derive(Debug, Clone)]
pub struct PixelRaster {
    data: Array3<u8>,
    width: u32,
    length: u32,
    has_alpha: bool,
}

impl PixelRaster {
    /// Decode an image file into a raster
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a valid
    /// image in a supported format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| ConversionError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        let has_alpha = img.color().has_alpha();
        let rgba = img.to_rgba8();

        let (width, length) = (rgba.width(), rgba.height());
        let mut data = Array3::zeros((length as usize, width as usize, 4));
        for (x, y, pixel) in rgba.enumerate_pixels() {
            for (channel, &value) in pixel.0.iter().enumerate() {
                if let Some(slot) = data.get_mut((y as usize, x as usize, channel)) {
                    *slot = value;
                }
            }
        }

        Ok(Self {
            data,
            width,
            length,
            has_alpha,
        })
    }

    /// Build a raster from raw RGBA channel data
    ///
    /// The array layout is `(length, width, 4)`. Used by tests to exercise
    /// the pipeline without decoding files.
    pub fn from_channels(data: Array3<u8>, has_alpha: bool) -> Self {
        let (length, width, _) = data.dim();
        Self {
            data,
            width: width as u32,
            length: length as u32,
            has_alpha,
        }
    }

    /// Width of the image in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the image in pixels (the model's length axis)
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Whether the source image carried an alpha channel
    pub const fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// RGBA channels of the pixel at `(x, y)`
    ///
    /// Out-of-range coordinates read as opaque black; the pipeline only
    /// queries coordinates inside the decoded dimensions.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let mut channels = [0, 0, 0, CHANNEL_MAX];
        for (index, slot) in channels.iter_mut().enumerate() {
            if let Some(&value) = self.data.get((y as usize, x as usize, index)) {
                *slot = value;
            }
        }
        channels
    }
}
