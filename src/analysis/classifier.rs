//! Pixel classification against the configured colour table
//!
//! Channel values are snapped to the 0/255 poles within the configured
//! tolerance; anything else is resolved to the nearer pole with an optional
//! diagnostic. Unknown solid colours are deliberately lenient: they resolve
//! to the designated background (air) entry rather than erroring.

use crate::io::configuration::{CHANNEL_MAX, ColourProperties, ImageConfig};
use crate::io::error::Result;

/// Maps pixels to the colour-table entry that governs their cell
#[derive(Debug)]
pub struct PixelClassifier<'a> {
    colour_tolerance: u8,
    alpha_tolerance: u8,
    table: &'a ImageConfig,
    air: &'a ColourProperties,
    verbose: bool,
}

impl<'a> PixelClassifier<'a> {
    /// Create a classifier over the configured colour table
    ///
    /// # Errors
    ///
    /// Returns an error unless the colour table designates exactly one
    /// air colour.
    pub fn new(image: &'a ImageConfig, verbose: bool) -> Result<Self> {
        let (_, air) = image.air_entry()?;
        Ok(Self {
            colour_tolerance: image.colour_tolerance,
            alpha_tolerance: image.alpha_tolerance,
            table: image,
            air,
            verbose,
        })
    }

    /// Properties governing the cell produced for this pixel
    ///
    /// Transparent pixels, colours that remain ambiguous after snapping,
    /// and colours absent from the table all resolve to the air entry;
    /// callers skip air-typed results.
    pub fn classify(&self, pixel: [u8; 4], has_alpha: bool) -> &'a ColourProperties {
        match self.colour_key(pixel, has_alpha) {
            Some(key) => self.table.colours.get(&key).unwrap_or(self.air),
            None => self.air,
        }
    }

    /// Canonical "R,G,B" key for a pixel, or `None` for background
    // Diagnostics go to stderr so piped output stays clean
    #[allow(clippy::print_stderr)]
    pub fn colour_key(&self, pixel: [u8; 4], has_alpha: bool) -> Option<String> {
        if has_alpha && pixel[3] <= self.alpha_tolerance {
            if self.verbose {
                eprintln!("| NOTE: Transparent pixel (converting to colour of air cell): {pixel:?}");
            }
            return None;
        }
        let corrected = self.correct_colour(pixel);
        // Unreachable with sane tolerances; guards malformed configurations
        if corrected.iter().any(|&c| c != 0 && c != CHANNEL_MAX) {
            return None;
        }
        Some(format!(
            "{},{},{}",
            corrected[0], corrected[1], corrected[2]
        ))
    }

    /// Snap the RGB channels of a pixel to the 0/255 poles
    #[allow(clippy::print_stderr)]
    pub fn correct_colour(&self, pixel: [u8; 4]) -> [u8; 3] {
        let mut corrected = [0; 3];
        for (index, slot) in corrected.iter_mut().enumerate() {
            let value = pixel.get(index).copied().unwrap_or(0);
            *slot = if value <= self.colour_tolerance {
                0
            } else if value >= CHANNEL_MAX - self.colour_tolerance {
                CHANNEL_MAX
            } else {
                if self.verbose {
                    eprintln!(
                        "| NOTE: Colour outside of tolerance (making loose estimate): \
                         {pixel:?}, channel value {value}"
                    );
                }
                // Round to the nearer pole; the midpoint resolves to 0
                if u16::from(value) * 2 < u16::from(CHANNEL_MAX) {
                    0
                } else {
                    CHANNEL_MAX
                }
            };
        }
        corrected
    }

    /// The designated background entry
    pub const fn air(&self) -> &'a ColourProperties {
        self.air
    }
}
