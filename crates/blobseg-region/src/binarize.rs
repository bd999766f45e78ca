//! Fixed-threshold binarization
//!
//! Converts a float intensity image into label masks ready for the
//! component labeler: samples strictly above the threshold become the
//! unlabeled-foreground sentinel, everything else becomes background.
//! Each channel is binarized independently.

use crate::error::{RegionError, RegionResult};
use blobseg_core::{FImage, LabelMask};

/// Binarize every channel of an intensity image
///
/// Produces one mask per channel. A sample is foreground iff it is
/// strictly greater than `threshold`; equal samples are background. The
/// input image is not modified.
///
/// # Arguments
///
/// * `img` - Input intensity image, samples nominally in [0, 1]
/// * `threshold` - Threshold value
///
/// # Returns
///
/// A vector of masks, index matching the channel index.
///
/// # Errors
///
/// Returns `RegionError::NonFiniteThreshold` if `threshold` is NaN or
/// infinite.
pub fn binarize(img: &FImage, threshold: f32) -> RegionResult<Vec<LabelMask>> {
    if !threshold.is_finite() {
        return Err(RegionError::NonFiniteThreshold(threshold));
    }

    let mut masks = Vec::with_capacity(img.channels() as usize);
    for channel in 0..img.channels() {
        masks.push(binarize_plane(img, channel, threshold)?);
    }
    Ok(masks)
}

/// Binarize a single channel of an intensity image
///
/// # Errors
///
/// Returns `RegionError::NonFiniteThreshold` for a NaN or infinite
/// threshold, and a core error for an out-of-range channel index.
pub fn binarize_plane(img: &FImage, channel: u32, threshold: f32) -> RegionResult<LabelMask> {
    if !threshold.is_finite() {
        return Err(RegionError::NonFiniteThreshold(threshold));
    }

    let plane = img.plane(channel)?;
    let cells = plane
        .iter()
        .map(|&v| {
            if v > threshold {
                LabelMask::UNLABELED
            } else {
                LabelMask::BACKGROUND
            }
        })
        .collect();

    Ok(LabelMask::from_cells(img.width(), img.height(), cells)?)
}
