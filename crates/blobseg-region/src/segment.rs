//! High-level segmentation pipeline
//!
//! Runs the full binarize-then-label flow over an intensity image and
//! returns the filtered components per channel.

use crate::binarize::binarize;
use crate::conncomp::{Component, LabelingOptions, label_components};
use crate::error::{RegionError, RegionResult};
use blobseg_core::FImage;

/// Options for the segmentation pipeline
///
/// `threshold` separates foreground from background, `invert` flips the
/// intensities first (for dark objects on a bright background), and
/// `labeling` carries the component size thresholds.
#[derive(Debug, Clone)]
pub struct SegmentationOptions {
    /// Binarization threshold
    pub threshold: f32,
    /// Invert intensities (`v -> 1 - v`) before thresholding
    pub invert: bool,
    /// Component size thresholds
    pub labeling: LabelingOptions,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            invert: false,
            labeling: LabelingOptions::default(),
        }
    }
}

impl SegmentationOptions {
    /// Set the binarization threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set whether intensities are inverted before thresholding
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Set the component size thresholds
    pub fn with_labeling(mut self, labeling: LabelingOptions) -> Self {
        self.labeling = labeling;
        self
    }
}

/// Segment every channel of an intensity image
///
/// Binarizes each channel independently, labels the connected components
/// of each resulting mask, and returns one component list per channel.
/// When `invert` is set the inversion happens on a working copy; the
/// caller's image is never modified.
///
/// # Errors
///
/// Propagates binarization and labeling errors.
pub fn segment(img: &FImage, options: &SegmentationOptions) -> RegionResult<Vec<Vec<Component>>> {
    let masks = if options.invert {
        let mut working = img.clone();
        working.invert();
        binarize(&working, options.threshold)?
    } else {
        binarize(img, options.threshold)?
    };

    masks
        .into_iter()
        .map(|mut mask| label_components(&mut mask, &options.labeling))
        .collect()
}

/// Segment a single-channel image
///
/// # Errors
///
/// Returns `RegionError::UnsupportedChannels` if the image has more than
/// one channel.
pub fn segment_gray(img: &FImage, options: &SegmentationOptions) -> RegionResult<Vec<Component>> {
    if img.channels() != 1 {
        return Err(RegionError::UnsupportedChannels(img.channels()));
    }
    let mut lists = segment(img, options)?;
    Ok(lists.pop().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_with_square(
        width: u32,
        height: u32,
        x0: u32,
        y0: u32,
        size: u32,
        value: f32,
    ) -> FImage {
        let mut img = FImage::new_gray(width, height).unwrap();
        for y in y0..y0 + size {
            for x in x0..x0 + size {
                img.set_pixel(x, y, 0, value).unwrap();
            }
        }
        img
    }

    #[test]
    fn test_segment_gray_bright_square() {
        let img = gray_with_square(20, 20, 5, 5, 10, 0.95);
        let comps = segment_gray(&img, &SegmentationOptions::default()).unwrap();

        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].pixel_count, 100);
        assert_eq!(comps[0].bounds.left(), 5);
        assert_eq!(comps[0].bounds.right(), 14);
    }

    #[test]
    fn test_segment_invert_keeps_input() {
        // Dark square on a mid-gray background only shows up when inverted
        let mut img = FImage::new_with_value(20, 20, 1, 0.5).unwrap();
        for y in 5..15 {
            for x in 5..15 {
                img.set_pixel(x, y, 0, 0.05).unwrap();
            }
        }
        let before = img.clone();

        let plain = segment_gray(&img, &SegmentationOptions::default()).unwrap();
        assert!(plain.is_empty());

        let options = SegmentationOptions::default().with_invert(true);
        let inverted = segment_gray(&img, &options).unwrap();
        assert_eq!(inverted.len(), 1);
        assert_eq!(inverted[0].pixel_count, 100);

        assert_eq!(img, before);
    }

    #[test]
    fn test_segment_multichannel() {
        let mut img = FImage::new(20, 20, 2).unwrap();
        // Channel 0: one 8x8 square; channel 1: empty
        for y in 4..12 {
            for x in 4..12 {
                img.set_pixel(x, y, 0, 0.9).unwrap();
            }
        }

        let options = SegmentationOptions::default()
            .with_threshold(0.5)
            .with_labeling(LabelingOptions::default().with_min_pixels(10));
        let lists = segment(&img, &options).unwrap();

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].len(), 1);
        assert!(lists[1].is_empty());
    }

    #[test]
    fn test_segment_gray_rejects_multichannel() {
        let img = FImage::new(10, 10, 3).unwrap();
        assert!(matches!(
            segment_gray(&img, &SegmentationOptions::default()),
            Err(RegionError::UnsupportedChannels(3))
        ));
    }

    #[test]
    fn test_options_builders() {
        let options = SegmentationOptions::default()
            .with_threshold(0.25)
            .with_invert(true);
        assert_eq!(options.threshold, 0.25);
        assert!(options.invert);
    }
}
