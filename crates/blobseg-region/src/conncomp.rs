//! Connected component labeling
//!
//! Scans a mask for unlabeled foreground cells and grows each one into a
//! component with a flood fill over 4-connected neighbors, accumulating
//! the pixel count and bounding box incrementally, then filters the
//! result by minimum size.
//!
//! The fill uses an explicit work-list rather than native call recursion,
//! so a single component spanning the whole image cannot exhaust the
//! stack.

use crate::error::{RegionError, RegionResult};
use blobseg_core::{Box, LabelMask};
use std::collections::VecDeque;

/// A connected component discovered by the labeler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Unique label assigned during the fill
    pub label: u32,
    /// Number of pixels absorbed into the component
    pub pixel_count: u32,
    /// Bounding box, inclusive coordinates
    pub bounds: Box,
}

impl Component {
    /// Create a new component descriptor
    pub fn new(label: u32, pixel_count: u32, bounds: Box) -> Self {
        Self {
            label,
            pixel_count,
            bounds,
        }
    }
}

/// Size thresholds for component filtering
///
/// A component is reported only if its pixel count is strictly greater
/// than `min_pixels` and its inclusive bounding-box spans satisfy
/// `right - left >= min_width` and `bottom - top >= min_height`.
/// Negative thresholds are treated as 0.
#[derive(Debug, Clone)]
pub struct LabelingOptions {
    /// Minimum inclusive width span (`right - left`)
    pub min_width: i32,
    /// Minimum inclusive height span (`bottom - top`)
    pub min_height: i32,
    /// Pixel count must exceed this value
    pub min_pixels: i64,
}

impl Default for LabelingOptions {
    fn default() -> Self {
        Self {
            min_width: 5,
            min_height: 5,
            min_pixels: 25,
        }
    }
}

impl LabelingOptions {
    /// Set the minimum width span
    pub fn with_min_width(mut self, min_width: i32) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the minimum height span
    pub fn with_min_height(mut self, min_height: i32) -> Self {
        self.min_height = min_height;
        self
    }

    /// Set the minimum pixel count
    pub fn with_min_pixels(mut self, min_pixels: i64) -> Self {
        self.min_pixels = min_pixels;
        self
    }

    /// Thresholds with negative values clamped to 0
    fn clamped(&self) -> (u32, u32, i64) {
        (
            self.min_width.max(0) as u32,
            self.min_height.max(0) as u32,
            self.min_pixels.max(0),
        )
    }
}

/// Label all connected components in a mask and filter them by size
///
/// Scans cells in row-major order. Each unlabeled foreground cell starts
/// a new component: a unique label (starting at 1) is allocated and a
/// 4-connected flood fill overwrites every reachable unlabeled cell with
/// that label, counting pixels and tightening the bounding box as cells
/// are absorbed. Components failing the size filter are discarded, but
/// their label stays consumed and their cells stay relabeled.
///
/// Cells on the outer border (x = 0, x = width-1, y = 0, y = height-1)
/// are absorbing: the fill never expands into them and they are never
/// counted, so components touching the border are truncated there and a
/// lone border seed produces an empty, discarded component while its
/// cell keeps the unlabeled sentinel.
///
/// # Returns
///
/// Reported components in discovery order (row-major order of each
/// component's seed cell), which is also ascending label order.
///
/// # Errors
///
/// Returns `RegionError::LabelOverflow` if the number of components
/// would exhaust the label space.
pub fn label_components(
    mask: &mut LabelMask,
    options: &LabelingOptions,
) -> RegionResult<Vec<Component>> {
    let width = mask.width();
    let height = mask.height();
    let (min_width, min_height, min_pixels) = options.clamped();

    let mut components = Vec::new();
    let mut next_label = 1u32;
    let mut pending: VecDeque<(u32, u32)> = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            if mask.get_unchecked(x, y) != LabelMask::UNLABELED {
                continue;
            }
            if next_label > LabelMask::MAX_LABEL {
                return Err(RegionError::LabelOverflow {
                    max: LabelMask::MAX_LABEL,
                });
            }
            let label = next_label;
            next_label += 1;

            // Bounding box starts at the seed and only tightens outward
            let mut pixel_count = 0u32;
            let (mut left, mut right) = (x, x);
            let (mut top, mut bottom) = (y, y);

            pending.push_back((x, y));
            while let Some((cx, cy)) = pending.pop_front() {
                // The outer border is absorbing: never part of a component
                if cx == 0 || cx == width - 1 || cy == 0 || cy == height - 1 {
                    continue;
                }
                if mask.get_unchecked(cx, cy) != LabelMask::UNLABELED {
                    continue;
                }

                // Mark before expanding so no cell is absorbed twice
                mask.set_unchecked(cx, cy, label);
                pixel_count += 1;
                left = left.min(cx);
                right = right.max(cx);
                top = top.min(cy);
                bottom = bottom.max(cy);

                pending.push_back((cx - 1, cy));
                pending.push_back((cx + 1, cy));
                pending.push_back((cx, cy - 1));
                pending.push_back((cx, cy + 1));
            }

            if i64::from(pixel_count) > min_pixels
                && right - left >= min_width
                && bottom - top >= min_height
            {
                let bounds = Box::new_unchecked(
                    left as i32,
                    top as i32,
                    (right - left + 1) as i32,
                    (bottom - top + 1) as i32,
                );
                components.push(Component::new(label, pixel_count, bounds));
            }
        }
    }

    Ok(components)
}
