//! Queries over a labeled mask
//!
//! These helpers recompute per-label statistics directly from the mask
//! cells after labeling has run. They are mainly useful for validation
//! and diagnostics; the labeler itself already reports counts and
//! bounding boxes incrementally.

use blobseg_core::{Box, LabelMask};
use std::collections::HashMap;

/// Highest label value present in the mask
///
/// Labels are allocated densely from 1, so this is also the number of
/// labels that reached at least one cell. Labels consumed by empty
/// (border-seeded) fills never appear in the mask and are not counted.
pub fn count_labels(mask: &LabelMask) -> u32 {
    mask.cells()
        .iter()
        .copied()
        .filter(|&c| c != LabelMask::BACKGROUND && c != LabelMask::UNLABELED)
        .max()
        .unwrap_or(0)
}

/// Pixel count for each label present in the mask, sorted by label
pub fn component_sizes(mask: &LabelMask) -> Vec<(u32, u32)> {
    let mut counts: HashMap<u32, u32> = HashMap::new();

    for &cell in mask.cells() {
        if cell != LabelMask::BACKGROUND && cell != LabelMask::UNLABELED {
            *counts.entry(cell).or_insert(0) += 1;
        }
    }

    let mut sizes: Vec<(u32, u32)> = counts.into_iter().collect();
    sizes.sort_by_key(|&(label, _)| label);
    sizes
}

/// Bounding box for each label present in the mask, sorted by label
pub fn component_bounds(mask: &LabelMask) -> Vec<(u32, Box)> {
    let mut bounds: HashMap<u32, (u32, u32, u32, u32)> = HashMap::new();

    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let cell = mask.get_unchecked(x, y);
            if cell == LabelMask::BACKGROUND || cell == LabelMask::UNLABELED {
                continue;
            }
            let entry = bounds.entry(cell).or_insert((x, y, x, y));
            entry.0 = entry.0.min(x);
            entry.1 = entry.1.min(y);
            entry.2 = entry.2.max(x);
            entry.3 = entry.3.max(y);
        }
    }

    let mut boxes: Vec<(u32, Box)> = bounds
        .into_iter()
        .map(|(label, (min_x, min_y, max_x, max_y))| {
            (
                label,
                Box::new_unchecked(
                    min_x as i32,
                    min_y as i32,
                    (max_x - min_x + 1) as i32,
                    (max_y - min_y + 1) as i32,
                ),
            )
        })
        .collect();

    boxes.sort_by_key(|&(label, _)| label);
    boxes
}
