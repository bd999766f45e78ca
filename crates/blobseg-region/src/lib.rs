//! blobseg-region - Binarization and connected-component labeling
//!
//! This crate provides the segmentation pipeline:
//!
//! - **Binarization** - Fixed-threshold conversion of intensity planes
//!   into label masks
//! - **Component labeling** - Flood-fill discovery of 4-connected
//!   foreground components with incremental pixel counts and bounding
//!   boxes, filtered by minimum size
//! - **Mask queries** - Recomputing per-label statistics from a labeled
//!   mask
//! - **Rendering** - Drawing component bounding boxes for visualization
//!
//! # Examples
//!
//! ## Segmenting a grayscale image
//!
//! ```
//! use blobseg_core::FImage;
//! use blobseg_region::{SegmentationOptions, segment_gray};
//!
//! // Bright 10x10 square on a dark 20x20 background
//! let mut img = FImage::new_gray(20, 20).unwrap();
//! for y in 5..15 {
//!     for x in 5..15 {
//!         img.set_pixel(x, y, 0, 0.95).unwrap();
//!     }
//! }
//!
//! let comps = segment_gray(&img, &SegmentationOptions::default()).unwrap();
//! assert_eq!(comps.len(), 1);
//! assert_eq!(comps[0].pixel_count, 100);
//! ```
//!
//! ## Labeling a mask directly
//!
//! ```
//! use blobseg_core::LabelMask;
//! use blobseg_region::{LabelingOptions, label_components};
//!
//! let mut mask = LabelMask::new(10, 10).unwrap();
//! mask.set(4, 4, LabelMask::UNLABELED).unwrap();
//! mask.set(5, 4, LabelMask::UNLABELED).unwrap();
//!
//! let options = LabelingOptions::default()
//!     .with_min_width(0)
//!     .with_min_height(0)
//!     .with_min_pixels(0);
//! let comps = label_components(&mut mask, &options).unwrap();
//! assert_eq!(comps.len(), 1);
//! assert_eq!(comps[0].pixel_count, 2);
//! ```

pub mod binarize;
pub mod conncomp;
pub mod error;
pub mod label;
pub mod render;
pub mod segment;

// Re-export core types
pub use blobseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export binarization functions
pub use binarize::{binarize, binarize_plane};

// Re-export conncomp types and functions
pub use conncomp::{Component, LabelingOptions, label_components};

// Re-export label queries
pub use label::{component_bounds, component_sizes, count_labels};

// Re-export rendering
pub use render::render_component_boxes;

// Re-export pipeline types and functions
pub use segment::{SegmentationOptions, segment, segment_gray};
