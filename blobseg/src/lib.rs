//! Blobseg - Connected-component segmentation for grayscale images
//!
//! # Overview
//!
//! Blobseg extracts connected foreground regions from a grayscale
//! intensity image:
//!
//! - Fixed-threshold binarization into a label mask
//! - Flood-fill labeling of 4-connected components with pixel counts and
//!   bounding boxes
//! - Size-based filtering of the reported components
//! - Bounding-box rendering for visualization
//!
//! # Example
//!
//! ```
//! use blobseg::{FImage, region};
//!
//! // Bright 10x10 square on a dark 20x20 background
//! let mut img = FImage::new_gray(20, 20).unwrap();
//! for y in 5..15 {
//!     for x in 5..15 {
//!         img.set_pixel(x, y, 0, 0.95).unwrap();
//!     }
//! }
//!
//! let options = region::SegmentationOptions::default();
//! let comps = region::segment_gray(&img, &options).unwrap();
//! assert_eq!(comps.len(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use blobseg_core::*;

// Re-export the algorithm crate as a module
pub use blobseg_region as region;
