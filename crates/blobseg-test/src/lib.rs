//! blobseg-test - Regression test support for blobseg
//!
//! This crate provides a small regression-test harness and synthetic
//! image fixtures used by the `tests/*_reg.rs` integration tests:
//!
//! - [`RegParams`] - Accumulates value comparisons and reports every
//!   failure at the end of a test
//! - Fixture builders for grayscale intensity images with rectangular
//!   foreground regions
//!
//! # Usage
//!
//! ```
//! use blobseg_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 4.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use blobseg_core::FImage;

/// A rectangular foreground region in a synthetic test image
///
/// Coordinates are the top-left corner; `w` and `h` are the extent in
/// pixels; `value` is the intensity painted over the region.
#[derive(Debug, Clone, Copy)]
pub struct Patch {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub value: f32,
}

impl Patch {
    /// Create a patch
    pub fn new(x: u32, y: u32, w: u32, h: u32, value: f32) -> Self {
        Self { x, y, w, h, value }
    }
}

/// Build a single-channel intensity image with rectangular patches
///
/// The image starts filled with `background` and each patch is painted
/// over it in order.
///
/// # Errors
///
/// Returns an error if the dimensions are invalid or a patch extends
/// outside the image.
pub fn gray_image_with_patches(
    width: u32,
    height: u32,
    background: f32,
    patches: &[Patch],
) -> TestResult<FImage> {
    let mut img = FImage::new_with_value(width, height, 1, background)?;

    for patch in patches {
        if patch.w == 0 || patch.h == 0 {
            return Err(TestError::InvalidFixture(format!(
                "empty patch at ({}, {})",
                patch.x, patch.y
            )));
        }
        if patch.x + patch.w > width || patch.y + patch.h > height {
            return Err(TestError::InvalidFixture(format!(
                "patch at ({}, {}) size {}x{} exceeds {}x{} image",
                patch.x, patch.y, patch.w, patch.h, width, height
            )));
        }
        for y in patch.y..patch.y + patch.h {
            for x in patch.x..patch.x + patch.w {
                img.set_pixel(x, y, 0, patch.value)?;
            }
        }
    }

    Ok(img)
}
