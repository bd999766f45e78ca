//! Box drawing on float images
//!
//! Rendering helpers used when visualizing segmentation results.

use crate::box_::Box;
use crate::error::{Error, Result};
use crate::fimg::FImage;

impl FImage {
    /// Draw a 1-pixel rectangle outline, clipped to the image bounds.
    ///
    /// `values` supplies the outline sample value for each channel, so a
    /// 3-channel image takes e.g. `&[1.0, 0.0, 0.0]` for a red outline.
    /// Boxes fully outside the image are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the number of values does not
    /// match the channel count.
    pub fn draw_box_outline(&mut self, b: &Box, values: &[f32]) -> Result<()> {
        if values.len() != self.channels() as usize {
            return Err(Error::InvalidParameter(format!(
                "expected {} outline values, got {}",
                self.channels(),
                values.len()
            )));
        }

        let x0 = b.left().max(0);
        let y0 = b.top().max(0);
        let x1 = b.right().min(self.width() as i32 - 1);
        let y1 = b.bottom().min(self.height() as i32 - 1);
        if x0 > x1 || y0 > y1 {
            return Ok(());
        }

        for (channel, &value) in values.iter().enumerate() {
            let channel = channel as u32;
            for x in x0..=x1 {
                self.set_pixel_unchecked(x as u32, y0 as u32, channel, value);
                self.set_pixel_unchecked(x as u32, y1 as u32, channel, value);
            }
            for y in y0..=y1 {
                self.set_pixel_unchecked(x0 as u32, y as u32, channel, value);
                self.set_pixel_unchecked(x1 as u32, y as u32, channel, value);
            }
        }

        Ok(())
    }
}
