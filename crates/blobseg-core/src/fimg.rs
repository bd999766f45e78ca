//! FImage - Multi-channel floating-point intensity image
//!
//! `FImage` is a 2D grid of `f32` samples, nominally normalized to [0, 1],
//! with one or more channels. It is the input surface of the segmentation
//! pipeline: the binarizer reads it, and the caller owns it throughout.
//!
//! # Examples
//!
//! ```
//! use blobseg_core::FImage;
//!
//! // Create a 100x100 single-channel image
//! let mut img = FImage::new_gray(100, 100).unwrap();
//!
//! // Set and get sample values
//! img.set_pixel(10, 20, 0, 0.5).unwrap();
//! assert_eq!(img.get_pixel(10, 20, 0).unwrap(), 0.5);
//! ```

use crate::error::{Error, Result};

/// Multi-channel floating-point image
///
/// Samples are `f32` values, one per pixel per channel, nominally in
/// [0, 1]. Values outside that range are not rejected; thresholding
/// simply compares them as-is.
///
/// # Memory Layout
///
/// Channel-planar: plane `c` is a contiguous row-major block of
/// `width * height` samples. The sample at (x, y, c) is at index
/// `c * width * height + y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Number of channels
    channels: u32,
    /// Sample data (channel-planar, row-major within a plane)
    data: Vec<f32>,
}

impl FImage {
    /// Create a new FImage with all samples set to zero
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `channels` - Number of channels (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0, and
    /// `Error::InvalidParameter` if the channel count is 0.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 {
            return Err(Error::InvalidParameter(
                "channel count must be > 0".to_string(),
            ));
        }

        let size = (width as usize) * (height as usize) * (channels as usize);
        let data = vec![0.0f32; size];

        Ok(FImage {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a new single-channel FImage with all samples set to zero
    ///
    /// # Examples
    ///
    /// ```
    /// use blobseg_core::FImage;
    ///
    /// let img = FImage::new_gray(640, 480).unwrap();
    /// assert_eq!(img.channels(), 1);
    /// ```
    pub fn new_gray(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, 1)
    }

    /// Create a new FImage with all samples set to the specified value
    ///
    /// # Errors
    ///
    /// Same validation as [`FImage::new`].
    pub fn new_with_value(width: u32, height: u32, channels: u32, value: f32) -> Result<Self> {
        let mut img = Self::new(width, height, channels)?;
        img.data.fill(value);
        Ok(img)
    }

    /// Create an FImage from raw sample data
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `channels` - Number of channels
    /// * `data` - Sample data, channel-planar, row-major within a plane
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length does
    /// not equal `width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 {
            return Err(Error::InvalidParameter(
                "channel count must be > 0".to_string(),
            ));
        }

        let expected = (width as usize) * (height as usize) * (channels as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x{} = {}",
                data.len(),
                width,
                height,
                channels,
                expected
            )));
        }

        Ok(FImage {
            width,
            height,
            channels,
            data,
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of channels
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get the image dimensions as (width, height, channels)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.channels)
    }

    /// Number of samples in one channel plane
    #[inline]
    fn plane_len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    fn sample_index(&self, x: u32, y: u32, channel: u32) -> usize {
        (channel as usize) * self.plane_len()
            + (y as usize) * (self.width as usize)
            + (x as usize)
    }

    /// Get one channel plane as a row-major slice
    ///
    /// # Errors
    ///
    /// Returns `Error::ChannelOutOfRange` if `channel >= channels`.
    pub fn plane(&self, channel: u32) -> Result<&[f32]> {
        if channel >= self.channels {
            return Err(Error::ChannelOutOfRange {
                channel,
                channels: self.channels,
            });
        }
        let start = (channel as usize) * self.plane_len();
        Ok(&self.data[start..start + self.plane_len()])
    }

    /// Get one channel plane as a mutable row-major slice
    ///
    /// # Errors
    ///
    /// Returns `Error::ChannelOutOfRange` if `channel >= channels`.
    pub fn plane_mut(&mut self, channel: u32) -> Result<&mut [f32]> {
        if channel >= self.channels {
            return Err(Error::ChannelOutOfRange {
                channel,
                channels: self.channels,
            });
        }
        let len = self.plane_len();
        let start = (channel as usize) * len;
        Ok(&mut self.data[start..start + len])
    }

    /// Get the sample value at (x, y) in the given channel
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range
    /// and `Error::ChannelOutOfRange` for a bad channel index.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32, channel: u32) -> Result<f32> {
        if channel >= self.channels {
            return Err(Error::ChannelOutOfRange {
                channel,
                channels: self.channels,
            });
        }
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.plane_len(),
            });
        }
        Ok(self.data[self.sample_index(x, y, channel)])
    }

    /// Set the sample value at (x, y) in the given channel
    ///
    /// # Errors
    ///
    /// Same bounds checks as [`FImage::get_pixel`].
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, channel: u32, value: f32) -> Result<()> {
        if channel >= self.channels {
            return Err(Error::ChannelOutOfRange {
                channel,
                channels: self.channels,
            });
        }
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.plane_len(),
            });
        }
        let idx = self.sample_index(x, y, channel);
        self.data[idx] = value;
        Ok(())
    }

    /// Get the sample value at (x, y, channel) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of range.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32, channel: u32) -> f32 {
        self.data[self.sample_index(x, y, channel)]
    }

    /// Set the sample value at (x, y, channel) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of range.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, channel: u32, value: f32) {
        let idx = self.sample_index(x, y, channel);
        self.data[idx] = value;
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable access to the sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Set all samples to the specified value
    pub fn set_all(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Clear all samples to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Invert all samples in place, mapping `v` to `1.0 - v`
    ///
    /// Intended for images normalized to [0, 1], where it turns dark
    /// foreground on a bright background into the bright-foreground form
    /// the thresholding step expects.
    pub fn invert(&mut self) {
        for v in &mut self.data {
            *v = 1.0 - *v;
        }
    }

    /// Replicate a single-channel image across `channels` planes
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if this image has more than one
    /// channel or if `channels` is 0.
    pub fn broadcast_channels(&self, channels: u32) -> Result<FImage> {
        if self.channels != 1 {
            return Err(Error::InvalidParameter(format!(
                "broadcast requires a single-channel image, got {} channels",
                self.channels
            )));
        }
        let mut out = FImage::new(self.width, self.height, channels)?;
        for channel in 0..channels {
            out.plane_mut(channel)?.copy_from_slice(&self.data);
        }
        Ok(out)
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Find the minimum sample value, or `None` for an empty image
    pub fn min_value(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::min)
    }

    /// Find the maximum sample value, or `None` for an empty image
    pub fn max_value(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::max)
    }

    /// Calculate the mean of all sample values
    pub fn mean(&self) -> Option<f32> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.sum() / self.data.len() as f32)
    }

    /// Calculate the sum of all sample values
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
