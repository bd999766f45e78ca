//! blobseg-core - Basic data structures for connected-component segmentation
//!
//! This crate provides the data structures shared across the blobseg
//! workspace:
//!
//! - [`FImage`] - Multi-channel floating-point intensity image
//! - [`LabelMask`] - Binary mask / component label plane
//! - [`Box`] - Rectangle region (component bounding box)
//!
//! The segmentation algorithms themselves live in `blobseg-region`.

pub mod box_;
pub mod error;
pub mod fimg;
pub mod graphics;
pub mod mask;

pub use box_::Box;
pub use error::{Error, Result};
pub use fimg::FImage;
pub use mask::LabelMask;
