//! Component visualization
//!
//! Renders reported component bounding boxes onto a color copy of the
//! source image, for inspection by the caller.

use crate::conncomp::Component;
use crate::error::{RegionError, RegionResult};
use blobseg_core::FImage;

/// Outline color for component boxes (red)
const BOX_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Draw each component's bounding box on a 3-channel copy of the image
///
/// Takes a single-channel intensity image, replicates it into an RGB
/// image, and outlines every reported component in red. The input image
/// is not modified.
///
/// # Errors
///
/// Returns `RegionError::UnsupportedChannels` if the image has more than
/// one channel.
pub fn render_component_boxes(
    gray: &FImage,
    components: &[Component],
) -> RegionResult<FImage> {
    if gray.channels() != 1 {
        return Err(RegionError::UnsupportedChannels(gray.channels()));
    }

    let mut out = gray.broadcast_channels(3)?;
    for comp in components {
        out.draw_box_outline(&comp.bounds, &BOX_COLOR)?;
    }
    Ok(out)
}
