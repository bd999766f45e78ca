//! Binarization regression test
//!
//! Run with:
//! ```
//! cargo test -p blobseg-region --test binarize_reg
//! ```

use blobseg_core::{FImage, LabelMask};
use blobseg_region::{binarize, binarize_plane};
use blobseg_test::{Patch, RegParams, gray_image_with_patches};

#[test]
fn binarize_reg() {
    let mut rp = RegParams::new("binarize");

    // -----------------------------------------------------------
    // Fixed threshold on a bright square over a dark background
    // -----------------------------------------------------------
    let img = gray_image_with_patches(20, 20, 0.2, &[Patch::new(5, 5, 10, 10, 0.95)])
        .expect("failed to build test image");

    let mask = binarize_plane(&img, 0, 0.8).expect("binarization failed");
    let foreground = mask.count_value(LabelMask::UNLABELED);
    eprintln!("Foreground pixels: {}", foreground);

    // 0: the 10x10 square is foreground, nothing else
    rp.compare_values(100.0, foreground as f64, 0.0);
    // 1: the rest is background
    rp.compare_values(300.0, mask.count_value(LabelMask::BACKGROUND) as f64, 0.0);

    // -----------------------------------------------------------
    // Samples equal to the threshold stay background (strict >)
    // -----------------------------------------------------------
    let img = gray_image_with_patches(4, 4, 0.8, &[]).expect("failed to build test image");
    let mask = binarize_plane(&img, 0, 0.8).expect("binarization failed");

    // 2: no pixel is strictly above the threshold
    rp.compare_values(0.0, mask.count_value(LabelMask::UNLABELED) as f64, 0.0);

    // -----------------------------------------------------------
    // Idempotence: a {0, 1}-valued image binarizes to the same
    // foreground set every time
    // -----------------------------------------------------------
    let img = gray_image_with_patches(
        10,
        10,
        0.0,
        &[Patch::new(1, 1, 3, 3, 1.0), Patch::new(6, 6, 2, 2, 1.0)],
    )
    .expect("failed to build test image");

    let first = binarize_plane(&img, 0, 0.5).expect("binarization failed");
    let second = binarize_plane(&img, 0, 0.5).expect("binarization failed");
    rp.compare_bool(first == second, "idempotent binarization");
    // 4: foreground count matches the painted patches
    rp.compare_values(13.0, first.count_value(LabelMask::UNLABELED) as f64, 0.0);

    // -----------------------------------------------------------
    // Channels binarize independently
    // -----------------------------------------------------------
    let mut img = FImage::new(4, 4, 2).expect("failed to build test image");
    img.set_pixel(1, 1, 0, 0.9).unwrap();
    img.set_pixel(2, 2, 1, 0.9).unwrap();

    let masks = binarize(&img, 0.5).expect("binarization failed");
    rp.compare_values(2.0, masks.len() as f64, 0.0);
    rp.compare_bool(
        masks[0].get(1, 1).unwrap() == LabelMask::UNLABELED
            && masks[0].get(2, 2).unwrap() == LabelMask::BACKGROUND,
        "channel 0 foreground only at (1, 1)",
    );
    rp.compare_bool(
        masks[1].get(2, 2).unwrap() == LabelMask::UNLABELED
            && masks[1].get(1, 1).unwrap() == LabelMask::BACKGROUND,
        "channel 1 foreground only at (2, 2)",
    );

    // -----------------------------------------------------------
    // Non-finite thresholds are rejected
    // -----------------------------------------------------------
    rp.compare_bool(binarize(&img, f32::NAN).is_err(), "NaN threshold rejected");
    rp.compare_bool(
        binarize(&img, f32::NEG_INFINITY).is_err(),
        "infinite threshold rejected",
    );

    assert!(rp.cleanup(), "binarize regression test failed");
}
