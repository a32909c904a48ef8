//! Neighborhood feature extraction.
//!
//! Every interior pixel contributes the channel-0 samples of itself and its
//! four direct neighbors (up, left, center, right, down). The five values are
//! sorted ascending, so a feature is an order statistic of the local
//! intensities rather than a set of labeled neighbor slots.
//!
//! Features are stored as rows of an `(n, 5)` matrix, where row
//! `(y - 1) * (width - 2) + (x - 1)` belongs to image pixel `(x, y)`.

use crate::config::FEATURE_LEN;
use crate::error::{try_filled, Error, Result};
use crate::image::Image;
use ndarray::Array2;

/// Row of the feature matrix for the interior pixel at image `(x, y)`.
///
/// `x` and `y` are image coordinates, so both start at 1.
#[inline]
pub fn interior_index(x: usize, y: usize, interior_width: usize) -> usize {
    (y - 1) * interior_width + (x - 1)
}

/// Build the sorted feature vector of every interior pixel.
///
/// Images with no interior (width or height at most 2) yield an empty
/// `(0, 5)` matrix.
pub fn extract_features(image: &Image) -> Result<Array2<u8>> {
    let (interior_w, interior_h) = image.interior_dims();
    let n = interior_w * interior_h;
    let flat = try_filled(0u8, n * FEATURE_LEN, "feature vectors")?;
    let mut features =
        Array2::from_shape_vec((n, FEATURE_LEN), flat).map_err(|_| Error::InvalidDimensions {
            width: image.width(),
            height: image.height(),
            channels: image.channels(),
            buffer_len: n * FEATURE_LEN,
        })?;
    if n == 0 {
        return Ok(features);
    }

    let luma = image.luma();
    for y in 1..=interior_h {
        for x in 1..=interior_w {
            let mut v = [
                luma[[y - 1, x]],
                luma[[y, x - 1]],
                luma[[y, x]],
                luma[[y, x + 1]],
                luma[[y + 1, x]],
            ];
            v.sort_unstable();
            features
                .row_mut(interior_index(x, y, interior_w))
                .iter_mut()
                .zip(v)
                .for_each(|(dst, src)| *dst = src);
        }
    }
    Ok(features)
}
