//! Binary mask rendering.
//!
//! Interior pixels whose cluster id is strictly above the cloud threshold
//! become foreground (every channel 255); all other pixels, including the
//! 1-pixel border that was never clustered, become background (0).

use crate::cluster::features::interior_index;
use crate::error::{Error, Result};
use crate::image::Image;
use log::debug;

/// Foreground sample value.
pub const FOREGROUND: u8 = 255;
/// Background sample value.
pub const BACKGROUND: u8 = 0;

/// Paint `image` from per-interior-pixel cluster ids.
///
/// `threshold` is the cluster-index cutoff (see
/// [`KmeansConfig::cloud_threshold`](crate::KmeansConfig::cloud_threshold)).
/// Returns the foreground share of interior pixels, in percent. An image
/// without interior pixels is zeroed and reports 0.
///
/// Inputs are checked before any sample is written.
pub fn colorize(
    image: &mut Image,
    assignments: &[usize],
    k: usize,
    threshold: usize,
) -> Result<f64> {
    let (interior_w, interior_h) = image.interior_dims();
    let n = interior_w * interior_h;
    if assignments.len() != n {
        return Err(Error::InvalidDimensions {
            width: interior_w,
            height: interior_h,
            channels: 1,
            buffer_len: assignments.len(),
        });
    }
    if let Some(&cluster) = assignments.iter().find(|&&c| c >= k) {
        return Err(Error::ClusterOutOfRange { cluster, k });
    }

    image.fill(BACKGROUND);
    if n == 0 {
        return Ok(0.0);
    }

    let mut foreground = 0usize;
    for y in 1..=interior_h {
        for x in 1..=interior_w {
            if assignments[interior_index(x, y, interior_w)] > threshold {
                foreground += 1;
                image.fill_pixel(x, y, FOREGROUND);
            }
        }
    }

    let percent = foreground as f64 / n as f64 * 100.0;
    debug!(
        "colorized {}x{} image: {} of {} interior pixels above cluster {} ({:.2}%)",
        image.width(),
        image.height(),
        foreground,
        n,
        threshold,
        percent
    );
    Ok(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_exact_channel_values() {
        // 7x3 image: interior is a 5x1 strip holding clusters 0..=4.
        let mut img = Image::from_fn(7, 3, 3, |_, _| 99).unwrap();
        let percent = colorize(&mut img, &[0, 1, 2, 3, 4], 5, 3).unwrap();

        for x in 1..=4 {
            for c in 0..3 {
                assert_eq!(img.get(x, 1, c), Some(BACKGROUND), "x = {x}");
            }
        }
        for c in 0..3 {
            assert_eq!(img.get(5, 1, c), Some(FOREGROUND));
        }
        assert!((percent - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_border_is_background() {
        let mut img = Image::from_fn(4, 4, 2, |_, _| 77).unwrap();
        colorize(&mut img, &[4, 4, 4, 4], 5, 3).unwrap();
        for i in 0..4 {
            assert_eq!(img.get(i, 0, 0), Some(BACKGROUND));
            assert_eq!(img.get(i, 3, 1), Some(BACKGROUND));
            assert_eq!(img.get(0, i, 0), Some(BACKGROUND));
            assert_eq!(img.get(3, i, 1), Some(BACKGROUND));
        }
        assert_eq!(img.get(1, 1, 1), Some(FOREGROUND));
    }

    #[test]
    fn test_percent_counts_interior_only() {
        // 6x4 image: 24 pixels, 8 interior, 2 foreground -> 25%.
        let mut img = Image::from_fn(6, 4, 1, |_, _| 0).unwrap();
        let assignments = [0, 4, 0, 0, 0, 0, 4, 0];
        let percent = colorize(&mut img, &assignments, 5, 3).unwrap();
        assert!((percent - 25.0).abs() < 1e-12);
        // Row-major interior: index 1 is (2, 1), index 6 is (3, 2).
        assert_eq!(img.get(2, 1, 0), Some(FOREGROUND));
        assert_eq!(img.get(3, 2, 0), Some(FOREGROUND));
        assert_eq!(img.get(1, 1, 0), Some(BACKGROUND));
    }

    #[test]
    fn test_empty_interior() {
        let mut img = Image::from_fn(2, 2, 3, |_, _| 50).unwrap();
        let percent = colorize(&mut img, &[], 5, 3).unwrap();
        assert_eq!(percent, 0.0);
        assert!(img.into_raw().iter().all(|&v| v == BACKGROUND));
    }

    #[test]
    fn test_rejects_bad_inputs_without_writing() {
        let mut img = Image::from_fn(3, 3, 1, |_, _| 50).unwrap();
        let before = img.clone();

        assert!(matches!(
            colorize(&mut img, &[0, 1], 5, 3),
            Err(Error::InvalidDimensions { .. })
        ));
        assert_eq!(
            colorize(&mut img, &[5], 5, 3),
            Err(Error::ClusterOutOfRange { cluster: 5, k: 5 })
        );
        assert_eq!(img, before);
    }
}
