//! Deterministic centroid seeding.

use crate::error::{try_filled, Result};

/// Highest representable intensity.
pub const MAX_INTENSITY: u32 = 255;

/// Seed `k` centroids evenly over `[0, 255]`: `round(255 * i / (k - 1))`.
///
/// With `k == 1` the single centroid sits at 0. Seeding never looks at the
/// image, so two runs on the same input always start from the same place.
pub fn initial_centroids(k: usize) -> Result<Vec<u32>> {
    let mut centroids = try_filled(0u32, k, "centroids")?;
    if k > 1 {
        let step = MAX_INTENSITY as f64 / (k - 1) as f64;
        for (i, c) in centroids.iter_mut().enumerate() {
            *c = (step * i as f64).round() as u32;
        }
    }
    Ok(centroids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_clusters() {
        assert_eq!(initial_centroids(5).unwrap(), vec![0, 64, 128, 191, 255]);
    }

    #[test]
    fn test_two_clusters_span_range() {
        assert_eq!(initial_centroids(2).unwrap(), vec![0, 255]);
    }

    #[test]
    fn test_single_cluster_at_zero() {
        assert_eq!(initial_centroids(1).unwrap(), vec![0]);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        for k in 2..64 {
            let c = initial_centroids(k).unwrap();
            assert_eq!(c.len(), k);
            assert_eq!(c[0], 0);
            assert_eq!(c[k - 1], MAX_INTENSITY);
            assert!(c.windows(2).all(|w| w[0] < w[1]), "k = {k}: {c:?}");
        }
    }
}
