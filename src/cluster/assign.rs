//! Nearest-centroid assignment.

use crate::error::{try_filled, Result};
use ndarray::{Array2, ArrayView1};

/// Cluster labels and per-cluster counts produced by one assignment pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Cluster id per interior pixel.
    pub labels: Vec<usize>,
    /// Number of pixels assigned to each cluster.
    pub occurrences: Vec<usize>,
}

/// Squared Euclidean distance between a feature vector and a scalar centroid,
/// comparing every element against the same value.
#[inline]
pub fn squared_distance(feature: &ArrayView1<'_, u8>, centroid: u32) -> u64 {
    feature
        .iter()
        .map(|&v| {
            let d = v as i64 - centroid as i64;
            (d * d) as u64
        })
        .sum()
}

/// Index of the closest centroid. Ties go to the lowest index.
#[inline]
pub fn nearest_centroid(feature: &ArrayView1<'_, u8>, centroids: &[u32]) -> usize {
    let mut best_cluster = 0;
    let mut best_dist = u64::MAX;
    for (k, &c) in centroids.iter().enumerate() {
        let dist = squared_distance(feature, c);
        if dist < best_dist {
            best_dist = dist;
            best_cluster = k;
        }
    }
    best_cluster
}

/// Assign every feature row to its nearest centroid.
///
/// Labels and counts are written into freshly allocated buffers.
pub fn assign_clusters(features: &Array2<u8>, centroids: &[u32]) -> Result<Assignment> {
    let mut labels = try_filled(0usize, features.nrows(), "cluster assignment")?;
    let mut occurrences = try_filled(0usize, centroids.len(), "cluster occurrences")?;

    for (label, feature) in labels.iter_mut().zip(features.rows()) {
        let k = nearest_centroid(&feature, centroids);
        *label = k;
        occurrences[k] += 1;
    }

    Ok(Assignment {
        labels,
        occurrences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_squared_distance() {
        let f = arr1(&[1u8, 2, 3, 4, 5]);
        // (1-3)^2 + (2-3)^2 + 0 + (4-3)^2 + (5-3)^2
        assert_eq!(squared_distance(&f.view(), 3), 10);
        assert_eq!(squared_distance(&f.view(), 0), 55);
    }

    #[test]
    fn test_distance_above_u8_range() {
        // Centroids may exceed 255 when k < 5.
        let f = arr1(&[255u8; 5]);
        assert_eq!(squared_distance(&f.view(), 1275), 5 * 1020 * 1020);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let f = arr1(&[10u8; 5]);
        assert_eq!(nearest_centroid(&f.view(), &[0, 20]), 0);
        assert_eq!(nearest_centroid(&f.view(), &[30, 0, 20]), 1);
    }

    #[test]
    fn test_assignment_counts() {
        let features = arr2(&[
            [0u8, 0, 0, 1, 2],
            [250, 251, 252, 253, 255],
            [120, 125, 128, 130, 140],
            [1, 1, 2, 3, 5],
        ]);
        let a = assign_clusters(&features, &[0, 128, 255]).unwrap();
        assert_eq!(a.labels, vec![0, 2, 1, 0]);
        assert_eq!(a.occurrences, vec![2, 1, 1]);
        assert_eq!(a.occurrences.iter().sum::<usize>(), features.nrows());
    }

    #[test]
    fn test_empty_features() {
        let features = Array2::<u8>::zeros((0, 5));
        let a = assign_clusters(&features, &[0, 255]).unwrap();
        assert!(a.labels.is_empty());
        assert_eq!(a.occurrences, vec![0, 0]);
    }
}
