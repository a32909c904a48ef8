//! Median-based centroid update.
//!
//! For each non-empty cluster, every feature dimension is reduced to the
//! lower median of its members' values. The five medians are summed and
//! divided by the number of clusters (not by the vector length) to give the
//! new scalar centroid. Empty clusters keep their previous centroid.

use super::assign::Assignment;
use crate::error::{try_filled, Result};
use ndarray::Array2;

/// Lower median: the element at `len / 2` of the sorted values.
///
/// Reorders `values` in place. Returns `None` for an empty slice.
pub fn lower_median(values: &mut [u8]) -> Option<u8> {
    if values.is_empty() {
        return None;
    }
    let mid = values.len() / 2;
    let (_, median, _) = values.select_nth_unstable(mid);
    Some(*median)
}

/// Group pixel indices by cluster, preserving pixel order inside a cluster.
///
/// Returns the flat member list and the start offset of each cluster in it.
fn members_by_cluster(assignment: &Assignment) -> Result<(Vec<usize>, Vec<usize>)> {
    let k = assignment.occurrences.len();
    let mut offsets = try_filled(0usize, k + 1, "cluster offsets")?;
    for (i, &count) in assignment.occurrences.iter().enumerate() {
        offsets[i + 1] = offsets[i] + count;
    }

    let mut members = try_filled(0usize, assignment.labels.len(), "cluster members")?;
    let mut cursor = try_filled(0usize, offsets.len(), "cluster cursors")?;
    cursor.copy_from_slice(&offsets);
    for (pixel, &label) in assignment.labels.iter().enumerate() {
        members[cursor[label]] = pixel;
        cursor[label] += 1;
    }
    Ok((members, offsets))
}

/// Compute the next centroids from the current assignment.
///
/// The result is a fresh vector; `centroids` is only read.
pub fn update_centroids(
    features: &Array2<u8>,
    assignment: &Assignment,
    centroids: &[u32],
) -> Result<Vec<u32>> {
    let k = centroids.len();
    let mut next = try_filled(0u32, k, "centroids")?;
    next.copy_from_slice(centroids);

    let (members, offsets) = members_by_cluster(assignment)?;
    let largest = assignment.occurrences.iter().copied().max().unwrap_or(0);
    let mut scratch = try_filled(0u8, largest, "median scratch")?;

    for (cluster, new_centroid) in next.iter_mut().enumerate() {
        let cluster_members = &members[offsets[cluster]..offsets[cluster + 1]];
        if cluster_members.is_empty() {
            continue;
        }
        let values = &mut scratch[..cluster_members.len()];

        let mut sum = 0u32;
        for dim in 0..features.ncols() {
            for (slot, &pixel) in values.iter_mut().zip(cluster_members) {
                *slot = features[[pixel, dim]];
            }
            sum += lower_median(values).map_or(0, u32::from);
        }
        // sum <= 5 * 255, so the quotient always fits back into u32
        *new_centroid = (sum as usize / k) as u32;
    }

    Ok(next)
}
