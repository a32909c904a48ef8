//! Clustering traits.

use crate::error::Result;
use crate::image::Image;

/// Trait for pixel clustering algorithms.
pub trait Clustering {
    /// Fit the model to an image and return cluster assignments.
    ///
    /// Returns one cluster label per interior pixel, in interior row-major
    /// order.
    fn fit_predict(&self, image: &Image) -> Result<Vec<usize>>;

    /// Get the number of clusters.
    fn n_clusters(&self) -> usize;
}
