//! One-call cloud segmentation.

use crate::cluster::{ClusterOutcome, PixelKmeans};
use crate::colorize::colorize;
use crate::config::KmeansConfig;
use crate::error::Result;
use crate::image::Image;

/// Clustering result plus the rendered mask statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Clustering run that produced the mask.
    pub outcome: ClusterOutcome,
    /// Foreground share of interior pixels, in percent.
    pub foreground_percent: f64,
}

/// Cluster `image`, then overwrite it in place with the binary mask.
///
/// The image is left untouched if clustering fails.
pub fn segment(image: &mut Image, config: &KmeansConfig) -> Result<Segmentation> {
    let outcome = PixelKmeans::from_config(config.clone()).fit(image)?;
    let foreground_percent = colorize(
        image,
        &outcome.assignments,
        config.k,
        config.cloud_threshold(),
    )?;
    Ok(Segmentation {
        outcome,
        foreground_percent,
    })
}
