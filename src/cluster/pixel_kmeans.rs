//! Neighborhood k-means over interior pixels.
//!
//! # The Loop
//!
//! 1. Extract one sorted 5-element feature per interior pixel (once)
//! 2. Seed `k` scalar centroids evenly over `[0, 255]`
//! 3. **Assign**: each feature goes to the centroid with the smallest
//!    squared distance, summed over its five elements
//! 4. **Update**: each non-empty cluster's centroid becomes the sum of its
//!    per-dimension lower medians divided by `k`
//! 5. Stop once no centroid moved more than the threshold, or after
//!    `max_iterations` cycles
//!
//! Assignment and update each build fresh buffers; the centroid vector is
//! swapped in only after an update has fully succeeded.
//!
//! The whole run is deterministic: no random seeding, no data-dependent
//! iteration order.

use super::assign::assign_clusters;
use super::convergence::{self, Termination};
use super::features::extract_features;
use super::init::initial_centroids;
use super::traits::Clustering;
use super::update::update_centroids;
use crate::config::KmeansConfig;
use crate::error::{try_filled, Error, Result};
use crate::image::Image;
use log::{debug, trace, warn};

/// Result of one clustering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterOutcome {
    /// Cluster id per interior pixel, interior row-major.
    pub assignments: Vec<usize>,
    /// Centroids after the last update.
    pub centroids: Vec<u32>,
    /// Pixels per cluster in `assignments`.
    pub occurrences: Vec<usize>,
    /// Completed assign/update cycles.
    pub iterations: usize,
    /// Why the loop stopped.
    pub termination: Termination,
    /// Interior width (`width - 2`).
    pub interior_width: usize,
    /// Interior height (`height - 2`).
    pub interior_height: usize,
}

impl ClusterOutcome {
    /// Number of clustered pixels.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True when the image had no interior pixels.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Cluster of the interior pixel at image coordinates `(x, y)`.
    pub fn cluster_at(&self, x: usize, y: usize) -> Option<usize> {
        if x == 0 || y == 0 || x > self.interior_width || y > self.interior_height {
            return None;
        }
        let idx = super::features::interior_index(x, y, self.interior_width);
        self.assignments.get(idx).copied()
    }
}

/// K-means pixel classifier on 4-neighborhood features.
#[derive(Debug, Clone, Default)]
pub struct PixelKmeans {
    config: KmeansConfig,
}

impl PixelKmeans {
    /// Create a classifier with `k` clusters and default settings.
    pub fn new(k: usize) -> Self {
        Self {
            config: KmeansConfig::new(k),
        }
    }

    /// Create a classifier from a full configuration.
    pub fn from_config(config: KmeansConfig) -> Self {
        Self { config }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iterations = max_iter;
        self
    }

    /// Set convergence threshold.
    pub fn with_tol(mut self, tol: u32) -> Self {
        self.config.convergence_threshold = tol;
        self
    }

    /// Set samples per pixel.
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.config.channel_count = channels;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &KmeansConfig {
        &self.config
    }

    /// Run the full clustering loop on `image`.
    pub fn fit(&self, image: &Image) -> Result<ClusterOutcome> {
        self.config.validate()?;
        if image.channels() != self.config.channel_count {
            return Err(Error::InvalidConfiguration {
                name: "channel_count",
                message: "does not match the image channel count",
            });
        }

        let k = self.config.k;
        let (interior_width, interior_height) = image.interior_dims();
        let mut centroids = initial_centroids(k)?;

        if interior_width == 0 || interior_height == 0 {
            debug!(
                "{}x{} image has no interior pixels, skipping clustering",
                image.width(),
                image.height()
            );
            return Ok(ClusterOutcome {
                assignments: Vec::new(),
                centroids,
                occurrences: try_filled(0, k, "cluster occurrences")?,
                iterations: 0,
                termination: Termination::NoInteriorPixels,
                interior_width,
                interior_height,
            });
        }

        let features = extract_features(image)?;
        debug!(
            "clustering {} interior pixels of a {}x{} image into {} clusters",
            features.nrows(),
            image.width(),
            image.height(),
            k
        );

        let mut iteration = 0;
        let (assignment, termination) = loop {
            iteration += 1;
            let assignment = assign_clusters(&features, &centroids)?;
            let next = update_centroids(&features, &assignment, &centroids)?;
            let previous = std::mem::replace(&mut centroids, next);

            trace!(
                "iteration {}: centroids {:?}, max shift {}",
                iteration,
                centroids,
                convergence::max_shift(&previous, &centroids)
            );

            if let Some(t) = convergence::check(
                &previous,
                &centroids,
                self.config.convergence_threshold,
                iteration,
                self.config.max_iterations,
            ) {
                break (assignment, t);
            }
        };

        match termination {
            Termination::IterationLimitReached => warn!(
                "no convergence after {} iterations (threshold {})",
                iteration, self.config.convergence_threshold
            ),
            _ => debug!("converged after {} iterations", iteration),
        }

        Ok(ClusterOutcome {
            assignments: assignment.labels,
            centroids,
            occurrences: assignment.occurrences,
            iterations: iteration,
            termination,
            interior_width,
            interior_height,
        })
    }
}

impl Clustering for PixelKmeans {
    fn fit_predict(&self, image: &Image) -> Result<Vec<usize>> {
        self.fit(image).map(|outcome| outcome.assignments)
    }

    fn n_clusters(&self) -> usize {
        self.config.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tone(width: usize, height: usize) -> Image {
        // Left half dark, right half bright.
        Image::from_fn(width, height, 3, |x, _| if x < width / 2 { 10 } else { 240 }).unwrap()
    }

    #[test]
    fn test_two_tone_separates_halves() {
        let img = two_tone(12, 8);
        let outcome = PixelKmeans::new(5).fit(&img).unwrap();

        assert_eq!(outcome.len(), 10 * 6);
        assert_eq!(outcome.termination, Termination::Converged);
        for y in 1..=6 {
            for x in 1..=4 {
                assert_eq!(outcome.cluster_at(x, y), Some(0));
            }
            for x in 7..=10 {
                assert_eq!(outcome.cluster_at(x, y), Some(4));
            }
        }
        assert_eq!(outcome.centroids[0], 10);
        assert_eq!(outcome.centroids[4], 240);
        assert_eq!(outcome.occurrences.iter().sum::<usize>(), outcome.len());
    }

    #[test]
    fn test_deterministic() {
        let img = Image::from_fn(17, 11, 3, |x, y| ((x * 31 + y * 17) % 256) as u8).unwrap();
        let km = PixelKmeans::new(5);
        let a = km.fit(&img).unwrap();
        let b = km.fit(&img).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_iteration_cap() {
        let img = Image::from_fn(20, 20, 3, |x, y| ((x * 13 + y * 7) % 256) as u8).unwrap();
        let outcome = PixelKmeans::new(5)
            .with_max_iter(1)
            .with_tol(0)
            .fit(&img)
            .unwrap();
        assert_eq!(outcome.iterations, 1);
        assert!(matches!(
            outcome.termination,
            Termination::Converged | Termination::IterationLimitReached
        ));
    }

    #[test]
    fn test_minimal_image() {
        let img = Image::from_fn(3, 3, 3, |_, _| 200).unwrap();
        let outcome = PixelKmeans::new(5).fit(&img).unwrap();
        assert_eq!(outcome.assignments.len(), 1);
        assert_eq!(outcome.cluster_at(1, 1), Some(outcome.assignments[0]));
        assert_eq!(outcome.cluster_at(2, 1), None);
    }

    #[test]
    fn test_no_interior_is_noop() {
        let img = Image::from_fn(2, 50, 3, |_, _| 0).unwrap();
        let outcome = PixelKmeans::new(4).fit(&img).unwrap();
        assert!(outcome.is_empty());
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.termination, Termination::NoInteriorPixels);
        assert_eq!(outcome.occurrences, vec![0; 4]);
        assert_eq!(outcome.centroids, vec![0, 85, 170, 255]);
    }

    #[test]
    fn test_single_cluster() {
        let img = Image::from_fn(6, 6, 3, |x, y| (x * 40 + y) as u8).unwrap();
        let outcome = PixelKmeans::new(1).fit(&img).unwrap();
        assert!(outcome.assignments.iter().all(|&c| c == 0));
        assert_eq!(outcome.occurrences, vec![16]);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let img = two_tone(5, 5);
        assert!(matches!(
            PixelKmeans::new(0).fit(&img),
            Err(Error::InvalidConfiguration { name: "k", .. })
        ));
        assert!(matches!(
            PixelKmeans::new(3).with_channels(4).fit(&img),
            Err(Error::InvalidConfiguration {
                name: "channel_count",
                ..
            })
        ));
    }

    #[test]
    fn test_clustering_trait() {
        let img = two_tone(8, 8);
        let km = PixelKmeans::new(3);
        assert_eq!(km.n_clusters(), 3);
        assert_eq!(km.fit_predict(&img).unwrap(), km.fit(&img).unwrap().assignments);
    }
}
