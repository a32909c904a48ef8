//! Run configuration.

use crate::error::{Error, Result};

/// Length of a neighborhood feature vector: center plus its 4 neighbors.
pub const FEATURE_LEN: usize = 5;

/// Parameters of one clustering run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KmeansConfig {
    /// Number of clusters.
    pub k: usize,
    /// Feature vector length. Only [`FEATURE_LEN`] is supported.
    pub vector_size: usize,
    /// Hard cap on assign/update cycles.
    pub max_iterations: usize,
    /// Largest centroid move still counted as stable.
    pub convergence_threshold: u32,
    /// Fraction of `k` above which a cluster is rendered as foreground.
    pub cloud_percent: f64,
    /// Samples per pixel expected in the source buffer.
    pub channel_count: usize,
}

impl Default for KmeansConfig {
    fn default() -> Self {
        Self {
            k: 5,
            vector_size: FEATURE_LEN,
            max_iterations: 100,
            convergence_threshold: 1,
            cloud_percent: 0.6,
            channel_count: 3,
        }
    }
}

impl KmeansConfig {
    /// Default configuration with `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set feature vector length.
    pub fn with_vector_size(mut self, vector_size: usize) -> Self {
        self.vector_size = vector_size;
        self
    }

    /// Set maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set convergence threshold.
    pub fn with_convergence_threshold(mut self, threshold: u32) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Set the foreground fraction.
    pub fn with_cloud_percent(mut self, cloud_percent: f64) -> Self {
        self.cloud_percent = cloud_percent;
        self
    }

    /// Set samples per pixel.
    pub fn with_channel_count(mut self, channel_count: usize) -> Self {
        self.channel_count = channel_count;
        self
    }

    /// Reject configurations the pipeline cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidConfiguration {
                name: "k",
                message: "must be at least 1",
            });
        }
        if u32::try_from(self.k).is_err() {
            return Err(Error::InvalidConfiguration {
                name: "k",
                message: "must fit in 32 bits",
            });
        }
        if self.vector_size != FEATURE_LEN {
            return Err(Error::InvalidConfiguration {
                name: "vector_size",
                message: "must be 5 (center plus 4-neighborhood)",
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfiguration {
                name: "max_iterations",
                message: "must be at least 1",
            });
        }
        if !(self.cloud_percent > 0.0 && self.cloud_percent <= 1.0) {
            return Err(Error::InvalidConfiguration {
                name: "cloud_percent",
                message: "must lie in (0, 1]",
            });
        }
        if self.channel_count == 0 {
            return Err(Error::InvalidConfiguration {
                name: "channel_count",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Cluster-index cutoff `floor(k * cloud_percent)`.
    ///
    /// Clusters with an id strictly greater than this are foreground.
    pub fn cloud_threshold(&self) -> usize {
        // 10 * 0.3 evaluates to 2.9999999999999996
        (self.k as f64 * self.cloud_percent + 1e-9).floor() as usize
    }
}
