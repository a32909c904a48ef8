//! Pixel clustering on 4-neighborhood features.
//!
//! Each stage lives in its own module and can be driven on its own; the
//! [`PixelKmeans`] driver chains them.
//!
//! | Stage | Module |
//! |-------|--------|
//! | feature extraction | [`features`] |
//! | centroid seeding | [`init`] |
//! | nearest-centroid assignment | [`assign`] |
//! | median update | [`update`] |
//! | convergence check | [`convergence`] |
//!
//! ## Usage
//!
//! ```rust
//! use cloudseg::cluster::{Clustering, PixelKmeans};
//! use cloudseg::Image;
//!
//! // Dark left half, bright right half.
//! let img = Image::from_fn(12, 8, 3, |x, _| if x < 6 { 10 } else { 240 }).unwrap();
//!
//! let labels = PixelKmeans::new(5).fit_predict(&img).unwrap();
//! assert_eq!(labels.len(), 10 * 6);
//! assert_eq!(labels[0], 0);   // interior (1, 1): dark
//! assert_eq!(labels[9], 4);   // interior (10, 1): bright
//! ```

pub mod assign;
pub mod convergence;
pub mod features;
pub mod init;
mod pixel_kmeans;
mod traits;
pub mod update;

pub use assign::Assignment;
pub use convergence::Termination;
pub use pixel_kmeans::{ClusterOutcome, PixelKmeans};
pub use traits::Clustering;
