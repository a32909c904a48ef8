//! # cloudseg
//!
//! Coarse pixel classification for raster images: cluster every interior
//! pixel by the intensities of its 4-neighborhood, then render a binary
//! cloud mask from the clusters.
//!
//! The pipeline consumes an already-decoded [`Image`] and runs
//! synchronously to completion. Decoding, file I/O and command-line
//! handling belong to the caller.
//!
//! ```rust
//! use cloudseg::{segment, Image, KmeansConfig};
//!
//! let mut image = Image::from_fn(16, 16, 3, |x, y| {
//!     if (5..11).contains(&x) && (5..11).contains(&y) { 250 } else { 10 }
//! }).unwrap();
//!
//! let seg = segment(&mut image, &KmeansConfig::default()).unwrap();
//! assert!(seg.foreground_percent > 0.0);
//! assert_eq!(image.get(8, 8, 0), Some(255));
//! assert_eq!(image.get(0, 0, 0), Some(0));
//! ```

pub mod cluster;
pub mod colorize;
pub mod config;
/// Error types used across `cloudseg`.
pub mod error;
pub mod image;
pub mod segment;


pub use cluster::{Clustering, ClusterOutcome, PixelKmeans, Termination};
pub use colorize::colorize;
pub use config::{KmeansConfig, FEATURE_LEN};
pub use error::{Error, Result};
pub use image::Image;
pub use segment::{segment, Segmentation};
