//! Decoded raster images.
//!
//! Samples are stored row-major with interleaved channels, viewed as an
//! `(height, width, channels)` array. Only channel 0 feeds the clustering;
//! the colorizer writes every channel.

use crate::error::{Error, Result};
use ndarray::{Array3, ArrayView2};

/// An 8-bit, multi-channel raster image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    samples: Array3<u8>,
}

impl Image {
    /// Wrap an already-decoded sample buffer.
    ///
    /// Fails with [`Error::InvalidDimensions`] when `channels` is zero or the
    /// buffer length is not `width * height * channels`.
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let buffer_len = data.len();
        let invalid = move || Error::InvalidDimensions {
            width,
            height,
            channels,
            buffer_len,
        };
        if channels == 0 {
            return Err(invalid());
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(invalid)?;
        if expected != buffer_len {
            return Err(invalid());
        }
        let samples =
            Array3::from_shape_vec((height, width, channels), data).map_err(|_| invalid())?;
        Ok(Self { samples })
    }

    /// Build an image from a function of `(x, y)` giving the channel-0 value.
    /// Every channel of a pixel receives the same sample.
    pub fn from_fn(
        width: usize,
        height: usize,
        channels: usize,
        mut f: impl FnMut(usize, usize) -> u8,
    ) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(Error::InvalidDimensions {
                width,
                height,
                channels,
                buffer_len: 0,
            })?;
        let mut data = crate::error::try_filled(0u8, len, "image samples")?;
        if channels > 0 {
            for (i, px) in data.chunks_exact_mut(channels).enumerate() {
                px.fill(f(i % width, i / width));
            }
        }
        Self::from_raw(width, height, channels, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.samples.dim().1
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.samples.dim().0
    }

    /// Samples per pixel.
    pub fn channels(&self) -> usize {
        self.samples.dim().2
    }

    /// Width and height of the region strictly inside the 1-pixel border.
    pub fn interior_dims(&self) -> (usize, usize) {
        (
            self.width().saturating_sub(2),
            self.height().saturating_sub(2),
        )
    }

    /// Number of interior pixels.
    pub fn interior_len(&self) -> usize {
        let (w, h) = self.interior_dims();
        w * h
    }

    /// Channel-0 plane indexed `[[y, x]]`.
    pub fn luma(&self) -> ArrayView2<'_, u8> {
        self.samples.index_axis(ndarray::Axis(2), 0)
    }

    /// Sample at `(x, y, channel)`.
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        self.samples.get((y, x, channel)).copied()
    }

    /// Overwrite every channel of pixel `(x, y)`.
    pub(crate) fn fill_pixel(&mut self, x: usize, y: usize, value: u8) {
        self.samples
            .slice_mut(ndarray::s![y, x, ..])
            .fill(value);
    }

    /// Overwrite every sample of the image.
    pub(crate) fn fill(&mut self, value: u8) {
        self.samples.fill(value);
    }

    /// Raw row-major interleaved samples.
    pub fn as_raw(&self) -> Option<&[u8]> {
        self.samples.as_slice()
    }

    /// Consume the image and return its sample buffer.
    pub fn into_raw(self) -> Vec<u8> {
        let (vec, _offset) = self.samples.into_raw_vec_and_offset();
        vec
    }
}
