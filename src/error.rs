use core::fmt;

/// Result alias for `cloudseg`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering pipeline and the colorizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Image geometry does not match its sample buffer.
    InvalidDimensions {
        /// Image width in pixels.
        width: usize,
        /// Image height in pixels.
        height: usize,
        /// Samples per pixel.
        channels: usize,
        /// Length of the buffer that was supplied.
        buffer_len: usize,
    },

    /// Invalid configuration value.
    InvalidConfiguration {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// A pipeline buffer could not be allocated.
    AllocationFailure {
        /// Which buffer.
        what: &'static str,
        /// Requested number of elements.
        elements: usize,
    },

    /// A cluster id outside `0..k` was handed to the colorizer.
    ClusterOutOfRange {
        /// Offending cluster id.
        cluster: usize,
        /// Number of clusters in the run.
        k: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions {
                width,
                height,
                channels,
                buffer_len,
            } => write!(
                f,
                "invalid dimensions: {width}x{height}x{channels} does not fit a buffer of {buffer_len} samples"
            ),
            Error::InvalidConfiguration { name, message } => {
                write!(f, "invalid configuration '{name}': {message}")
            }
            Error::AllocationFailure { what, elements } => {
                write!(f, "failed to allocate {elements} elements for {what}")
            }
            Error::ClusterOutOfRange { cluster, k } => {
                write!(f, "cluster id {cluster} out of range for k = {k}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Allocate a zero-filled buffer, surfacing allocator failure as an error.
pub(crate) fn try_filled<T: Clone>(value: T, len: usize, what: &'static str) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure {
            what,
            elements: len,
        })?;
    buf.resize(len, value);
    Ok(buf)
}
