//! Convergence checking.

/// Why an iteration loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// No centroid moved more than the threshold in the last iteration.
    Converged,
    /// The iteration cap was reached while centroids were still moving.
    IterationLimitReached,
    /// The image has no interior pixels; nothing was clustered.
    NoInteriorPixels,
}

/// Largest absolute centroid move between two iterations.
pub fn max_shift(previous: &[u32], current: &[u32]) -> u32 {
    previous
        .iter()
        .zip(current)
        .map(|(&a, &b)| a.abs_diff(b))
        .max()
        .unwrap_or(0)
}

/// True when no centroid moved by more than `threshold`.
pub fn has_converged(previous: &[u32], current: &[u32], threshold: u32) -> bool {
    max_shift(previous, current) <= threshold
}

/// Decide whether the loop stops after `iteration` (1-based) completed cycles.
pub fn check(
    previous: &[u32],
    current: &[u32],
    threshold: u32,
    iteration: usize,
    max_iterations: usize,
) -> Option<Termination> {
    if has_converged(previous, current, threshold) {
        Some(Termination::Converged)
    } else if iteration >= max_iterations {
        Some(Termination::IterationLimitReached)
    } else {
        None
    }
}
