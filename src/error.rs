//! Error types for every fallible stage of the pipeline.

/// The error type produced by any stage of the routing pipeline.
///
/// Every variant collapses, at the driver boundary, to the single
/// user-visible message `ERROR: invalid data format` (see
/// [`crate::DRIVER_ERROR_MESSAGE`]); the variants exist so that each stage
/// can be tested and reasoned about independently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file failed lexical, structural, or semantic validation.
    #[error("invalid data format")]
    InvalidInput,

    /// `start` and `end` are not connected by any tunnel, so the max-flow
    /// computed on the node-split graph is zero.
    #[error("no path")]
    NoPath,

    /// A simulation turn produced no moves before every ant reached `end`.
    ///
    /// This can only happen if path selection handed the simulator a set of
    /// paths that are not actually vertex-disjoint; it is treated as an
    /// internal defect rather than a user input problem.
    #[error("stuck")]
    Stuck,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
