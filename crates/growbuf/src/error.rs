//! Error taxonomy for buffer growth and stream consumption.

use std::{collections::TryReserveError, io, path::PathBuf};

use thiserror::Error;

/// Errors reported by [`GrowBuf`](crate::GrowBuf) operations and
/// [`read_file_to_text`](crate::read_file_to_text).
///
/// Every variant is fatal to the operation that produced it and is reported
/// to the immediate caller; the buffer itself performs no retries.
#[derive(Debug, Error)]
pub enum GrowError {
    /// Storage could not be obtained or grown.
    ///
    /// The buffer is left exactly as it was before the attempt: prior
    /// capacity, prior length, prior content. `source` is `None` only when
    /// the requested capacity overflowed `usize` before any allocation was
    /// attempted.
    #[error("cannot allocate {requested} bytes of buffer capacity")]
    Allocation {
        /// Total capacity in bytes that was being requested.
        requested: usize,
        /// Underlying allocator failure, if one was reached.
        #[source]
        source: Option<TryReserveError>,
    },

    /// The input stream failed mid-read.
    ///
    /// Bytes appended before the failure remain in the buffer; the caller
    /// decides whether the partial content is usable.
    #[error("stream read failed after {appended} bytes were appended")]
    StreamRead {
        /// Bytes successfully appended by the failing call before the error.
        appended: usize,
        /// The I/O error returned by the stream.
        #[source]
        source: io::Error,
    },

    /// The input source could not be opened; no buffer content exists.
    #[error("cannot open {}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// The I/O error returned by the open call.
        #[source]
        source: io::Error,
    },
}
