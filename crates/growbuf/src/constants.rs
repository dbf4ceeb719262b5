//! Tuning constants for buffer sizing.

/// Initial capacity used by [`GrowBuf::new`](crate::GrowBuf::new).
///
/// Matches the 8 KiB default of [`std::io::BufReader`]. Streams larger than
/// this reach their final capacity in a logarithmic number of doublings, so
/// a modest starting guess costs little.
pub const DEFAULT_CAPACITY: usize = 8 * 1024;

/// Per-read request size used by [`read_file_to_text`](crate::read_file_to_text).
///
/// Half of [`DEFAULT_CAPACITY`], so a fresh buffer absorbs two requests
/// before its first growth.
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024;
