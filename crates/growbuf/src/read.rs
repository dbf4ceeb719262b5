//! Whole-file convenience entry point.

use std::{fs::File, path::Path};

use bstr::BString;

use crate::{buffer::GrowBuf, constants::DEFAULT_CHUNK_SIZE, error::GrowError};

/// Reads an entire file of unknown size into zero-terminated text.
///
/// Opens `path`, appends the whole stream to a fresh [`GrowBuf`] in
/// [`DEFAULT_CHUNK_SIZE`] requests, and finalizes it with the sentinel
/// byte. Opening is attempted once; a missing or unreadable file is fatal
/// to the call.
///
/// # Examples
///
/// ```no_run
/// let text = growbuf::read_file_to_text("mytext")?;
/// assert_eq!(text.last(), Some(&0));
/// # Ok::<(), growbuf::GrowError>(())
/// ```
///
/// # Errors
///
/// Returns [`GrowError::Open`] if the file cannot be opened,
/// [`GrowError::StreamRead`] if a read fails mid-stream, or
/// [`GrowError::Allocation`] if the buffer cannot grow.
pub fn read_file_to_text(path: impl AsRef<Path>) -> Result<BString, GrowError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GrowError::Open {
        path: path.to_owned(),
        source,
    })?;

    let mut buf = GrowBuf::new();
    buf.append_from_stream(file, DEFAULT_CHUNK_SIZE)?;
    buf.finalize_as_text()
}
