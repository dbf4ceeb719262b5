//! A growable byte buffer for reading streams of unknown length.
//!
//! [`GrowBuf`] accumulates bytes from any [`std::io::Read`] source without
//! knowing the total size up front. Capacity doubles whenever it is
//! exhausted, so the total copy work stays linear in the final size no
//! matter how long the stream turns out to be. Once the stream is drained
//! the buffer can be finalized as a zero-terminated [`bstr::BString`] for
//! string-style consumption.
//!
//! # Quick start
//!
//! ```
//! use growbuf::GrowBuf;
//! use std::io::Cursor;
//!
//! let mut buf = GrowBuf::with_capacity(20)?;
//! buf.append_from_stream(Cursor::new(b"Hello, World!"), 20)?;
//!
//! let text = buf.finalize_as_text()?;
//! assert_eq!(text, &b"Hello, World!\0"[..]);
//! # Ok::<(), growbuf::GrowError>(())
//! ```
//!
//! Reading a whole file is a one-liner via [`read_file_to_text`].

mod buffer;
mod constants;
mod error;
mod read;

#[cfg(test)]
mod tests;

pub use buffer::GrowBuf;
pub use constants::{DEFAULT_CAPACITY, DEFAULT_CHUNK_SIZE};
pub use error::GrowError;
pub use read::read_file_to_text;
