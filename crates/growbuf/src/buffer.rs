//! Growable byte accumulator with a doubling capacity policy.
//!
//! [`GrowBuf`] owns a contiguous byte region and appends bytes read from a
//! stream of unknown total length, doubling its capacity whenever the region
//! is exhausted. Doubling bounds the total reallocation copy work to
//! O(final size) amortized across the whole read, where growing by a fixed
//! increment would cost O(n²).

use std::io::{self, Read};

use bstr::BString;

use crate::{constants::DEFAULT_CAPACITY, error::GrowError};

/// A dynamically sized byte buffer for accumulating stream input.
///
/// # Capacity management
///
/// Capacity only grows, never shrinks, and each growth at least doubles the
/// prior capacity. Growth is strongly failure-safe: if storage cannot be
/// obtained, the buffer is left exactly as it was — prior capacity, prior
/// length, prior content.
///
/// # Invariants
///
/// This buffer maintains `self.len <= self.cap == self.buf.len()` at all
/// times. Bytes in `buf[..len]` are exactly the appended content, in order;
/// bytes in `buf[len..cap]` are unspecified.
///
/// # Examples
///
/// ```
/// use growbuf::GrowBuf;
/// use std::io::Cursor;
///
/// let mut buf = GrowBuf::with_capacity(4)?;
/// let appended = buf.append_from_stream(Cursor::new(b"unknown length"), 4)?;
/// assert_eq!(appended, 14);
/// assert_eq!(buf.as_bytes(), b"unknown length");
/// assert!(buf.capacity() >= buf.len());
/// # Ok::<(), growbuf::GrowError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowBuf {
    /// Internal storage, always sized to `cap`.
    buf: Vec<u8>,
    /// Logical capacity of the buffer.
    cap: usize,
    /// Number of valid bytes written.
    len: usize,
    /// Number of growth events since creation.
    reallocations: usize,
}

impl Default for GrowBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowBuf {
    /// Creates a buffer with the default capacity of
    /// [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) bytes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0; DEFAULT_CAPACITY],
            cap: DEFAULT_CAPACITY,
            len: 0,
            reallocations: 0,
        }
    }

    /// Creates a buffer with the given initial capacity.
    ///
    /// The capacity is an initial guess; the buffer doubles it as needed
    /// while appending. A capacity of zero is rounded up to one so that
    /// doubling always makes progress.
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::Allocation`] if the initial storage cannot be
    /// obtained.
    pub fn with_capacity(initial: usize) -> Result<Self, GrowError> {
        let cap = initial.max(1);
        let mut buf = Vec::new();
        buf.try_reserve_exact(cap)
            .map_err(|source| GrowError::Allocation {
                requested: cap,
                source: Some(source),
            })?;
        buf.resize(cap, 0);

        Ok(Self {
            buf,
            cap,
            len: 0,
            reallocations: 0,
        })
    }

    /// Returns the valid content appended so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the number of valid bytes in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bytes have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the number of growth events since creation.
    ///
    /// For a stream of final size `n` read into a buffer of initial capacity
    /// `c`, this is at most `ceil(log2(n / c)) + 1`, never `n / c`.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Ensures room for `additional` more bytes beyond the current length.
    ///
    /// If `len + additional` exceeds the capacity, the capacity doubles
    /// (repeatedly, if one doubling is insufficient) until it fits. Existing
    /// content is preserved exactly; new storage is committed before old
    /// storage is released.
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::Allocation`] if storage cannot be grown or the
    /// required capacity overflows `usize`. On failure the buffer is
    /// unchanged.
    pub fn ensure_capacity(&mut self, additional: usize) -> Result<(), GrowError> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(GrowError::Allocation {
                requested: usize::MAX,
                source: None,
            })?;
        if needed <= self.cap {
            return Ok(());
        }

        let mut next = self.cap;
        while next < needed {
            next = next.checked_mul(2).ok_or(GrowError::Allocation {
                requested: needed,
                source: None,
            })?;
        }

        // try_reserve_exact leaves the vec untouched on failure, which is
        // what gives ensure_capacity its strong failure safety.
        self.buf
            .try_reserve_exact(next - self.buf.len())
            .map_err(|source| GrowError::Allocation {
                requested: next,
                source: Some(source),
            })?;
        self.buf.resize(next, 0);
        self.cap = next;
        self.reallocations += 1;

        Ok(())
    }

    /// Appends bytes from `reader` until it reports end-of-input.
    ///
    /// Each iteration ensures room for `chunk_size` bytes, then requests up
    /// to `chunk_size` bytes from the reader, retrying on
    /// [`io::ErrorKind::Interrupted`]. Returns the total number of bytes
    /// appended by this call. A `chunk_size` of zero appends nothing and
    /// returns 0.
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::StreamRead`] if the reader fails; bytes appended
    /// before the failure remain in the buffer. Returns
    /// [`GrowError::Allocation`] if the buffer cannot grow.
    pub fn append_from_stream(
        &mut self,
        mut reader: impl Read,
        chunk_size: usize,
    ) -> Result<usize, GrowError> {
        if chunk_size == 0 {
            return Ok(0);
        }

        let mut appended = 0;

        loop {
            self.ensure_capacity(chunk_size)?;
            let end = self.len + chunk_size;

            // Fill up to one chunk, retrying on interrupt.
            let bytes_read = loop {
                match reader.read(&mut self.buf[self.len..end]) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(source) => return Err(GrowError::StreamRead { appended, source }),
                }
            };

            if bytes_read == 0 {
                // End of input.
                break;
            }

            self.len += bytes_read;
            appended += bytes_read;
        }

        Ok(appended)
    }

    /// Consumes the buffer, appending a zero sentinel byte after the content.
    ///
    /// The returned byte string is the accumulated content followed by a
    /// single `0` byte, for consumers that expect a terminator. The buffer
    /// cannot be mutated afterwards; ownership of the content transfers to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::Allocation`] if room for the sentinel cannot be
    /// obtained.
    pub fn finalize_as_text(mut self) -> Result<BString, GrowError> {
        self.ensure_capacity(1)?;
        self.buf[self.len] = 0;
        self.buf.truncate(self.len + 1);

        Ok(BString::from(self.buf))
    }
}
