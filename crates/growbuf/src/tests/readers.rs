//! Scripted readers for exercising the append loop.

use std::{
    collections::VecDeque,
    io::{self, Read},
};

/// Delivers `data` in the piece sizes scripted by `pieces`, then reports
/// end-of-input. Each piece is clamped to the destination slice and to the
/// remaining data.
pub struct ScriptedReader {
    data: Vec<u8>,
    pieces: VecDeque<usize>,
    offset: usize,
}

impl ScriptedReader {
    pub fn new(data: impl Into<Vec<u8>>, pieces: impl IntoIterator<Item = usize>) -> Self {
        Self {
            data: data.into(),
            pieces: pieces.into_iter().collect(),
            offset: 0,
        }
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(piece) = self.pieces.pop_front() else {
            return Ok(0);
        };

        let n = piece.min(buf.len()).min(self.data.len() - self.offset);
        buf[..n].copy_from_slice(&self.data[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

/// Delivers `data`, then fails every subsequent read with the given kind.
pub struct FailingReader {
    data: Vec<u8>,
    offset: usize,
    kind: io::ErrorKind,
}

impl FailingReader {
    pub fn new(data: impl Into<Vec<u8>>, kind: io::ErrorKind) -> Self {
        Self {
            data: data.into(),
            offset: 0,
            kind,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.offset == self.data.len() {
            return Err(io::Error::new(self.kind, "injected read failure"));
        }

        let n = buf.len().min(self.data.len() - self.offset);
        buf[..n].copy_from_slice(&self.data[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

/// Returns `Interrupted` before every successful read of the inner reader.
pub struct InterruptingReader<R> {
    inner: R,
    interrupt_next: bool,
}

impl<R> InterruptingReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            interrupt_next: true,
        }
    }
}

impl<R: Read> Read for InterruptingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }

        self.interrupt_next = true;
        self.inner.read(buf)
    }
}
