//! Chunked input adapter that tracks line numbers.

use std::io::{self, BufRead, Read};

/// Bytes requested from the underlying stream per read.
pub const CHUNK_SIZE: usize = 4096;

/// Feeds a stream to the tokenizer in fixed-size chunks.
///
/// Lines are counted as the tokenizer consumes bytes, so [`line`](Self::line)
/// is the line the tokenizer has reached. A read failure is kept so the
/// caller can report the original error after the tokenizer gives up.
pub struct ChunkReader<R> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
    newlines: u64,
    consumed: u64,
    failure: Option<io::Error>,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(CHUNK_SIZE, inner)
    }

    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner,
            buf: vec![0; capacity.max(1)].into_boxed_slice(),
            pos: 0,
            filled: 0,
            newlines: 0,
            consumed: 0,
            failure: None,
        }
    }

    /// 1-based line of the next unconsumed byte.
    pub fn line(&self) -> u64 {
        self.newlines + 1
    }

    /// Bytes handed to the tokenizer so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Take the read error that stopped the stream, if any.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }
}

impl<R: Read> Read for ChunkReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl<R: Read> BufRead for ChunkReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.filled {
            if self.failure.is_some() {
                return Err(io::Error::other("input stream already failed"));
            }
            let n = loop {
                match self.inner.read(&mut self.buf) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        let reported = io::Error::new(e.kind(), e.to_string());
                        self.failure = Some(e);
                        return Err(reported);
                    }
                }
            };
            self.pos = 0;
            self.filled = n;
        }
        Ok(&self.buf[self.pos..self.filled])
    }

    fn consume(&mut self, amt: usize) {
        let end = (self.pos + amt).min(self.filled);
        let chunk = &self.buf[self.pos..end];
        self.newlines += chunk.iter().filter(|&&b| b == b'\n').count() as u64;
        self.consumed += chunk.len() as u64;
        self.pos = end;
    }
}

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
