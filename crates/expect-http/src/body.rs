//! Provides a rewindable body and utility functions for reading it

use std::io::{self, Cursor, Read, Seek, SeekFrom};

use bytes::Bytes;

use crate::BodyError;

/// An in-memory body that can be read any number of times
#[derive(Clone, Debug, Default)]
pub struct ReplayBody {
    inner: Cursor<Bytes>,
}

impl ReplayBody {
    /// Constructs a new [`ReplayBody`] positioned at its start
    pub fn new(bytes: impl Into<Bytes>) -> ReplayBody {
        ReplayBody {
            inner: Cursor::new(bytes.into()),
        }
    }

    /// Current read position within the body
    pub fn position(&self) -> u64 {
        self.inner.position()
    }
}

impl Read for ReplayBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for ReplayBody {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl From<&'static str> for ReplayBody {
    fn from(value: &'static str) -> Self {
        ReplayBody::new(value)
    }
}

impl From<String> for ReplayBody {
    fn from(value: String) -> Self {
        ReplayBody::new(value)
    }
}

impl From<Vec<u8>> for ReplayBody {
    fn from(value: Vec<u8>) -> Self {
        ReplayBody::new(value)
    }
}

/// Reads a rewindable body to [`Bytes`] from its start
///
/// The body is rewound both before and after reading, so later readers observe
/// the whole stream
pub fn read_body<B>(body: &mut B) -> Result<Bytes, BodyError>
where
    B: Read + Seek,
{
    body.rewind()?;
    let mut buf = Vec::new();
    let read = body.read_to_end(&mut buf);
    // rewind even when the read failed part way through
    body.rewind()?;
    read?;
    tracing::debug!(len = buf.len(), "read response body");
    Ok(Bytes::from(buf))
}
