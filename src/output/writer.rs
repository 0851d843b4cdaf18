use std::io::{self, Write};

pub trait Writer {
    fn write(&mut self, buf: &Vec<u8>) -> io::Result<()>;
}

/// Writes each buffer as one newline-terminated line.
pub struct LineWriter<W> {
    inner: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Writer for LineWriter<W> {
    fn write(&mut self, buf: &Vec<u8>) -> io::Result<()> {
        self.inner.write_all(buf)?;
        self.inner.write_all(&[b'\n'])
    }
}
