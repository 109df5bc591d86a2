//! Test utilities: deterministic sources with short reads and injected
//! failures, and temporary files with fixed content.

#[cfg(test)]
use std::io::{self, Read, Write};
#[cfg(test)]
use std::path::{Path, PathBuf};

/// A source that returns at most `max_per_read` bytes per read call,
/// regardless of how large a buffer it is offered.
#[cfg(test)]
pub struct ShortReader {
    data: Vec<u8>,
    position: usize,
    max_per_read: usize,
}

#[cfg(test)]
impl ShortReader {
    pub fn new(data: &[u8], max_per_read: usize) -> Self {
        Self {
            data: data.to_vec(),
            position: 0,
            max_per_read,
        }
    }
}

#[cfg(test)]
impl Read for ShortReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.data.len() - self.position;
        let take = buf.len().min(self.max_per_read).min(remaining);
        buf[..take].copy_from_slice(&self.data[self.position..self.position + take]);
        self.position += take;
        Ok(take)
    }
}

/// A source that serves a fixed prefix, then fails every subsequent read.
#[cfg(test)]
pub struct FailingReader {
    prefix: Vec<u8>,
    position: usize,
}

#[cfg(test)]
impl FailingReader {
    /// Fails on the very first read.
    pub fn immediate() -> Self {
        Self::after(b"")
    }

    /// Serves `prefix` successfully, then fails.
    pub fn after(prefix: &[u8]) -> Self {
        Self {
            prefix: prefix.to_vec(),
            position: 0,
        }
    }
}

#[cfg(test)]
impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.position >= self.prefix.len() {
            return Err(io::Error::new(io::ErrorKind::Other, "injected read failure"));
        }
        let take = buf.len().min(self.prefix.len() - self.position);
        buf[..take].copy_from_slice(&self.prefix[self.position..self.position + take]);
        self.position += take;
        Ok(take)
    }
}

/// A temporary file with fixed byte content.
#[cfg(test)]
pub struct TempTextFile {
    path: PathBuf,
    _temp_dir: tempfile::TempDir,
}

#[cfg(test)]
impl TempTextFile {
    /// Create a temporary file holding exactly `content`.
    pub fn with_content(content: &[u8]) -> io::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("input.txt");

        let mut file = std::fs::File::create(&path)?;
        file.write_all(content)?;
        file.flush()?;

        Ok(Self {
            path,
            _temp_dir: temp_dir,
        })
    }

    /// Get the path to the temporary file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_reader_caps_each_read() {
        let mut reader = ShortReader::new(b"abcdef", 2);
        let mut buf = [0u8; 16];

        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ab");
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"cd");
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_failing_reader_immediate() {
        let mut reader = FailingReader::immediate();
        let mut buf = [0u8; 4];
        assert!(reader.read(&mut buf).is_err());
    }

    #[test]
    fn test_failing_reader_serves_prefix_first() {
        let mut reader = FailingReader::after(b"ok");
        let mut buf = [0u8; 4];

        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ok");
        assert!(reader.read(&mut buf).is_err());
    }

    #[test]
    fn test_temp_text_file_content() {
        let file = TempTextFile::with_content(b"abc\ndef").unwrap();
        let content = std::fs::read(file.path()).unwrap();
        assert_eq!(content, b"abc\ndef");
    }
}
