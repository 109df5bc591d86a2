//! A line reader that pulls one newline-delimited record per call from a
//! byte stream, using a bounded read chunk and retaining any unterminated
//! leftover across calls.
//!
//! Streams are attached to a [`LineReader`] table and addressed by small
//! [`Descriptor`] handles, so several partially-read streams can be drained
//! in an interleaved fashion without their buffered state mixing. Lines are
//! raw bytes and keep their terminator; the final record of a stream with no
//! trailing newline is the partial data as-is.
//!
//! # Example
//!
//! ```rust,no_run
//! use nextline::read_lines;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     for line in read_lines("app.conf")? {
//!         let line = line?;
//!         print!("{}", String::from_utf8_lossy(&line));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Interleaving two streams:
//!
//! ```rust
//! use nextline::{Config, LineReader};
//! use std::io::Cursor;
//!
//! # fn main() -> nextline::Result<()> {
//! let mut reader = LineReader::new(Config::default());
//! let a = reader.attach(Cursor::new("first\nsecond\n"))?;
//! let b = reader.attach(Cursor::new("other\n"))?;
//!
//! assert_eq!(reader.next_line(a)?, Some(b"first\n".to_vec()));
//! assert_eq!(reader.next_line(b)?, Some(b"other\n".to_vec()));
//! assert_eq!(reader.next_line(a)?, Some(b"second\n".to_vec()));
//! # Ok(())
//! # }
//! ```

// Internal modules - not part of public API
mod config;
mod error;
mod lines;
mod reader;
mod scan;

#[cfg(test)]
mod test_helpers;

// Public API exports
pub use config::{Config, DEFAULT_CHUNK_CAPACITY, DEFAULT_MAX_DESCRIPTORS};
pub use error::{Error, Result};
pub use lines::Lines;
pub use reader::{Descriptor, LineReader};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Returns an iterator over the lines of `source` using the default
/// configuration.
pub fn lines<R: Read>(source: R) -> Lines<R> {
    lines_with_config(source, Config::default())
}

/// Returns an iterator over the lines of `source` with an explicit
/// configuration.
pub fn lines_with_config<R: Read>(source: R, config: Config) -> Lines<R> {
    Lines::new(source, config)
}

/// Opens the file at `path` and returns an iterator over its lines.
///
/// # Example
///
/// ```rust,no_run
/// use nextline::read_lines;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     for line in read_lines("notes.txt")? {
///         println!("{} bytes", line?.len());
///     }
///     Ok(())
/// }
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Lines<File>> {
    let file = File::open(path)?;
    Ok(lines(file))
}
