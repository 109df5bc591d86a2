//! Iterator adaptor that drains a single stream line by line.

use crate::config::Config;
use crate::error::Result;
use crate::reader::{Descriptor, LineReader};
use std::io::Read;

/// An iterator over the lines of a single source stream.
///
/// Yields each line as owned bytes with its terminator kept, then the final
/// partial line (if the stream does not end in a terminator), then stops.
/// The iterator fuses after end of stream or after yielding an error.
///
/// Created by [`lines`](crate::lines) or [`read_lines`](crate::read_lines).
pub struct Lines<R: Read> {
    reader: LineReader<R>,
    descriptor: Descriptor,
    done: bool,
}

impl<R: Read> Lines<R> {
    pub(crate) fn new(source: R, config: Config) -> Self {
        let (reader, descriptor) = LineReader::single(source, config.chunk_capacity);
        Self {
            reader,
            descriptor,
            done: false,
        }
    }
}

impl<R: Read> Iterator for Lines<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.next_line(self.descriptor) {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}
