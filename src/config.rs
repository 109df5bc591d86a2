//! Configuration for the line reader.

/// Default size in bytes of one bounded read.
pub const DEFAULT_CHUNK_CAPACITY: usize = 4096;

/// Default number of descriptor slots in a reader's table.
pub const DEFAULT_MAX_DESCRIPTORS: usize = 1024;

/// Tuning knobs for a [`LineReader`](crate::LineReader).
///
/// `chunk_capacity` is the size of each bounded read. Smaller values increase
/// the number of read calls and concatenation work; larger values reduce call
/// count at the cost of scratch memory. A value of zero disables reading
/// entirely: every call returns [`Error::Disabled`](crate::Error::Disabled)
/// and clears the descriptor's retained state.
///
/// `max_descriptors` bounds how many streams can be attached at once and the
/// size of the retention table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Size in bytes of one bounded read.
    pub chunk_capacity: usize,
    /// Number of descriptor slots.
    pub max_descriptors: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
            max_descriptors: DEFAULT_MAX_DESCRIPTORS,
        }
    }
}

impl Config {
    /// Returns the default configuration with a different chunk capacity.
    pub fn with_chunk_capacity(chunk_capacity: usize) -> Self {
        Self {
            chunk_capacity,
            ..Self::default()
        }
    }
}
