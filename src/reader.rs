//! The descriptor table and the per-call line extraction state machine.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::scan::{fill_until_terminator, split_at_terminator};
use log::{debug, trace};
use std::io::Read;
use std::mem;

/// Handle to a stream attached to a [`LineReader`] slot.
///
/// Descriptors are small indices handed out by [`LineReader::attach`] and
/// reused after [`LineReader::detach`], like OS file descriptors. A
/// descriptor is only meaningful to the reader that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor(usize);

impl Descriptor {
    /// The slot index behind this descriptor.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One occupied slot: the attached source and the bytes read past the last
/// emitted line.
struct Slot<R> {
    source: R,
    rest: Vec<u8>,
}

/// Reads attached streams one line at a time using a bounded read chunk,
/// retaining unterminated leftovers per descriptor between calls.
///
/// The table is bounded by [`Config::max_descriptors`]. Calls take `&mut
/// self`, so interleaved use of one reader from several threads requires
/// external synchronization; successive calls on a single descriptor return
/// successive, non-overlapping slices of its stream.
pub struct LineReader<R> {
    slots: Vec<Option<Slot<R>>>,
    chunk_capacity: usize,
}

impl<R: Read> LineReader<R> {
    /// Creates an empty reader with the given configuration.
    pub fn new(config: Config) -> Self {
        let mut slots = Vec::with_capacity(config.max_descriptors);
        slots.resize_with(config.max_descriptors, || None);

        Self {
            slots,
            chunk_capacity: config.chunk_capacity,
        }
    }

    /// Creates an empty reader with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// A reader with a single pre-attached source, for the iterator wrapper.
    pub(crate) fn single(source: R, chunk_capacity: usize) -> (Self, Descriptor) {
        let reader = Self {
            slots: vec![Some(Slot {
                source,
                rest: Vec::new(),
            })],
            chunk_capacity,
        };
        (reader, Descriptor(0))
    }

    /// Number of descriptor slots in the table.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Size in bytes of one bounded read.
    pub fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    /// Attaches a source stream to the first vacant slot.
    ///
    /// Returns [`Error::TableFull`] when every slot is occupied. The source
    /// is owned by the reader until [`detach`](Self::detach) returns it.
    pub fn attach(&mut self, source: R) -> Result<Descriptor> {
        let vacant = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(Error::TableFull {
                capacity: self.slots.len(),
            })?;

        self.slots[vacant] = Some(Slot {
            source,
            rest: Vec::new(),
        });

        debug!("attached stream at descriptor {vacant}");
        Ok(Descriptor(vacant))
    }

    /// Detaches the descriptor's stream, dropping any retained remainder,
    /// and returns the stream to the caller. The slot becomes reusable.
    pub fn detach(&mut self, descriptor: Descriptor) -> Result<R> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(descriptor.0)
            .ok_or(Error::InvalidDescriptor {
                descriptor: descriptor.0,
                capacity,
            })?
            .take()
            .ok_or(Error::NotAttached {
                descriptor: descriptor.0,
            })?;

        debug!(
            "detached descriptor {} with {} retained bytes",
            descriptor.0,
            slot.rest.len()
        );
        Ok(slot.source)
    }

    /// Whether the descriptor currently references an attached stream.
    pub fn is_attached(&self, descriptor: Descriptor) -> bool {
        matches!(self.slots.get(descriptor.0), Some(Some(_)))
    }

    /// View of the bytes retained for this descriptor since its last call.
    pub fn pending(&self, descriptor: Descriptor) -> Result<&[u8]> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get(descriptor.0)
            .ok_or(Error::InvalidDescriptor {
                descriptor: descriptor.0,
                capacity,
            })?
            .as_ref()
            .ok_or(Error::NotAttached {
                descriptor: descriptor.0,
            })?;
        Ok(&slot.rest)
    }

    /// Returns the next line from the descriptor's stream.
    ///
    /// The line includes its terminator when one was present; the final
    /// record of a stream without a trailing terminator is the partial data
    /// as-is. `Ok(None)` means end of stream: nothing was read and nothing
    /// is retained. After any error the descriptor's retained state is
    /// cleared, so a subsequent call restarts accumulation from the stream's
    /// current position.
    pub fn next_line(&mut self, descriptor: Descriptor) -> Result<Option<Vec<u8>>> {
        let chunk_capacity = self.chunk_capacity;
        let slot = self.slot_mut(descriptor)?;

        if chunk_capacity == 0 {
            slot.rest.clear();
            return Err(Error::Disabled);
        }

        // Taking the remainder up front means every failure path below
        // leaves the slot cleared rather than stale.
        let mut accumulated = mem::take(&mut slot.rest);
        fill_until_terminator(&mut slot.source, &mut accumulated, chunk_capacity)?;

        let (line, rest) = split_at_terminator(accumulated);
        slot.rest = rest;

        if line.is_empty() {
            trace!("descriptor {}: end of stream", descriptor.0);
            return Ok(None);
        }

        trace!("descriptor {}: emitting {} bytes", descriptor.0, line.len());
        Ok(Some(line))
    }

    /// Compatibility mode for [`next_line`](Self::next_line): collapses every
    /// non-data outcome (end of stream, invalid descriptor, disabled
    /// configuration, read failure) into `None`, the way callers that only
    /// loop until "no more lines" expect.
    pub fn next_line_lossy(&mut self, descriptor: Descriptor) -> Option<Vec<u8>> {
        match self.next_line(descriptor) {
            Ok(line) => line,
            Err(error) => {
                debug!("descriptor {}: {error}", descriptor.0);
                None
            }
        }
    }

    fn slot_mut(&mut self, descriptor: Descriptor) -> Result<&mut Slot<R>> {
        let capacity = self.slots.len();
        self.slots
            .get_mut(descriptor.0)
            .ok_or(Error::InvalidDescriptor {
                descriptor: descriptor.0,
                capacity,
            })?
            .as_mut()
            .ok_or(Error::NotAttached {
                descriptor: descriptor.0,
            })
    }
}
