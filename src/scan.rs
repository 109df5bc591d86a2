//! Accumulation and splitting of raw bytes around the line terminator.

use std::io::Read;

/// The byte that ends a record.
pub(crate) const TERMINATOR: u8 = b'\n';

/// Read bounded chunks from `source` onto `rest` until `rest` contains a
/// terminator or the source is exhausted.
///
/// The loop condition is checked before the first read, so a terminator
/// already sitting in `rest` (left over from an earlier call) costs no I/O.
/// A zero-byte read means end of stream; whatever has accumulated stays in
/// `rest`, possibly nothing. Read errors propagate to the caller with `rest`
/// in an unspecified partial state.
pub(crate) fn fill_until_terminator<R: Read>(
    source: &mut R,
    rest: &mut Vec<u8>,
    chunk_capacity: usize,
) -> std::io::Result<()> {
    let mut chunk = vec![0u8; chunk_capacity];

    while !contains_terminator(rest) {
        let read = source.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        rest.extend_from_slice(&chunk[..read]);
    }

    Ok(())
}

/// Split accumulated bytes at the first terminator.
///
/// Returns `(line, rest)`: the line keeps its terminator, the rest is
/// everything after it. Without a terminator the whole buffer is the line
/// (final partial data) and the rest is empty.
pub(crate) fn split_at_terminator(accumulated: Vec<u8>) -> (Vec<u8>, Vec<u8>) {
    let mut line = accumulated;
    let rest = match find_terminator(&line) {
        Some(position) => line.split_off(position + 1),
        None => Vec::new(),
    };
    (line, rest)
}

fn find_terminator(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&byte| byte == TERMINATOR)
}

fn contains_terminator(bytes: &[u8]) -> bool {
    find_terminator(bytes).is_some()
}
