//! Marker scanning with split-tolerant suffix withholding.
//!
//! The transport delivers text in arbitrary fragments, so a marker like
//! `[[ITEM]]{{` can arrive half in one fragment and half in the next. The
//! scanner therefore reports not just full matches but also how many trailing
//! bytes *might* be the start of a marker and must be withheld from payload
//! flushing until more input arrives. Everything before the withheld suffix
//! is safe to flush exactly once.

use memchr::memmem;

use crate::grammar::Marker;

/// Outcome of scanning a buffer for a set of candidate markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// No candidate occurs and no buffer suffix is a strict prefix of one.
    /// The entire buffer is safe to flush as payload.
    NoMatch,

    /// The last `withheld` bytes are a strict prefix of some candidate and
    /// must be kept back; bytes before them are safe to flush.
    PartialSuffix { withheld: usize },

    /// A candidate begins at byte offset `start`. Bytes before it are
    /// payload; the marker itself is consumed by the caller.
    Found { marker: Marker, start: usize },
}

/// Find the earliest occurrence of any candidate marker in `buf`.
///
/// Earliest start position wins; among candidates starting at the same
/// offset, earlier position in `candidates` wins (the grammar's literals
/// never alias, so this tie-break is never exercised - it exists to keep the
/// contract total).
pub fn find_marker(buf: &[u8], candidates: &[Marker]) -> Scan {
    let mut best: Option<(usize, Marker)> = None;
    for &marker in candidates {
        if let Some(start) = memmem::find(buf, marker.literal().as_bytes()) {
            match best {
                Some((s, _)) if s <= start => {}
                _ => best = Some((start, marker)),
            }
        }
    }
    if let Some((start, marker)) = best {
        return Scan::Found { marker, start };
    }

    // No full match: check whether the tail could be a marker cut off by a
    // fragment boundary. Only the last (longest candidate - 1) bytes qualify.
    let window = candidates
        .iter()
        .map(|m| m.len())
        .max()
        .unwrap_or(0)
        .saturating_sub(1);
    let from = buf.len().saturating_sub(window);
    for i in from..buf.len() {
        let tail = &buf[i..];
        let is_partial = candidates
            .iter()
            .any(|m| tail.len() < m.len() && m.literal().as_bytes().starts_with(tail));
        if is_partial {
            return Scan::PartialSuffix {
                withheld: buf.len() - i,
            };
        }
    }

    Scan::NoMatch
}
