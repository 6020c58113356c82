//! The explanation wire format: marker literals and their legal ordering.
//!
//! An explanation stream is flat text with literal delimiters:
//!
//! ```text
//! [[[WORD_MEANING]]]:{{meaning text}}[[[EXAMPLES]]]:{{[[ITEM]]{{ex 1}}[[ITEM]]{{ex 2}}}}
//! ```
//!
//! Content between an opening marker and its `}}` is opaque payload - the
//! parser never interprets those bytes beyond scanning for the closer.
//! These literals are stable and hand-written (not generated).

/// Opens the meaning section.
pub const MEANING_OPEN: &str = "[[[WORD_MEANING]]]:{{";

/// Opens the examples block.
pub const EXAMPLES_OPEN: &str = "[[[EXAMPLES]]]:{{";

/// Opens one example item inside the examples block.
pub const ITEM_OPEN: &str = "[[ITEM]]{{";

/// Closes the innermost open section (meaning, item, or examples block).
pub const CLOSE: &str = "}}";

/// Longest marker literal. A buffer tail shorter than this may still be the
/// start of a marker split across fragment boundaries and must be withheld.
pub const MAX_MARKER_LEN: usize = MEANING_OPEN.len();

/// A marker literal, by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Marker {
    MeaningOpen = 0,
    ExamplesOpen,
    ItemOpen,
    Close,
}

impl Marker {
    /// All markers, in the order used for tie-breaking when two candidates
    /// would start at the same offset (the literals never alias, so the tie
    /// cannot actually arise - see [`self_check`]).
    pub const ALL: [Marker; 4] = [
        Marker::MeaningOpen,
        Marker::ExamplesOpen,
        Marker::ItemOpen,
        Marker::Close,
    ];

    /// The literal delimiter string for this marker.
    #[inline]
    pub const fn literal(self) -> &'static str {
        match self {
            Marker::MeaningOpen => MEANING_OPEN,
            Marker::ExamplesOpen => EXAMPLES_OPEN,
            Marker::ItemOpen => ITEM_OPEN,
            Marker::Close => CLOSE,
        }
    }

    /// Literal length in bytes.
    #[inline]
    pub const fn len(self) -> usize {
        self.literal().len()
    }
}

/// Verify that no marker literal is a strict prefix of another.
///
/// The matcher's earliest-start rule is only unambiguous under this
/// condition. A violation is a configuration bug in the grammar itself, not a
/// runtime input problem, so it must abort at registry construction rather
/// than surface as a parse error.
///
/// # Panics
///
/// Panics if two markers alias.
pub fn self_check() {
    for a in Marker::ALL {
        for b in Marker::ALL {
            if a != b {
                assert!(
                    !b.literal().as_bytes().starts_with(a.literal().as_bytes()),
                    "grammar marker {:?} ({:?}) is a prefix of {:?} ({:?})",
                    a,
                    a.literal(),
                    b,
                    b.literal(),
                );
            }
        }
    }
}
