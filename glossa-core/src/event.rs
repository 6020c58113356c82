//! Parser events - the core output of the glossa streaming parser.
//!
//! This is a SAX-style event model: events are emitted as the parser crosses
//! markers in the stream, with payload delivered incrementally as chunk
//! events. No payload byte is ever emitted twice or dropped; only the open
//! item keeps an accumulated copy (surrendered in [`Event::ItemComplete`]).
//!
//! ## Event sequences
//!
//! A well-formed stream with two examples emits:
//! ```text
//! MeaningStart
//! MeaningChunk { text }          // one or more, depending on delivery
//! ExamplesStart
//! ItemStart { index: 0 }
//! ItemChunk { index: 0, text }   // one or more
//! ItemComplete { index: 0, text }
//! ItemStart { index: 1 }
//! ...
//! StreamEnd { had_meaning: true, item_count: 2 }
//! ```
//!
//! These types are stable and hand-written (not generated).

use crate::channel::Section;

/// Streaming parser events for one channel.
///
/// Chunk events carry owned text: the fragment a chunk came from is consumed
/// before the parser returns, so borrowing from it is not an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The meaning section opened: `[[[WORD_MEANING]]]:{{`
    MeaningStart,

    /// A run of meaning payload. Concatenating all meaning chunks yields the
    /// full meaning text.
    MeaningChunk { text: String },

    /// The examples block opened: `[[[EXAMPLES]]]:{{`
    ExamplesStart,

    /// An example item opened: `[[ITEM]]{{`. Indexes are 0-based.
    ItemStart { index: usize },

    /// A run of payload for the open example item.
    ItemChunk { index: usize, text: String },

    /// The example item closed; `text` is the concatenation of every chunk
    /// previously emitted for this index.
    ItemComplete { index: usize, text: String },

    /// End of stream for this channel. `had_meaning` is false when no marker
    /// was ever seen (empty result); `item_count` is the number of items
    /// started.
    StreamEnd { had_meaning: bool, item_count: usize },

    /// Unrecoverable grammar violation. The channel stops consuming input;
    /// events already emitted stand. `section` is where the parse was when
    /// the violation occurred.
    Error { code: ParseErrorCode, section: Section },
}

impl Event {
    /// Check if this is an error event.
    pub fn is_error(&self) -> bool {
        matches!(self, Event::Error { .. })
    }

    /// Check if this event closes the channel (normal or error path).
    pub fn is_final(&self) -> bool {
        matches!(self, Event::StreamEnd { .. } | Event::Error { .. })
    }

    /// Payload text carried by this event, if it is a chunk event.
    pub fn chunk_text(&self) -> Option<&str> {
        match self {
            Event::MeaningChunk { text } | Event::ItemChunk { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Error codes for grammar violations.
///
/// Using an enum instead of String eliminates the 24-byte String overhead
/// and removes heap allocation for error events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParseErrorCode {
    /// `[[ITEM]]{{` seen outside an open examples block
    ItemBeforeExamples = 0,
    /// `[[[EXAMPLES]]]:{{` seen before any meaning section
    ExamplesBeforeMeaning,
    /// A second `[[[WORD_MEANING]]]:{{`
    DuplicateMeaning,
    /// A second `[[[EXAMPLES]]]:{{`
    DuplicateExamples,
}

impl ParseErrorCode {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::ItemBeforeExamples => "item marker outside examples block",
            Self::ExamplesBeforeMeaning => "examples block before meaning",
            Self::DuplicateMeaning => "duplicate meaning section",
            Self::DuplicateExamples => "duplicate examples block",
        }
    }
}

impl std::fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ParseErrorCode {}
