//! Per-channel parse state machine.
//!
//! One [`ChannelParser`] owns the parse of one word's explanation stream. It
//! is synchronous and run-to-completion: `append` consumes a fragment, runs
//! the matcher until no further progress is possible, and hands every
//! resulting event to the sink before returning. Correctness does not depend
//! on how the stream was fragmented - only on fragments arriving in order.
//!
//! The buffer stays bounded: payload is flushed as soon as it is known not to
//! be the start of a marker, so at most `MAX_MARKER_LEN - 1` bytes are ever
//! withheld across a fragment boundary.

use std::mem;

use crate::event::{Event, ParseErrorCode};
use crate::grammar::Marker;
use crate::matcher::{find_marker, Scan};

/// Position in the grammar's fixed section order.
///
/// Only moves forward; [`Section::Failed`] and [`Section::Done`] are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    /// Nothing matched yet; waiting for the meaning opener.
    BeforeMeaning,
    /// Inside the meaning payload.
    InMeaning,
    /// Meaning closed; waiting for the examples opener.
    AfterMeaning,
    /// Examples block open; waiting for the first item or the block close.
    ExamplesIdle,
    /// Inside an item payload.
    InItem,
    /// An item closed; waiting for the next item or the block close.
    BetweenItems,
    /// Examples block closed; trailing bytes are ignored.
    Done,
    /// Grammar violation; no further input is consumed.
    Failed,
}

impl Section {
    /// Markers legal (or detectably illegal) in this section. Payload
    /// sections scan only for their closers - payload bytes are opaque, so a
    /// marker from elsewhere in the grammar is just text there.
    fn candidates(self) -> &'static [Marker] {
        use Marker::*;
        match self {
            Section::BeforeMeaning => &[MeaningOpen, ExamplesOpen, ItemOpen],
            Section::InMeaning => &[Close],
            Section::AfterMeaning => &[ExamplesOpen, MeaningOpen, ItemOpen],
            Section::ExamplesIdle => &[ItemOpen, Close, MeaningOpen, ExamplesOpen],
            Section::InItem => &[Close, ItemOpen],
            Section::BetweenItems => &[ItemOpen, Close, MeaningOpen, ExamplesOpen],
            Section::Done | Section::Failed => &[],
        }
    }

    /// Whether bytes in this section are payload (flushed as chunk events)
    /// rather than inter-marker noise (discarded).
    fn is_payload(self) -> bool {
        matches!(self, Section::InMeaning | Section::InItem)
    }
}

/// State machine for one channel's explanation stream.
#[derive(Debug)]
pub struct ChannelParser {
    /// Unconsumed tail of the input: at most a withheld marker prefix, plus
    /// whatever of the current fragment has not been scanned yet.
    buf: String,
    section: Section,
    /// Ordinal of the current/last item (0-based).
    item_index: usize,
    /// Items started so far; reported in `StreamEnd`.
    item_count: usize,
    /// Accumulated text of the open item, surrendered in `ItemComplete`.
    item_text: String,
    had_meaning: bool,
    closed: bool,
}

impl ChannelParser {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            section: Section::BeforeMeaning,
            item_index: 0,
            item_count: 0,
            item_text: String::new(),
            had_meaning: false,
            closed: false,
        }
    }

    /// Consume one fragment, emitting events to `sink` in order.
    ///
    /// Fragments of any length are legal, including empty. After the channel
    /// is closed (end-of-stream or grammar violation) appends are ignored.
    pub fn append(&mut self, fragment: &str, mut sink: impl FnMut(Event)) {
        if self.closed {
            return;
        }
        self.buf.push_str(fragment);
        self.run(&mut sink);
    }

    /// Signal end-of-stream.
    ///
    /// A section left open at stream end is closed implicitly: the withheld
    /// buffer flushes as one final chunk and an open item completes with
    /// whatever it accumulated. This is deliberate - a cut network connection
    /// should surrender the text it carried, not turn into an error.
    pub fn finish(&mut self, mut sink: impl FnMut(Event)) {
        if self.closed {
            return;
        }
        match self.section {
            Section::InMeaning => {
                self.flush(self.buf.len(), &mut sink);
            }
            Section::InItem => {
                self.flush(self.buf.len(), &mut sink);
                sink(Event::ItemComplete {
                    index: self.item_index,
                    text: mem::take(&mut self.item_text),
                });
            }
            _ => {}
        }
        sink(Event::StreamEnd {
            had_meaning: self.had_meaning,
            item_count: self.item_count,
        });
        self.section = Section::Done;
        self.buf.clear();
        self.closed = true;
    }

    /// True once an end signal or a grammar violation has been processed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Current position in the grammar.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Scan the buffer repeatedly until no further progress is possible.
    fn run(&mut self, sink: &mut impl FnMut(Event)) {
        loop {
            match find_marker(self.buf.as_bytes(), self.section.candidates()) {
                Scan::NoMatch => {
                    self.flush(self.buf.len(), sink);
                    break;
                }
                Scan::PartialSuffix { withheld } => {
                    self.flush(self.buf.len() - withheld, sink);
                    break;
                }
                Scan::Found { marker, start } => {
                    self.flush(start, sink);
                    self.buf.drain(..marker.len());
                    self.on_marker(marker, sink);
                    if self.closed {
                        self.buf.clear();
                        break;
                    }
                }
            }
        }
    }

    /// Release the first `len` buffered bytes: as a chunk event inside a
    /// payload section, silently otherwise (text between markers carries no
    /// meaning and has no event kind).
    fn flush(&mut self, len: usize, sink: &mut impl FnMut(Event)) {
        if len == 0 {
            return;
        }
        // Marker literals are ASCII, so `len` always lands on a character
        // boundary: it is either a fragment join or the start of a marker.
        let text: String = self.buf.drain(..len).collect();
        match self.section {
            Section::InMeaning => sink(Event::MeaningChunk { text }),
            Section::InItem => {
                self.item_text.push_str(&text);
                sink(Event::ItemChunk {
                    index: self.item_index,
                    text,
                });
            }
            _ => {}
        }
    }

    fn on_marker(&mut self, marker: Marker, sink: &mut impl FnMut(Event)) {
        use Marker::*;
        use Section::*;
        match (self.section, marker) {
            (BeforeMeaning, MeaningOpen) => {
                self.had_meaning = true;
                self.section = InMeaning;
                sink(Event::MeaningStart);
            }
            (BeforeMeaning, ExamplesOpen) => {
                self.fail(ParseErrorCode::ExamplesBeforeMeaning, sink)
            }
            (BeforeMeaning, ItemOpen) => self.fail(ParseErrorCode::ItemBeforeExamples, sink),

            (InMeaning, Close) => self.section = AfterMeaning,

            (AfterMeaning, ExamplesOpen) => {
                self.section = ExamplesIdle;
                sink(Event::ExamplesStart);
            }
            (AfterMeaning, MeaningOpen) => self.fail(ParseErrorCode::DuplicateMeaning, sink),
            (AfterMeaning, ItemOpen) => self.fail(ParseErrorCode::ItemBeforeExamples, sink),

            (ExamplesIdle, ItemOpen) => {
                self.item_index = 0;
                self.item_count = 1;
                self.section = InItem;
                sink(Event::ItemStart { index: 0 });
            }
            (ExamplesIdle, Close) => self.section = Done,
            (ExamplesIdle, MeaningOpen) => self.fail(ParseErrorCode::DuplicateMeaning, sink),
            (ExamplesIdle, ExamplesOpen) => self.fail(ParseErrorCode::DuplicateExamples, sink),

            (InItem, Close) => {
                self.section = BetweenItems;
                sink(Event::ItemComplete {
                    index: self.item_index,
                    text: mem::take(&mut self.item_text),
                });
            }
            // A new item opener with no close for the previous one: complete
            // the open item and start the next rather than swallowing both.
            (InItem, ItemOpen) => {
                sink(Event::ItemComplete {
                    index: self.item_index,
                    text: mem::take(&mut self.item_text),
                });
                self.item_index += 1;
                self.item_count += 1;
                sink(Event::ItemStart {
                    index: self.item_index,
                });
            }

            (BetweenItems, ItemOpen) => {
                self.item_index += 1;
                self.item_count += 1;
                self.section = InItem;
                sink(Event::ItemStart {
                    index: self.item_index,
                });
            }
            (BetweenItems, Close) => self.section = Done,
            (BetweenItems, MeaningOpen) => self.fail(ParseErrorCode::DuplicateMeaning, sink),
            (BetweenItems, ExamplesOpen) => self.fail(ParseErrorCode::DuplicateExamples, sink),

            // Pairs outside the section's candidate set: the matcher never
            // reports them (terminal sections scan with no candidates at
            // all), so there is nothing to do.
            _ => {}
        }
    }

    fn fail(&mut self, code: ParseErrorCode, sink: &mut impl FnMut(Event)) {
        sink(Event::Error {
            code,
            section: self.section,
        });
        self.section = Section::Failed;
        self.closed = true;
    }
}

impl Default for ChannelParser {
    fn default() -> Self {
        Self::new()
    }
}
