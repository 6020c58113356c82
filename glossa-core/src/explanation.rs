//! Assembled explanation built from parser events.
//!
//! This module provides a whole-value API layered over the streaming parser,
//! for consumers that want the finished meaning and example list rather than
//! incremental events (e.g. persisting a completed word once its stream
//! ends).
//!
//! # Example
//!
//! ```
//! use glossa_core::Explanation;
//!
//! let raw = "[[[WORD_MEANING]]]:{{A tiny word.}}\
//!            [[[EXAMPLES]]]:{{[[ITEM]]{{First ex.}}[[ITEM]]{{Second ex.}}}}";
//! let explanation = Explanation::parse(raw).unwrap();
//!
//! assert_eq!(explanation.meaning.as_deref(), Some("A tiny word."));
//! assert_eq!(explanation.examples, vec!["First ex.", "Second ex."]);
//! ```

use crate::channel::ChannelParser;
use crate::event::{Event, ParseErrorCode};

/// A word explanation assembled from one channel's event stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explanation {
    /// Full meaning text; `None` when the stream carried no meaning section.
    pub meaning: Option<String>,
    /// Example sentences, in stream order.
    pub examples: Vec<String>,
    /// True once the stream ended normally.
    pub complete: bool,
}

impl Explanation {
    /// Parse a complete raw response in one call.
    ///
    /// Convenience for non-streaming callers; a grammar violation anywhere in
    /// the input returns its error code.
    pub fn parse(input: &str) -> Result<Explanation, ParseErrorCode> {
        let mut builder = ExplanationBuilder::new();
        let mut error = None;
        let mut parser = ChannelParser::new();
        parser.append(input, |event| {
            if let Event::Error { code, .. } = event {
                error = Some(code);
            } else {
                builder.apply(&event);
            }
        });
        parser.finish(|event| builder.apply(&event));
        match error {
            Some(code) => Err(code),
            None => Ok(builder.finish()),
        }
    }
}

/// Incremental fold of events into an [`Explanation`].
///
/// Feed it every event for one channel, in order; order and exactly-once
/// delivery are the parser's guarantees, so the builder just accumulates.
#[derive(Debug, Default)]
pub struct ExplanationBuilder {
    explanation: Explanation,
}

impl ExplanationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event in. Error events are ignored here - whether a failed
    /// channel's partial content is worth keeping is the caller's call.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::MeaningStart => {
                self.explanation.meaning.get_or_insert_with(String::new);
            }
            Event::MeaningChunk { text } => {
                self.explanation
                    .meaning
                    .get_or_insert_with(String::new)
                    .push_str(text);
            }
            // ItemComplete carries the item's full text, so chunks need no
            // separate accumulation here.
            Event::ItemComplete { text, .. } => {
                self.explanation.examples.push(text.clone());
            }
            Event::StreamEnd { .. } => self.explanation.complete = true,
            Event::ExamplesStart
            | Event::ItemStart { .. }
            | Event::ItemChunk { .. }
            | Event::Error { .. } => {}
        }
    }

    /// Surrender the assembled explanation.
    pub fn finish(self) -> Explanation {
        self.explanation
    }

    /// Peek at the value assembled so far.
    pub fn current(&self) -> &Explanation {
        &self.explanation
    }
}
