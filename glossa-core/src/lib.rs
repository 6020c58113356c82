//! Glossa Core Parser
//!
//! Streaming, event-based parser for the word-explanation marker protocol.
//! Consumes arbitrarily-chunked raw text for many words in flight at once and
//! emits a strictly-ordered sequence of lifecycle events per word, without
//! re-emitting or losing payload that straddles a chunk boundary.
//!
//! # Architecture
//!
//! - **grammar.rs** - marker literals and the startup self-check
//! - **matcher.rs** - earliest-marker scan with split-tolerant withholding
//! - **event.rs** - Event enum and error codes
//! - **channel.rs** - per-channel state machine (append / finish)
//! - **registry.rs** - channel-key multiplexer with lazy creation
//! - **explanation.rs** - whole-value assembly layered over the events

pub mod channel;
pub mod event;
pub mod explanation;
pub mod grammar;
pub mod matcher;
pub mod registry;

pub use channel::{ChannelParser, Section};
pub use event::{Event, ParseErrorCode};
pub use explanation::{Explanation, ExplanationBuilder};
pub use grammar::Marker;
pub use matcher::{find_marker, Scan};
pub use registry::Registry;
