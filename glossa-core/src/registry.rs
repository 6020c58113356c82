//! Channel multiplexer: routes `(key, fragment)` deliveries to per-channel
//! parsers.
//!
//! Channels are fully independent - no event or buffer byte from one key is
//! ever visible under another. The registry owns each channel's state, so a
//! channel is disposable in O(1) with no shared mutable leftovers.
//!
//! Call discipline (the transport's responsibility): fragments for one key
//! arrive in order and are not delivered concurrently for the *same* key.
//! Different keys may interleave arbitrarily.

use std::collections::HashMap;
use std::hash::Hash;

use crate::channel::ChannelParser;
use crate::event::Event;
use crate::grammar;

/// Maps opaque channel keys to their parser state.
///
/// Channels are created lazily on first fragment and destroyed by
/// [`Registry::route_end`] or [`Registry::teardown`].
#[derive(Debug)]
pub struct Registry<K> {
    channels: HashMap<K, ChannelParser>,
}

impl<K: Eq + Hash + Clone> Registry<K> {
    /// Create an empty registry.
    ///
    /// Runs the grammar self-check: a marker set where one literal prefixes
    /// another is a configuration bug and panics here, at startup, rather
    /// than corrupting a parse later.
    pub fn new() -> Self {
        grammar::self_check();
        Self {
            channels: HashMap::new(),
        }
    }

    /// Deliver one fragment for `key`, creating the channel if it is new.
    ///
    /// Events are relayed to `sink` tagged with the key, in emission order.
    /// Fragments for a closed-but-not-yet-removed channel (one that hit a
    /// grammar violation) are swallowed; the key stays registered so a late
    /// fragment cannot resurrect it as a fresh channel.
    pub fn route(&mut self, key: K, fragment: &str, mut sink: impl FnMut(&K, Event)) {
        let parser = self.channels.entry(key.clone()).or_default();
        parser.append(fragment, |event| sink(&key, event));
    }

    /// Deliver the end-of-stream signal for `key`: final flush, then removal.
    ///
    /// Unknown keys are a no-op, not an error.
    pub fn route_end(&mut self, key: &K, mut sink: impl FnMut(&K, Event)) {
        if let Some(mut parser) = self.channels.remove(key) {
            parser.finish(|event| sink(key, event));
        }
    }

    /// Drop `key` immediately, discarding any unflushed buffer. Used for
    /// cancellation. Idempotent: unknown or already-removed keys are a no-op.
    pub fn teardown(&mut self, key: &K) {
        self.channels.remove(key);
    }

    /// Whether a channel currently exists for `key`.
    pub fn is_active(&self, key: &K) -> bool {
        self.channels.contains_key(key)
    }

    /// Number of channels currently held.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Check if no channels are active.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}
