//! Test harness: event formatting, chunked feeding, and comparison.
//!
//! Chunk events are granular by design - how payload splits into chunks
//! depends on how the input was fragmented. [`normalize`] coalesces adjacent
//! chunk events of the same kind and index so event sequences can be compared
//! across different chunkings without weakening the ordering, completeness,
//! or exactly-once guarantees.

use glossa_core::{ChannelParser, Event};

use crate::common::{Gen, TestCase};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: String,
    pub fragments: Vec<String>,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub seed: u64,
    pub errors: Vec<String>,
}

/// Format event for comparison
pub fn format_event(event: &Event) -> String {
    match event {
        Event::MeaningStart => "MeaningStart".to_string(),
        Event::MeaningChunk { text } => format!("MeaningChunk {:?}", text),
        Event::ExamplesStart => "ExamplesStart".to_string(),
        Event::ItemStart { index } => format!("ItemStart {}", index),
        Event::ItemChunk { index, text } => format!("ItemChunk {} {:?}", index, text),
        Event::ItemComplete { index, text } => format!("ItemComplete {} {:?}", index, text),
        Event::StreamEnd {
            had_meaning,
            item_count,
        } => format!("StreamEnd meaning={} items={}", had_meaning, item_count),
        Event::Error { code, .. } => format!("Error {:?}", code),
    }
}

/// Feed the whole input as one fragment, then end the stream.
pub fn parse_one_shot(input: &str) -> Vec<Event> {
    parse_chunked(&[input.to_string()])
}

/// Feed the input as the given fragments, in order, then end the stream.
pub fn parse_chunked(fragments: &[String]) -> Vec<Event> {
    let mut events = Vec::new();
    let mut parser = ChannelParser::new();
    for fragment in fragments {
        parser.append(fragment, |e| events.push(e));
    }
    parser.finish(|e| events.push(e));
    events
}

/// Coalesce adjacent chunk events of the same kind and index.
pub fn normalize(events: Vec<Event>) -> Vec<Event> {
    let mut out: Vec<Event> = Vec::with_capacity(events.len());
    for event in events {
        match (out.last_mut(), &event) {
            (Some(Event::MeaningChunk { text }), Event::MeaningChunk { text: more }) => {
                text.push_str(more);
            }
            (
                Some(Event::ItemChunk { index, text }),
                Event::ItemChunk {
                    index: i,
                    text: more,
                },
            ) if index == i => {
                text.push_str(more);
            }
            _ => out.push(event),
        }
    }
    out
}

/// Run a single test case (canonical: whole input as one fragment)
pub fn run_test(case: &TestCase) -> TestResult {
    let events = parse_one_shot(&case.input);
    let actual: Vec<String> = events.iter().map(format_event).collect();
    compare(case, vec![case.input.clone()], actual, 0)
}

/// Run a test case with the input split into random fragments.
///
/// The normalized event stream must be identical to the canonical one no
/// matter where the splits land - including inside markers.
pub fn run_with_chunking(case: &TestCase, gen: &mut Gen) -> TestResult {
    let fragments = gen.split(&case.input);
    let events = normalize(parse_chunked(&fragments));
    let actual: Vec<String> = events.iter().map(format_event).collect();
    compare(case, fragments, actual, gen.seed)
}

fn compare(case: &TestCase, fragments: Vec<String>, actual: Vec<String>, seed: u64) -> TestResult {
    let expected = case.events.clone();
    let mut errors = Vec::new();

    if actual.len() != expected.len() {
        errors.push(format!(
            "Event count mismatch: expected {}, got {}",
            expected.len(),
            actual.len()
        ));
    }

    for (i, (act, exp)) in actual.iter().zip(expected.iter()).enumerate() {
        if act != exp {
            errors.push(format!("Event {}: expected '{}', got '{}'", i, exp, act));
        }
    }

    TestResult {
        passed: errors.is_empty(),
        input: case.input.clone(),
        fragments,
        expected,
        actual,
        seed,
        errors,
    }
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!(
            "Seed: {} (set GLOSSA_TEST_SEED={} to reproduce)",
            self.seed, self.seed
        );
        eprintln!("\nInput:\n{}", self.input);
        if self.fragments.len() > 1 {
            eprintln!("\nFragments:");
            for (i, f) in self.fragments.iter().enumerate() {
                eprintln!("  {}: {:?}", i, f);
            }
        }
        eprintln!("\nExpected events:");
        for (i, e) in self.expected.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nActual events:");
        for (i, e) in self.actual.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
