//! Frame assembly, pattern matching, and debounce gating.

use heapless::Vec;
use navpad_proto::{Button, Pattern, BUILTIN, MAX_FRAME, MAX_PATTERNS};

use crate::clock::Clock;
use crate::diag::{DiagnosticSink, NullSink};
use crate::source::ByteSource;

/// Default inactivity gap that closes a frame (ms).
///
/// Longer than any legitimate inter-byte gap at the remote's cadence,
/// shorter than the gap between independent presses.
pub const DEFAULT_FRAME_TIMEOUT_MS: u32 = 40;

/// Default minimum spacing between accepted emissions of one
/// classification (ms).
pub const DEFAULT_DEBOUNCE_MS: u32 = 180;

/// Runtime decoder configuration.
///
/// Every field may be changed while the decoder is running; changes
/// take effect at the next decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderConfig {
    /// Inactivity gap that closes a frame (ms).
    pub frame_timeout_ms: u32,
    /// Debounce window per button, and for the shared unknown-frame
    /// timer (ms).
    pub debounce_ms: u32,
    /// Report each completed frame to the diagnostic sink.
    pub report_frames: bool,
    /// Include the raw frame bytes in diagnostic reports.
    pub report_hex: bool,
}

impl DecoderConfig {
    /// Protocol defaults, reporting enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frame_timeout_ms: DEFAULT_FRAME_TIMEOUT_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            report_frames: true,
            report_hex: true,
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a custom pattern was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// The pattern table is at capacity.
    TableFull,
    /// The pattern has no bytes.
    Empty,
    /// The pattern is longer than `MAX_FRAME`.
    Oversize,
}

/// Decodes button presses from an undelimited serial byte stream.
///
/// The stream has no framing of its own, so the decoder infers frame
/// boundaries from inter-byte timing: bytes are accumulated until the
/// line goes quiet for [`DecoderConfig::frame_timeout_ms`], then the
/// completed frame is matched against the pattern table by exact length
/// and content. An accepted match becomes a single pending event,
/// consumable exactly once; repeats of the same button inside the
/// debounce window are suppressed.
///
/// Drive it by calling [`process`](Decoder::process) at least once per
/// expected byte interval and consuming events with
/// [`take_event`](Decoder::take_event).
pub struct Decoder<S, C, D = NullSink> {
    source: S,
    clock: C,
    sink: D,
    config: DecoderConfig,

    // Assembler state
    frame: Vec<u8, MAX_FRAME>,
    last_byte_ms: u32,

    // Pattern table; `last_seen` is index-parallel, `None` = never
    // emitted so the first press is always accepted.
    patterns: Vec<Pattern, MAX_PATTERNS>,
    last_seen: Vec<Option<u32>, MAX_PATTERNS>,

    // One shared timer for all unknown frames, per decoder instance.
    last_unknown_ms: Option<u32>,

    // Event state
    event: Option<Button>,
    last_frame: Vec<u8, MAX_FRAME>,
}

impl<S: ByteSource, C: Clock> Decoder<S, C, NullSink> {
    /// Decoder with the built-in pattern table and no diagnostics.
    pub fn new(source: S, clock: C) -> Self {
        Self::with_sink(source, clock, NullSink)
    }
}

impl<S: ByteSource, C: Clock, D: DiagnosticSink> Decoder<S, C, D> {
    /// Decoder with the built-in pattern table, reporting frames to
    /// `sink` per the `report_*` configuration flags.
    pub fn with_sink(source: S, clock: C, sink: D) -> Self {
        let mut patterns = Vec::new();
        let mut last_seen = Vec::new();
        for p in BUILTIN {
            // BUILTIN fits: its length is asserted against
            // MAX_PATTERNS in navpad-proto's tests.
            let _ = patterns.push(*p);
            let _ = last_seen.push(None);
        }

        let last_byte_ms = clock.now_ms();
        Self {
            source,
            clock,
            sink,
            config: DecoderConfig::new(),
            frame: Vec::new(),
            last_byte_ms,
            patterns,
            last_seen,
            last_unknown_ms: None,
            event: None,
            last_frame: Vec::new(),
        }
    }

    /// Run one processing cycle.
    ///
    /// Clears any unconsumed event, drains every byte the source has
    /// ready, and flushes the frame buffer if the line has been quiet
    /// longer than the frame timeout. Never blocks.
    pub fn process(&mut self) {
        // One-shot contract: an event not consumed before this cycle
        // is dropped, never queued.
        self.event = None;

        while self.source.available() > 0 {
            let Some(byte) = self.source.read() else {
                break;
            };
            let now = self.clock.now_ms();
            if self.frame.push(byte).is_err() {
                // Overflow: flush what we have and restart the frame
                // with the overflowing byte. The truncated frame very
                // likely classifies as unknown, which the shared
                // unknown timer absorbs.
                self.flush_frame(now);
                let _ = self.frame.push(byte);
            }
            self.last_byte_ms = now;
        }

        let now = self.clock.now_ms();
        if !self.frame.is_empty()
            && now.wrapping_sub(self.last_byte_ms) > self.config.frame_timeout_ms
        {
            self.flush_frame(now);
        }
    }

    /// One-shot consume: the pending button, cleared on read.
    pub fn take_event(&mut self) -> Option<Button> {
        self.event.take()
    }

    /// Level check: whether an event is pending, without clearing it.
    #[must_use]
    pub fn has_event(&self) -> bool {
        self.event.is_some()
    }

    /// Raw bytes of the frame behind the most recently emitted event.
    #[must_use]
    pub fn last_frame(&self) -> &[u8] {
        &self.last_frame
    }

    /// Register a custom pattern.
    ///
    /// Appended after existing entries, so built-ins keep precedence in
    /// the first-match-wins scan. Nothing changes on rejection.
    pub fn add_pattern(&mut self, pattern: Pattern) -> Result<(), RegisterError> {
        if pattern.bytes().is_empty() {
            return Err(RegisterError::Empty);
        }
        if pattern.bytes().len() > MAX_FRAME {
            return Err(RegisterError::Oversize);
        }
        if self.patterns.is_full() {
            return Err(RegisterError::TableFull);
        }
        let _ = self.patterns.push(pattern);
        let _ = self.last_seen.push(None);
        Ok(())
    }

    /// Number of registered patterns, built-ins included.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Mutable configuration; changes apply at the next decision point.
    pub fn config_mut(&mut self) -> &mut DecoderConfig {
        &mut self.config
    }

    /// Get a reference to the byte source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the byte source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get a mutable reference to the diagnostic sink.
    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    /// Decompose the decoder into source, clock, and sink.
    pub fn into_parts(self) -> (S, C, D) {
        (self.source, self.clock, self.sink)
    }

    /// Classify and emit the buffered frame, then reset the buffer.
    /// No-op on an empty buffer.
    fn flush_frame(&mut self, now: u32) {
        if self.frame.is_empty() {
            return;
        }

        // Linear scan, first match wins; insertion order is the
        // precedence order.
        let matched = self.patterns.iter().position(|p| p.matches(&self.frame));

        match matched {
            Some(i) => {
                let accept = match self.last_seen[i] {
                    Some(t) => now.wrapping_sub(t) >= self.config.debounce_ms,
                    None => true,
                };
                if accept {
                    self.last_seen[i] = Some(now);
                    self.event = Some(self.patterns[i].id());
                    self.last_frame.clear();
                    let _ = self.last_frame.extend_from_slice(&self.frame);
                    if self.config.report_frames {
                        let name = self.patterns[i].name();
                        let raw = self.config.report_hex.then_some(self.frame.as_slice());
                        self.sink.frame_decoded(name, raw);
                    }
                }
                // Within the window: silently dropped.
            }
            None => {
                // Unknown frames never become events; one shared timer
                // keeps a noisy line from spamming the sink.
                let report = match self.last_unknown_ms {
                    Some(t) => now.wrapping_sub(t) >= self.config.debounce_ms,
                    None => true,
                };
                if report {
                    self.last_unknown_ms = Some(now);
                    if self.config.report_frames {
                        let raw = self.config.report_hex.then_some(self.frame.as_slice());
                        self.sink.frame_decoded("UNKNOWN", raw);
                    }
                }
            }
        }

        self.frame.clear();
    }
}
