//! Button-press decoding for the nav remote's undelimited serial stream.
//!
//! The remote sends each key press as a short burst of bytes with no
//! length byte, terminator, or checksum; the only frame boundary is a
//! quiet gap on the line. [`Decoder`] turns that stream into discrete
//! button events:
//!
//! - **Frame assembly**: bytes are accumulated until the line is quiet
//!   for longer than the frame timeout (default 40 ms); over-length
//!   frames are force-flushed and restarted.
//! - **Pattern matching**: a completed frame is compared against the
//!   pattern table by exact length and content, first match wins.
//! - **Debounce gating**: repeats of the same button within the
//!   debounce window (default 180 ms) are suppressed; unmatched frames
//!   share one suppression timer and never become events.
//!
//! The decoder is a single-threaded polling state machine. It consumes
//! two narrow host interfaces, a non-blocking [`ByteSource`] and a
//! monotonic millisecond [`Clock`], and never blocks or panics in
//! normal operation.
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use std::collections::VecDeque;
//! use std::rc::Rc;
//!
//! use navpad_core::{Button, ByteSource, Clock, Decoder};
//!
//! struct Script(VecDeque<u8>);
//!
//! impl ByteSource for Script {
//!     fn available(&mut self) -> usize {
//!         self.0.len()
//!     }
//!     fn read(&mut self) -> Option<u8> {
//!         self.0.pop_front()
//!     }
//! }
//!
//! #[derive(Clone)]
//! struct SharedClock(Rc<Cell<u32>>);
//!
//! impl Clock for SharedClock {
//!     fn now_ms(&self) -> u32 {
//!         self.0.get()
//!     }
//! }
//!
//! let enter = [0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x4B, 0x4F, 0xCF, 0xCF, 0x4F, 0x4F, 0xFF];
//! let clock = SharedClock(Rc::new(Cell::new(0)));
//! let mut decoder = Decoder::new(Script(enter.iter().copied().collect()), clock.clone());
//!
//! decoder.process(); // drains the burst
//! clock.0.set(100); // quiet gap past the 40 ms frame timeout
//! decoder.process(); // flushes and matches
//!
//! assert_eq!(decoder.take_event(), Some(Button::Enter));
//! assert_eq!(decoder.take_event(), None); // one-shot
//! ```
//!
//! # Features
//!
//! - **`std`**: [`StdClock`] and [`StdoutSink`] for host use (plus
//!   standard library support in `navpad-proto`)
//! - **`defmt`**: Derive `defmt::Format` on public types (for embedded
//!   logging)
//! - **`embedded-io`**: [`IoByteSource`] adapter for `embedded-io`
//!   peripherals
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod clock;
pub mod decoder;
pub mod diag;
pub mod source;

// Re-export main types at crate root
pub use clock::Clock;
pub use decoder::{
    Decoder, DecoderConfig, RegisterError, DEFAULT_DEBOUNCE_MS, DEFAULT_FRAME_TIMEOUT_MS,
};
pub use diag::{DiagnosticSink, NullSink};
pub use source::ByteSource;

// Protocol data, re-exported for convenience
pub use navpad_proto::{Button, Pattern, BUILTIN, MAX_FRAME, MAX_PATTERNS};

#[cfg(feature = "std")]
pub use clock::StdClock;
#[cfg(feature = "std")]
pub use diag::StdoutSink;

#[cfg(feature = "embedded-io")]
pub use source::IoByteSource;
