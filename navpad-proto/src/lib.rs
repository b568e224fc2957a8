//! Protocol data for the vehicle navigation remote controller.
//!
//! The remote transmits each button press as a short run of bytes over a
//! plain asynchronous serial link (2400 baud 8N1 on the original unit).
//! There is no framing on the wire: no length byte, no terminator, no
//! checksum. A button code is simply a fixed byte sequence, and the only
//! frame boundary is silence on the line.
//!
//! This crate holds the pure data side of that protocol:
//!
//! - [`Button`] - symbolic identifiers for the decoded keys
//! - [`Pattern`] - a reference byte sequence bound to a [`Button`]
//! - [`BUILTIN`] - the known button codes of the remote, in precedence
//!   order
//! - [`format`] - no-std hex dump helpers for diagnostic output
//!
//! The stateful decoder (frame assembly, matching, debounce) lives in
//! `navpad-core`.
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Derive `defmt::Format` on public types (for embedded
//!   logging)
//! - **`heapless`**: Enable [`format::frame_hex_string`]
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod format;
pub mod patterns;
pub mod types;

pub use patterns::{BUILTIN, MAX_FRAME, MAX_PATTERNS};
pub use types::{Button, Pattern};
