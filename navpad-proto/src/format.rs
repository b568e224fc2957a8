//! No-std hex formatting for diagnostic frame dumps.
//!
//! These functions write directly to caller-supplied buffers without
//! heap allocation or the standard library.

/// Hex digits lookup table for fast conversion.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Buffer size needed to hex-dump a frame of `len` bytes.
#[must_use]
pub const fn hex_len(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        3 * len - 1
    }
}

/// Write a frame as two uppercase hex digits per byte, space separated.
///
/// Produces e.g. `00 4B FF` with no trailing space. Returns the number
/// of bytes written.
///
/// # Panics
///
/// Panics if `buf.len() < hex_len(frame.len())`.
pub fn write_frame_hex(buf: &mut [u8], frame: &[u8]) -> usize {
    debug_assert!(
        buf.len() >= hex_len(frame.len()),
        "buffer too small for frame hex dump"
    );
    let mut pos = 0;
    for (i, &b) in frame.iter().enumerate() {
        if i > 0 {
            buf[pos] = b' ';
            pos += 1;
        }
        buf[pos] = HEX_DIGITS[(b >> 4) as usize];
        buf[pos + 1] = HEX_DIGITS[(b & 0x0F) as usize];
        pos += 2;
    }
    pos
}

/// Hex-dump a frame into a `heapless::String`.
///
/// Output is silently truncated if `N < hex_len(frame.len())`; size the
/// string with [`hex_len`] to avoid that.
#[cfg(feature = "heapless")]
#[must_use]
pub fn frame_hex_string<const N: usize>(frame: &[u8]) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for (i, &b) in frame.iter().enumerate() {
        if i > 0 && out.push(' ').is_err() {
            break;
        }
        if out.push(HEX_DIGITS[(b >> 4) as usize] as char).is_err() {
            break;
        }
        if out.push(HEX_DIGITS[(b & 0x0F) as usize] as char).is_err() {
            break;
        }
    }
    out
}
