//! Diagnostic sinks for decoded-frame reporting.
//!
//! The decoder can report every completed frame - matched or not - to a
//! [`DiagnosticSink`]. This is pure output: nothing a sink does feeds
//! back into decoding.

/// Receiver for per-frame diagnostic reports.
pub trait DiagnosticSink {
    /// Called once per reported frame.
    ///
    /// `label` is the matched pattern's display name, or the literal
    /// `"UNKNOWN"` for an unmatched frame. `raw` carries the frame
    /// bytes when the hex dump is enabled in the decoder configuration,
    /// and is `None` otherwise.
    fn frame_decoded(&mut self, label: &str, raw: Option<&[u8]>);
}

/// Sink that discards every report. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn frame_decoded(&mut self, _label: &str, _raw: Option<&[u8]>) {}
}

/// Sink printing `LABEL  XX XX ...` lines to stdout, for host use.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

#[cfg(feature = "std")]
impl DiagnosticSink for StdoutSink {
    fn frame_decoded(&mut self, label: &str, raw: Option<&[u8]>) {
        use navpad_proto::format::{hex_len, write_frame_hex};

        match raw {
            Some(frame) => {
                let mut buf = [0u8; hex_len(navpad_proto::MAX_FRAME)];
                let n = write_frame_hex(&mut buf, frame);
                // The dump is pure ASCII.
                let hex = core::str::from_utf8(&buf[..n]).unwrap_or("");
                std::println!("{label}  {hex}");
            }
            None => std::println!("{label}"),
        }
    }
}
