//! Non-blocking byte source trait.

/// A non-blocking source of raw serial bytes.
///
/// This is the decoder's only view of the transport. Implementations
/// wrap whatever produces the bytes (a UART driver, an OS serial port,
/// a test script) and must never block in either method: the decoder is
/// a cooperative polling state machine and relies on both calls
/// returning immediately.
pub trait ByteSource {
    /// Number of bytes currently readable without blocking.
    ///
    /// Implementations that cannot count buffered bytes may return any
    /// non-zero value while data is ready and 0 otherwise.
    fn available(&mut self) -> usize;

    /// Read one byte, or `None` when nothing is buffered.
    fn read(&mut self) -> Option<u8>;
}

/// [`ByteSource`] adapter for `embedded-io` peripherals.
///
/// Wraps any reader that can also report readiness, e.g. a HAL UART
/// driver, so it can feed the decoder without blocking.
#[cfg(feature = "embedded-io")]
pub struct IoByteSource<R> {
    inner: R,
}

#[cfg(feature = "embedded-io")]
impl<R> IoByteSource<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "embedded-io")]
impl<R> ByteSource for IoByteSource<R>
where
    R: embedded_io::Read + embedded_io::ReadReady,
{
    fn available(&mut self) -> usize {
        // ReadReady only reports a boolean; treat errors as no data.
        match self.inner.read_ready() {
            Ok(true) => 1,
            _ => 0,
        }
    }

    fn read(&mut self) -> Option<u8> {
        match self.inner.read_ready() {
            Ok(true) => {
                let mut byte = [0u8; 1];
                match self.inner.read(&mut byte) {
                    Ok(n) if n > 0 => Some(byte[0]),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
