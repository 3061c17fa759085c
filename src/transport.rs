#[cfg(not(feature = "std"))]
use core_io as io;
#[cfg(feature = "std")]
use std::io;

/// Byte-level transport capability: blocking reads with an explicit
/// per-call timeout, and best-effort writes.
///
/// This is the trait form of the C reference implementation's
/// `ymodem_getByte_t`/`ymodem_putByte_t` callbacks. The engine never
/// assumes a fixed timeout for the whole session: it asks for the
/// **packet-start timeout** on the first byte of a packet and the
/// (shorter) **character timeout** on every byte after that, so a
/// single `Read`/`Write` pair configured with one timeout by the
/// caller (as the teacher crate's `Xmodem::recv` requires) cannot
/// stand in for this trait.
pub trait Transport {
	/// Block for up to `timeout_ms` milliseconds waiting for one byte.
	/// Returns `Ok(None)` on timeout, never blocking indefinitely.
	fn get_byte(&mut self, timeout_ms: u32) -> io::Result<Option<u8>>;

	/// Transmit one byte. Best effort; any failure is surfaced as an
	/// ordinary I/O error rather than swallowed.
	fn put_byte(&mut self, byte: u8) -> io::Result<()>;
}
