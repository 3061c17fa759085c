use crate::consts::{
	DEFAULT_CHAR_TIMEOUT_MS, DEFAULT_FILENAME_LEN, DEFAULT_MAX_RETRY, DEFAULT_PACKET_TIMEOUT_MS,
};
use crate::error::Result;
use crate::file::{receive_file, FileOutcome};
use crate::sink::FileSink;
use crate::transport::Transport;
use log::info;

/// A YMODEM receive session.
///
/// Owns the per-packet scratch buffer and the filename buffer so that
/// neither is heap-allocated; both are reused across files within the
/// same batch. Construct with [`YmodemReceiver::new`] and drive a
/// whole batch with [`YmodemReceiver::receive`].
pub struct YmodemReceiver {
	/// Retry budget per protocol step. Defaults to 5, per the spec.
	pub max_retry: u32,
	/// Timeout, in milliseconds, applied to the first byte of a
	/// packet. Defaults to 10000.
	pub packet_timeout_ms: u32,
	/// Timeout, in milliseconds, applied to every byte after the
	/// first within a packet. Defaults to 1000.
	pub char_timeout_ms: u32,

	scratch: [u8; 1024],
	filename_buf: [u8; DEFAULT_FILENAME_LEN],
}

impl YmodemReceiver {
	/// Create a receiver with the spec's default timeouts and retry
	/// budget.
	pub fn new() -> Self {
		YmodemReceiver {
			max_retry: DEFAULT_MAX_RETRY,
			packet_timeout_ms: DEFAULT_PACKET_TIMEOUT_MS,
			char_timeout_ms: DEFAULT_CHAR_TIMEOUT_MS,
			scratch: [0u8; 1024],
			filename_buf: [0u8; DEFAULT_FILENAME_LEN],
		}
	}

	/// Receive a whole batch: one or more files, terminated by an
	/// empty block 0. Returns `Ok(())` iff the batch ended cleanly;
	/// any other outcome (abort, exhausted retries, a rejecting sink,
	/// ...) is an `Err`.
	pub fn receive<T: Transport, S: FileSink>(
		&mut self,
		transport: &mut T,
		sink: &mut S,
	) -> Result<()> {
		loop {
			let outcome = receive_file(
				transport,
				sink,
				&mut self.scratch,
				&mut self.filename_buf,
				self.max_retry,
				self.packet_timeout_ms,
				self.char_timeout_ms,
			)?;
			match outcome {
				FileOutcome::Continue => continue,
				FileOutcome::EndOfBatch => {
					info!("batch complete");
					return Ok(());
				}
			}
		}
	}
}

impl Default for YmodemReceiver {
	fn default() -> Self {
		Self::new()
	}
}
