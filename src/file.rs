use crate::block0::{parse_block0, Block0};
use crate::consts::{ACK, CAN, CRC, NAK};
use crate::error::{Error, Result};
use crate::packet::{receive_packet, PacketKind};
use crate::sink::FileSink;
use crate::transport::Transport;
use log::{debug, warn};

/// Outcome of receiving one file, distinct from the terminal `Err`
/// outcomes (`Aborted`, `ExhaustedRetries`, ...) which the caller
/// receives through the ordinary `Result` channel.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FileOutcome {
	/// This file completed; the sender may have more files queued.
	Continue,
	/// Block 0 was empty: the batch is over.
	EndOfBatch,
}

/// RAII replacement for the C source's goto-to-cleanup-label pattern:
/// calls `FileSink::receive_end` exactly once, on every exit path,
/// once `receive_start` has succeeded.
///
/// The normal completion path must call [`FileSession::finish`] so a
/// failing `receive_end` surfaces as `Error::SinkRejected` to the
/// caller, the same as a failing `receive_start`/`process_data`.
/// `Drop` only runs `receive_end` itself as the fallback for abort and
/// early-return paths, where there is no `Result` to report it through.
struct FileSession<'a, S: FileSink> {
	sink: &'a mut S,
	finished: bool,
}

impl<'a, S: FileSink> FileSession<'a, S> {
	fn new(sink: &'a mut S) -> Self {
		FileSession { sink, finished: false }
	}

	/// Finalize the file on the normal completion path.
	fn finish(mut self) -> Result<()> {
		self.finished = true;
		self.sink.receive_end().map_err(|err| {
			debug!("receive_end rejected: {:?}", err);
			Error::SinkRejected
		})
	}
}

impl<'a, S: FileSink> Drop for FileSession<'a, S> {
	fn drop(&mut self) {
		if !self.finished {
			if let Err(err) = self.sink.receive_end() {
				warn!("receive_end failed: {:?}", err);
			}
		}
	}
}

/// Drive the per-file handshake (SPEC_FULL §4.4) to completion.
pub(crate) fn receive_file<T: Transport, S: FileSink>(
	transport: &mut T,
	sink: &mut S,
	scratch: &mut [u8],
	filename_buf: &mut [u8],
	max_retry: u32,
	packet_timeout_ms: u32,
	char_timeout_ms: u32,
) -> Result<FileOutcome> {
	// Phase A: solicit and obtain block 0.
	transport.put_byte(CRC)?;

	let (filename_len, size) = loop {
		let mut retries = 0;
		let block0 = loop {
			let pkt = receive_packet(transport, scratch, packet_timeout_ms, char_timeout_ms)?;
			match pkt {
				PacketKind::Timeout => {
					transport.put_byte(CRC)?;
					retries += 1;
				}
				PacketKind::Broken | PacketKind::Eot | PacketKind::Ack | PacketKind::Nak => {
					transport.put_byte(NAK)?;
					retries += 1;
				}
				PacketKind::Can => {
					transport.put_byte(ACK)?;
					return Err(Error::Aborted);
				}
				PacketKind::Data { seq, .. } if seq != 0 => {
					transport.put_byte(NAK)?;
					retries += 1;
				}
				PacketKind::Data { length, .. } => break Some(length),
			}
			if retries >= max_retry {
				break None;
			}
		};

		let length = match block0 {
			Some(length) => length,
			None => {
				send_cancel(transport)?;
				return Err(Error::ExhaustedRetries);
			}
		};

		match parse_block0(&scratch[..length], filename_buf) {
			Block0::Error => {
				send_cancel(transport)?;
				return Err(Error::InvalidBlockZero);
			}
			Block0::Empty => {
				transport.put_byte(ACK)?;
				return Ok(FileOutcome::EndOfBatch);
			}
			Block0::Ok { filename_len, size } => {
				if let Some(declared) = size {
					if declared > sink.max_file_size() {
						send_cancel(transport)?;
						return Err(Error::FileTooLarge);
					}
				}
				transport.put_byte(ACK)?;
				break (filename_len, size);
			}
		}
	};

	let filename = match core::str::from_utf8(&filename_buf[..filename_len]) {
		Ok(filename) => filename,
		Err(err) => {
			debug!("block 0 filename is not valid UTF-8: {:?}", err);
			send_cancel(transport)?;
			return Err(Error::InvalidBlockZero);
		}
	};
	if let Err(err) = sink.receive_start(filename, size) {
		debug!("receive_start rejected {}: {:?}", filename, err);
		send_cancel(transport)?;
		return Err(Error::SinkRejected);
	}
	let session = FileSession::new(sink);

	// Phase B: data blocks.
	receive_data_blocks(
		transport,
		session,
		scratch,
		size,
		max_retry,
		packet_timeout_ms,
		char_timeout_ms,
	)
}

fn receive_data_blocks<T: Transport, S: FileSink>(
	transport: &mut T,
	mut session: FileSession<'_, S>,
	scratch: &mut [u8],
	declared_size: Option<u64>,
	max_retry: u32,
	packet_timeout_ms: u32,
	char_timeout_ms: u32,
) -> Result<FileOutcome> {
	let mut expected: u8 = 1;
	let mut bytes_received: u64 = 0;

	transport.put_byte(CRC)?;
	loop {
		let mut retries = 0;
		let packet = loop {
			let pkt = receive_packet(transport, scratch, packet_timeout_ms, char_timeout_ms)?;
			match pkt {
				PacketKind::Timeout | PacketKind::Broken | PacketKind::Ack | PacketKind::Nak => {
					transport.put_byte(NAK)?;
					retries += 1;
				}
				PacketKind::Eot => break Some(None),
				PacketKind::Can => {
					transport.put_byte(ACK)?;
					return Err(Error::Aborted);
				}
				PacketKind::Data { seq, .. } if seq != expected => {
					debug!("out of sequence (expected {}, got {})", expected, seq);
					transport.put_byte(NAK)?;
					retries += 1;
				}
				PacketKind::Data { length, .. } => break Some(Some(length)),
			}
			if retries >= max_retry {
				break None;
			}
		};

		let length = match packet {
			Some(Some(length)) => length,
			Some(None) => {
				transport.put_byte(ACK)?;
				session.finish()?;
				return Ok(FileOutcome::Continue);
			}
			None => {
				send_cancel(transport)?;
				return Err(Error::ExhaustedRetries);
			}
		};

		let usable = match declared_size {
			Some(total) => {
				let remaining = total.saturating_sub(bytes_received);
				remaining.min(length as u64) as usize
			}
			None => length,
		};

		if let Err(err) = session.sink.process_data(&scratch[..usable]) {
			debug!("process_data rejected block {}: {:?}", expected, err);
			send_cancel(transport)?;
			return Err(Error::SinkRejected);
		}
		bytes_received += usable as u64;
		transport.put_byte(ACK)?;
		expected = expected.wrapping_add(1);
	}
}

fn send_cancel<T: Transport>(transport: &mut T) -> Result<()> {
	transport.put_byte(CAN)?;
	transport.put_byte(CAN)?;
	Ok(())
}
