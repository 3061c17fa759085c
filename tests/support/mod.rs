//! Shared test doubles for `Transport` and `FileSink`, grounded in the
//! teacher crate's `tests/loopback.rs` channel-pipe pattern but
//! extended with per-call timeouts, since the spec requires two
//! distinct timeouts the teacher's infinite-blocking pipe never had to
//! express.
use std::collections::VecDeque;
use std::io;
use ymodem_receiver::{FileSink, Result, Transport};

/// A transport driven by a pre-scripted byte sequence (what the sender
/// "would have sent"), recording every byte the receiver emits in
/// response. `get_byte` treats an empty queue as an immediate timeout
/// rather than blocking, which is enough to drive every scenario in
/// SPEC_FULL §8 without real wall-clock waits.
pub struct ScriptedTransport {
	pub input: VecDeque<u8>,
	pub output: Vec<u8>,
}

impl ScriptedTransport {
	pub fn new(input: Vec<u8>) -> Self {
		ScriptedTransport { input: input.into(), output: Vec::new() }
	}
}

impl Transport for ScriptedTransport {
	fn get_byte(&mut self, _timeout_ms: u32) -> io::Result<Option<u8>> {
		Ok(self.input.pop_front())
	}

	fn put_byte(&mut self, byte: u8) -> io::Result<()> {
		self.output.push(byte);
		Ok(())
	}
}

/// A sink that records every file it was asked to receive, as
/// `(filename, declared_size, bytes)` tuples, and enforces a
/// configurable `max_file_size`.
pub struct CollectingSink {
	pub max_file_size: u64,
	pub files: Vec<(String, Option<u64>, Vec<u8>)>,
	current: Option<Vec<u8>>,
}

impl CollectingSink {
	pub fn new(max_file_size: u64) -> Self {
		CollectingSink { max_file_size, files: Vec::new(), current: None }
	}
}

impl FileSink for CollectingSink {
	fn max_file_size(&self) -> u64 {
		self.max_file_size
	}

	fn receive_start(&mut self, filename: &str, size: Option<u64>) -> Result<()> {
		self.files.push((filename.to_string(), size, Vec::new()));
		self.current = Some(Vec::new());
		Ok(())
	}

	fn process_data(&mut self, data: &[u8]) -> Result<()> {
		if let Some(buf) = self.current.as_mut() {
			buf.extend_from_slice(data);
		}
		Ok(())
	}

	fn receive_end(&mut self) -> Result<()> {
		if let (Some(buf), Some(last)) = (self.current.take(), self.files.last_mut()) {
			last.2 = buf;
		}
		Ok(())
	}
}

/// Frame one XMODEM/YMODEM-style packet: header, payload, big-endian
/// CRC-16/XMODEM trailer.
pub fn framed(kind: u8, seq: u8, payload: &[u8]) -> Vec<u8> {
	let mut bytes = vec![kind, seq, 0xFF - seq];
	bytes.extend_from_slice(payload);
	let crc = crc16::State::<crc16::XMODEM>::calculate(payload);
	bytes.extend_from_slice(&crc.to_be_bytes());
	bytes
}

/// Build a block-0 payload: `<filename>\0<size-field>\0<padding>`,
/// padded to `total_len` bytes.
pub fn block0_payload(filename: &str, size_field: &str, total_len: usize) -> Vec<u8> {
	let mut buf = Vec::with_capacity(total_len);
	buf.extend_from_slice(filename.as_bytes());
	buf.push(0);
	buf.extend_from_slice(size_field.as_bytes());
	buf.push(0);
	buf.resize(total_len, 0);
	buf
}

/// The empty block 0 that terminates a batch: an all-zero 128-byte
/// payload.
pub fn empty_block0() -> Vec<u8> {
	vec![0u8; 128]
}
