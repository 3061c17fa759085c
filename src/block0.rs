/// Result of parsing a block-0 payload, per SPEC_FULL §4.3.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Block0 {
	/// An all-zero payload: the sender has no more files to send.
	Empty,
	/// `filename_len` bytes of `filename_buf` hold the name (not
	/// null-terminated in the Rust representation); `size` is the
	/// declared length, if the sender supplied one.
	Ok { filename_len: usize, size: Option<u64> },
	/// The payload could not be parsed.
	Error,
}

/// Parse a block-0 payload, copying the filename into `filename_buf`
/// (capped at `filename_buf.len() - 1` bytes, matching the C source's
/// `stpncpy`-into-`YM_FILE_NAME_LENGTH` behavior).
///
/// This never assumes a NUL terminator exists within `payload` beyond
/// what it has already located; every scan is bounded by `payload`'s
/// length.
pub(crate) fn parse_block0(payload: &[u8], filename_buf: &mut [u8]) -> Block0 {
	if payload.is_empty() || payload[0] == 0 {
		return Block0::Empty;
	}

	let name_end = match payload.iter().position(|&b| b == 0) {
		Some(idx) => idx,
		None => return Block0::Error,
	};

	let copy_len = name_end.min(filename_buf.len().saturating_sub(1));
	filename_buf[..copy_len].copy_from_slice(&payload[..copy_len]);
	let filename_len = copy_len;

	let size_start = name_end + 1;
	let size = match payload.get(size_start) {
		None => return Block0::Error,
		Some(b' ') => None,
		Some(b) if b.is_ascii_digit() => {
			let mut value: u64 = 0;
			let mut idx = size_start;
			while let Some(&digit) = payload.get(idx) {
				if !digit.is_ascii_digit() {
					break;
				}
				value = value.saturating_mul(10).saturating_add((digit - b'0') as u64);
				idx += 1;
			}
			Some(value)
		}
		Some(_) => return Block0::Error,
	};

	Block0::Ok { filename_len, size }
}
