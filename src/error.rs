#[cfg(not(feature = "std"))]
use core_io as io;
#[cfg(feature = "std")]
use std::io;

/// Result type used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can go wrong while receiving a YMODEM batch.
#[derive(Debug)]
pub enum Error {
	/// A transport read or write failed.
	Io(io::Error),

	/// The retry budget for the current protocol step was spent without a
	/// usable packet arriving.
	ExhaustedRetries,

	/// The sender canceled the transfer with two consecutive `CAN` bytes.
	Aborted,

	/// Block 0's payload could not be parsed (unbounded filename, or a size
	/// field that is neither a space nor a decimal digit).
	InvalidBlockZero,

	/// Block 0 declared a file larger than `FileSink::max_file_size`.
	FileTooLarge,

	/// `FileSink::receive_start`, `process_data`, or `receive_end` returned
	/// an error.
	SinkRejected,
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Error {
		Error::Io(err)
	}
}

impl core::fmt::Display for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Error::Io(err) => write!(f, "transport I/O error: {}", err),
			Error::ExhaustedRetries => {
				write!(f, "retry budget exhausted")
			}
			Error::Aborted => write!(f, "transfer aborted by sender"),
			Error::InvalidBlockZero => {
				write!(f, "block 0 payload could not be parsed")
			}
			Error::FileTooLarge => {
				write!(f, "declared file size exceeds max_file_size")
			}
			Error::SinkRejected => write!(f, "sink rejected the transfer"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}
