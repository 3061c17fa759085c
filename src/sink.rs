use crate::error::Result;

/// File-lifecycle capability: where received bytes end up.
///
/// Trait form of the C reference implementation's
/// `ymodem_maxFileSize_t`/`ymodem_receiveStart_t`/`ymodem_processData_t`/
/// `ymodem_receiveEnd_t` callbacks. `receive_end` is called exactly once
/// per file for which `receive_start` succeeded, regardless of whether
/// the file completed normally, was aborted, or errored out.
pub trait FileSink {
	/// Upper bound on the declared file size this sink is willing to
	/// accept. Files larger than this cause the transfer to be
	/// canceled before `receive_start` is ever called.
	fn max_file_size(&self) -> u64;

	/// Prepare to receive a file (e.g. open it). `size` is `None` when
	/// the sender omitted the size field in block 0.
	fn receive_start(&mut self, filename: &str, size: Option<u64>) -> Result<()>;

	/// Persist one data block's worth of bytes, in order.
	fn process_data(&mut self, data: &[u8]) -> Result<()>;

	/// Finalize the file (e.g. close it). Called once `receive_start`
	/// has succeeded, no matter how the file ended.
	fn receive_end(&mut self) -> Result<()>;
}
