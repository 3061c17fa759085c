//! A YMODEM receiver: the protocol state machine and framing logic for
//! pulling one or more files over a byte-oriented, half-duplex serial
//! link (typically a UART).
//!
//! This crate is the protocol engine only. It does not own a serial
//! port, a filesystem, or a clock; the host implements two small
//! capability traits — [`Transport`] (byte I/O with timeouts) and
//! [`FileSink`] (where received bytes go) — and hands them to
//! [`YmodemReceiver::receive`].
//!
//! ```no_run
//! # use ymodem_receiver::{FileSink, Transport, YmodemReceiver, Result};
//! # fn demo<T: Transport, S: FileSink>(mut transport: T, mut sink: S) -> Result<()> {
//! let mut receiver = YmodemReceiver::new();
//! receiver.receive(&mut transport, &mut sink)
//! # }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate core_io;

mod block0;
mod consts;
mod error;
mod file;
mod packet;
mod session;
mod sink;
mod transport;

pub use consts::{
	DEFAULT_CHAR_TIMEOUT_MS, DEFAULT_FILENAME_LEN, DEFAULT_MAX_RETRY, DEFAULT_PACKET_TIMEOUT_MS,
};
pub use error::{Error, Result};
pub use session::YmodemReceiver;
pub use sink::FileSink;
pub use transport::Transport;
