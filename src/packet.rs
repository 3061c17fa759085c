use crate::consts::{ACK, CAN, EOT, NAK, PACKET_1K_SIZE, PACKET_SIZE, SOH, STX};
use crate::transport::Transport;
use log::debug;

#[cfg(not(feature = "std"))]
use core_io as io;
#[cfg(feature = "std")]
use std::io;

/// Classification of one framed unit read from the transport.
///
/// `Data`'s `length`/`seq` are only meaningful for that variant; every
/// other variant carries no payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PacketKind {
	Data { length: usize, seq: u8 },
	Eot,
	Ack,
	Nak,
	Can,
	Timeout,
	Broken,
}

/// Read one packet from `transport` into `scratch`, per SPEC_FULL §4.2.
///
/// `scratch` must be at least 1024 bytes long; only `scratch[..length]`
/// is meaningful on return, and only when the result is `Data`.
pub(crate) fn receive_packet<T: Transport>(
	transport: &mut T,
	scratch: &mut [u8],
	packet_timeout_ms: u32,
	char_timeout_ms: u32,
) -> io::Result<PacketKind> {
	let length = match transport.get_byte(packet_timeout_ms)? {
		None => return Ok(PacketKind::Timeout),
		Some(CAN) => {
			return Ok(match transport.get_byte(char_timeout_ms)? {
				Some(CAN) => {
					debug!("CAN CAN received");
					PacketKind::Can
				}
				_ => PacketKind::Broken,
			});
		}
		Some(SOH) => PACKET_SIZE,
		Some(STX) => PACKET_1K_SIZE,
		Some(EOT) => return Ok(PacketKind::Eot),
		Some(ACK) => return Ok(PacketKind::Ack),
		Some(NAK) => return Ok(PacketKind::Nak),
		Some(_) => return Ok(PacketKind::Broken),
	};

	let seq = match transport.get_byte(char_timeout_ms)? {
		Some(b) => b,
		None => return Ok(PacketKind::Broken),
	};
	let seq_compl = match transport.get_byte(char_timeout_ms)? {
		Some(b) => b,
		None => return Ok(PacketKind::Broken),
	};

	for slot in scratch[..length].iter_mut() {
		*slot = match transport.get_byte(char_timeout_ms)? {
			Some(b) => b,
			None => return Ok(PacketKind::Broken),
		};
	}

	let crc_hi = match transport.get_byte(char_timeout_ms)? {
		Some(b) => b,
		None => return Ok(PacketKind::Broken),
	};
	let crc_lo = match transport.get_byte(char_timeout_ms)? {
		Some(b) => b,
		None => return Ok(PacketKind::Broken),
	};
	let received_crc = u16::from_be_bytes([crc_hi, crc_lo]);

	if seq ^ seq_compl != 0xFF {
		debug!("block number complement mismatch");
		return Ok(PacketKind::Broken);
	}

	let computed_crc = calc_crc(&scratch[..length]);
	if computed_crc != received_crc {
		debug!("crc mismatch (blk {})", seq);
		return Ok(PacketKind::Broken);
	}

	debug!("data (blk {})", seq);
	Ok(PacketKind::Data { length, seq })
}

pub(crate) fn calc_crc(data: &[u8]) -> u16 {
	crc16::State::<crc16::XMODEM>::calculate(data)
}
