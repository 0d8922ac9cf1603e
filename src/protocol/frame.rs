//! VarInt length-prefixed framing over a byte stream: the sole unit of I/O
//! on the game TCP channel. A frame is not itself a message — the service
//! dispatcher peels the header off the payload `FrameCodec` hands back.

use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::common::error::ProtocolError;
use crate::protocol::primitive::{try_read_varint, write_varint};

/// Frames larger than this are rejected outright, without buffering the rest
/// of the stream.
pub const MAX_FRAME_SIZE: usize = 2 * 1024 * 1024;

/// Length-prefixed frame codec. Stateless — one instance per connection.
#[derive(Debug, Default)]
pub struct FrameCodec;

impl Decoder for FrameCodec {
    type Item = Bytes;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some((len, varint_len)) = try_read_varint(src)? else {
            return Ok(None);
        };
        let len = len as usize;

        if len > MAX_FRAME_SIZE {
            return Err(ProtocolError::FrameTooLarge {
                size: len,
                cap: MAX_FRAME_SIZE,
            });
        }

        if src.len() < varint_len + len {
            src.reserve(varint_len + len - src.len());
            return Ok(None);
        }

        src.advance(varint_len);
        Ok(Some(src.split_to(len).freeze()))
    }
}

impl Encoder<Bytes> for FrameCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<(), Self::Error> {
        if item.len() > MAX_FRAME_SIZE {
            return Err(ProtocolError::FrameTooLarge {
                size: item.len(),
                cap: MAX_FRAME_SIZE,
            });
        }
        dst.reserve(crate::protocol::primitive::varint_len(item.len() as u32) + item.len());
        write_varint(dst, item.len() as u32);
        dst.extend_from_slice(&item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_waits_for_full_payload() {
        let mut codec = FrameCodec;
        let mut buf = BytesMut::from(&[0x04, 0x01, 0x02][..]); // len=4, only 2 bytes present
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
    }

    #[test]
    fn decode_yields_empty_payload_for_zero_length() {
        let mut codec = FrameCodec;
        let mut buf = BytesMut::from(&[0x00][..]);
        let frame = codec.decode(&mut buf).unwrap().unwrap();
        assert!(frame.is_empty());
        assert!(buf.is_empty());
    }

    #[test]
    fn decode_rejects_oversized_frame() {
        let mut codec = FrameCodec;
        let mut buf = BytesMut::new();
        write_varint(&mut buf, (MAX_FRAME_SIZE + 1) as u32);
        let err = codec.decode(&mut buf).unwrap_err();
        assert!(matches!(err, ProtocolError::FrameTooLarge { .. }));
    }

    #[test]
    fn decode_rejects_five_0x80_bytes() {
        let mut codec = FrameCodec;
        let mut buf = BytesMut::from(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF][..]);
        let err = codec.decode(&mut buf).unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedFrame { .. }));
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let mut codec = FrameCodec;
        let mut buf = BytesMut::new();
        let payload = Bytes::from_static(b"hello card data");
        codec.encode(payload.clone(), &mut buf).unwrap();
        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(decoded, payload);
        assert!(buf.is_empty());
    }

    #[test]
    fn frame_length_matches_varint_plus_payload() {
        let mut codec = FrameCodec;
        let mut buf = BytesMut::new();
        let payload = Bytes::from_static(b"abc");
        codec.encode(payload.clone(), &mut buf).unwrap();
        assert_eq!(buf.len(), crate::protocol::primitive::varint_len(3) + 3);
    }
}
