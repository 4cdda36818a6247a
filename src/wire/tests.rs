//! Tests for identifier packing and the frame codec.

use bytes::BytesMut;
use rstest::rstest;

use super::{
    FRAME_PAYLOAD_LEN,
    Frame,
    FrameHeader,
    FunctionId,
    HEADER_LEN,
    NodeAddress,
    ProtocolId,
    WireError,
};

fn demo_id() -> ProtocolId {
    ProtocolId::new(
        FunctionId::new(0x43),
        NodeAddress::new(0x01),
        NodeAddress::new(0x02),
        0x12,
    )
}

#[test]
fn address_rejects_eighth_bit() {
    assert!(NodeAddress::try_new(0x7F).is_ok());
    let err = NodeAddress::try_new(0x80).expect_err("128 is out of range");
    assert_eq!(err.value(), 0x80);
    assert!(FunctionId::try_new(0xFF).is_err());
}

#[test]
fn id_pack_round_trips() {
    let id = demo_id();
    let word = id.pack();
    // Reserved high bits stay clear.
    assert_eq!(word >> 29, 0);
    assert_eq!(ProtocolId::unpack(word), id);
}

#[test]
fn id_pack_places_fields() {
    let id = demo_id();
    let word = id.pack();
    assert_eq!(word & 0xFF, 0x12);
    assert_eq!((word >> 8) & 0x7F, 0x01);
    assert_eq!((word >> 15) & 0x7F, 0x02);
    assert_eq!((word >> 22) & 0x7F, 0x43);
}

#[test]
fn unpack_ignores_reserved_bits() {
    let word = demo_id().pack() | (0b111 << 29);
    assert_eq!(ProtocolId::unpack(word), demo_id());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(FRAME_PAYLOAD_LEN)]
fn header_round_trips(#[case] payload_len: usize) {
    let header = FrameHeader::new(demo_id(), payload_len);
    let bytes = header.encode();
    let decoded = FrameHeader::decode(&bytes).expect("valid header decodes");
    assert_eq!(decoded, header);
    assert_eq!(decoded.payload_len(), payload_len);
    assert!(!decoded.request());
    assert!(!decoded.extended());
}

#[test]
fn header_decode_rejects_short_input() {
    let err = FrameHeader::decode(&[0_u8; HEADER_LEN - 1]).expect_err("short input fails");
    assert_eq!(err, WireError::HeaderTooShort { len: 4 });
}

#[test]
fn header_decode_rejects_oversized_payload_length() {
    let mut bytes = FrameHeader::new(demo_id(), 0).encode();
    bytes[0] = 0x0C; // 12 bytes declared, above the 8-byte data field
    let err = FrameHeader::decode(&bytes).expect_err("length 12 is invalid");
    assert_eq!(err, WireError::PayloadLength { len: 12 });
}

#[test]
fn header_decode_preserves_flag_bits() {
    let mut bytes = FrameHeader::new(demo_id(), 3).encode();
    bytes[0] |= 0x40 | 0x80;
    let decoded = FrameHeader::decode(&bytes).expect("flags are valid");
    assert!(decoded.request());
    assert!(decoded.extended());
}

#[test]
fn frame_encodes_header_then_payload() {
    let frame = Frame::new(demo_id(), &[0xAA, 0xBB, 0xCC]);
    let mut dst = BytesMut::new();
    frame.encode(&mut dst);
    assert_eq!(dst.len(), frame.wire_len());
    assert_eq!(dst.len(), HEADER_LEN + 3);
    assert_eq!(&dst[HEADER_LEN..], &[0xAA, 0xBB, 0xCC]);

    let header = FrameHeader::decode(&dst).expect("header decodes");
    let rebuilt = Frame::from_parts(header, &dst[HEADER_LEN..]).expect("payload matches");
    assert_eq!(rebuilt, frame);
}

#[test]
fn frame_from_parts_rejects_length_mismatch() {
    let header = FrameHeader::new(demo_id(), 4);
    assert!(Frame::from_parts(header, &[1, 2, 3]).is_err());
}

#[test]
fn empty_frame_is_header_only() {
    let frame = Frame::new(demo_id(), &[]);
    assert_eq!(frame.wire_len(), HEADER_LEN);
    assert!(frame.payload().is_empty());
}
