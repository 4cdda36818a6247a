//! Property-based round-trip coverage for the fragmentation protocol.

use canlink::{
    FunctionId,
    Link,
    NodeAddress,
    Packet,
    PollOutcome,
    ProtocolId,
    transport::Loopback,
};
use proptest::prelude::*;

fn arb_id() -> impl Strategy<Value = ProtocolId> {
    (0_u8..=0x7F, 0_u8..=0x7F, 0_u8..=0x7F, any::<u8>()).prop_map(
        |(function, source, destination, parameter)| {
            ProtocolId::new(
                FunctionId::new(function),
                NodeAddress::new(source),
                NodeAddress::new(destination),
                parameter,
            )
        },
    )
}

proptest! {
    #[test]
    fn any_packet_round_trips(
        id in arb_id(),
        payload in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
        let packet = Packet::new(id, payload).expect("payload within limit");
        let mut link = Link::new(Loopback::new());
        link.send_packet(&packet).expect("send succeeds");

        let mut received = None;
        while received.is_none() {
            match link
                .poll_receive(id.destination)
                .expect("lossless transport reassembles")
            {
                PollOutcome::Complete(packet) => received = Some(packet),
                PollOutcome::InProgress => {}
                PollOutcome::NoData => panic!("stream ended early"),
            }
        }

        let received = received.expect("packet completed");
        prop_assert_eq!(received.id(), packet.id());
        prop_assert_eq!(received.payload(), packet.payload());
    }

    #[test]
    fn wire_size_matches_frame_count_law(
        id in arb_id(),
        payload in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
        use canlink::HEADER_LEN;

        let data_frames = payload.len().div_ceil(8);
        let expected = // START + each data frame + END trailer
            HEADER_LEN + data_frames * HEADER_LEN + payload.len() + HEADER_LEN + 3;

        let packet = Packet::new(id, payload).expect("payload within limit");
        let mut link = Link::new(Loopback::new());
        link.send_packet(&packet).expect("send succeeds");
        prop_assert_eq!(link.transport().buffered(), expected);
    }
}
