//! Structural properties of the 5-byte frame codec.

use portal_proto::{END_BYTE, FRAME_LEN, Frame, START_BYTE};
use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};

#[test]
fn round_trip_is_exhaustive() {
    // Small enough to check every (command, value) pair outright.
    for command in 0..=u8::MAX {
        for value in 0..=u8::MAX {
            let frame = Frame::new(command, value);
            assert_eq!(Frame::decode(&frame.encode()), Some(frame));
        }
    }
}

proptest! {
    #[test]
    fn encoded_frames_have_fixed_shape(command in any::<u8>(), value in any::<u8>()) {
        let bytes = Frame::new(command, value).encode();
        prop_assert_eq!(bytes.len(), FRAME_LEN);
        prop_assert_eq!(bytes[0], START_BYTE);
        prop_assert_eq!(bytes[1], command);
        prop_assert_eq!(bytes[2], value);
        prop_assert_eq!(bytes[3], command ^ value);
        prop_assert_eq!(bytes[4], END_BYTE);
    }

    #[test]
    fn corrupt_start_sentinel_is_absent(
        command in any::<u8>(),
        value in any::<u8>(),
        bad_start in any::<u8>(),
    ) {
        let mut bytes = Frame::new(command, value).encode();
        bytes[0] = bad_start;
        if bad_start == START_BYTE {
            prop_assert!(Frame::decode(&bytes).is_some());
        } else {
            prop_assert_eq!(Frame::decode(&bytes), None);
        }
    }

    #[test]
    fn corrupt_end_sentinel_is_absent(
        command in any::<u8>(),
        value in any::<u8>(),
        bad_end in any::<u8>(),
    ) {
        let mut bytes = Frame::new(command, value).encode();
        bytes[4] = bad_end;
        if bad_end == END_BYTE {
            prop_assert!(Frame::decode(&bytes).is_some());
        } else {
            prop_assert_eq!(Frame::decode(&bytes), None);
        }
    }

    #[test]
    fn single_bit_flip_in_data_bytes_is_absent(
        command in any::<u8>(),
        value in any::<u8>(),
        offset in 1_usize..4,
        bit in 0_u8..8,
    ) {
        // Flipping one bit of command, value, or checksum alone always
        // breaks `checksum == command ^ value`.
        let mut bytes = Frame::new(command, value).encode();
        bytes[offset] ^= 1 << bit;
        prop_assert_eq!(Frame::decode(&bytes), None);
    }

    #[test]
    fn short_input_is_absent(
        command in any::<u8>(),
        value in any::<u8>(),
        keep in 0_usize..FRAME_LEN,
    ) {
        let bytes = Frame::new(command, value).encode();
        prop_assert_eq!(Frame::decode(&bytes[..keep]), None);
    }

    #[test]
    fn trailing_bytes_are_ignored(
        command in any::<u8>(),
        value in any::<u8>(),
        trailer in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let frame = Frame::new(command, value);
        let mut bytes = frame.encode().to_vec();
        bytes.extend_from_slice(&trailer);
        prop_assert_eq!(Frame::decode(&bytes), Some(frame));
    }
}
