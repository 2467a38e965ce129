//! End-to-end SCALE codec vectors spanning `Compact<N>`, fixed-width
//! integers, and the aggregate constructs built on top of them, exercised
//! through the public API only (no access to crate-internal test helpers).

use subclient_core::scale::{Compact, Decode, Encode, Input};

fn round_trip_compact(n: u128, expected: &[u8]) {
    let encoded = Compact(n).encode();
    assert_eq!(encoded, expected, "encoding mismatch for {n}");
    let mut input = Input::new(&encoded);
    let Compact(decoded) = Compact::<u128>::decode(&mut input).unwrap();
    assert_eq!(decoded, n);
    assert!(input.is_empty());
}

#[test]
fn compact_boundary_vectors() {
    round_trip_compact(0, &[0x00]);
    round_trip_compact(63, &[0xfc]);
    round_trip_compact(64, &[0x01, 0x01]);
    round_trip_compact(16_383, &[0xfd, 0xff]);
    round_trip_compact(16_384, &[0x02, 0x00, 0x01, 0x00]);
    round_trip_compact(u32::MAX as u128, &[0x03, 0xff, 0xff, 0xff, 0xff]);
    round_trip_compact(1u128 << 30, &[0x03, 0x00, 0x00, 0x00, 0x40]);
}

#[test]
fn compact_u64_and_u32_views_share_the_wire_format() {
    let wide = Compact(1_000u128).encode();
    let narrow64 = Compact(1_000u64).encode();
    let narrow32 = Compact(1_000u32).encode();
    assert_eq!(wide, narrow64);
    assert_eq!(wide, narrow32);
}

#[test]
fn fixed_width_integers_are_little_endian() {
    let v: u64 = 0x0102_0304_0506_0708;
    assert_eq!(v.encode(), vec![0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);

    let signed: i32 = -1;
    assert_eq!(signed.encode(), vec![0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn option_vec_array_and_tuple_compose_in_one_payload() {
    // A shape resembling a real call argument list: Option<AccountId>,
    // Vec<u8> payload, a fixed [u8; 4] tag, and a (u32, bool) pair.
    let account: Option<[u8; 4]> = Some([1, 2, 3, 4]);
    let payload: Vec<u8> = vec![0xde, 0xad, 0xbe, 0xef];
    let tag: [u8; 2] = [0xaa, 0xbb];
    let pair = (42u32, true);

    let mut bytes = Vec::new();
    bytes.extend(account.encode());
    bytes.extend(payload.encode());
    bytes.extend(tag.encode());
    bytes.extend(pair.encode());

    let mut input = Input::new(&bytes);
    assert_eq!(Option::<[u8; 4]>::decode(&mut input).unwrap(), account);
    assert_eq!(Vec::<u8>::decode(&mut input).unwrap(), payload);
    assert_eq!(<[u8; 2]>::decode(&mut input).unwrap(), tag);
    assert_eq!(<(u32, bool)>::decode(&mut input).unwrap(), pair);
    assert!(input.is_empty());
}

#[test]
fn truncated_vec_length_prefix_is_a_typed_error() {
    // Compact length says 100 bytes follow, none do.
    let bytes = Compact(100u128).encode();
    let mut input = Input::new(&bytes);
    assert!(Vec::<u8>::decode(&mut input).is_err());
}
