//! Property tests for the codec's universal round-trip and wraparound rules.

use bytewise::{ByteStore, Tag, Variable};
use proptest::prelude::*;

const SIZE: usize = 32;

proptest! {
    #[test]
    fn u8_round_trip(value in 0i64..=255, address in 0i64..SIZE as i64) {
        let mut store = ByteStore::new(SIZE);
        store.store_u8(value, address).unwrap();
        prop_assert_eq!(store.load_u8(address).unwrap(), value.rem_euclid(256));
    }

    #[test]
    fn u8_reduces_any_integer(value in any::<i64>(), address in 0i64..SIZE as i64) {
        let mut store = ByteStore::new(SIZE);
        store.store_u8(value, address).unwrap();
        prop_assert_eq!(store.load_u8(address).unwrap(), value.rem_euclid(256));
    }

    #[test]
    fn s8_round_trip_in_range(value in -128i64..=127, address in 0i64..SIZE as i64) {
        let mut store = ByteStore::new(SIZE);
        store.store_s8(value, address).unwrap();
        prop_assert_eq!(store.load_s8(address).unwrap(), value);
    }

    #[test]
    fn s8_wraps_out_of_range(value in -100_000i64..100_000, address in 0i64..SIZE as i64) {
        let mut store = ByteStore::new(SIZE);
        store.store_s8(value, address).unwrap();
        prop_assert_eq!(
            store.load_s8(address).unwrap(),
            (value + 128).rem_euclid(256) - 128
        );
    }

    #[test]
    fn u16_matches_its_bytes(value in -1_000_000i64..1_000_000, address in 0i64..(SIZE as i64 - 1)) {
        let mut store = ByteStore::new(SIZE);
        store.store_u16(value, address).unwrap();

        let high = i64::from(store.load_byte(address).unwrap());
        let low = i64::from(store.load_byte(address + 1).unwrap());
        let combined = store.load_u16(address).unwrap();

        prop_assert_eq!(combined, high * 256 + low);
        prop_assert_eq!(combined, value.rem_euclid(65536));
    }

    #[test]
    fn s16_wraps_like_twos_complement(value in -1_000_000i64..1_000_000, address in 0i64..(SIZE as i64 - 1)) {
        let mut store = ByteStore::new(SIZE);
        store.store_s16(value, address).unwrap();
        prop_assert_eq!(
            store.load_s16(address).unwrap(),
            (value + 32768).rem_euclid(65536) - 32768
        );
    }

    #[test]
    fn accesses_outside_store_always_fail(address in prop_oneof![i64::MIN..0, SIZE as i64..i64::MAX]) {
        let mut store = ByteStore::new(SIZE);
        prop_assert!(store.load_byte(address).is_err());
        prop_assert!(store.store_byte(1, address).is_err());
        prop_assert!(store.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn same_bits_under_every_tag(value in 0i64..=65535, address in 0i64..(SIZE as i64 - 1)) {
        let mut store = ByteStore::new(SIZE);
        bytewise::write(&mut store, Variable::new(address, Tag::U16), value).unwrap();

        let signed = bytewise::read(&store, Variable::new(address, Tag::S16)).unwrap();
        prop_assert_eq!(signed.rem_euclid(65536), value);

        let high = bytewise::read(&store, Variable::new(address, Tag::U8)).unwrap();
        prop_assert_eq!(high, value / 256);
    }
}
