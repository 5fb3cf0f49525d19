#![no_main]

use libfuzzer_sys::fuzz_target;
use bytewise::{ByteStore, Tag};

const TAGS: [Tag; 4] = [Tag::U8, Tag::S8, Tag::U16, Tag::S16];

// Each 4-byte chunk is one store: tag selector, signed address, 16-bit value.
// Whatever is stored must read back wrapped into the tag's range.
fuzz_target!(|data: &[u8]| {
    let mut store = ByteStore::default();
    for op in data.chunks_exact(4) {
        let tag = TAGS[(op[0] & 3) as usize];
        let address = i64::from(op[1] as i8);
        let value = i64::from(i16::from_be_bytes([op[2], op[3]]));

        if store.store(tag, value, address).is_ok() {
            let loaded = store.load(tag, address).unwrap();
            assert!(loaded >= tag.min() && loaded <= tag.max());
        }
        assert_eq!(store.len(), 32);
    }
});
