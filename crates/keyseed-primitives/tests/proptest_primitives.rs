use proptest::prelude::*;

use keyseed_primitives::base58;
use keyseed_primitives::bech32;
use keyseed_primitives::util::{ByteReader, ByteWriter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn base58_check_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..96)) {
        let encoded = base58::check_encode(&payload);
        prop_assert_eq!(base58::check_decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn bech32_roundtrip_any_length(payload in prop::collection::vec(any::<u8>(), 0..160)) {
        let encoded = bech32::encode("xpub", &payload).unwrap();
        prop_assert!(encoded.starts_with("xpub1"));
        prop_assert_eq!(bech32::decode("xpub", &encoded).unwrap(), payload);
    }

    #[test]
    fn u32_indices_survive_writer_and_reader(values in prop::collection::vec(any::<u32>(), 0..32)) {
        let mut writer = ByteWriter::new();
        for v in &values {
            writer.write_u32_be(*v);
        }
        let data = writer.into_bytes();
        prop_assert_eq!(data.len(), values.len() * 4);
        let mut reader = ByteReader::new(&data);
        for v in &values {
            prop_assert_eq!(reader.read_u32_be().unwrap(), *v);
        }
        prop_assert_eq!(reader.remaining(), 0);
    }
}
