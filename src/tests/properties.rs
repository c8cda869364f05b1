use crate::encoder::{Encoder, MatchStrategy};
use crate::error::{CorruptStream, Lz78Error};
use crate::record::{write_records, Record, RECORD_WIDTH};
use crate::{compress, decode, decompress, encode};
use proptest::prelude::*;

/// Inputs drawn from a small alphabet so phrases actually repeat.
fn repetitive_input() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..512)
}

proptest! {
    /// Property 1: Roundtrip fidelity
    #[test]
    fn prop_roundtrip(input: Vec<u8>) {
        let records = encode(&input).unwrap();
        prop_assert_eq!(decode(&records).unwrap(), input);
    }

    /// Property 2: Roundtrip through wire bytes on repetitive data
    #[test]
    fn prop_roundtrip_wire(input in repetitive_input()) {
        let wire = compress(&input).unwrap();
        prop_assert_eq!(decompress(&wire).unwrap(), input);
    }

    /// Property 3: Fixed record width
    /// Every record consumes at least one input symbol.
    #[test]
    fn prop_record_width(input: Vec<u8>) {
        let records = encode(&input).unwrap();
        let wire = compress(&input).unwrap();
        prop_assert_eq!(wire.len(), records.len() * RECORD_WIDTH);
        prop_assert!(records.len() <= input.len());
    }

    /// Property 4: Dense index growth
    /// Record n creates entry n + 1 and may only reference entries before it.
    #[test]
    fn prop_references_precede(input in repetitive_input()) {
        let records = encode(&input).unwrap();
        for (n, record) in records.iter().enumerate() {
            prop_assert!(
                usize::from(record.index) <= n,
                "Record {} references entry {}",
                n,
                record.index
            );
        }
    }

    /// Property 5: Strategy equivalence
    /// The lookup structure is not observable in the output.
    #[test]
    fn prop_strategies_agree(input in repetitive_input()) {
        let hash = Encoder::new().with_strategy(MatchStrategy::Hash).encode(&input).unwrap();
        let trie = Encoder::new().with_strategy(MatchStrategy::Trie).encode(&input).unwrap();
        prop_assert_eq!(hash, trie);
    }

    /// Property 6: Capacity limit
    /// An encoder either fits within its limit or reports the limit.
    #[test]
    fn prop_capacity_respected(input in repetitive_input(), limit in 0u16..64) {
        let unlimited = encode(&input).unwrap();
        let limited = Encoder::new().with_max_entries(limit).encode(&input);
        if unlimited.len() <= usize::from(limit) {
            prop_assert_eq!(limited.unwrap(), unlimited);
        } else {
            prop_assert_eq!(limited, Err(Lz78Error::CapacityExceeded { limit }));
        }
    }

    /// Property 7: Truncation is always detected
    #[test]
    fn prop_truncated_rejected(input in repetitive_input(), cut in 1usize..RECORD_WIDTH) {
        let wire = compress(&input).unwrap();
        prop_assume!(!wire.is_empty());
        let truncated = &wire[..wire.len() - cut];
        prop_assert_eq!(
            decompress(truncated),
            Err(Lz78Error::CorruptStream(CorruptStream::TruncatedRecord { len: truncated.len() }))
        );
    }

    /// Property 8: Forward references are rejected
    #[test]
    fn prop_forward_reference_rejected(input in repetitive_input(), symbol in any::<u8>()) {
        let mut records = encode(&input).unwrap();
        let entries = records.len();
        prop_assume!(entries < usize::from(u16::MAX));
        records.push(Record::new(entries as u16 + 1, symbol));
        prop_assert_eq!(
            decode(&records),
            Err(Lz78Error::CorruptStream(CorruptStream::DanglingReference {
                record: entries,
                index: entries as u16 + 1,
                entries,
            }))
        );
    }
}

/// Bolero fuzz test: Roundtrip on arbitrary input
#[test]
fn fuzz_roundtrip() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let wire = compress(input).unwrap();
        assert_eq!(wire.len() % RECORD_WIDTH, 0);
        assert_eq!(decompress(&wire).unwrap(), *input);
    });
}

/// Bolero fuzz test: Decoding arbitrary bytes never panics
#[test]
fn fuzz_decode_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|bytes| {
        match decompress(bytes) {
            Ok(output) => {
                // Every record yields at least one byte
                assert!(output.len() >= bytes.len() / RECORD_WIDTH);
            }
            Err(err) => assert!(err.is_corrupt()),
        }
    });
}

mod unit_tests {
    use super::*;

    #[test]
    fn test_single_byte_stream() {
        assert_eq!(encode(&[65]).unwrap(), vec![Record::literal(65)]);
        assert_eq!(decode(&[Record::literal(65)]).unwrap(), vec![65]);
    }

    #[test]
    fn test_repeated_byte_run() {
        let records = encode(&[97, 97, 97, 97]).unwrap();
        assert_eq!(
            records,
            vec![Record::new(0, 97), Record::new(1, 97), Record::new(0, 97)]
        );
        assert_eq!(decode(&records).unwrap(), vec![97, 97, 97, 97]);
    }

    #[test]
    fn test_corrupt_reference() {
        assert!(matches!(
            decode(&[Record::new(5, 66)]),
            Err(Lz78Error::CorruptStream(CorruptStream::DanglingReference { index: 5, .. }))
        ));
    }

    #[test]
    fn test_truncated_stream() {
        assert_eq!(
            decompress(&[0, 0, 65, 0]),
            Err(Lz78Error::CorruptStream(CorruptStream::TruncatedRecord { len: 4 }))
        );
    }

    #[test]
    fn test_calls_are_independent() {
        let first = encode(b"abcabc").unwrap();
        let _ = encode(b"xyzxyzxyz").unwrap();
        assert_eq!(encode(b"abcabc").unwrap(), first);
    }

    #[test]
    fn test_text_roundtrip() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(200);
        let wire = compress(text.as_bytes()).unwrap();
        assert!(wire.len() < text.len(), "Repetitive text should shrink");
        assert_eq!(decompress(&wire).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_all_byte_values() {
        let input: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();
        let records = encode(&input).unwrap();
        assert_eq!(decode(&records).unwrap(), input);
        assert_eq!(write_records(&records).len(), records.len() * RECORD_WIDTH);
    }

    #[test]
    fn test_max_index_roundtrip() {
        // 65535 literals then a reference to the last possible entry
        let mut records: Vec<Record> = (0..u16::MAX).map(|i| Record::literal(i as u8)).collect();
        records.push(Record::new(u16::MAX, b'!'));
        let decoded = decode(&records).unwrap();
        assert_eq!(decoded.len(), usize::from(u16::MAX) + 2);
        assert_eq!(&decoded[decoded.len() - 2..], &[(u16::MAX - 1) as u8, b'!']);
    }
}
