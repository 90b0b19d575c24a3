//! Custom input generators for property-based testing
#![allow(clippy::expect_used)]
use proptest::prelude::*;

/// Arbitrary bytes behind an opening brace, including invalid UTF-8.
pub fn any_candidate() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(|rest| {
        let mut data = vec![b'{'];
        data.extend(rest);
        data
    })
}

/// Candidates built from the bytes the scanner treats specially, so quoting,
/// escaping and closing interact often.
pub fn structured_candidate() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            Just(b" ".to_vec()),
            Just(b"\"".to_vec()),
            Just(b"\\".to_vec()),
            Just(b"}".to_vec()),
            Just(b"=".to_vec()),
            Just(b"#".to_vec()),
            Just(b".".to_vec()),
            Just(b"mainmatter".to_vec()),
            prop::string::string_regex("[a-z0-9-]{1,6}")
                .expect("Failed to create word strategy")
                .prop_map(String::into_bytes),
        ],
        0..24,
    )
    .prop_map(|chunks| {
        let mut data = vec![b'{'];
        data.extend(chunks.concat());
        data
    })
}

/// Candidates that can never contain a closing brace.
pub fn unclosed_candidate() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>().prop_filter("no close", |b| *b != b'}'), 0..64).prop_map(
        |rest| {
            let mut data = vec![b'{'];
            data.extend(rest);
            data
        },
    )
}
