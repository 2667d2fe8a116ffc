use hyodream_ai::nlp::{encode, pad_front, Vocabulary, MAX_LEN, PAD_ID};
use proptest::prelude::*;

proptest! {
    #[test]
    fn always_exactly_max_len(ids in prop::collection::vec(1u32..5000, 0..300)) {
        prop_assert_eq!(pad_front(&ids).as_slice().len(), MAX_LEN);
    }

    #[test]
    fn short_sequences_are_left_padded(ids in prop::collection::vec(1u32..5000, 0..=MAX_LEN)) {
        let seq = pad_front(&ids);
        let split = MAX_LEN - ids.len();
        prop_assert!(seq.as_slice()[..split].iter().all(|&id| id == PAD_ID));
        prop_assert_eq!(&seq.as_slice()[split..], ids.as_slice());
    }

    #[test]
    fn long_sequences_keep_the_tail(ids in prop::collection::vec(1u32..5000, MAX_LEN + 1..300)) {
        let seq = pad_front(&ids);
        prop_assert_eq!(seq.as_slice(), &ids[ids.len() - MAX_LEN..]);
    }
}

#[test]
fn encode_is_deterministic_and_front_truncates() {
    let vocab = Vocabulary::from_pairs((1..=100u32).map(|i| (format!("t{i}"), i)));
    let tokens: Vec<String> = (1..=100).map(|i| format!("t{i}")).collect();
    let first = encode(&vocab, &tokens);
    assert_eq!(first, encode(&vocab, &tokens));
    assert_eq!(first.as_slice()[0], 21);
    assert_eq!(first.as_slice()[MAX_LEN - 1], 100);
}

#[test]
fn oov_tokens_take_the_configured_id() {
    let vocab = Vocabulary::from_pairs([("<OOV>", 1), ("좋", 2)])
        .with_oov_token("<OOV>")
        .unwrap();
    let seq = encode(&vocab, &["좋", "처음", "좋"]);
    assert_eq!(&seq.as_slice()[MAX_LEN - 3..], &[2, 1, 2]);
}

#[test]
fn empty_input_is_all_padding() {
    assert!(pad_front(&[]).as_slice().iter().all(|&id| id == PAD_ID));
}

#[test]
fn exact_length_is_unchanged() {
    let ids: Vec<u32> = (1..=MAX_LEN as u32).collect();
    assert_eq!(pad_front(&ids).as_slice(), ids.as_slice());
}

#[test]
fn drops_unknown_tokens_before_padding() {
    let vocab = Vocabulary::from_pairs([("좋", 4), ("아요", 9)]);
    let seq = encode(&vocab, &["좋", "처음", "아요"]);
    assert_eq!(&seq.as_slice()[MAX_LEN - 2..], &[4, 9]);
    assert_eq!(seq.tokens().count(), 2);
}
