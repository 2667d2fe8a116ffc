use hyodream_ai::nlp::Vocabulary;

#[test]
fn lowercases_when_configured() {
    let raw = r#"{"config": {"lower": true, "oov_token": null, "num_words": null,
        "word_index": {"good": 1}}}"#;
    let vocab = Vocabulary::from_json_str(raw).unwrap();
    assert_eq!(vocab.lookup("GOOD"), Some(1));
}

#[test]
fn num_words_cap_falls_back_to_oov() {
    let vocab = Vocabulary::from_pairs([("<OOV>", 1), ("좋", 2), ("별로", 3)])
        .with_oov_token("<OOV>")
        .unwrap()
        .with_num_words(3);
    assert_eq!(vocab.lookup("좋"), Some(2));
    assert_eq!(vocab.lookup("별로"), Some(1));
}

#[test]
fn zero_num_words_means_no_cap() {
    let raw = r#"{"config": {"num_words": 0, "oov_token": "<OOV>",
        "word_index": {"<OOV>": 1, "좋": 2, "별로": 3}}}"#;
    let vocab = Vocabulary::from_json_str(raw).unwrap();
    assert_eq!(vocab.lookup("별로"), Some(3));
    assert_eq!(vocab.lookup("처음"), Some(1));
}
