mod common;

use common::engine_with_scores;
use hyodream_ai::{
    error::AnalysisError,
    sentiment::{AnalysisResult, Sentiment},
};
use proptest::prelude::*;

#[test]
fn mixed_batch_splits_evenly() {
    let engine = engine_with_scores(&[0.9, 0.2]);
    let result = engine.analyze(&["좋아요 정말 좋아요", "별로예요"]).unwrap();
    assert_eq!(
        result,
        AnalysisResult {
            total_reviews: 2,
            positive_percent: 50.0,
            negative_percent: 50.0,
            positive_count: 1,
            negative_count: 1,
        }
    );
}

#[test]
fn thirds_are_rounded_to_two_decimals() {
    let engine = engine_with_scores(&[0.6, 0.6, 0.1]);
    let result = engine.analyze(&["a", "b", "c"]).unwrap();
    insta::assert_json_snapshot!(result, @r###"
    {
      "total_reviews": 3,
      "positive_percent": 66.67,
      "negative_percent": 33.33,
      "positive_count": 2,
      "negative_count": 1
    }
    "###);
}

#[test]
fn empty_batch_is_rejected_before_inference() {
    let engine = engine_with_scores(&[]);
    let empty: [&str; 0] = [];
    assert!(matches!(engine.analyze(&empty), Err(AnalysisError::EmptyBatch)));
}

#[test]
fn score_of_exactly_half_is_negative() {
    let engine = engine_with_scores(&[0.5]);
    assert_eq!(engine.classify("그냥 그래요").unwrap(), Sentiment::Negative);

    let engine = engine_with_scores(&[0.5]);
    let result = engine.analyze(&["그냥 그래요"]).unwrap();
    assert_eq!(result.negative_count, 1);
    assert_eq!(result.negative_percent, 100.0);
}

#[test]
fn inference_failure_aborts_the_batch() {
    let engine = engine_with_scores(&[0.9]);
    let err = engine.analyze(&["좋아요", "별로예요"]).unwrap_err();
    assert!(matches!(err, AnalysisError::Inference { index: 1, .. }));
}

#[test]
fn preprocessing_drops_stopwords_and_pads() {
    let engine = engine_with_scores(&[]);
    let seq = engine.preprocess("좋아요 정말 좋아요!!");
    assert_eq!(seq.tokens().collect::<Vec<_>>(), vec![1, 2, 1, 2]);
    assert_eq!(seq.as_slice().len(), 80);
}

proptest! {
    #[test]
    fn counts_always_sum_to_total(scores in prop::collection::vec(0.0f32..=1.0, 1..40)) {
        let engine = engine_with_scores(&scores);
        let reviews: Vec<String> = (0..scores.len()).map(|i| format!("리뷰 {i}")).collect();
        let result = engine.analyze(&reviews).unwrap();
        prop_assert_eq!(result.total_reviews, scores.len());
        prop_assert_eq!(result.positive_count + result.negative_count, result.total_reviews);
        prop_assert!((result.positive_percent + result.negative_percent - 100.0).abs() <= 0.01 + 1e-9);
        let expected_positive = scores.iter().filter(|&&s| s > 0.5).count();
        prop_assert_eq!(result.positive_count, expected_positive);
    }
}
