//! Properties of the similarity metrics and bucket shares.

use agepop_core::{Cosine, bucket_shares, cosine_similarity, find_most_similar, hybrid_distance};
use agepop_model::{AgeBucket, AgeLabel, CombinedVector, RegionName, TotalRecord};
use proptest::prelude::*;

fn counts() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..50_000, 1..40)
}

fn nonzero_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..40)
        .prop_flat_map(|len| {
            (
                prop::collection::vec(0u64..50_000, len),
                prop::collection::vec(0u64..50_000, len),
            )
        })
        .prop_filter("non-zero vectors", |(a, b)| {
            a.iter().any(|&v| v > 0) && b.iter().any(|&v| v > 0)
        })
        .prop_map(|(a, b)| {
            (
                a.into_iter().map(|v| v as f64).collect(),
                b.into_iter().map(|v| v as f64).collect(),
            )
        })
}

proptest! {
    #[test]
    fn cosine_is_symmetric((a, b) in nonzero_pair()) {
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!(ab <= 1.0 + 1e-12);
    }

    #[test]
    fn hybrid_of_identical_vectors_is_zero(v in counts()) {
        prop_assume!(v.iter().any(|&x| x > 0));
        let v: Vec<f64> = v.into_iter().map(|x| x as f64).collect();
        let d = hybrid_distance(&v, &v).unwrap();
        prop_assert_eq!(d.ratio, 0.0);
        prop_assert_eq!(d.scale, 0.0);
    }

    #[test]
    fn default_bucket_shares_sum_to_hundred(v in prop::collection::vec(0u64..50_000, 101)) {
        let mut labels: Vec<AgeLabel> = (0..100).map(|age| AgeLabel::new(format!("{age}세"))).collect();
        labels.push(AgeLabel::from("100세 이상"));
        let vector = CombinedVector::new(v);
        let shares = bucket_shares(&labels, &vector, &AgeBucket::defaults()).unwrap();
        let sum: f64 = shares.iter().map(|s| s.percent).sum();
        if vector.total() > 0 {
            prop_assert!((sum - 100.0).abs() <= 0.02 + 1e-9, "sum was {}", sum);
        } else {
            prop_assert_eq!(sum, 0.0);
        }
    }
}

#[test]
fn cosine_example_matches_identical_region() {
    let region = |name: &str, counts: Vec<u64>| TotalRecord {
        region: RegionName {
            name: name.to_string(),
            full_name: name.to_string(),
            code: Some("0".to_string()),
        },
        total: CombinedVector::new(counts),
    };
    let candidates = vec![region("X", vec![10, 20, 30]), region("Y", vec![100, 0, 0])];
    let query = CombinedVector::new(vec![10, 20, 30]);

    let result = find_most_similar(&query, "Q", &candidates, &Cosine).unwrap();
    assert_eq!(result.matched_region_name, "X");
    assert!((result.score - 1.0).abs() < 1e-12);
}
