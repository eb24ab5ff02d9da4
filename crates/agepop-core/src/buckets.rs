//! Age-bucket shares of a region's population.

use agepop_model::{AgeBucket, AgeLabel, BucketShare, CombinedVector, ParseError};

/// Rounds to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / total` as a percentage rounded to 2 places; 0 when `total` is 0.
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

/// Numeric age of every label, in order.
pub fn numeric_ages(labels: &[AgeLabel]) -> Result<Vec<u32>, ParseError> {
    labels.iter().map(AgeLabel::numeric_age).collect()
}

/// Population and percent share of each bucket.
///
/// `labels` and `vector` are parallel. A label that cannot be read as an age
/// is an error even if no bucket would have needed it.
pub fn bucket_shares(
    labels: &[AgeLabel],
    vector: &CombinedVector,
    buckets: &[AgeBucket],
) -> Result<Vec<BucketShare>, ParseError> {
    let ages = numeric_ages(labels)?;
    let total = vector.total();

    let shares = buckets
        .iter()
        .map(|bucket| {
            let population = ages
                .iter()
                .zip(vector.counts())
                .filter(|(age, _)| bucket.contains(**age))
                .map(|(_, count)| count)
                .sum();
            BucketShare {
                name: bucket.name.clone(),
                population,
                percent: percent_of(population, total),
            }
        })
        .collect();

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(ages: &[&str]) -> Vec<AgeLabel> {
        ages.iter().map(|a| AgeLabel::from(*a)).collect()
    }

    #[test]
    fn test_default_buckets() {
        let labels = labels(&["5세", "19세", "20세", "39세", "40세", "64세", "65세", "100세 이상"]);
        let vector = CombinedVector::new(vec![10, 10, 20, 20, 5, 5, 15, 15]);
        let shares = bucket_shares(&labels, &vector, &AgeBucket::defaults()).unwrap();

        let percents: Vec<f64> = shares.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![20.0, 40.0, 10.0, 30.0]);
        assert_eq!(shares[3].name, "elderly");
        assert_eq!(shares[3].population, 30);
    }

    #[test]
    fn test_rounding() {
        let labels = labels(&["1세", "30세", "70세"]);
        let vector = CombinedVector::new(vec![1, 1, 1]);
        let shares = bucket_shares(&labels, &vector, &AgeBucket::defaults()).unwrap();
        assert_eq!(shares[0].percent, 33.33);
        assert_eq!(shares[2].percent, 0.0);
    }

    #[test]
    fn test_zero_population() {
        let labels = labels(&["1세", "30세"]);
        let vector = CombinedVector::new(vec![0, 0]);
        let shares = bucket_shares(&labels, &vector, &AgeBucket::defaults()).unwrap();
        assert!(shares.iter().all(|s| s.percent == 0.0));
    }

    #[test]
    fn test_bad_label() {
        let labels = labels(&["1세", "합계"]);
        let vector = CombinedVector::new(vec![1, 1]);
        let result = bucket_shares(&labels, &vector, &AgeBucket::defaults());
        assert_eq!(
            result,
            Err(ParseError::InvalidAgeLabel {
                label: "합계".to_string()
            })
        );
    }
}
