//! One full analysis of a selected region.

use agepop_model::{AgeBucket, Metric, RegionReport, RegionSet, Scale};
use serde::{Deserialize, Serialize};

use crate::buckets::bucket_shares;
use crate::distribution::age_distribution;
use crate::error::Result;
use crate::similarity::find_most_similar;

/// Parameters of [`analyze_region`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub metric: Metric,
    pub scale: Scale,
    pub buckets: Vec<AgeBucket>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            scale: Scale::default(),
            buckets: AgeBucket::defaults(),
        }
    }
}

impl AnalysisOptions {
    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_buckets(mut self, buckets: Vec<AgeBucket>) -> Self {
        self.buckets = buckets;
        self
    }
}

/// Distribution, bucket shares and closest region for `region`.
pub fn analyze_region(
    set: &RegionSet,
    region: &str,
    options: &AnalysisOptions,
) -> Result<RegionReport> {
    let record = set.get(region)?;
    let combined = record.combined();

    let distribution = age_distribution(record, options.scale);
    let buckets = bucket_shares(&record.ages, &combined, &options.buckets)?;
    let most_similar = find_most_similar(&combined, record.name(), &set.records, &options.metric);

    tracing::info!(
        region = record.name(),
        population = record.total_population(),
        matched = most_similar
            .as_ref()
            .map_or("-", |m| m.matched_region_name.as_str()),
        "analyzed region"
    );

    Ok(RegionReport {
        region: record.name().to_string(),
        distribution,
        buckets,
        most_similar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use agepop_model::{AgeLabel, RegionName, RegionRecord};

    fn record(name: &str, male: Vec<u64>, female: Vec<u64>) -> RegionRecord {
        RegionRecord::new(
            RegionName {
                name: name.to_string(),
                full_name: format!("{name}(1)"),
                code: Some("1".to_string()),
            },
            vec![
                AgeLabel::from("10세"),
                AgeLabel::from("30세"),
                AgeLabel::from("100세 이상"),
            ],
            male,
            female,
        )
        .unwrap()
    }

    fn set() -> RegionSet {
        let records = vec![
            record("가", vec![10, 20, 30], vec![10, 20, 30]),
            record("나", vec![100, 0, 0], vec![0, 0, 0]),
            record("다", vec![9, 21, 30], vec![10, 20, 30]),
        ];
        RegionSet {
            ages: records[0].ages.clone(),
            records,
            summary: None,
        }
    }

    #[test]
    fn test_analyze_region() {
        let options = AnalysisOptions::default().with_scale(Scale::Percent);
        let report = analyze_region(&set(), "가", &options).unwrap();

        assert_eq!(report.region, "가");
        assert_eq!(report.distribution.total_population, 120);
        assert_eq!(report.distribution.male[2], 25.0);
        assert_eq!(report.buckets.len(), 4);
        assert_eq!(report.buckets[0].percent, 16.67);
        assert_eq!(report.buckets[3].percent, 50.0);
        assert_eq!(report.most_similar.unwrap().matched_region_name, "다");
    }

    #[test]
    fn test_analyze_region_cosine() {
        let options = AnalysisOptions::default().with_metric(Metric::Cosine);
        let report = analyze_region(&set(), "나", &options).unwrap();
        let matched = report.most_similar.unwrap();
        assert_eq!(matched.metric, Metric::Cosine);
        assert_eq!(matched.matched_region_name, "가");
    }

    #[test]
    fn test_analyze_unknown_region() {
        let result = analyze_region(&set(), "라", &AnalysisOptions::default());
        assert!(matches!(result, Err(AnalysisError::RegionNotFound(_))));
    }
}
