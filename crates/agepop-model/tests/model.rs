//! Tests for agepop-model types.

use agepop_model::{
    AgeBucket, AgeDistribution, AgeLabel, CombinedVector, Metric, RegionName, RegionRecord,
    RegionReport, Scale, SimilarityResult,
};

fn jongno() -> RegionRecord {
    RegionRecord::new(
        RegionName {
            name: "종로구".to_string(),
            full_name: "서울특별시 종로구 (1111000000)".to_string(),
            code: Some("1111000000".to_string()),
        },
        vec![AgeLabel::from("0세"), AgeLabel::from("100세 이상")],
        vec![120, 3],
        vec![110, 9],
    )
    .expect("aligned record")
}

#[test]
fn record_per_sex_keys_match() {
    let record = jongno();
    let male: Vec<_> = record.male_by_age().map(|(label, _)| label.clone()).collect();
    let female: Vec<_> = record.female_by_age().map(|(label, _)| label.clone()).collect();
    assert_eq!(male, female);
    assert_eq!(male, record.ages);
}

#[test]
fn record_serializes_flat_region_fields() {
    let json = serde_json::to_value(jongno()).expect("serialize record");
    assert_eq!(json["name"], "종로구");
    assert_eq!(json["code"], "1111000000");
    assert_eq!(json["ages"][1], "100세 이상");
    assert_eq!(json["male"][0], 120);
}

#[test]
fn report_serializes() {
    let report = RegionReport {
        region: "종로구".to_string(),
        distribution: AgeDistribution {
            region: "종로구".to_string(),
            scale: Scale::Count,
            ages: jongno().ages,
            male: vec![120.0, 3.0],
            female: vec![110.0, 9.0],
            total_population: 242,
        },
        buckets: vec![],
        most_similar: Some(SimilarityResult {
            matched_region_name: "중구".to_string(),
            matched_vector: CombinedVector::new(vec![200, 10]),
            score: 0.25,
            metric: Metric::Hybrid,
        }),
    };
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: RegionReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
}

#[test]
fn bucket_deserializes_with_open_bounds() {
    let bucket: AgeBucket =
        serde_json::from_str(r#"{"name":"elderly","min_age":65}"#).expect("deserialize bucket");
    assert_eq!(bucket, AgeBucket::new("elderly", Some(65), None));
    assert!(bucket.contains(100));
}
