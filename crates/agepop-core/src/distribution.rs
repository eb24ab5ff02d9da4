use agepop_model::{AgeDistribution, RegionRecord, Scale};

use crate::buckets::percent_of;

/// Per-sex series of `record` in the requested scale.
///
/// Percentages are relative to the region's total population (both sexes),
/// so all male and female values together sum to about 100.
pub fn age_distribution(record: &RegionRecord, scale: Scale) -> AgeDistribution {
    let total = record.total_population();
    let convert = |values: &[u64]| -> Vec<f64> {
        match scale {
            Scale::Count => values.iter().map(|&v| v as f64).collect(),
            Scale::Percent => values.iter().map(|&v| percent_of(v, total)).collect(),
        }
    };

    AgeDistribution {
        region: record.name().to_string(),
        scale,
        ages: record.ages.clone(),
        male: convert(&record.male),
        female: convert(&record.female),
        total_population: total,
    }
}
