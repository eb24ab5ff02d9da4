//! Per-region age vector extraction.

use agepop_model::{
    AgeLabel, CombinedVector, ParseError, RegionNotFound, RegionRecord, RegionSet, TotalRecord,
};

use crate::convention::{AgeColumns, ColumnConvention};
use crate::csv::Table;
use crate::error::Result;
use crate::region::parse_region_name;
use crate::values::parse_count;

fn parse_columns(table: &Table, row: usize, columns: &[usize]) -> Result<Vec<u64>> {
    let counts: std::result::Result<Vec<u64>, ParseError> = columns
        .iter()
        .map(|&idx| parse_count(&table.columns[idx], table.cell(row, idx)))
        .collect();
    Ok(counts?)
}

fn extract_row(
    table: &Table,
    row: usize,
    region_idx: usize,
    columns: &AgeColumns,
) -> Result<RegionRecord> {
    let region = parse_region_name(table.cell(row, region_idx).unwrap_or(""));
    let male = parse_columns(table, row, &columns.male)?;
    let female = parse_columns(table, row, &columns.female)?;
    Ok(RegionRecord::new(
        region,
        columns.ages.clone(),
        male,
        female,
    )?)
}

/// Extracts every region of a sex-split export.
///
/// Rows without an administrative code are left out of `records`; the first
/// data row is always kept as `summary`.
pub fn extract_regions(table: &Table, convention: &ColumnConvention) -> Result<RegionSet> {
    let region_idx = convention.region_index(table)?;
    let columns = convention.select_age_columns(table)?;

    let mut records = Vec::new();
    let mut summary = None;
    let mut skipped = 0usize;

    for row in 0..table.height() {
        let record = extract_row(table, row, region_idx, &columns)?;
        if row == 0 {
            summary = Some(record.clone());
        }
        if record.region.is_addressable() {
            records.push(record);
        } else {
            skipped += 1;
        }
    }

    tracing::debug!(
        regions = records.len(),
        aggregate_rows = skipped,
        ages = columns.ages.len(),
        "extracted regions"
    );

    Ok(RegionSet {
        ages: columns.ages,
        records,
        summary,
    })
}

/// Extracts the single addressable region whose canonical name is `name`.
pub fn extract_region(
    table: &Table,
    convention: &ColumnConvention,
    name: &str,
) -> Result<RegionRecord> {
    let region_idx = convention.region_index(table)?;
    let columns = convention.select_age_columns(table)?;
    let wanted = name.trim();

    for row in 0..table.height() {
        let region = parse_region_name(table.cell(row, region_idx).unwrap_or(""));
        if region.is_addressable() && region.name == wanted {
            return extract_row(table, row, region_idx, &columns);
        }
    }

    Err(RegionNotFound {
        name: wanted.to_string(),
    }
    .into())
}

/// Extracts the addressable regions of a combined-total export.
pub fn extract_totals(
    table: &Table,
    convention: &ColumnConvention,
) -> Result<(Vec<AgeLabel>, Vec<TotalRecord>)> {
    let region_idx = convention.region_index(table)?;
    let (ages, columns) = convention.select_total_columns(table)?;

    let mut records = Vec::new();
    for row in 0..table.height() {
        let region = parse_region_name(table.cell(row, region_idx).unwrap_or(""));
        if !region.is_addressable() {
            continue;
        }
        let total = CombinedVector::new(parse_columns(table, row, &columns)?);
        records.push(TotalRecord { region, total });
    }

    tracing::debug!(regions = records.len(), ages = ages.len(), "extracted totals");
    Ok((ages, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn sample_table() -> Table {
        Table::new(
            row(&[
                "행정구역",
                "2025년04월_남_0세",
                "2025년04월_남_1세",
                "2025년04월_여_0세",
                "2025년04월_여_1세",
            ]),
            vec![
                row(&["서울특별시", "1,000", "2,000", "1,100", "2,100"]),
                row(&["종로구(1111000000)", "10", "20", "11", ""]),
                row(&["중구(1114000000)", "5", "", "6", "7"]),
                row(&["출장소 합계", "1", "1", "1", "1"]),
            ],
        )
    }

    #[test]
    fn test_extract_regions() {
        let set = extract_regions(&sample_table(), &ColumnConvention::default()).unwrap();

        assert_eq!(set.ages, vec![AgeLabel::from("0세"), AgeLabel::from("1세")]);
        assert_eq!(set.names(), vec!["종로구", "중구"]);

        let jongno = set.find("종로구").unwrap();
        assert_eq!(jongno.male, vec![10, 20]);
        assert_eq!(jongno.female, vec![11, 0]);

        let summary = set.summary.as_ref().unwrap();
        assert_eq!(summary.name(), "서울특별시");
        assert_eq!(summary.total_population(), 6_200);
    }

    #[test]
    fn test_extract_region_by_name() {
        let table = sample_table();
        let convention = ColumnConvention::default();

        let record = extract_region(&table, &convention, "중구").unwrap();
        assert_eq!(record.combined().counts(), &[11, 7]);

        let missing = extract_region(&table, &convention, "서울특별시");
        assert!(matches!(missing, Err(IngestError::RegionNotFound(_))));
    }

    #[test]
    fn test_extract_reports_bad_cell() {
        let mut table = sample_table();
        table.rows[2][2] = "n/a".to_string();
        let result = extract_regions(&table, &ColumnConvention::default());
        assert!(matches!(
            result,
            Err(IngestError::Parse(ParseError::InvalidCount { ref field, ref value }))
                if field == "2025년04월_남_1세" && value == "n/a"
        ));
    }

    #[test]
    fn test_extract_totals() {
        let table = Table::new(
            row(&["행정구역", "2025년04월_계_0세", "2025년04월_계_1세"]),
            vec![
                row(&["서울특별시", "9", "9"]),
                row(&["종로구(1111000000)", "1,500", "2"]),
            ],
        );
        let (ages, totals) = extract_totals(&table, &ColumnConvention::default()).unwrap();
        assert_eq!(ages.len(), 2);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].region.name, "종로구");
        assert_eq!(totals[0].total.counts(), &[1500, 2]);
    }
}
