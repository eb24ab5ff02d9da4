//! Table and JSON rendering of analysis results.

use agepop_model::{AgeDistribution, BucketShare, RegionReport, RegionSet, Scale, SimilarityResult};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

/// One line of the `regions` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionRow {
    pub name: String,
    pub code: Option<String>,
    pub male: u64,
    pub female: u64,
    pub total: u64,
}

pub fn region_rows(set: &RegionSet) -> Vec<RegionRow> {
    set.iter()
        .map(|record| RegionRow {
            name: record.name().to_string(),
            code: record.region.code.clone(),
            male: record.male_total(),
            female: record.female_total(),
            total: record.total_population(),
        })
        .collect()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn regions_table(rows: &[RegionRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Code"),
        header_cell("Male"),
        header_cell("Female"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for index in 2..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            dim_cell(row.code.as_deref().unwrap_or("-")),
            Cell::new(row.male),
            Cell::new(row.female),
            Cell::new(row.total).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn distribution_table(distribution: &AgeDistribution) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Age"),
        header_cell("Male"),
        header_cell("Female"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let rows = distribution
        .ages
        .iter()
        .zip(&distribution.male)
        .zip(&distribution.female);
    for ((age, &male), &female) in rows {
        table.add_row(vec![
            Cell::new(age),
            Cell::new(format_value(male, distribution.scale)),
            Cell::new(format_value(female, distribution.scale)),
            Cell::new(format_value(male + female, distribution.scale)),
        ]);
    }
    table
}

pub fn buckets_table(shares: &[BucketShare]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Bucket"),
        header_cell("Population"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for share in shares {
        table.add_row(vec![
            Cell::new(&share.name),
            Cell::new(share.population),
            Cell::new(format!("{:.2}%", share.percent)),
        ]);
    }
    table
}

pub fn similarity_line(result: Option<&SimilarityResult>) -> String {
    match result {
        Some(result) => format!(
            "Most similar: {} ({} score {:.4})",
            result.matched_region_name, result.metric, result.score
        ),
        None => "Most similar: no eligible candidate".to_string(),
    }
}

pub fn report_text(report: &RegionReport) -> String {
    format!(
        "Region: {} (population {})\n{}\n{}\n{}",
        report.region,
        report.distribution.total_population,
        distribution_table(&report.distribution),
        buckets_table(&report.buckets),
        similarity_line(report.most_similar.as_ref()),
    )
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Counts print as integers, percentages with two decimals.
pub fn format_value(value: f64, scale: Scale) -> String {
    match scale {
        Scale::Count => format!("{value:.0}"),
        Scale::Percent => format!("{value:.2}%"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
