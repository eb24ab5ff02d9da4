//! Column naming convention of the population export and age column selection.

use agepop_model::{AgeLabel, ParseError};
use serde::{Deserialize, Serialize};

use crate::csv::Table;
use crate::error::{IngestError, Result};

/// How region and age columns are named in the source header.
///
/// Defaults match the resident registration export, e.g.
/// `행정구역, 2025년04월_남_0세, ..., 2025년04월_여_100세 이상`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConvention {
    /// Column holding the administrative-area string.
    pub region_column: String,
    /// Substring present in every per-age column.
    pub age_marker: String,
    pub male_marker: String,
    pub female_marker: String,
    /// Marker of both-sexes columns in combined-total exports.
    pub total_marker: String,
    /// The age label is the text after the last separator.
    pub label_separator: String,
}

impl Default for ColumnConvention {
    fn default() -> Self {
        Self {
            region_column: "행정구역".to_string(),
            age_marker: "세".to_string(),
            male_marker: "_남_".to_string(),
            female_marker: "_여_".to_string(),
            total_marker: "_계_".to_string(),
            label_separator: "_".to_string(),
        }
    }
}

impl ColumnConvention {
    /// Age label carried by a column name.
    pub fn label_of(&self, column: &str) -> AgeLabel {
        let label = column
            .rsplit(self.label_separator.as_str())
            .next()
            .unwrap_or(column);
        AgeLabel::new(label.trim())
    }

    /// Index of the region-name column.
    pub fn region_index(&self, table: &Table) -> Result<usize> {
        table
            .column_index(&self.region_column)
            .ok_or_else(|| IngestError::MissingColumn {
                column: self.region_column.clone(),
            })
    }

    fn matching(&self, table: &Table, sex_marker: &str) -> Vec<usize> {
        table
            .columns
            .iter()
            .enumerate()
            .filter(|(_, name)| name.contains(&self.age_marker) && name.contains(sex_marker))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Selects the per-sex age columns of `table`.
    pub fn select_age_columns(&self, table: &Table) -> Result<AgeColumns> {
        let male = self.matching(table, &self.male_marker);
        let female = self.matching(table, &self.female_marker);

        if male.is_empty() {
            return Err(IngestError::NoAgeColumns {
                age_marker: self.age_marker.clone(),
                sex_marker: self.male_marker.clone(),
            });
        }
        if male.len() != female.len() {
            return Err(ParseError::MismatchedAgeColumns {
                male: male.len(),
                female: female.len(),
            }
            .into());
        }

        let ages: Vec<AgeLabel> = male
            .iter()
            .map(|&idx| self.label_of(&table.columns[idx]))
            .collect();

        for (label, &idx) in ages.iter().zip(&female) {
            let female_label = self.label_of(&table.columns[idx]);
            if &female_label != label {
                tracing::warn!(
                    male = %label,
                    female = %female_label,
                    "female age column does not match male label; using male label"
                );
            }
        }

        tracing::debug!(ages = ages.len(), "selected age columns");
        Ok(AgeColumns { ages, male, female })
    }

    /// Selects the both-sexes age columns of a combined-total export.
    pub fn select_total_columns(&self, table: &Table) -> Result<(Vec<AgeLabel>, Vec<usize>)> {
        let total = self.matching(table, &self.total_marker);
        if total.is_empty() {
            return Err(IngestError::NoAgeColumns {
                age_marker: self.age_marker.clone(),
                sex_marker: self.total_marker.clone(),
            });
        }
        let ages = total
            .iter()
            .map(|&idx| self.label_of(&table.columns[idx]))
            .collect();
        Ok((ages, total))
    }
}

/// Positions of the per-sex age columns, aligned by age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeColumns {
    /// Labels in header order of the male columns.
    pub ages: Vec<AgeLabel>,
    pub male: Vec<usize>,
    pub female: Vec<usize>,
}
