use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use super::labels::Season;
use super::record::DayRecord;

/// Immutable snapshot of loaded records with the distinct filter values they contain.
///
/// Cloning is cheap: the records live behind an `Arc` and are never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[DayRecord]>,
    /// Distinct years in first-appearance order.
    years: Vec<i32>,
    /// Distinct season labels in first-appearance order; `None` marks unmapped codes.
    seasons: Vec<Option<Season>>,
}

impl Dataset {
    pub fn from_records(records: Vec<DayRecord>) -> Self {
        let mut seen_years = HashSet::new();
        let mut seen_seasons = HashSet::new();
        let mut years = Vec::new();
        let mut seasons = Vec::new();

        for record in &records {
            if seen_years.insert(record.year) {
                years.push(record.year);
            }
            if seen_seasons.insert(record.season) {
                seasons.push(record.season);
            }
        }

        Self {
            records: records.into(),
            years,
            seasons,
        }
    }

    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayRecord> {
        self.records.iter()
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn seasons(&self) -> &[Option<Season>] {
        &self.seasons
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn head(&self, n: usize) -> &[DayRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }

    /// True when both datasets share the same underlying allocation.
    pub fn ptr_eq(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
