use crate::models::{Dataset, Season};
use serde::Serialize;
use std::collections::BTreeSet;

/// The user's current year and season choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub years: BTreeSet<i32>,
    /// `None` stands for records whose season code has no label.
    pub seasons: BTreeSet<Option<Season>>,
}

impl Selection {
    pub fn new(years: impl IntoIterator<Item = i32>, seasons: impl IntoIterator<Item = Season>) -> Self {
        Self {
            years: years.into_iter().collect(),
            seasons: seasons.into_iter().map(Some).collect(),
        }
    }

    /// Everything observed in the dataset, the default before the user narrows it.
    pub fn all(dataset: &Dataset) -> Self {
        Self {
            years: dataset.years().iter().copied().collect(),
            seasons: dataset.seasons().iter().copied().collect(),
        }
    }

    /// Start from all observed values and narrow only the dimensions the caller supplied.
    pub fn narrowed(dataset: &Dataset, years: &[i32], seasons: &[Season]) -> Self {
        let mut selection = Self::all(dataset);
        if !years.is_empty() {
            selection.years = years.iter().copied().collect();
        }
        if !seasons.is_empty() {
            selection.seasons = seasons.iter().copied().map(Some).collect();
        }
        selection
    }

    pub fn matches(&self, year: i32, season: Option<Season>) -> bool {
        self.years.contains(&year) && self.seasons.contains(&season)
    }

    pub fn describe(&self) -> String {
        let years: Vec<String> = self.years.iter().map(|y| y.to_string()).collect();
        let seasons: Vec<&str> = self
            .seasons
            .iter()
            .map(|s| s.map(|s| s.label()).unwrap_or("(unlabeled)"))
            .collect();
        format!("Years: [{}]  Seasons: [{}]", years.join(", "), seasons.join(", "))
    }
}

/// Records whose year AND season are selected, in source order.
pub fn filter_dataset(dataset: &Dataset, selection: &Selection) -> Dataset {
    let records = dataset
        .iter()
        .filter(|record| selection.matches(record.year, record.season))
        .cloned()
        .collect();
    Dataset::from_records(records)
}
