use super::aggregate::{aggregate_mean, GroupField, GroupMeans, ValueField};
use super::filter::{filter_dataset, Selection};
use super::insight::Insights;
use crate::models::Dataset;
use tracing::debug;

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub selection: Selection,
    pub filtered: Dataset,
    pub by_season: GroupMeans,
    pub by_weather: GroupMeans,
    pub insights: Insights,
}

impl DashboardView {
    /// Filter once, then aggregate the filtered records by season and weather.
    pub fn build(dataset: &Dataset, selection: Selection) -> Self {
        let filtered = filter_dataset(dataset, &selection);
        let by_season = aggregate_mean(&filtered, GroupField::Season, ValueField::Count);
        let by_weather = aggregate_mean(&filtered, GroupField::Weather, ValueField::Count);
        let insights = Insights::from_means(&by_season, &by_weather);

        debug!(
            selected = filtered.len(),
            total = dataset.len(),
            "Built dashboard view"
        );

        Self {
            selection,
            filtered,
            by_season,
            by_weather,
            insights,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}
