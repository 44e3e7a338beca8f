use super::aggregate::{GroupKey, GroupMeans};
use crate::models::WeatherSituation;
use serde::Serialize;

pub const NO_DATA_MESSAGE: &str = "No data for the selected filters";

/// Short findings derived from the season and weather means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub lines: Vec<String>,
}

impl Insights {
    pub fn from_means(by_season: &GroupMeans, by_weather: &GroupMeans) -> Self {
        let mut lines = Vec::new();

        if let Some(top) = by_season.max() {
            lines.push(format!(
                "Season {} shows the highest average rentals ({:.0} per day).",
                top.group, top.mean
            ));
        }

        if let (Some(best), Some(worst)) = (by_weather.max(), by_weather.min()) {
            let clear_is_best = best.group == GroupKey::Weather(WeatherSituation::Clear);
            let lead = if clear_is_best {
                "Clear weather goes with the highest cycling activity".to_string()
            } else {
                format!("{} weather goes with the highest cycling activity", best.group)
            };

            if best.group != worst.group && worst.mean > 0.0 {
                lines.push(format!(
                    "{} ({:.1}x the average under {}).",
                    lead,
                    best.mean / worst.mean,
                    worst.group
                ));
            } else {
                lines.push(format!("{}.", lead));
            }
        }

        if lines.is_empty() {
            lines.push(NO_DATA_MESSAGE.to_string());
        }

        Self { lines }
    }

    pub fn has_data(&self) -> bool {
        !(self.lines.len() == 1 && self.lines[0] == NO_DATA_MESSAGE)
    }
}
