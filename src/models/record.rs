use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::labels::{Code, Season, WeatherSituation, Weekday};

/// One daily observation: calendar date, categorical labels and rental counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,

    // Raw codes as read from the source
    pub season_code: Code,
    pub weekday_code: Code,
    pub weather_code: Code,

    // Labels; None when the code is outside the known table
    pub season: Option<Season>,
    pub weekday: Option<Weekday>,
    pub weather: Option<WeatherSituation>,

    pub count: u32,

    // Optional columns of the full daily table
    pub casual: Option<u32>,
    pub registered: Option<u32>,
    pub holiday: Option<bool>,
    pub working_day: Option<bool>,

    // Normalized measurements
    #[validate(range(min = 0.0, max = 1.0))]
    pub temp: Option<f64>,

    #[validate(range(min = 0.0, max = 1.0))]
    pub feeling_temp: Option<f64>,

    #[validate(range(min = 0.0, max = 1.0))]
    pub humidity: Option<f64>,

    #[validate(range(min = 0.0, max = 1.0))]
    pub wind_speed: Option<f64>,

    // Optional columns whose cell could not be parsed and was left empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unreadable_fields: Vec<String>,
}

impl DayRecord {
    /// Build a record from its raw codes, deriving labels, year and month.
    pub fn new(
        date: NaiveDate,
        season_code: Code,
        weekday_code: Code,
        weather_code: Code,
        count: u32,
    ) -> Self {
        Self {
            date,
            year: date.year(),
            month: date.month(),
            season_code,
            weekday_code,
            weather_code,
            season: Season::from_code(season_code),
            weekday: Weekday::from_code(weekday_code),
            weather: WeatherSituation::from_code(weather_code),
            count,
            casual: None,
            registered: None,
            holiday: None,
            working_day: None,
            temp: None,
            feeling_temp: None,
            humidity: None,
            wind_speed: None,
            unreadable_fields: Vec::new(),
        }
    }

    pub fn season_label(&self) -> &'static str {
        self.season.map(|s| s.label()).unwrap_or("-")
    }

    pub fn weather_label(&self) -> &'static str {
        self.weather.map(|w| w.label()).unwrap_or("-")
    }

    pub fn has_unmapped_codes(&self) -> bool {
        self.season.is_none() || self.weekday.is_none() || self.weather.is_none()
    }

    /// Casual and registered riders should add up to the total when both are present.
    pub fn rider_split_consistent(&self) -> bool {
        match (self.casual, self.registered) {
            (Some(casual), Some(registered)) => casual as u64 + registered as u64 == self.count as u64,
            _ => true,
        }
    }
}
