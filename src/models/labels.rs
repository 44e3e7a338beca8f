use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DashboardError, Result};

/// Raw categorical code as stored in the source table.
pub type Code = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Map a raw season code; codes outside 1..=4 have no label.
    pub fn from_code(code: Code) -> Option<Self> {
        Self::ALL.iter().copied().find(|season| season.code() == code)
    }

    pub fn code(&self) -> Code {
        *self as Code
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|season| season.label() == label)
    }

    /// Parse a user-supplied season name, ignoring case.
    pub fn parse(s: &str) -> Result<Self> {
        Season::ALL
            .iter()
            .copied()
            .find(|season| season.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DashboardError::InvalidSelection(format!(
                    "unknown season '{}' (expected one of Spring, Summer, Fall, Winter)",
                    s
                ))
            })
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day of week; code 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sun = 0,
    Mon = 1,
    Tue = 2,
    Wed = 3,
    Thu = 4,
    Fri = 5,
    Sat = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    pub fn from_code(code: Code) -> Option<Self> {
        Self::ALL.iter().copied().find(|weekday| weekday.code() == code)
    }

    pub fn code(&self) -> Code {
        *self as Code
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|weekday| weekday.label() == label)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeatherSituation {
    #[serde(rename = "Clear/Few clouds")]
    Clear = 1,
    #[serde(rename = "Mist/Cloudy")]
    Mist = 2,
    #[serde(rename = "Light Snow/Rain")]
    LightPrecipitation = 3,
    #[serde(rename = "Heavy Rain/Snow")]
    HeavyPrecipitation = 4,
}

impl WeatherSituation {
    pub const ALL: [WeatherSituation; 4] = [
        WeatherSituation::Clear,
        WeatherSituation::Mist,
        WeatherSituation::LightPrecipitation,
        WeatherSituation::HeavyPrecipitation,
    ];

    pub fn from_code(code: Code) -> Option<Self> {
        Self::ALL.iter().copied().find(|weather| weather.code() == code)
    }

    pub fn code(&self) -> Code {
        *self as Code
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherSituation::Clear => "Clear/Few clouds",
            WeatherSituation::Mist => "Mist/Cloudy",
            WeatherSituation::LightPrecipitation => "Light Snow/Rain",
            WeatherSituation::HeavyPrecipitation => "Heavy Rain/Snow",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|weather| weather.label() == label)
    }
}

impl fmt::Display for WeatherSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
