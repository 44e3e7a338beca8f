use crate::models::{DayRecord, Season, WeatherSituation, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Categorical field records can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Season,
    Weather,
    Weekday,
    Year,
    Month,
}

impl GroupField {
    /// Group key for a record; `None` when the record's label is undefined.
    pub fn key(&self, record: &DayRecord) -> Option<GroupKey> {
        match self {
            GroupField::Season => record.season.map(GroupKey::Season),
            GroupField::Weather => record.weather.map(GroupKey::Weather),
            GroupField::Weekday => record.weekday.map(GroupKey::Weekday),
            GroupField::Year => Some(GroupKey::Year(record.year)),
            GroupField::Month => Some(GroupKey::Month(record.month)),
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            GroupField::Season => "season",
            GroupField::Weather => "weathersit",
            GroupField::Weekday => "weekday",
            GroupField::Year => "year",
            GroupField::Month => "month",
        }
    }
}

/// Numeric field whose mean is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Count,
    Casual,
    Registered,
    Temperature,
    Humidity,
    WindSpeed,
}

impl ValueField {
    pub fn value(&self, record: &DayRecord) -> Option<f64> {
        match self {
            ValueField::Count => Some(record.count as f64),
            ValueField::Casual => record.casual.map(f64::from),
            ValueField::Registered => record.registered.map(f64::from),
            ValueField::Temperature => record.temp,
            ValueField::Humidity => record.humidity,
            ValueField::WindSpeed => record.wind_speed,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            ValueField::Count => "cnt",
            ValueField::Casual => "casual",
            ValueField::Registered => "registered",
            ValueField::Temperature => "temp",
            ValueField::Humidity => "hum",
            ValueField::WindSpeed => "windspeed",
        }
    }
}

/// A group label. Ordering follows category code order, then numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Season(Season),
    Weather(WeatherSituation),
    Weekday(Weekday),
    Year(i32),
    Month(u32),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Season(season) => write!(f, "{}", season),
            GroupKey::Weather(weather) => write!(f, "{}", weather),
            GroupKey::Weekday(weekday) => write!(f, "{}", weekday),
            GroupKey::Year(year) => write!(f, "{}", year),
            GroupKey::Month(month) => write!(f, "{:02}", month),
        }
    }
}

impl Serialize for GroupKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub group: GroupKey,
    pub mean: f64,
    pub records: usize,
}

/// Ordered group → mean mapping. Only groups with at least one record appear.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct GroupMeans {
    groups: Vec<GroupMean>,
}

impl GroupMeans {
    pub fn iter(&self) -> std::slice::Iter<'_, GroupMean> {
        self.groups.iter()
    }

    pub fn get(&self, key: &GroupKey) -> Option<f64> {
        self.groups.iter().find(|g| &g.group == key).map(|g| g.mean)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn max(&self) -> Option<&GroupMean> {
        self.groups.iter().max_by(|a, b| a.mean.total_cmp(&b.mean))
    }

    pub fn min(&self) -> Option<&GroupMean> {
        self.groups.iter().min_by(|a, b| a.mean.total_cmp(&b.mean))
    }

    /// `(label, mean)` pairs in display order.
    pub fn to_pairs(&self) -> Vec<(String, f64)> {
        self.groups
            .iter()
            .map(|g| (g.group.to_string(), g.mean))
            .collect()
    }
}

/// Mean of `value` per distinct `group_by` label present in `records`.
///
/// Records with an undefined label or a missing value are skipped. Each
/// group's values are summed in sorted order so the result does not depend
/// on the order of the input.
pub fn aggregate_mean<'a, I>(records: I, group_by: GroupField, value: ValueField) -> GroupMeans
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let mut buckets: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();

    for record in records {
        let (Some(key), Some(v)) = (group_by.key(record), value.value(record)) else {
            continue;
        };
        buckets.entry(key).or_default().push(v);
    }

    let groups = buckets
        .into_iter()
        .map(|(group, mut values)| {
            values.sort_by(f64::total_cmp);
            let sum: f64 = values.iter().sum();
            GroupMean {
                group,
                mean: sum / values.len() as f64,
                records: values.len(),
            }
        })
        .collect();

    GroupMeans { groups }
}
