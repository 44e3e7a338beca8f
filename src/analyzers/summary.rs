use crate::models::Dataset;
use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnmappedCodes {
    pub season: usize,
    pub weekday: usize,
    pub weather: usize,
}

impl UnmappedCodes {
    pub fn total(&self) -> usize {
        self.season + self.weekday + self.weather
    }
}

/// Overview of a loaded dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub years: Vec<i32>,
    pub total_rentals: u64,
    pub mean_rentals: Option<f64>,
    pub max_day: Option<(NaiveDate, u32)>,
    pub unmapped: UnmappedCodes,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut unmapped = UnmappedCodes::default();
        let mut total_rentals = 0u64;
        let mut max_day: Option<(NaiveDate, u32)> = None;

        for record in dataset {
            total_rentals += record.count as u64;

            if max_day.map_or(true, |(_, count)| record.count > count) {
                max_day = Some((record.date, record.count));
            }

            if record.season.is_none() {
                unmapped.season += 1;
            }
            if record.weekday.is_none() {
                unmapped.weekday += 1;
            }
            if record.weather.is_none() {
                unmapped.weather += 1;
            }
        }

        let mut years = dataset.years().to_vec();
        years.sort_unstable();

        let mean_rentals = if dataset.is_empty() {
            None
        } else {
            Some(total_rentals as f64 / dataset.len() as f64)
        };

        Self {
            total_records: dataset.len(),
            date_range: dataset.date_range(),
            years,
            total_rentals,
            mean_rentals,
            max_day,
            unmapped,
        }
    }

    pub fn summary(&self) -> String {
        let date_range = match self.date_range {
            Some((start, end)) => format!("{} to {}", start, end),
            None => "n/a".to_string(),
        };
        let years: Vec<String> = self.years.iter().map(|y| y.to_string()).collect();
        let mean = self
            .mean_rentals
            .map(|m| format!("{:.1}", m))
            .unwrap_or_else(|| "n/a".to_string());
        let busiest = self
            .max_day
            .map(|(date, count)| format!("{} on {}", count, date))
            .unwrap_or_else(|| "n/a".to_string());

        format!(
            "Records: {} days\n\
            Date Range: {}\n\
            Years: {}\n\
            Total Rentals: {}\n\
            Mean Rentals per Day: {}\n\
            Busiest Day: {}\n\
            Unmapped Codes: {} season, {} weekday, {} weather",
            self.total_records,
            date_range,
            years.join(", "),
            self.total_rentals,
            mean,
            busiest,
            self.unmapped.season,
            self.unmapped.weekday,
            self.unmapped.weather
        )
    }
}

/// A finding on one record. `record` is the 1-based position in the checked
/// dataset, which for an unfiltered load is also the data row of the source file.
#[derive(Debug, Clone, Serialize)]
pub struct RecordIssue {
    pub record: usize,
    pub date: NaiveDate,
    pub details: String,
}

/// Data-quality findings that do not stop a load.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub total_records: usize,
    pub unmapped: UnmappedCodes,
    pub issues: Vec<RecordIssue>,
}

impl QualityReport {
    pub fn check(dataset: &Dataset) -> Self {
        let mut issues = Vec::new();

        for (index, record) in dataset.iter().enumerate() {
            let position = index + 1;

            if let Err(errors) = record.validate() {
                issues.push(RecordIssue {
                    record: position,
                    date: record.date,
                    details: format!("measurement out of range: {}", errors),
                });
            }

            if !record.rider_split_consistent() {
                issues.push(RecordIssue {
                    record: position,
                    date: record.date,
                    details: format!(
                        "casual ({}) + registered ({}) != cnt ({})",
                        record.casual.unwrap_or(0),
                        record.registered.unwrap_or(0),
                        record.count
                    ),
                });
            }

            if record.has_unmapped_codes() {
                issues.push(RecordIssue {
                    record: position,
                    date: record.date,
                    details: format!(
                        "unmapped code(s): season={}, weekday={}, weathersit={}",
                        record.season_code, record.weekday_code, record.weather_code
                    ),
                });
            }

            if !record.unreadable_fields.is_empty() {
                issues.push(RecordIssue {
                    record: position,
                    date: record.date,
                    details: format!(
                        "unreadable value(s) dropped: {}",
                        record.unreadable_fields.join(", ")
                    ),
                });
            }
        }

        Self {
            total_records: dataset.len(),
            unmapped: DatasetSummary::from_dataset(dataset).unmapped,
            issues,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut out = format!(
            "Checked {} records: {} issue(s), {} unmapped code(s)",
            self.total_records,
            self.issues.len(),
            self.unmapped.total()
        );
        for issue in &self.issues {
            out.push_str(&format!("\n- record {} ({}): {}", issue.record, issue.date, issue.details));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayRecord;

    fn record(day: u32, weather: i64, count: u32) -> DayRecord {
        DayRecord::new(NaiveDate::from_ymd_opt(2011, 1, day).unwrap(), 1, 6, weather, count)
    }

    #[test]
    fn test_dataset_summary() {
        let dataset = Dataset::from_records(vec![
            record(1, 2, 985),
            record(2, 9, 801),
            record(3, 1, 1349),
        ]);
        let summary = DatasetSummary::from_dataset(&dataset);

        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.total_rentals, 3135);
        assert_eq!(summary.mean_rentals, Some(1045.0));
        assert_eq!(summary.years, vec![2011]);
        assert_eq!(
            summary.max_day,
            Some((NaiveDate::from_ymd_opt(2011, 1, 3).unwrap(), 1349))
        );
        assert_eq!(summary.unmapped.weather, 1);
        assert_eq!(summary.unmapped.total(), 1);
        assert!(summary.summary().contains("Total Rentals: 3135"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = DatasetSummary::from_dataset(&Dataset::empty());
        assert_eq!(summary.mean_rentals, None);
        assert!(summary.summary().contains("Date Range: n/a"));
    }

    #[test]
    fn test_quality_report() {
        let mut bad_split = record(1, 1, 985);
        bad_split.casual = Some(300);
        bad_split.registered = Some(600);
        let mut bad_humidity = record(2, 1, 801);
        bad_humidity.humidity = Some(1.4);

        let dataset = Dataset::from_records(vec![bad_split, bad_humidity, record(3, 7, 1349)]);
        let report = QualityReport::check(&dataset);

        assert!(!report.is_clean());
        assert_eq!(report.issues.len(), 3);
        assert_eq!(report.issues[0].record, 1);
        assert_eq!(report.issues[1].record, 2);
        assert_eq!(report.issues[2].record, 3);
        assert!(report.issues[1].details.contains("out of range"));
        assert!(report.issues[2].details.contains("weathersit=7"));
        assert_eq!(report.unmapped.weather, 1);
    }

    #[test]
    fn test_unreadable_fields_are_reported() {
        let mut record_with_gap = record(2, 1, 801);
        record_with_gap.unreadable_fields = vec!["hum".to_string()];

        let dataset = Dataset::from_records(vec![record(1, 1, 985), record_with_gap]);
        let report = QualityReport::check(&dataset);

        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].record, 2);
        assert!(report.summary().contains("- record 2 (2011-01-02): unreadable value(s) dropped: hum"));
    }

    #[test]
    fn test_clean_report() {
        let dataset = Dataset::from_records(vec![record(1, 1, 985)]);
        let report = QualityReport::check(&dataset);
        assert!(report.is_clean());
        assert!(report.summary().starts_with("Checked 1 records: 0 issue(s)"));
    }
}
