use crate::error::{DashboardError, Result};
use crate::models::{Code, DayRecord, Dataset};
use crate::utils::constants::*;
use chrono::NaiveDate;
use csv::StringRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    season: usize,
    weekday: usize,
    weather: usize,
    count: usize,
    holiday: Option<usize>,
    working_day: Option<usize>,
    temp: Option<usize>,
    feeling_temp: Option<usize>,
    humidity: Option<usize>,
    wind_speed: Option<usize>,
    casual: Option<usize>,
    registered: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| column_position(headers, name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DashboardError::Schema { missing });
        }

        let required = |name: &str| {
            column_position(headers, name).ok_or_else(|| DashboardError::Schema {
                missing: vec![name.to_string()],
            })
        };
        let position = |name: &str| column_position(headers, name);

        Ok(Self {
            date: required(COL_DATE)?,
            season: required(COL_SEASON)?,
            weekday: required(COL_WEEKDAY)?,
            weather: required(COL_WEATHER)?,
            count: required(COL_COUNT)?,
            holiday: position(COL_HOLIDAY),
            working_day: position(COL_WORKING_DAY),
            temp: position(COL_TEMP),
            feeling_temp: position(COL_FEELING_TEMP),
            humidity: position(COL_HUMIDITY),
            wind_speed: position(COL_WIND_SPEED),
            casual: position(COL_CASUAL),
            registered: position(COL_REGISTERED),
        })
    }
}

fn column_position(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Reads the daily rentals CSV into a normalized [`Dataset`].
pub struct DayReader {
    delimiter: u8,
}

impl DayReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Load the dataset from a CSV file on disk
    pub fn read_path(&self, path: &Path) -> Result<Dataset> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DashboardError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => DashboardError::Io(e),
        })?;

        info!("Loading dataset from {}", path.display());
        self.read_from(file)
    }

    /// Load the dataset from any CSV byte source. All-or-nothing: the first
    /// malformed row aborts the load. Unparseable optional cells are dropped
    /// with a warning and noted on the record.
    pub fn read_from<R: Read>(&self, source: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);

        let columns = ColumnIndex::from_headers(reader.headers()?)?;
        debug!(?columns, "Resolved column positions");

        let mut records = Vec::new();
        let mut row = StringRecord::new();
        let mut row_number = 0;

        while reader.read_record(&mut row)? {
            row_number += 1;
            records.push(self.parse_row(&row, &columns, row_number)?);
        }

        log_unmapped_codes(&records);
        info!("Loaded {} daily records", records.len());

        Ok(Dataset::from_records(records))
    }

    fn parse_row(&self, row: &StringRecord, columns: &ColumnIndex, row_number: usize) -> Result<DayRecord> {
        let date_str = required_field(row, columns.date, COL_DATE, row_number)?;
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| {
            DashboardError::parse(row_number, format!("invalid date '{}'", date_str))
        })?;

        let season_code: Code = parse_field(row, columns.season, COL_SEASON, row_number)?;
        let weekday_code: Code = parse_field(row, columns.weekday, COL_WEEKDAY, row_number)?;
        let weather_code: Code = parse_field(row, columns.weather, COL_WEATHER, row_number)?;
        let count: u32 = parse_field(row, columns.count, COL_COUNT, row_number)?;

        let mut record = DayRecord::new(date, season_code, weekday_code, weather_code, count);
        let mut optional = OptionalCells {
            row,
            row_number,
            unreadable: Vec::new(),
        };

        record.holiday = optional.parse::<u8>(columns.holiday, COL_HOLIDAY).map(|flag| flag != 0);
        record.working_day = optional
            .parse::<u8>(columns.working_day, COL_WORKING_DAY)
            .map(|flag| flag != 0);
        record.temp = optional.parse(columns.temp, COL_TEMP);
        record.feeling_temp = optional.parse(columns.feeling_temp, COL_FEELING_TEMP);
        record.humidity = optional.parse(columns.humidity, COL_HUMIDITY);
        record.wind_speed = optional.parse(columns.wind_speed, COL_WIND_SPEED);
        record.casual = optional.parse(columns.casual, COL_CASUAL);
        record.registered = optional.parse(columns.registered, COL_REGISTERED);
        record.unreadable_fields = optional.unreadable;

        Ok(record)
    }
}

impl Default for DayReader {
    fn default() -> Self {
        Self::new()
    }
}

fn required_field<'r>(row: &'r StringRecord, index: usize, column: &str, row_number: usize) -> Result<&'r str> {
    match row.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DashboardError::parse(
            row_number,
            format!("missing value for '{}'", column),
        )),
    }
}

fn parse_field<T: FromStr>(row: &StringRecord, index: usize, column: &str, row_number: usize) -> Result<T> {
    let value = required_field(row, index, column, row_number)?;
    value.parse::<T>().map_err(|_| {
        DashboardError::parse(row_number, format!("invalid {} '{}'", column, value))
    })
}

/// Optional columns of one row. A cell that fails to parse becomes `None`.
struct OptionalCells<'r> {
    row: &'r StringRecord,
    row_number: usize,
    unreadable: Vec<String>,
}

impl OptionalCells<'_> {
    fn parse<T: FromStr>(&mut self, index: Option<usize>, column: &str) -> Option<T> {
        match index.and_then(|i| self.row.get(i)) {
            None | Some("") => None,
            Some(value) => match value.parse::<T>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    warn!(
                        row = self.row_number,
                        column,
                        value,
                        "Unreadable optional value treated as missing"
                    );
                    self.unreadable.push(column.to_string());
                    None
                }
            },
        }
    }
}

fn log_unmapped_codes(records: &[DayRecord]) {
    let seasons = records.iter().filter(|r| r.season.is_none()).count();
    let weekdays = records.iter().filter(|r| r.weekday.is_none()).count();
    let weather = records.iter().filter(|r| r.weather.is_none()).count();

    if seasons + weekdays + weather > 0 {
        warn!(
            seasons,
            weekdays, weather, "Rows with unmapped category codes loaded without labels"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Season, WeatherSituation, Weekday};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_HEADER: &str = "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

    #[test]
    fn test_read_full_schema() {
        let csv = format!(
            "{}\n1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985\n\
             2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801\n",
            FULL_HEADER
        );

        let dataset = DayReader::new().read_from(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(first.year, 2011);
        assert_eq!(first.month, 1);
        assert_eq!(first.season, Some(Season::Spring));
        assert_eq!(first.weekday, Some(Weekday::Sat));
        assert_eq!(first.weather, Some(WeatherSituation::Mist));
        assert_eq!(first.count, 985);
        assert_eq!(first.casual, Some(331));
        assert_eq!(first.registered, Some(654));
        assert_eq!(first.holiday, Some(false));
        assert_eq!(first.humidity, Some(0.805833));
        assert!(first.rider_split_consistent());
    }

    #[test]
    fn test_read_minimal_schema_in_any_column_order() {
        let csv = "cnt,weathersit,weekday,season,dteday\n1600, 1, 3, 4, 2012-12-05\n";
        let dataset = DayReader::new().read_from(csv.as_bytes()).unwrap();

        let record = &dataset.records()[0];
        assert_eq!(record.count, 1600);
        assert_eq!(record.season, Some(Season::Winter));
        assert_eq!(record.weekday, Some(Weekday::Wed));
        assert_eq!(record.weather, Some(WeatherSituation::Clear));
        assert_eq!(record.temp, None);
        assert_eq!(record.casual, None);
    }

    #[test]
    fn test_unknown_weather_code_loads_without_label() {
        let csv = "dteday,season,weekday,weathersit,cnt\n2011-03-01,1,2,9,1200\n";
        let dataset = DayReader::new().read_from(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].weather, None);
        assert_eq!(dataset.records()[0].weather_code, 9);
    }

    #[test]
    fn test_missing_columns() {
        let csv = "dteday,season,cnt\n2011-01-01,1,985\n";
        let err = DayReader::new().read_from(csv.as_bytes()).unwrap_err();

        match err {
            DashboardError::Schema { missing } => {
                assert_eq!(missing, vec!["weekday".to_string(), "weathersit".to_string()]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_date_fails_load() {
        let csv = "dteday,season,weekday,weathersit,cnt\n\
                   2011-01-01,1,6,2,985\n\
                   2011-02-30,1,0,2,801\n";
        let err = DayReader::new().read_from(csv.as_bytes()).unwrap_err();

        match err {
            DashboardError::Parse { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("2011-02-30"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let csv = "dteday,season,weekday,weathersit,cnt\n2011-01-01,1,6,2,-5\n";
        let err = DayReader::new().read_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::Parse { row: 1, .. }));
    }

    #[test]
    fn test_out_of_range_codes_load_without_labels() {
        let csv = "dteday,season,weekday,weathersit,cnt\n\
                   2011-03-01,1,2,256,1200\n\
                   2011-03-02,-1,3,1,1300\n";
        let dataset = DayReader::new().read_from(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.weather_code, 256);
        assert_eq!(first.weather, None);
        assert_eq!(first.season, Some(Season::Spring));

        let second = &dataset.records()[1];
        assert_eq!(second.season_code, -1);
        assert_eq!(second.season, None);
        assert_eq!(second.weather, Some(WeatherSituation::Clear));
        assert_eq!(dataset.seasons(), &[Some(Season::Spring), None]);
    }

    #[test]
    fn test_fractional_code_is_a_parse_error() {
        let csv = "dteday,season,weekday,weathersit,cnt\n2011-03-01,1.5,2,1,1200\n";
        let err = DayReader::new().read_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::Parse { row: 1, .. }));
    }

    #[test]
    fn test_row_of_empty_fields_is_a_parse_error() {
        let csv = "dteday,season,weekday,weathersit,cnt\n\
                   2011-01-01,1,6,2,985\n\
                   ,,,,\n\
                   2011-01-03,1,1,1,1349\n";
        let err = DayReader::new().read_from(csv.as_bytes()).unwrap_err();

        match err {
            DashboardError::Parse { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("dteday"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_optional_value_is_treated_as_missing() {
        let csv = format!(
            "{}\n1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,n/a,0.160446,331,654,985\n\
             2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801\n",
            FULL_HEADER
        );
        let dataset = DayReader::new().read_from(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.humidity, None);
        assert_eq!(first.temp, Some(0.344167));
        assert_eq!(first.unreadable_fields, vec![COL_HUMIDITY.to_string()]);

        let second = &dataset.records()[1];
        assert_eq!(second.humidity, Some(0.696087));
        assert!(second.unreadable_fields.is_empty());
    }

    #[test]
    fn test_short_row_is_a_parse_error() {
        let csv = "dteday,season,weekday,weathersit,cnt\n2011-01-01,1,6\n";
        let err = DayReader::new().read_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::Parse { .. }));
    }

    #[test]
    fn test_source_not_found() {
        let err = DayReader::new()
            .read_path(Path::new("does/not/exist/day.csv"))
            .unwrap_err();
        assert!(matches!(err, DashboardError::SourceNotFound { .. }));
    }

    #[test]
    fn test_read_path_with_semicolons() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "dteday;season;weekday;weathersit;cnt")?;
        writeln!(temp_file, "2011-01-01;1;6;2;985")?;
        writeln!(temp_file)?;
        writeln!(temp_file, "2011-01-02;1;0;2;801")?;

        let dataset = DayReader::with_delimiter(b';').read_path(temp_file.path())?;
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].count, 801);

        Ok(())
    }
}
