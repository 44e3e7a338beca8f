/// Required columns of the daily rentals table
pub const COL_DATE: &str = "dteday";
pub const COL_SEASON: &str = "season";
pub const COL_WEEKDAY: &str = "weekday";
pub const COL_WEATHER: &str = "weathersit";
pub const COL_COUNT: &str = "cnt";

pub const REQUIRED_COLUMNS: [&str; 5] = [COL_DATE, COL_SEASON, COL_WEEKDAY, COL_WEATHER, COL_COUNT];

/// Optional columns
pub const COL_HOLIDAY: &str = "holiday";
pub const COL_WORKING_DAY: &str = "workingday";
pub const COL_TEMP: &str = "temp";
pub const COL_FEELING_TEMP: &str = "atemp";
pub const COL_HUMIDITY: &str = "hum";
pub const COL_WIND_SPEED: &str = "windspeed";
pub const COL_CASUAL: &str = "casual";
pub const COL_REGISTERED: &str = "registered";

/// Date format of the `dteday` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// File names
pub const DEFAULT_DATA_FILE: &str = "day.csv";
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";
pub const ENV_PREFIX: &str = "BIKE_DASHBOARD";

/// Rendering defaults
pub const DEFAULT_PREVIEW_ROWS: usize = 5;
pub const DEFAULT_BAR_WIDTH: usize = 40;
