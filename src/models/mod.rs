pub mod dataset;
pub mod labels;
pub mod record;

pub use dataset::Dataset;
pub use labels::{Code, Season, WeatherSituation, Weekday};
pub use record::DayRecord;
