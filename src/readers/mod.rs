pub mod cache;
pub mod day_reader;

pub use cache::DatasetCache;
pub use day_reader::DayReader;
