pub mod aggregate;
pub mod filter;
pub mod insight;
pub mod summary;
pub mod view;

pub use aggregate::{aggregate_mean, GroupField, GroupKey, GroupMean, GroupMeans, ValueField};
pub use filter::{filter_dataset, Selection};
pub use insight::Insights;
pub use summary::{DatasetSummary, QualityReport};
pub use view::DashboardView;
