use crate::analyzers::insight::NO_DATA_MESSAGE;
use crate::analyzers::{DashboardView, GroupMeans, Insights, Selection};
use crate::error::Result;
use crate::models::{DayRecord, Season, WeatherSituation};
use crate::utils::constants::{DEFAULT_BAR_WIDTH, DEFAULT_PREVIEW_ROWS};
use chrono::NaiveDate;
use serde::Serialize;

pub const TITLE: &str = "🚲 Bike Sharing Analysis Dashboard";
pub const SUBTITLE: &str = "Effect of weather and season on daily bike rentals";

const LABEL_WIDTH: usize = 18;

/// Output format of the `show` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders a [`DashboardView`] as terminal text or JSON.
pub struct DashboardWriter {
    preview_rows: usize,
    bar_width: usize,
}

#[derive(Serialize)]
struct PreviewRow {
    date: NaiveDate,
    season: Option<Season>,
    weather: Option<WeatherSituation>,
    count: u32,
}

impl From<&DayRecord> for PreviewRow {
    fn from(record: &DayRecord) -> Self {
        Self {
            date: record.date,
            season: record.season,
            weather: record.weather,
            count: record.count,
        }
    }
}

#[derive(Serialize)]
struct JsonView<'a> {
    selection: &'a Selection,
    selected_records: usize,
    preview: Vec<PreviewRow>,
    mean_count_by_season: &'a GroupMeans,
    mean_count_by_weather: &'a GroupMeans,
    insights: &'a Insights,
}

impl DashboardWriter {
    pub fn new() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    pub fn render(&self, view: &DashboardView, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(view)),
            OutputFormat::Json => self.render_json(view),
        }
    }

    pub fn render_text(&self, view: &DashboardView) -> String {
        let mut out = format!(
            "{}\n{}\n\nFilter: {}\nSelected records: {}\n\n",
            TITLE,
            SUBTITLE,
            view.selection.describe(),
            view.filtered.len()
        );

        if view.is_empty() {
            out.push_str(NO_DATA_MESSAGE);
            out.push('\n');
            return out;
        }

        out.push_str(&self.render_preview(view.filtered.records()));
        out.push('\n');
        out.push_str(&self.render_bars("Average rentals per season", &view.by_season));
        out.push('\n');
        out.push_str(&self.render_bars("Average rentals per weather condition", &view.by_weather));
        out.push('\n');

        out.push_str("Insight\n");
        for line in &view.insights.lines {
            out.push_str(&format!("- {}\n", line));
        }

        out
    }

    pub fn render_json(&self, view: &DashboardView) -> Result<String> {
        let json = JsonView {
            selection: &view.selection,
            selected_records: view.filtered.len(),
            preview: view
                .filtered
                .head(self.preview_rows)
                .iter()
                .map(PreviewRow::from)
                .collect(),
            mean_count_by_season: &view.by_season,
            mean_count_by_weather: &view.by_weather,
            insights: &view.insights,
        };
        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn render_preview(&self, records: &[DayRecord]) -> String {
        let shown = self.preview_rows.min(records.len());

        let mut out = format!("Data shown (first {} rows)\n", shown);
        out.push_str(&format!(
            "{:<12}{:<8}{:<label$}{:>7}\n",
            "Date",
            "Season",
            "Weather",
            "Count",
            label = LABEL_WIDTH
        ));
        for record in &records[..shown] {
            out.push_str(&format!(
                "{:<12}{:<8}{:<label$}{:>7}\n",
                record.date.to_string(),
                record.season_label(),
                record.weather_label(),
                record.count,
                label = LABEL_WIDTH
            ));
        }
        out
    }

    /// Horizontal bar chart scaled so the largest mean fills the bar width.
    fn render_bars(&self, title: &str, means: &GroupMeans) -> String {
        let max = means.max().map(|g| g.mean).unwrap_or(0.0);

        let mut out = format!("{}\n", title);
        for group in means.iter() {
            let filled = if max > 0.0 {
                ((group.mean / max) * self.bar_width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:<label$}|{:<width$} {:.1}\n",
                group.group.to_string(),
                "█".repeat(filled),
                group.mean,
                label = LABEL_WIDTH,
                width = self.bar_width
            ));
        }
        out
    }
}

impl Default for DashboardWriter {
    fn default() -> Self {
        Self::new()
    }
}
