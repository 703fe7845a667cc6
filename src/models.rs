use serde::{Deserialize, Serialize};

/// One logged observation. Entries are immutable once created; the
/// collection only grows at the tail and shrinks via undo-last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Predicted arrival, 24-hour `HH:MM`.
    pub predicted: String,
    /// Actual arrival, 12-hour `H:MM AM|PM`.
    pub actual: String,
    /// Signed minutes, actual minus predicted; positive = late.
    pub diff: i64,
}

// Transparent so the data file is the bare JSON array of entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AppData {
    pub entries: Vec<Entry>,
}

/// Which series the chart and CSV export are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartMode {
    #[default]
    Raw,
    DailyAverage,
}

#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    pub predicted: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ModeQuery {
    #[serde(default)]
    pub mode: ChartMode,
}

#[derive(Debug, Serialize)]
pub struct EntryRow {
    pub date: String,
    pub predicted: String,
    pub actual: String,
    pub diff: i64,
    pub diff_label: String,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub entries: usize,
    pub days: usize,
    pub avg_diff: f64,
    /// `avg_diff` rounded and rendered for display.
    pub avg_label: String,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub rows: Vec<EntryRow>,
    pub summary: Summary,
}

#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub mode: ChartMode,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}
