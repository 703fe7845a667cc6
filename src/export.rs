use crate::aggregate::daily_averages;
use crate::format::format_diff;
use crate::models::{ChartMode, Entry};

pub fn csv_filename(mode: ChartMode) -> &'static str {
    match mode {
        ChartMode::Raw => "bus_data_local.csv",
        ChartMode::DailyAverage => "bus_data_daily_avg.csv",
    }
}

pub fn build_csv(mode: ChartMode, entries: &[Entry]) -> String {
    match mode {
        ChartMode::Raw => raw_csv(entries),
        ChartMode::DailyAverage => daily_average_csv(entries),
    }
}

fn raw_csv(entries: &[Entry]) -> String {
    let mut csv = String::from("Date,Predicted,Actual,Diff\n");
    for entry in entries {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            entry.date,
            entry.predicted,
            entry.actual,
            format_diff(entry.diff)
        ));
    }
    csv
}

fn daily_average_csv(entries: &[Entry]) -> String {
    let mut csv = String::from("Date,Average Difference\n");
    for (date, avg) in daily_averages(entries) {
        csv.push_str(&format!("{date},{avg:.1}\n"));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, predicted: &str, actual: &str, diff: i64) -> Entry {
        Entry {
            date: date.to_string(),
            predicted: predicted.to_string(),
            actual: actual.to_string(),
            diff,
        }
    }

    #[test]
    fn raw_csv_has_header_and_formatted_diffs() {
        let entries = [
            entry("2024-01-01", "08:00", "8:15 AM", 15),
            entry("2024-01-02", "09:30", "9:25 AM", -5),
        ];
        let csv = build_csv(ChartMode::Raw, &entries);
        assert_eq!(
            csv,
            "Date,Predicted,Actual,Diff\n\
             2024-01-01,08:00,8:15 AM,15 min later\n\
             2024-01-02,09:30,9:25 AM,5 min earlier\n"
        );
    }

    #[test]
    fn daily_csv_writes_one_decimal_means() {
        let entries = [
            entry("2024-01-01", "08:00", "8:10 AM", 10),
            entry("2024-01-01", "08:00", "8:20 AM", 20),
            entry("2024-01-02", "08:00", "8:03 AM", 3),
        ];
        let csv = build_csv(ChartMode::DailyAverage, &entries);
        assert_eq!(
            csv,
            "Date,Average Difference\n2024-01-01,15.0\n2024-01-02,3.0\n"
        );
    }

    #[test]
    fn empty_collection_exports_header_only() {
        assert_eq!(build_csv(ChartMode::Raw, &[]), "Date,Predicted,Actual,Diff\n");
        assert_eq!(
            build_csv(ChartMode::DailyAverage, &[]),
            "Date,Average Difference\n"
        );
    }

    #[test]
    fn filenames_match_mode() {
        assert_eq!(csv_filename(ChartMode::Raw), "bus_data_local.csv");
        assert_eq!(csv_filename(ChartMode::DailyAverage), "bus_data_daily_avg.csv");
    }
}
