use crate::aggregate::{daily_averages, round_average};
use crate::errors::AppError;
use crate::export::{build_csv, csv_filename};
use crate::format::format_diff;
use crate::models::{
    AppData, ChartMode, EntriesResponse, Entry, EntryRow, ModeQuery, RecordRequest,
    SeriesResponse, Summary,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::timediff::{compute_difference, twelve_hour_clock};
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::header,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&today_string(), data.entries.len()))
}

pub async fn get_entries(State(state): State<AppState>) -> Result<Json<EntriesResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(to_entries_response(&data)))
}

pub async fn get_series(
    State(state): State<AppState>,
    Query(query): Query<ModeQuery>,
) -> Result<Json<SeriesResponse>, AppError> {
    let data = state.data.lock().await;

    let (labels, values): (Vec<String>, Vec<f64>) = match query.mode {
        ChartMode::Raw => (
            data.entries.iter().map(|e| e.date.clone()).collect(),
            data.entries.iter().map(|e| e.diff as f64).collect(),
        ),
        ChartMode::DailyAverage => daily_averages(&data.entries).into_iter().unzip(),
    };

    Ok(Json(SeriesResponse {
        mode: query.mode,
        labels,
        values,
    }))
}

pub async fn record(
    State(state): State<AppState>,
    Json(payload): Json<RecordRequest>,
) -> Result<Json<EntryRow>, AppError> {
    let predicted = payload.predicted.trim().to_string();
    if predicted.is_empty() {
        return Err(AppError::bad_request("enter a predicted time first"));
    }

    let date = match payload.date.as_deref().map(str::trim) {
        Some(date) if !date.is_empty() => {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| AppError::bad_request(format!("invalid date {date:?}, expected YYYY-MM-DD")))?;
            date.to_string()
        }
        _ => today_string(),
    };

    let actual = twelve_hour_clock(Local::now().time());
    let diff = compute_difference(&predicted, &actual)
        .map_err(|err| AppError::bad_request(err.to_string()))?;

    let entry = Entry {
        date,
        predicted,
        actual,
        diff,
    };

    let mut data = state.data.lock().await;
    data.entries.push(entry.clone());
    persist_data(&state.data_path, &data).await?;
    info!("recorded arrival on {} ({} min offset)", entry.date, entry.diff);

    Ok(Json(to_row(&entry)))
}

pub async fn delete_last(State(state): State<AppState>) -> Result<Json<EntryRow>, AppError> {
    let mut data = state.data.lock().await;
    let Some(removed) = data.entries.pop() else {
        return Err(AppError::bad_request("no entries to delete"));
    };
    // Keep memory and disk in step: a failed write puts the entry back.
    if let Err(err) = persist_data(&state.data_path, &data).await {
        data.entries.push(removed);
        return Err(err);
    }
    info!("removed last entry ({})", removed.date);

    Ok(Json(to_row(&removed)))
}

pub async fn export_csv(
    State(state): State<AppState>,
    Query(query): Query<ModeQuery>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let data = state.data.lock().await;
    let csv = build_csv(query.mode, &data.entries);
    let disposition = format!("attachment; filename=\"{}\"", csv_filename(query.mode));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

fn to_entries_response(data: &AppData) -> EntriesResponse {
    let rows = data.entries.iter().map(to_row).collect();
    let days = daily_averages(&data.entries).len();
    let avg_diff = if data.entries.is_empty() {
        0.0
    } else {
        data.entries.iter().map(|e| e.diff as f64).sum::<f64>() / data.entries.len() as f64
    };

    EntriesResponse {
        rows,
        summary: Summary {
            entries: data.entries.len(),
            days,
            avg_diff,
            avg_label: format_diff(round_average(avg_diff)),
        },
    }
}

fn to_row(entry: &Entry) -> EntryRow {
    EntryRow {
        date: entry.date.clone(),
        predicted: entry.predicted.clone(),
        actual: entry.actual.clone(),
        diff: entry.diff,
        diff_label: format_diff(entry.diff),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
