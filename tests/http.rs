use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct EntryRow {
    date: String,
    predicted: String,
    actual: String,
    diff: i64,
    diff_label: String,
}

#[derive(Debug, Deserialize)]
struct Summary {
    entries: usize,
    days: usize,
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    rows: Vec<EntryRow>,
    summary: Summary,
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    labels: Vec<String>,
    values: Vec<f64>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("bus_tracker_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/entries")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_bus_tracker"))
        .env("PORT", port.to_string())
        .env("BUS_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_entries(client: &Client, base_url: &str) -> EntriesResponse {
    client
        .get(format!("{base_url}/api/entries"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_record_appends_an_entry() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_entries(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/record", server.base_url))
        .json(&serde_json::json!({ "predicted": "08:00", "date": "2024-06-01" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let row: EntryRow = response.json().await.unwrap();
    assert_eq!(row.date, "2024-06-01");
    assert_eq!(row.predicted, "08:00");
    assert!(row.actual.ends_with(" AM") || row.actual.ends_with(" PM"));
    assert!(!row.diff_label.is_empty());

    let after = fetch_entries(&client, &server.base_url).await;
    assert_eq!(after.summary.entries, before.summary.entries + 1);
    let last = after.rows.last().expect("appended row");
    assert_eq!(last.date, "2024-06-01");
    assert_eq!(last.diff, row.diff);
    assert!(after.summary.days >= 1);
}

#[tokio::test]
async fn http_record_requires_predicted_time() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_entries(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/record", server.base_url))
        .json(&serde_json::json!({ "predicted": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/api/record", server.base_url))
        .json(&serde_json::json!({ "predicted": "99:99" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let message = response.text().await.unwrap();
    assert!(message.contains("invalid time format"), "got: {message}");

    let after = fetch_entries(&client, &server.base_url).await;
    assert_eq!(after.summary.entries, before.summary.entries);
}

#[tokio::test]
async fn http_delete_last_inverts_record() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_entries(&client, &server.base_url).await;

    client
        .post(format!("{}/api/record", server.base_url))
        .json(&serde_json::json!({ "predicted": "09:30", "date": "2024-06-02" }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let response = client
        .post(format!("{}/api/delete-last", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let removed: EntryRow = response.json().await.unwrap();
    assert_eq!(removed.date, "2024-06-02");

    let after = fetch_entries(&client, &server.base_url).await;
    assert_eq!(after.summary.entries, before.summary.entries);
    let before_dates: Vec<&String> = before.rows.iter().map(|r| &r.date).collect();
    let after_dates: Vec<&String> = after.rows.iter().map(|r| &r.date).collect();
    assert_eq!(before_dates, after_dates);
}

#[tokio::test]
async fn http_delete_on_empty_collection_is_rejected() {
    // Fresh server so the collection is guaranteed empty.
    let server = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/delete-last", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let message = response.text().await.unwrap();
    assert!(message.contains("no entries"), "got: {message}");
}

#[tokio::test]
async fn http_series_modes_and_export() {
    let server = spawn_server().await;
    let client = Client::new();

    for _ in 0..2 {
        client
            .post(format!("{}/api/record", server.base_url))
            .json(&serde_json::json!({ "predicted": "07:45", "date": "2024-06-03" }))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    let raw: SeriesResponse = client
        .get(format!("{}/api/series?mode=raw", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(raw.labels.len(), 2);
    assert_eq!(raw.values.len(), 2);

    let daily: SeriesResponse = client
        .get(format!("{}/api/series?mode=dailyAverage", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(daily.labels, ["2024-06-03"]);
    assert_eq!(daily.values.len(), 1);
    // Both entries share a predicted time and roughly the same wall clock,
    // so the mean sits between the two raw values.
    let min = raw.values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = raw.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(daily.values[0] >= min && daily.values[0] <= max);

    let export = client
        .get(format!("{}/api/export?mode=raw", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(export.status().is_success());
    let disposition = export
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("bus_data_local.csv"));
    let body = export.text().await.unwrap();
    assert!(body.starts_with("Date,Predicted,Actual,Diff\n"));
    assert_eq!(body.lines().count(), 3);

    let export = client
        .get(format!("{}/api/export?mode=dailyAverage", server.base_url))
        .send()
        .await
        .unwrap();
    let disposition = export
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("bus_data_daily_avg.csv"));
    let body = export.text().await.unwrap();
    assert!(body.starts_with("Date,Average Difference\n"));
    assert_eq!(body.lines().count(), 2);
}
