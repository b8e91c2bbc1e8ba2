use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use map_engine::aliases;
use map_engine::errors::EngineError;
use map_engine::status::{RefreshToken, StatusRecord, StatusSource};
use map_engine::types::{CountryCode, CountryStatus};

/// Deadline for a whole status request. A server that accepts the
/// connection and then stalls would otherwise hold the single-flight
/// refresh guard for the rest of the process.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// What a background fetch delivers back to the UI thread. The token lets
/// the receiver discard responses for refreshes that were superseded or
/// aborted in the meantime.
pub type FetchResult = (RefreshToken, Result<Vec<StatusRecord>, EngineError>);

/// Runs one `fetch_all` on a background thread and posts the outcome on the
/// channel. A dropped receiver just discards the send.
pub fn spawn_fetch<S>(mut source: S, token: RefreshToken, sender: Sender<FetchResult>)
where
    S: StatusSource + Send + 'static,
{
    thread::spawn(move || {
        let result = source.fetch_all();
        let _ = sender.send((token, result));
    });
}

/// Status source backed by the site backend's JSON endpoint.
///
/// `GET {endpoint}` returns the full record list; `PUT {endpoint}/{code}`
/// sets one country's status (the admin path; the map itself never calls it).
pub struct HttpStatusSource {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpStatusSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, EngineError> {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EngineError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()
            .map_err(|e| EngineError::StatusSource(format!("Could not build HTTP client: {e}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

impl StatusSource for HttpStatusSource {
    fn fetch_all(&mut self) -> Result<Vec<StatusRecord>, EngineError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| EngineError::StatusSource(format!("HTTP request failed: {e}")))?;
        response
            .json()
            .map_err(|e| EngineError::StatusSource(format!("Failed to parse response: {e}")))
    }

    fn update(&mut self, code: &CountryCode, status: CountryStatus) -> Result<(), EngineError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), code);
        let response = self
            .client
            .put(url)
            .json(&serde_json::json!({ "status": status }))
            .send()
            .map_err(|e| EngineError::StatusSource(format!("HTTP request failed: {e}")))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(EngineError::StatusSource(format!(
                "Unexpected response status: {}",
                response.status()
            )))
        }
    }
}

/// Status source backed by a local CSV file, for offline and development
/// runs. Columns: `country_code,country_name,status`.
pub struct CsvStatusSource {
    path: PathBuf,
}

impl CsvStatusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatusSource for CsvStatusSource {
    fn fetch_all(&mut self) -> Result<Vec<StatusRecord>, EngineError> {
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| EngineError::StatusSource(format!("Could not open status file: {e}")))?;
        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: StatusRecord = result
                .map_err(|e| EngineError::StatusSource(format!("Bad status row: {e}")))?;
            records.push(record);
        }
        Ok(records)
    }

    fn update(&mut self, code: &CountryCode, status: CountryStatus) -> Result<(), EngineError> {
        let mut records = self.fetch_all()?;
        match records
            .iter_mut()
            .find(|record| record.country_code.eq_ignore_ascii_case(code.as_str()))
        {
            Some(record) => record.status = status,
            None => records.push(StatusRecord {
                country_code: code.as_str().to_string(),
                country_name: aliases::display_name_for(code).unwrap_or("").to_string(),
                status,
            }),
        }

        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|e| EngineError::StatusSource(format!("Could not write status file: {e}")))?;
        for record in &records {
            writer
                .serialize(record)
                .map_err(|e| EngineError::StatusSource(format!("Bad status row: {e}")))?;
        }
        writer
            .flush()
            .map_err(|e| EngineError::StatusSource(format!("Could not write status file: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::mpsc::channel;

    use map_engine::status::StatusRefresher;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("write temp csv");
        path
    }

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).expect("valid code")
    }

    #[test]
    fn test_csv_fetch_all() {
        let path = temp_csv(
            "country_map_status_fetch.csv",
            "country_code,country_name,status\nPOL,Poland,available\nDEU,Germany,coming_soon\n",
        );
        let mut source = CsvStatusSource::new(&path);
        let records = source.fetch_all().expect("readable file");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country_code, "POL");
        assert_eq!(records[0].status, CountryStatus::Available);
        assert_eq!(records[1].status, CountryStatus::ComingSoon);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_csv_fetch_missing_file_fails() {
        let mut source = CsvStatusSource::new("/nonexistent/status.csv");
        assert!(source.fetch_all().is_err());
    }

    #[test]
    fn test_csv_update_existing_and_new() {
        let path = temp_csv(
            "country_map_status_update.csv",
            "country_code,country_name,status\nPOL,Poland,soon\n",
        );
        let mut source = CsvStatusSource::new(&path);

        source
            .update(&code("POL"), CountryStatus::Available)
            .expect("update existing");
        source
            .update(&code("FRA"), CountryStatus::ComingSoon)
            .expect("insert new");

        let records = source.fetch_all().expect("readable file");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, CountryStatus::Available);
        assert_eq!(records[1].country_code, "FRA");
        assert_eq!(records[1].country_name, "France");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_http_fetch_fails_when_server_stalls() {
        // Accepts connections but never answers; the fetch must still
        // resolve so the refresh guard can be released.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let mut refresher = StatusRefresher::new();
        let token = refresher.begin_refresh().expect("token");

        let (tx, rx) = channel();
        let source = HttpStatusSource::with_timeout(
            format!("http://{addr}/country-status"),
            Duration::from_millis(300),
        )
        .expect("client");
        spawn_fetch(source, token, tx);

        let (got_token, result) = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("fetch resolves instead of hanging");
        assert_eq!(got_token, token);
        assert!(result.is_err());

        refresher.fail(got_token);
        assert!(refresher.begin_refresh().is_some());
    }

    #[test]
    fn test_spawn_fetch_delivers_tagged_result() {
        let path = temp_csv(
            "country_map_status_spawn.csv",
            "country_code,country_name,status\nPOL,Poland,available\n",
        );
        let mut refresher = StatusRefresher::new();
        let token = refresher.begin_refresh().expect("token");

        let (tx, rx) = channel();
        spawn_fetch(CsvStatusSource::new(&path), token, tx);

        let (got_token, result) = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("fetch completes");
        assert_eq!(got_token, token);
        let records = result.expect("valid file");
        assert!(refresher.apply(got_token, &records));
        assert_eq!(refresher.get(&code("POL")), CountryStatus::Available);
        let _ = fs::remove_file(path);
    }
}
