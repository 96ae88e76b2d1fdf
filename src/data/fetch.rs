use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use super::model::{Dataset, Record};
use super::source::Source;
use crate::config::DashConfig;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON array of records, got {found}")]
    NotAnArray { found: &'static str },

    #[error("row {index} is not a JSON object")]
    NotARecord { index: usize },

    #[error("fetch worker exited without a result")]
    Interrupted,
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Transport seam
// ---------------------------------------------------------------------------

/// Plain GET returning the response body.
pub trait HttpGet: Send + Sync {
    fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

impl HttpGet for reqwest::blocking::Client {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

// ---------------------------------------------------------------------------
// Normalisation
// ---------------------------------------------------------------------------

/// Lowercase every key of `object`; values are moved over unchanged.
///
/// Keys that collide after lowercasing keep the value of the one that
/// appeared last.
pub fn normalize_keys(object: Map<String, JsonValue>) -> Record {
    let fields = object
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect();
    Record::new(fields)
}

/// Parse a response body into a dataset of normalised records.
///
/// Expected shape:
///
/// ```json
/// [
///   { "Name": "A", "Amount": 5 },
///   ...
/// ]
/// ```
pub fn parse_dataset(body: &str) -> Result<Dataset, FetchError> {
    let root: JsonValue = serde_json::from_str(body)?;
    let rows = match root {
        JsonValue::Array(rows) => rows,
        other => {
            return Err(FetchError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| match row {
            JsonValue::Object(object) => Ok(normalize_keys(object)),
            _ => Err(FetchError::NotARecord { index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Fetcher
// ---------------------------------------------------------------------------

/// Fetches a source's records from its fixed endpoint.
pub struct Fetcher {
    http: Box<dyn HttpGet>,
    mtl_url: String,
    mal_url: String,
}

impl Fetcher {
    /// Fetcher backed by a blocking `reqwest` client.
    pub fn from_config(config: &DashConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self::with_transport(client, config))
    }

    pub fn with_transport(http: impl HttpGet + 'static, config: &DashConfig) -> Self {
        Self {
            http: Box::new(http),
            mtl_url: config.endpoint(Source::Mtl).to_string(),
            mal_url: config.endpoint(Source::Mal).to_string(),
        }
    }

    pub fn endpoint(&self, source: Source) -> &str {
        match source {
            Source::Mtl => &self.mtl_url,
            Source::Mal => &self.mal_url,
        }
    }

    /// GET the source's endpoint and normalise the response.
    pub fn fetch(&self, source: Source) -> Result<Dataset, FetchError> {
        let url = self.endpoint(source);
        log::info!("Fetching {source} records from {url}");
        let body = self.http.get_text(url)?;
        let dataset = parse_dataset(&body)?;
        log::info!(
            "Fetched {} {source} records with columns {:?}",
            dataset.len(),
            dataset.column_names
        );
        Ok(dataset)
    }
}

// ---------------------------------------------------------------------------
// Background fetches
// ---------------------------------------------------------------------------

/// A fetch running on a worker thread.
pub struct PendingFetch {
    source: Source,
    rx: Receiver<Result<Dataset, FetchError>>,
}

impl PendingFetch {
    pub fn source(&self) -> Source {
        self.source
    }

    /// Non-blocking check for the result. `None` while still running.
    pub fn poll(&self) -> Option<Result<Dataset, FetchError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(FetchError::Interrupted)),
        }
    }
}

/// Run `fetcher.fetch(source)` off the UI thread.
///
/// `on_done` runs on the worker after the result is sent, typically to wake
/// the UI.
pub fn spawn_fetch<F>(fetcher: Arc<Fetcher>, source: Source, on_done: F) -> PendingFetch
where
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = fetcher.fetch(source);
        // Receiver gone means the window closed; nothing to report to.
        let _ = tx.send(result);
        on_done();
    });
    PendingFetch { source, rx }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Canned bodies keyed by URL; unknown URLs answer 404.
    #[derive(Default)]
    pub(crate) struct StubHttp {
        bodies: Mutex<HashMap<String, String>>,
    }

    impl StubHttp {
        pub(crate) fn with(self, url: &str, body: &str) -> Self {
            self.bodies
                .lock()
                .unwrap()
                .insert(url.to_string(), body.to_string());
            self
        }
    }

    impl HttpGet for StubHttp {
        fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.bodies
                .lock()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    pub(crate) fn stub_fetcher(mtl_body: &str, mal_body: &str) -> Fetcher {
        let config = DashConfig::default();
        let http = StubHttp::default()
            .with(&config.mtl_url, mtl_body)
            .with(&config.mal_url, mal_body);
        Fetcher::with_transport(http, &config)
    }

    pub(crate) fn wait_for(pending: &PendingFetch) -> Result<Dataset, FetchError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = pending.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "fetch did not finish");
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn object(value: JsonValue) -> Map<String, JsonValue> {
        match value {
            JsonValue::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn normalize_lowercases_keys_and_keeps_values() {
        let input = object(json!({
            "Name": "A",
            "AMOUNT": 5,
            "nested": {"Inner": [1, 2]},
            "ÄRGER": null,
        }));
        let expected: Vec<(String, JsonValue)> = input
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.clone()))
            .collect();

        let record = normalize_keys(input);

        assert!(record.iter().all(|(k, _)| *k == k.to_lowercase()));
        let actual: Vec<(String, JsonValue)> =
            record.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(actual, expected);
        // Nested keys are values, so they stay as they were.
        assert_eq!(record.get("nested"), Some(&json!({"Inner": [1, 2]})));
    }

    #[test]
    fn colliding_keys_keep_the_last_value() {
        let record = normalize_keys(object(json!({"Amount": 1, "amount": 2})));
        assert_eq!(record.iter().count(), 1);
        assert_eq!(record.get("amount"), Some(&json!(2)));
    }

    #[test]
    fn fetching_mtl_yields_lowercased_records() {
        let fetcher = stub_fetcher(r#"[{"Name":"A","Amount":5}]"#, "[]");
        let dataset = fetcher.fetch(Source::Mtl).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.column_names, ["name", "amount"]);
        assert_eq!(dataset.records[0].get("name"), Some(&json!("A")));
        assert_eq!(dataset.records[0].get("amount"), Some(&json!(5)));
    }

    #[test]
    fn empty_array_is_an_empty_dataset() {
        let fetcher = stub_fetcher("[]", "[]");
        let dataset = fetcher.fetch(Source::Mal).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.column_names.is_empty());
    }

    #[test]
    fn repeated_fetches_are_identical() {
        let body = r#"[{"Id":1,"Fund":"X"},{"Id":2,"Fund":"Y","Extra":[1]}]"#;
        let fetcher = stub_fetcher("[]", body);
        let first = fetcher.fetch(Source::Mal).unwrap();
        let second = fetcher.fetch(Source::Mal).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let fetcher = stub_fetcher("<html>oops</html>", "[]");
        let err = fetcher.fetch(Source::Mtl).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)), "{err:?}");
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        let err = parse_dataset(r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::NotAnArray { found: "an object" }));

        let err = parse_dataset(r#"[{"a": 1}, 7]"#).unwrap_err();
        assert!(matches!(err, FetchError::NotARecord { index: 1 }));
    }

    #[test]
    fn http_failure_propagates() {
        let config = DashConfig::default();
        let fetcher = Fetcher::with_transport(StubHttp::default(), &config);
        let err = fetcher.fetch(Source::Mal).unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
        assert!(err.to_string().contains("getAllAssetInvestments"));
    }

    #[test]
    fn spawned_fetch_reports_back_and_runs_callback() {
        let fetcher = Arc::new(stub_fetcher(r#"[{"A":1}]"#, "[]"));
        let woken = Arc::new(AtomicUsize::new(0));
        let flag = woken.clone();

        let pending = spawn_fetch(fetcher, Source::Mtl, move || {
            flag.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(pending.source(), Source::Mtl);

        let dataset = wait_for(&pending).unwrap();
        assert_eq!(dataset.column_names, ["a"]);

        let deadline = Instant::now() + Duration::from_secs(5);
        while woken.load(Ordering::SeqCst) == 0 {
            assert!(Instant::now() < deadline, "callback never ran");
            thread::sleep(Duration::from_millis(5));
        }
    }
}
