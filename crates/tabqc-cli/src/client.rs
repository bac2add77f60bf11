//! Blocking HTTP client for a running validation server.

use std::thread;
use std::time::Duration;

use serde_json::{json, Value};

use tabqc::RowRecord;

type ClientResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Terminal state of a polled task.
#[derive(Debug)]
pub struct TaskOutcome {
    pub status: String,
    pub result: Option<Value>,
    pub error: Option<String>,
}

/// Client for the validation API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// POST /v1/validate - create an asynchronous validation task.
    pub fn create_task(&self, dataset: &[RowRecord], datadic: &[RowRecord]) -> ClientResult<String> {
        let response = self
            .http
            .post(format!("{}/v1/validate", self.base_url))
            .json(&request_body(dataset, datadic))
            .send()?;
        let data = check_json(response)?;

        data.get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| format!("no task id in response: {data}").into())
    }

    /// GET /v1/validate/{task_id} until the task is DONE or ERROR, sleeping
    /// `interval` between polls, for at most `max_attempts` polls.
    pub fn poll_task(
        &self,
        task_id: &str,
        interval: Duration,
        max_attempts: usize,
    ) -> ClientResult<TaskOutcome> {
        for attempt in 1..=max_attempts {
            let response = self
                .http
                .get(format!("{}/v1/validate/{}", self.base_url, task_id))
                .send()?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                // The store evicts whole generations of tasks at capacity.
                return Err(format!("task {task_id} not found (possibly evicted)").into());
            }

            let data = check_json(response)?;
            let status = data
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN")
                .to_string();

            if status == "DONE" || status == "ERROR" {
                return Ok(TaskOutcome {
                    status,
                    result: data.get("result").filter(|v| !v.is_null()).cloned(),
                    error: data
                        .get("error")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                });
            }

            if attempt < max_attempts {
                thread::sleep(interval);
            }
        }

        Err(format!("task {task_id} still incomplete after {max_attempts} polls").into())
    }

    /// POST /v1/validate/core - synchronous combined validation.
    pub fn validate_sync(&self, dataset: &[RowRecord], datadic: &[RowRecord]) -> ClientResult<Value> {
        let response = self
            .http
            .post(format!("{}/v1/validate/core", self.base_url))
            .json(&request_body(dataset, datadic))
            .send()?;
        check_json(response)
    }
}

fn request_body(dataset: &[RowRecord], datadic: &[RowRecord]) -> Value {
    json!({
        "dataset": {"rows": dataset},
        "datadic": {"rows": datadic},
    })
}

/// Read the JSON body, turning non-2xx statuses into errors that carry it.
fn check_json(response: reqwest::blocking::Response) -> ClientResult<Value> {
    let status = response.status();
    let body: Value = response.json()?;
    if !status.is_success() {
        return Err(format!("server returned {status}: {body}").into());
    }
    Ok(body)
}
