//! Submit command - upload files to a running server and fetch the report.

use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use tabqc::read_rows;

use crate::client::ApiClient;

pub fn run(
    dataset: PathBuf,
    datadic: PathBuf,
    api_base: String,
    sync: bool,
    interval: f64,
    max_attempts: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for path in [&dataset, &datadic] {
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
    }
    if !interval.is_finite() || interval < 0.0 {
        return Err(format!("Invalid poll interval: {interval}").into());
    }

    let dataset_rows = read_rows(&dataset)?;
    let datadic_rows = read_rows(&datadic)?;

    if verbose {
        println!(
            "Loaded {} dataset rows and {} dictionary rows",
            dataset_rows.len(),
            datadic_rows.len()
        );
    }

    let client = ApiClient::new(&api_base);

    if sync {
        println!(
            "{} {}",
            "Validating via".cyan().bold(),
            format!("{api_base}/v1/validate/core").white()
        );
        let result = client.validate_sync(&dataset_rows, &datadic_rows)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let task_id = client.create_task(&dataset_rows, &datadic_rows)?;
    println!("{} {}", "Created task".cyan().bold(), task_id.white());

    let outcome = client.poll_task(&task_id, Duration::from_secs_f64(interval), max_attempts)?;

    if outcome.status == "DONE" {
        let result = outcome.result.unwrap_or(serde_json::Value::Null);
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    } else {
        let reason = outcome
            .error
            .unwrap_or_else(|| "no error message recorded".to_string());
        Err(format!("task {task_id} ended in {}: {reason}", outcome.status).into())
    }
}
