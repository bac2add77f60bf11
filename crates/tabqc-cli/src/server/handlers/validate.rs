//! Validation endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tabqc::{
    run_both_validations, rows_to_table, CheckSet, CombinedReport, LongRow, RowRecord,
    SchemaValidator, StructureValidator,
};

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::tasks::TaskStatus;

/// Rows of one uploaded table.
#[derive(Debug, Clone, Deserialize)]
pub struct RowsPayload {
    pub rows: Vec<RowRecord>,
}

/// A matched dataset + data dictionary pair.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    pub dataset: RowsPayload,
    pub datadic: RowsPayload,
}

#[derive(Serialize)]
pub struct TaskCreated {
    pub id: String,
}

#[derive(Serialize)]
pub struct TaskView {
    pub id: String,
    pub status: TaskStatus,
    pub result: Option<Value>,
    pub error: Option<String>,
}

/// POST /v1/validate - run both suites on a background task.
pub async fn create_validation_task(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Json<TaskCreated> {
    let task_id = state.tasks.write().await.create();
    tracing::info!(task_id = %task_id, "created validation task");

    let tasks = state.tasks.clone();
    let id = task_id.clone();
    tokio::spawn(async move {
        tasks.write().await.set_running(&id);
        tracing::debug!(
            task_id = %id,
            dataset_rows = request.dataset.rows.len(),
            datadic_rows = request.datadic.rows.len(),
            "starting background validation"
        );

        match run_both_validations(&request.dataset.rows, &request.datadic.rows)
            .and_then(|report| Ok(serde_json::to_value(&report)?))
        {
            Ok(result) => {
                tasks.write().await.set_done(&id, result);
                tracing::info!(task_id = %id, "validation task completed");
            }
            Err(e) => {
                tracing::error!(task_id = %id, error = %e, "validation task failed");
                tasks.write().await.set_error(&id, e.to_string());
            }
        }
    });

    Json(TaskCreated { id: task_id })
}

/// GET /v1/validate/{task_id} - poll a task.
pub async fn get_validation_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<TaskView>, ApiError> {
    let tasks = state.tasks.read().await;
    let task = tasks.get(&task_id).ok_or_else(|| {
        tracing::warn!(task_id = %task_id, "task not found");
        ApiError::NotFound("Task not found".to_string())
    })?;

    tracing::debug!(task_id = %task_id, status = ?task.status, "returning task state");
    Ok(Json(TaskView {
        id: task_id.clone(),
        status: task.status,
        result: task.result.clone(),
        error: task.error.clone(),
    }))
}

/// POST /v1/validate/core - run both suites synchronously.
pub async fn validate_both(
    Json(request): Json<ValidateRequest>,
) -> Result<Json<CombinedReport>, ApiError> {
    tracing::info!("starting synchronous combined validation");
    let report = run_both_validations(&request.dataset.rows, &request.datadic.rows)?;
    Ok(Json(report))
}

/// POST /v1/validate/structure - structure suite only.
pub async fn validate_structure(
    Json(payload): Json<RowsPayload>,
) -> Result<Json<Vec<LongRow>>, ApiError> {
    tracing::info!(rows = payload.rows.len(), "starting structure validation");
    let table = rows_to_table(&payload.rows)?;
    let report = StructureValidator::new().validate(&table, CheckSet::All);
    Ok(Json(report.to_long_rows()))
}

/// POST /v1/validate/schema - schema suite only.
pub async fn validate_schema(
    Json(payload): Json<RowsPayload>,
) -> Result<Json<Vec<LongRow>>, ApiError> {
    tracing::info!(rows = payload.rows.len(), "starting schema validation");
    let table = rows_to_table(&payload.rows)?;
    let report = SchemaValidator::new().validate(&table, CheckSet::All);
    Ok(Json(report.to_long_rows()))
}
