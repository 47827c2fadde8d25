use serde_json::Value;
use thiserror::Error;

use crate::api::AnalyzeRequest;
use crate::task::Task;

/// Everything that can stop a submission before a request is issued.
/// Display strings are the user-visible messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Invalid JSON in bulk input.")]
    InvalidJson,

    #[error("Bulk JSON must be an array.")]
    NotAnArray,

    #[error("No tasks to submit.")]
    NoTasks,
}

/// Builds the effective task list: bulk-pasted records first, locally
/// added tasks after, plus the strategy string.
#[tracing::instrument(skip(bulk_text, local_tasks))]
pub fn build_request(
    bulk_text: &str,
    local_tasks: &[Task],
    strategy: &str,
) -> Result<AnalyzeRequest, PayloadError> {
    let mut tasks = Vec::with_capacity(local_tasks.len());

    let bulk = bulk_text.trim();
    if !bulk.is_empty() {
        let parsed: Value =
            serde_json::from_str(bulk).map_err(|_| PayloadError::InvalidJson)?;
        match parsed {
            Value::Array(items) => tasks.extend(items),
            _ => return Err(PayloadError::NotAnArray),
        }
    }

    for task in local_tasks {
        // Infallible: every Task field is a string, a finite number, or a
        // list of strings.
        let value = serde_json::to_value(task).expect("local task serializes to JSON");
        tasks.push(value);
    }

    if tasks.is_empty() {
        return Err(PayloadError::NoTasks);
    }

    tracing::debug!(task_count = tasks.len(), "assembled submission payload");

    Ok(AnalyzeRequest {
        tasks,
        strategy: strategy.to_string(),
    })
}
